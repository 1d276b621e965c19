//! DY-XXXX player driver
//!
//! # Wire sequence
//!
//! Every command is written as two UART writes: the frame body, then the
//! checksum byte, then a flush so the command is on the line before any
//! response is awaited. Fixed commands use the checksum from the command
//! table, parameterized ones are checksummed when built. Queries then read a
//! fixed-size response and validate its checksum before decoding.

use dyplayer_hal::{UartRx, UartTx};
use dyplayer_protocol::frame::{self, FrameBody, MAX_PLAYLIST_LEN};
use dyplayer_protocol::response::{
    self, COUNT_RESPONSE_LEN, DEVICE_RESPONSE_LEN, PLAY_STATE_RESPONSE_LEN,
};
use dyplayer_protocol::{
    AdditiveChecksum, CommandId, Device, Equalizer, FrameError, FrameIntegrity, PlayMode,
    PlayState, PreviousDirSound, RunningChecksum,
};

use heapless::Vec;

use crate::config::PlayerConfig;
use crate::error::Error;

/// Highest volume the module accepts
pub const MAX_VOLUME: u8 = 30;

/// DY-XXXX module on a UART
///
/// `I` is the frame integrity check, [`AdditiveChecksum`] unless a test
/// substitutes its own via [`DyPlayer::with_integrity`].
pub struct DyPlayer<U, I = AdditiveChecksum> {
    uart: U,
    integrity: I,
    config: PlayerConfig,
}

impl<U, E> DyPlayer<U, AdditiveChecksum>
where
    U: UartTx<Error = E> + UartRx<Error = E>,
{
    /// Create a driver using the module's additive checksum
    pub fn new(uart: U, config: PlayerConfig) -> Self {
        Self::with_integrity(uart, config, AdditiveChecksum)
    }
}

impl<U, I, E> DyPlayer<U, I>
where
    U: UartTx<Error = E> + UartRx<Error = E>,
    I: FrameIntegrity,
{
    /// Create a driver with a custom integrity check
    pub fn with_integrity(uart: U, config: PlayerConfig, integrity: I) -> Self {
        Self {
            uart,
            integrity,
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Release the UART
    pub fn release(self) -> U {
        self.uart
    }

    /// Push the configured startup volume, equalizer and cycle mode
    pub fn apply_config(&mut self) -> Result<(), Error<E>> {
        let config = self.config;
        if let Some(volume) = config.volume {
            self.set_volume(volume)?;
        }
        if let Some(eq) = config.eq {
            self.set_eq(eq)?;
        }
        if let Some(mode) = config.play_mode {
            self.set_cycle_mode(mode)?;
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Frame transmission
    // ---------------------------------------------------------------------

    /// Write a frame body followed by its precomputed checksum
    pub fn send_command(&mut self, body: &[u8], checksum: u8) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("dyplayer tx {=[u8]:#x} crc {=u8:#x}", body, checksum);

        self.uart.write_blocking(body).map_err(Error::Transport)?;
        self.uart
            .write_blocking(&[checksum])
            .map_err(Error::Transport)?;
        self.uart.flush().map_err(Error::Transport)
    }

    /// Checksum a runtime-built frame body and write it
    pub fn send_command_nocrc(&mut self, body: &[u8]) -> Result<(), Error<E>> {
        let checksum = self.integrity.checksum(body);
        self.send_command(body, checksum)
    }

    /// Read a response into `buffer` and validate its checksum
    ///
    /// Fails if the UART errors, delivers fewer bytes than `buffer` holds,
    /// or the checksum does not match.
    pub fn get_response(&mut self, buffer: &mut [u8]) -> Result<(), Error<E>> {
        let received = self.uart.read_blocking(buffer).map_err(Error::Transport)?;
        if received < buffer.len() {
            return Err(Error::ShortRead {
                expected: buffer.len(),
                received,
            });
        }
        if !self.integrity.validate(buffer) {
            return Err(FrameError::ChecksumMismatch.into());
        }
        Ok(())
    }

    fn send_fixed(&mut self, id: CommandId) -> Result<(), Error<E>> {
        let cmd = id.fixed().ok_or(FrameError::WrongCommandKind)?;
        self.send_command(&cmd.body(), cmd.checksum)
    }

    fn send_params(&mut self, id: CommandId, params: &[u8]) -> Result<(), Error<E>> {
        let body = frame::build(id, params)?;
        self.send_command_nocrc(&body)
    }

    fn by_path_command(
        &mut self,
        id: CommandId,
        device: Device,
        path: &str,
    ) -> Result<(), Error<E>> {
        if path.is_empty() {
            return Ok(());
        }
        let body: FrameBody =
            frame::encode_path(id, device, path, self.config.max_path_len as usize)?;
        self.send_command_nocrc(&body)
    }

    fn query<const N: usize>(&mut self, id: CommandId) -> Result<[u8; N], Error<E>> {
        self.send_fixed(id)?;
        let mut response = [0u8; N];
        self.get_response(&mut response)?;
        Ok(response)
    }

    // ---------------------------------------------------------------------
    // Playback control
    // ---------------------------------------------------------------------

    /// Play the currently selected file from the start
    pub fn play(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::Play)
    }

    pub fn pause(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::Pause)
    }

    pub fn stop(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::Stop)
    }

    /// Play the previous file
    pub fn previous(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::Previous)
    }

    /// Play the next file
    pub fn next(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::Next)
    }

    /// Play a sound by number, e.g. `42` for `00042.mp3`
    pub fn play_specified(&mut self, number: u16) -> Result<(), Error<E>> {
        self.send_params(CommandId::PlaySpecified, &number.to_be_bytes())
    }

    /// Play a sound by device and path
    ///
    /// An empty path sends nothing.
    pub fn play_specified_device_path(
        &mut self,
        device: Device,
        path: &str,
    ) -> Result<(), Error<E>> {
        self.by_path_command(CommandId::PlaySpecifiedPath, device, path)
    }

    /// Select a sound without playing it
    pub fn select(&mut self, number: u16) -> Result<(), Error<E>> {
        self.send_params(CommandId::Select, &number.to_be_bytes())
    }

    /// Switch to the previous directory
    pub fn previous_dir(&mut self, sound: PreviousDirSound) -> Result<(), Error<E>> {
        match sound {
            PreviousDirSound::LastSound => self.send_fixed(CommandId::PreviousDirLast),
            PreviousDirSound::FirstSound => self.send_fixed(CommandId::PreviousDirFirst),
        }
    }

    /// Set the storage device to play from
    ///
    /// The module may refuse (e.g. no card inserted); check with
    /// [`DyPlayer::get_playing_device`].
    pub fn set_playing_device(&mut self, device: Device) -> Result<(), Error<E>> {
        self.send_params(CommandId::SetPlayingDevice, &[device.as_u8()])
    }

    // ---------------------------------------------------------------------
    // Volume and sound settings
    // ---------------------------------------------------------------------

    /// Set the volume, clamped to 0-30
    pub fn set_volume(&mut self, volume: u8) -> Result<(), Error<E>> {
        self.send_params(CommandId::SetVolume, &[volume.min(MAX_VOLUME)])
    }

    pub fn volume_increase(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::VolumeIncrease)
    }

    pub fn volume_decrease(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::VolumeDecrease)
    }

    pub fn set_eq(&mut self, eq: Equalizer) -> Result<(), Error<E>> {
        self.send_params(CommandId::SetEq, &[eq.as_u8()])
    }

    pub fn set_cycle_mode(&mut self, mode: PlayMode) -> Result<(), Error<E>> {
        self.send_params(CommandId::SetCycleMode, &[mode.as_u8()])
    }

    /// Number of repetitions in the repeating cycle modes
    pub fn set_cycle_times(&mut self, cycles: u16) -> Result<(), Error<E>> {
        self.send_params(CommandId::SetCycleTimes, &cycles.to_be_bytes())
    }

    // ---------------------------------------------------------------------
    // Interludes
    // ---------------------------------------------------------------------

    /// Interrupt playback with a sound by device and number
    ///
    /// Interludes have a single level: a new interlude replaces the running
    /// one, and playback resumes where the first one interrupted it.
    pub fn interlude_specified(&mut self, device: Device, number: u16) -> Result<(), Error<E>> {
        let [hi, lo] = number.to_be_bytes();
        self.send_params(CommandId::InterludeSpecified, &[device.as_u8(), hi, lo])
    }

    /// Interrupt playback with a sound by device and path
    pub fn interlude_specified_device_path(
        &mut self,
        device: Device,
        path: &str,
    ) -> Result<(), Error<E>> {
        self.by_path_command(CommandId::InterludeSpecifiedPath, device, path)
    }

    /// Stop the interlude and resume playback
    pub fn stop_interlude(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::StopInterlude)
    }

    // ---------------------------------------------------------------------
    // Combination play
    // ---------------------------------------------------------------------

    /// Play several sounds back to back
    ///
    /// Entries are two-character file names without extension (`"01"` for
    /// `01.mp3`) in the module's combination directory (`DY`, `ZH` or `XY`
    /// depending on the module). The frame is streamed entry by entry with
    /// the checksum accumulated along the way. An empty list sends nothing.
    pub fn combination_play(&mut self, sounds: &[&str]) -> Result<(), Error<E>> {
        if sounds.is_empty() {
            return Ok(());
        }
        let header = frame::playlist_header(sounds.len())?;
        // Reject bad entries before anything reaches the wire
        let mut tokens: Vec<[u8; 2], MAX_PLAYLIST_LEN> = Vec::new();
        for sound in sounds {
            tokens
                .push(frame::playlist_token(sound)?)
                .map_err(|_| FrameError::PlaylistTooLong)?;
        }

        let mut crc = RunningChecksum::new();
        crc.add(self.integrity.checksum(&header));
        self.uart.write_blocking(&header).map_err(Error::Transport)?;

        for token in &tokens {
            crc.add(self.integrity.checksum(token));
            self.uart.write_blocking(token).map_err(Error::Transport)?;
        }

        self.uart
            .write_blocking(&[crc.value()])
            .map_err(Error::Transport)?;
        self.uart.flush().map_err(Error::Transport)
    }

    pub fn end_combination_play(&mut self) -> Result<(), Error<E>> {
        self.send_fixed(CommandId::EndCombination)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn try_check_play_state(&mut self) -> Result<PlayState, Error<E>> {
        let raw: [u8; PLAY_STATE_RESPONSE_LEN] = self.query(CommandId::QueryPlayState)?;
        Ok(response::decode_play_state(&raw)?)
    }

    /// Current play state, or [`PlayState::Fail`] if the query failed
    pub fn check_play_state(&mut self) -> PlayState {
        let result = self.try_check_play_state();
        sentinel(result, PlayState::Fail, "play state")
    }

    pub fn try_get_playing_device(&mut self) -> Result<Device, Error<E>> {
        let raw: [u8; DEVICE_RESPONSE_LEN] = self.query(CommandId::QueryPlayingDevice)?;
        Ok(response::decode_device(&raw)?)
    }

    /// Device currently used for playback, or [`Device::Failed`]
    pub fn get_playing_device(&mut self) -> Device {
        let result = self.try_get_playing_device();
        sentinel(result, Device::Failed, "playing device")
    }

    pub fn try_get_online_device(&mut self) -> Result<Device, Error<E>> {
        let raw: [u8; DEVICE_RESPONSE_LEN] = self.query(CommandId::QueryOnlineDevice)?;
        Ok(response::decode_device(&raw)?)
    }

    /// Storage device currently online, or [`Device::Failed`]
    pub fn get_online_device(&mut self) -> Device {
        let result = self.try_get_online_device();
        sentinel(result, Device::Failed, "online device")
    }

    fn try_query_u16(&mut self, id: CommandId) -> Result<u16, Error<E>> {
        let raw: [u8; COUNT_RESPONSE_LEN] = self.query(id)?;
        Ok(response::decode_u16(&raw)?)
    }

    pub fn try_get_sound_count(&mut self) -> Result<u16, Error<E>> {
        self.try_query_u16(CommandId::QuerySoundCount)
    }

    /// Number of sounds on the current device, `0` on failure
    pub fn get_sound_count(&mut self) -> u16 {
        let result = self.try_get_sound_count();
        sentinel(result, 0, "sound count")
    }

    pub fn try_get_playing_sound(&mut self) -> Result<u16, Error<E>> {
        self.try_query_u16(CommandId::QueryPlayingSound)
    }

    /// Number of the sound currently playing, `0` on failure
    pub fn get_playing_sound(&mut self) -> u16 {
        let result = self.try_get_playing_sound();
        sentinel(result, 0, "playing sound")
    }

    pub fn try_get_first_in_dir(&mut self) -> Result<u16, Error<E>> {
        self.try_query_u16(CommandId::QueryFirstInDir)
    }

    /// Number of the first sound in the current directory, `0` on failure
    pub fn get_first_in_dir(&mut self) -> u16 {
        let result = self.try_get_first_in_dir();
        sentinel(result, 0, "first in dir")
    }

    pub fn try_get_sound_count_dir(&mut self) -> Result<u16, Error<E>> {
        self.try_query_u16(CommandId::QuerySoundCountDir)
    }

    /// Number of sounds in the current directory, `0` on failure
    pub fn get_sound_count_dir(&mut self) -> u16 {
        let result = self.try_get_sound_count_dir();
        sentinel(result, 0, "sound count dir")
    }
}

/// Collapse a query error into its in-band sentinel
#[cfg_attr(not(feature = "defmt"), allow(unused_variables))]
fn sentinel<T, E>(result: Result<T, Error<E>>, fallback: T, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            #[cfg(feature = "defmt")]
            match e {
                Error::Transport(_) => defmt::warn!("dyplayer {=str} query: uart error", what),
                Error::ShortRead { expected, received } => defmt::warn!(
                    "dyplayer {=str} query: got {=usize} of {=usize} bytes",
                    what,
                    received,
                    expected
                ),
                Error::Frame(frame_error) => {
                    defmt::warn!("dyplayer {=str} query: {}", what, frame_error)
                }
            }
            fallback
        }
    }
}
