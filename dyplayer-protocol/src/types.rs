//! Domain enumerations shared by commands and responses

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storage device on the module
///
/// `Failed` and `NoDevice` never describe real hardware: `Failed` is
/// returned by the driver when a device query could not be completed,
/// `NoDevice` is what the module reports when nothing is online.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Device {
    /// USB storage device
    Usb = 0x00,
    /// SD card
    Sd = 0x01,
    /// Onboard flash chip (usually winbond 32 or 64 Mbit)
    Flash = 0x02,
    /// UART or checksum failure
    Failed = 0xFE,
    /// No storage device is online
    NoDevice = 0xFF,
}

impl Device {
    /// Wire value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode a device byte reported by the module
    ///
    /// `Failed` is never reported by the module and decodes to `None`.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Device::Usb),
            0x01 => Some(Device::Sd),
            0x02 => Some(Device::Flash),
            0xFF => Some(Device::NoDevice),
            _ => None,
        }
    }
}

/// Module play state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlayState {
    /// UART failure, either no answer or a bad checksum
    Fail,
    Stopped,
    Playing,
    Paused,
}

impl PlayState {
    /// Decode the state byte of a play state response
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(PlayState::Stopped),
            1 => Some(PlayState::Playing),
            2 => Some(PlayState::Paused),
            _ => None,
        }
    }
}

/// Equalizer preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Equalizer {
    #[default]
    Normal = 0,
    Pop = 1,
    Rock = 2,
    Jazz = 3,
    Classic = 4,
}

impl Equalizer {
    /// Wire value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Cycle (loop) mode
///
/// The module powers up in `OneOff`: play one sound and stop, which suits
/// toys and announcement boards. Use `Sequence` for media player behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PlayMode {
    /// Play all sounds in sequence, and repeat
    Repeat = 0,
    /// Repeat the current sound
    RepeatOne = 1,
    /// Play the sound and stop
    #[default]
    OneOff = 2,
    /// Play random sounds
    Random = 3,
    /// Repeat the current directory
    RepeatDir = 4,
    /// Random sounds from the current directory
    RandomDir = 5,
    /// Play the current directory in sequence, then stop
    SequenceDir = 6,
    /// Play the whole device in sequence, then stop
    Sequence = 7,
}

impl PlayMode {
    /// Wire value
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Which sound to start at when stepping back a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PreviousDirSound {
    FirstSound,
    LastSound,
}
