//! Blocking driver for DY-XXXX serial MP3 modules
//!
//! [`DyPlayer`] wraps a UART implementing the `dyplayer-hal` traits and
//! exposes the module's playback, navigation, volume, equalizer, interlude
//! and combination-play commands.
//!
//! Every call is a synchronous request/response: the frame is written, and
//! for queries the response is read back and checksum-validated before the
//! next command may be issued. `&mut self` on every operation enforces that
//! ordering.
//!
//! Queries come in two flavours:
//! - `try_*` methods return `Result`, distinguishing transport failures,
//!   short reads and checksum mismatches.
//! - The plain methods return an in-band sentinel on any failure
//!   (`PlayState::Fail`, `Device::Failed`, or `0` for numbers). Note that
//!   `0` is also a legitimate sound count.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod player;

pub use config::PlayerConfig;
pub use error::Error;
pub use player::{DyPlayer, MAX_VOLUME};

pub use dyplayer_hal::{IoUart, UartConfig, UartRx, UartTx};
pub use dyplayer_protocol::{
    AdditiveChecksum, Device, Equalizer, FrameError, FrameIntegrity, PlayMode, PlayState,
    PreviousDirSound,
};
