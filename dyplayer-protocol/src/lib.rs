//! DY-XXXX MP3 module UART protocol
//!
//! This crate encodes commands for, and decodes responses from, the DY-XXXX
//! family of serial MP3 modules (DY-SV17F, DY-SV8F, DY-HV20T, ...). It does
//! no I/O; `dyplayer-driver` binds it to a UART.
//!
//! # Protocol Overview
//!
//! Every command and response uses the same frame layout:
//! ```text
//! ┌───────┬────────┬────────┬─────────────┬──────────┐
//! │ START │ OPCODE │ LENGTH │ PARAMS      │ CHECKSUM │
//! │ 0xAA  │ 1B     │ 1B     │ 0–255B      │ 1B       │
//! └───────┴────────┴────────┴─────────────┴──────────┘
//! ```
//!
//! The checksum is the low byte of the sum of every preceding byte. It is
//! sent as a separate UART write after the frame body, which is what lets
//! combination playlists be streamed without buffering the whole frame.

#![no_std]
#![deny(unsafe_code)]

pub mod checksum;
pub mod command;
pub mod frame;
pub mod response;
pub mod types;

pub use checksum::{checksum, validate_checksum, AdditiveChecksum, FrameIntegrity, RunningChecksum};
pub use command::{CommandId, CommandTemplate, FixedCommand, TemplateCommand, FRAME_START};
pub use frame::{FrameBody, FrameError, MAX_BODY_SIZE, MAX_PARAM_LEN};
pub use types::{Device, Equalizer, PlayMode, PlayState, PreviousDirSound};
