//! Query response decoding
//!
//! Responses echo the query header and carry their payload from offset 3,
//! followed by the usual additive checksum. The decoders here expect a
//! response whose checksum has already been validated.

use crate::frame::FrameError;
use crate::types::{Device, PlayState};

/// Offset of the first payload byte
pub const PAYLOAD_OFFSET: usize = 3;

/// Bytes read back for a play state query
pub const PLAY_STATE_RESPONSE_LEN: usize = 6;

/// Bytes read back for a device query
pub const DEVICE_RESPONSE_LEN: usize = 5;

/// Bytes read back for a sound number or count query
pub const COUNT_RESPONSE_LEN: usize = 6;

fn payload_byte(response: &[u8], offset: usize) -> Result<u8, FrameError> {
    response
        .get(PAYLOAD_OFFSET + offset)
        .copied()
        .ok_or(FrameError::ResponseTooShort)
}

/// Decode a big-endian 16-bit payload (sound numbers and counts)
pub fn decode_u16(response: &[u8]) -> Result<u16, FrameError> {
    let hi = payload_byte(response, 0)?;
    let lo = payload_byte(response, 1)?;
    Ok(u16::from_be_bytes([hi, lo]))
}

/// Decode a device payload
pub fn decode_device(response: &[u8]) -> Result<Device, FrameError> {
    Device::from_u8(payload_byte(response, 0)?).ok_or(FrameError::UnexpectedValue)
}

/// Decode a play state payload
pub fn decode_play_state(response: &[u8]) -> Result<PlayState, FrameError> {
    PlayState::from_u8(payload_byte(response, 0)?).ok_or(FrameError::UnexpectedValue)
}
