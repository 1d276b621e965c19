//! Command frame construction
//!
//! Frame body format (the checksum byte is written separately):
//! - START (1 byte): 0xAA
//! - OPCODE (1 byte): command identifier
//! - LENGTH (1 byte): number of parameter bytes
//! - PARAMS (0-255 bytes): command-specific data

use heapless::Vec;

use crate::command::{CommandId, CommandTemplate, FRAME_START};
use crate::types::Device;

/// Maximum parameter block size (LENGTH is a single byte)
pub const MAX_PARAM_LEN: usize = 255;

/// START + OPCODE + LENGTH
pub const HEADER_LEN: usize = 3;

/// Maximum frame body size, checksum excluded
pub const MAX_BODY_SIZE: usize = HEADER_LEN + MAX_PARAM_LEN;

/// Default limit on path length, in characters
pub const DEFAULT_MAX_PATH_LEN: usize = 40;

/// Longest playlist the LENGTH byte can describe (two bytes per entry)
pub const MAX_PLAYLIST_LEN: usize = MAX_PARAM_LEN / 2;

/// An assembled frame body, ready to be checksummed and sent
pub type FrameBody = Vec<u8, MAX_BODY_SIZE>;

/// Errors that can occur while building frames or decoding responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Path exceeds the configured limit or the LENGTH byte
    PathTooLong,
    /// Path is empty or contains non-ASCII characters
    InvalidPath,
    /// Playlist entry is not exactly two ASCII characters
    InvalidToken,
    /// Playlist has more entries than the LENGTH byte can describe
    PlaylistTooLong,
    /// Parameter block does not match the command's declared width
    ParamLengthMismatch,
    /// Command has a different shape than the builder expects
    WrongCommandKind,
    /// Response is shorter than its payload offset requires
    ResponseTooShort,
    /// Response checksum does not match its contents
    ChecksumMismatch,
    /// Response payload is not a valid value for its field
    UnexpectedValue,
}

/// Build the body of a fixed or parameterized command
pub fn build(id: CommandId, params: &[u8]) -> Result<FrameBody, FrameError> {
    let (opcode, param_len) = match id.template() {
        CommandTemplate::Fixed(cmd) => (cmd.opcode, 0),
        CommandTemplate::Parameterized(cmd) => (cmd.opcode, cmd.param_len as usize),
        CommandTemplate::Path { .. } | CommandTemplate::Playlist { .. } => {
            return Err(FrameError::WrongCommandKind)
        }
    };
    if params.len() != param_len {
        return Err(FrameError::ParamLengthMismatch);
    }

    let mut body = FrameBody::new();
    body.extend_from_slice(&[FRAME_START, opcode, param_len as u8])
        .map_err(|_| FrameError::ParamLengthMismatch)?;
    body.extend_from_slice(params)
        .map_err(|_| FrameError::ParamLengthMismatch)?;
    Ok(body)
}

/// Number of payload bytes a path occupies once encoded
///
/// Every `/` after the first character gains a `*` marker in front of it.
pub fn expanded_path_len(path: &[u8]) -> usize {
    let separators = path
        .iter()
        .skip(1)
        .filter(|&&byte| byte == b'/')
        .count();
    path.len() + separators
}

/// Encode a device + path command
///
/// The module's file lookup wants the path uppercased, with every `.`
/// replaced by `*` and a `*` in front of every directory separator except
/// the root one: `/SONGS1/FILE1.MP3` becomes `/SONGS1*/FILE1*MP3`.
///
/// `max_path_len` is the caller's bound on the unencoded path; the encoded
/// payload must also fit the one-byte LENGTH field.
pub fn encode_path(
    id: CommandId,
    device: Device,
    path: &str,
    max_path_len: usize,
) -> Result<FrameBody, FrameError> {
    let opcode = match id.template() {
        CommandTemplate::Path { opcode } => opcode,
        _ => return Err(FrameError::WrongCommandKind),
    };

    let bytes = path.as_bytes();
    let (&first, rest) = bytes.split_first().ok_or(FrameError::InvalidPath)?;
    if !path.is_ascii() {
        return Err(FrameError::InvalidPath);
    }
    if bytes.len() > max_path_len {
        return Err(FrameError::PathTooLong);
    }

    // LENGTH counts the device byte as well
    let expanded = expanded_path_len(bytes);
    if expanded + 1 > MAX_PARAM_LEN {
        return Err(FrameError::PathTooLong);
    }

    let mut body = FrameBody::new();
    let mut push = |byte: u8| body.push(byte).map_err(|_| FrameError::PathTooLong);

    push(FRAME_START)?;
    push(opcode)?;
    push((expanded + 1) as u8)?;
    push(device.as_u8())?;
    push(first)?;
    for &byte in rest {
        match byte {
            b'.' => push(b'*')?,
            b'/' => {
                push(b'*')?;
                push(b'/')?;
            }
            other => push(other.to_ascii_uppercase())?,
        }
    }

    Ok(body)
}

/// Header of a combination playlist frame carrying `count` entries
pub fn playlist_header(count: usize) -> Result<[u8; HEADER_LEN], FrameError> {
    if count > MAX_PLAYLIST_LEN {
        return Err(FrameError::PlaylistTooLong);
    }
    let opcode = CommandId::CombinationPlay.template().opcode();
    Ok([FRAME_START, opcode, (count * 2) as u8])
}

/// Validate a playlist entry: the two-digit name of a file such as `01.mp3`
pub fn playlist_token(token: &str) -> Result<[u8; 2], FrameError> {
    match token.as_bytes() {
        &[a, b] if a.is_ascii() && b.is_ascii() => Ok([a, b]),
        _ => Err(FrameError::InvalidToken),
    }
}
