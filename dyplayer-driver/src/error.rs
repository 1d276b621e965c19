//! Driver errors

use dyplayer_protocol::FrameError;

/// Errors returned by [`crate::DyPlayer`] operations
///
/// `E` is the UART's own error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The UART reported an error
    Transport(E),
    /// The module answered with fewer bytes than the response needs
    ShortRead { expected: usize, received: usize },
    /// Frame could not be built, or the response was invalid
    Frame(FrameError),
}

impl<E> From<FrameError> for Error<E> {
    fn from(e: FrameError) -> Self {
        Error::Frame(e)
    }
}

impl<E> Error<E> {
    /// True if the module answered but the checksum did not match
    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, Error::Frame(FrameError::ChecksumMismatch))
    }
}
