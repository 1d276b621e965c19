//! Player configuration
//!
//! Stored as postcard binary data when the `serde` feature is enabled, so a
//! board can keep its player settings in flash alongside other config.

use dyplayer_protocol::frame::DEFAULT_MAX_PATH_LEN;
use dyplayer_protocol::{Equalizer, PlayMode};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Player settings
///
/// The optional fields are pushed to the module by
/// [`crate::DyPlayer::apply_config`]; `None` leaves the module's own
/// power-up setting alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerConfig {
    /// Longest path accepted by the path commands, in characters
    pub max_path_len: u8,
    /// Startup volume (0-30, the module defaults to 20)
    pub volume: Option<u8>,
    /// Startup equalizer preset
    pub eq: Option<Equalizer>,
    /// Startup cycle mode
    pub play_mode: Option<PlayMode>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerConfig {
    /// Default configuration: 40 character paths, module settings untouched
    pub const fn new() -> Self {
        Self {
            max_path_len: DEFAULT_MAX_PATH_LEN as u8,
            volume: None,
            eq: None,
            play_mode: None,
        }
    }

    pub const fn with_max_path_len(mut self, max_path_len: u8) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    pub const fn with_volume(mut self, volume: u8) -> Self {
        self.volume = Some(volume);
        self
    }

    pub const fn with_eq(mut self, eq: Equalizer) -> Self {
        self.eq = Some(eq);
        self
    }

    pub const fn with_play_mode(mut self, mode: PlayMode) -> Self {
        self.play_mode = Some(mode);
        self
    }
}

/// Configuration persistence errors
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Buffer too small or value not encodable
    Serialize,
    /// Stored bytes are not a valid configuration
    Deserialize,
}

#[cfg(feature = "serde")]
impl PlayerConfig {
    /// Encode into `buf`, returning the used prefix
    pub fn to_postcard<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode a configuration written by [`PlayerConfig::to_postcard`]
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.max_path_len, 40);
        assert_eq!(config.volume, None);
        assert_eq!(config.eq, None);
        assert_eq!(config.play_mode, None);
    }

    #[test]
    fn test_builder() {
        let config = PlayerConfig::new()
            .with_max_path_len(64)
            .with_volume(25)
            .with_eq(Equalizer::Jazz)
            .with_play_mode(PlayMode::Sequence);

        assert_eq!(config.max_path_len, 64);
        assert_eq!(config.volume, Some(25));
        assert_eq!(config.eq, Some(Equalizer::Jazz));
        assert_eq!(config.play_mode, Some(PlayMode::Sequence));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_persistence() {
        let config = PlayerConfig::new().with_volume(12).with_eq(Equalizer::Rock);
        let mut buf = [0u8; 32];
        let used = config.to_postcard(&mut buf).unwrap().len();

        assert_eq!(PlayerConfig::from_postcard(&buf[..used]), Ok(config));
        assert_eq!(
            PlayerConfig::from_postcard(&[0xFF; 2]),
            Err(ConfigError::Deserialize)
        );
        assert_eq!(
            config.to_postcard(&mut [0u8; 1]),
            Err(ConfigError::Serialize)
        );
    }
}
