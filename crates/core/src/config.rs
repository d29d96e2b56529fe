//! Session configuration and its validation.

use thiserror::Error;

use crate::types::{
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_DROP_INTERVAL_MS, MIN_ARENA_SIDE,
};

/// Tunables of a single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Arena width in cells
    pub width: u8,
    /// Arena height in cells
    pub height: u8,
    /// Gravity interval in milliseconds
    pub drop_interval_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_ARENA_WIDTH,
            height: DEFAULT_ARENA_HEIGHT,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
        }
    }
}

impl SessionConfig {
    /// Reject configurations the engine cannot play on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_ARENA_SIDE {
            return Err(ConfigError::ArenaTooNarrow {
                width: self.width,
                min: MIN_ARENA_SIDE,
            });
        }
        if self.height < MIN_ARENA_SIDE {
            return Err(ConfigError::ArenaTooShort {
                height: self.height,
                min: MIN_ARENA_SIDE,
            });
        }
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("arena width {width} is below the minimum of {min}")]
    ArenaTooNarrow { width: u8, min: u8 },
    #[error("arena height {height} is below the minimum of {min}")]
    ArenaTooShort { height: u8, min: u8 },
    #[error("drop interval must be at least 1ms")]
    ZeroDropInterval,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_narrow_arena() {
        let config = SessionConfig {
            width: 3,
            ..SessionConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ArenaTooNarrow { width: 3, min: 4 })
        );
    }

    #[test]
    fn test_rejects_short_arena() {
        let config = SessionConfig {
            height: 2,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooShort { height: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = SessionConfig {
            drop_interval_ms: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroDropInterval));
        assert_eq!(
            ConfigError::ZeroDropInterval.to_string(),
            "drop interval must be at least 1ms"
        );
    }
}
