use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_WIDTH: u16 = 50;
pub const DEFAULT_HEIGHT: u16 = 25;
pub const TICK_RATE: Duration = Duration::from_millis(100);

// Three cells of snake plus one free cell for the apple.
pub const MIN_WIDTH: u16 = 4;
pub const MIN_HEIGHT: u16 = 1;
pub const MAX_DIMENSION: u16 = 1000;

/// Immutable parameters of one game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub tick_rate: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, tick_rate: TICK_RATE }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let config = GameConfig { width, height, ..GameConfig::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.width, self.height);

        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(Error::BoardTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Error::BoardTooLarge { width, height, max: MAX_DIMENSION });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_is_valid() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (50, 25));
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn smallest_board_fits_snake_and_apple() {
        let config = GameConfig::new(MIN_WIDTH, MIN_HEIGHT).unwrap();
        assert_eq!((config.width, config.height), (4, 1));
    }

    #[test]
    fn too_narrow_board_is_rejected() {
        let err = GameConfig::new(3, 10).unwrap_err();
        assert!(matches!(err, Error::BoardTooSmall { width: 3, height: 10, .. }));
    }

    #[test]
    fn zero_height_board_is_rejected() {
        let err = GameConfig::new(10, 0).unwrap_err();
        assert!(matches!(err, Error::BoardTooSmall { .. }));
        assert_eq!(err.to_string(), "board 10x0 is too small, need at least 4x1");
    }

    #[test]
    fn oversized_board_is_rejected() {
        assert!(matches!(GameConfig::new(1001, 10), Err(Error::BoardTooLarge { .. })));
        assert!(GameConfig::new(1000, 1000).is_ok());
    }
}
