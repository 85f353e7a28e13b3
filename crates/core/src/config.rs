//! Engine configuration
//!
//! Board dimensions, the per-line bonus and the spawn column are fixed for the
//! lifetime of a [`GameState`](crate::GameState). The defaults reproduce the
//! reference 10x20 game.

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, LINE_CLEAR_BONUS};

/// Widest catalog shape (the I bar); the board must fit it at spawn.
const WIDEST_SHAPE: u8 = 4;

/// Largest supported board side. Positions are `i8`, and the ghost probe must
/// be able to step one row past the floor without overflowing.
pub const MAX_BOARD_SIDE: u8 = 100;

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width must be between {min} and {max}, got {got}")]
    Width { min: u8, max: u8, got: u8 },
    #[error("board height must be between {min} and {max}, got {got}")]
    Height { min: u8, max: u8, got: u8 },
    #[error("spawn column {spawn_x} leaves no room for a 4-wide piece on a {width}-wide board")]
    SpawnColumn { spawn_x: i8, width: u8 },
}

/// Static parameters of one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    /// Points per cleared row
    pub line_clear_bonus: u32,
    /// Column of the spawned shape's top-left cell
    pub spawn_x: i8,
}

impl EngineConfig {
    /// Config for a `width` x `height` board with the spawn column centered for
    /// a 4-wide piece.
    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            line_clear_bonus: LINE_CLEAR_BONUS,
            spawn_x: centered_spawn_x(width),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(WIDEST_SHAPE..=MAX_BOARD_SIDE).contains(&self.width) {
            return Err(ConfigError::Width {
                min: WIDEST_SHAPE,
                max: MAX_BOARD_SIDE,
                got: self.width,
            });
        }
        // Two rows is the smallest board where a 2-tall piece can spawn.
        if !(2..=MAX_BOARD_SIDE).contains(&self.height) {
            return Err(ConfigError::Height {
                min: 2,
                max: MAX_BOARD_SIDE,
                got: self.height,
            });
        }
        let last_fitting = self.width as i16 - WIDEST_SHAPE as i16;
        if self.spawn_x < 0 || self.spawn_x as i16 > last_fitting {
            return Err(ConfigError::SpawnColumn {
                spawn_x: self.spawn_x,
                width: self.width,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

fn centered_spawn_x(width: u8) -> i8 {
    (width.saturating_sub(WIDEST_SHAPE) / 2).min(i8::MAX as u8) as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_board() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.line_clear_bonus, 10);
        assert_eq!(config.spawn_x, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn spawn_column_is_centered() {
        assert_eq!(EngineConfig::with_size(4, 10).spawn_x, 0);
        assert_eq!(EngineConfig::with_size(12, 10).spawn_x, 4);
        assert_eq!(EngineConfig::with_size(13, 10).spawn_x, 4);
    }

    #[test]
    fn rejects_narrow_board() {
        let err = EngineConfig::with_size(3, 20).validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::Width {
                min: 4,
                max: MAX_BOARD_SIDE,
                got: 3
            }
        );
    }

    #[test]
    fn rejects_oversized_board() {
        assert!(EngineConfig::with_size(10, 101).validate().is_err());
        assert!(EngineConfig::with_size(101, 20).validate().is_err());
    }

    #[test]
    fn rejects_spawn_column_past_edge() {
        let config = EngineConfig {
            spawn_x: 7,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnColumn {
                spawn_x: 7,
                width: 10
            })
        );
        let config = EngineConfig {
            spawn_x: -1,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
