//! Board dimensions.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Largest accepted `width` or `height`. Keeps lattice coordinates and
/// grid sizes well inside `i32` and `usize`.
pub const MAX_DIMENSION: u32 = 4096;

/// Playable board size, in edges.
///
/// `width` and `height` count the unit edges along each side of the field;
/// `goal_width` counts the edges of each goal mouth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: u32,
    pub height: u32,
    pub goal_width: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 8,
            goal_width: 2,
        }
    }
}

impl BoardConfig {
    /// Create a config without validating it.
    pub const fn new(width: u32, height: u32, goal_width: u32) -> Self {
        Self {
            width,
            height,
            goal_width,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_goal_width(mut self, goal_width: u32) -> Self {
        self.goal_width = goal_width;
        self
    }

    /// Check parity, goal size, minimum and maximum dimensions, in that
    /// order.
    pub fn validate(&self) -> Result<(), BoardError> {
        let Self {
            width,
            height,
            goal_width,
        } = *self;

        if goal_width % 2 != width % 2 {
            return Err(BoardError::AsymmetricGoal { width, goal_width });
        }
        if goal_width > width {
            return Err(BoardError::GoalTooWide { width, goal_width });
        }
        if goal_width < 1 || height < 1 {
            return Err(BoardError::TooSmall {
                width,
                height,
                goal_width,
            });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::TooLarge {
                width,
                height,
                max: MAX_DIMENSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BoardConfig::default();
        assert_eq!(config, BoardConfig::new(6, 8, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parity() {
        assert_eq!(
            BoardConfig::new(6, 8, 3).validate(),
            Err(BoardError::AsymmetricGoal {
                width: 6,
                goal_width: 3
            })
        );
        assert!(BoardConfig::new(5, 8, 3).validate().is_ok());
    }

    #[test]
    fn test_goal_too_wide() {
        assert_eq!(
            BoardConfig::new(4, 8, 6).validate(),
            Err(BoardError::GoalTooWide {
                width: 4,
                goal_width: 6
            })
        );
        assert!(BoardConfig::new(4, 8, 4).validate().is_ok());
    }

    #[test]
    fn test_too_small() {
        assert!(matches!(
            BoardConfig::new(0, 8, 0).validate(),
            Err(BoardError::TooSmall { .. })
        ));
        assert!(matches!(
            BoardConfig::new(6, 0, 2).validate(),
            Err(BoardError::TooSmall { .. })
        ));
        assert!(BoardConfig::new(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_too_large() {
        assert_eq!(
            BoardConfig::new(u32::MAX, 8, u32::MAX - 2).validate(),
            Err(BoardError::TooLarge {
                width: u32::MAX,
                height: 8,
                max: MAX_DIMENSION
            })
        );
        assert!(matches!(
            BoardConfig::new(6, MAX_DIMENSION + 1, 2).validate(),
            Err(BoardError::TooLarge { .. })
        ));
        assert!(BoardConfig::new(MAX_DIMENSION, MAX_DIMENSION, 2).validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BoardConfig::default()
            .with_width(8)
            .with_height(10)
            .with_goal_width(4);
        assert_eq!(config, BoardConfig::new(8, 10, 4));
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::new(8, 12, 2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
