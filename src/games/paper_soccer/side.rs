//! The two sides of a paper soccer match.

use serde::{Deserialize, Serialize};

/// A player, named after the goal it defends.
///
/// North defends the goal at the top of the board (high `y`) and scores by
/// bringing the ball to the south goal line. North moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    North,
    South,
}

impl Side {
    /// Both sides, in move order.
    pub const ALL: [Side; 2] = [Side::North, Side::South];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
        }
    }

    /// Side to move after `plies` actions have been played.
    #[must_use]
    pub const fn to_move_after(plies: usize) -> Side {
        if plies % 2 == 0 {
            Side::North
        } else {
            Side::South
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::North => f.write_str("North"),
            Side::South => f.write_str("South"),
        }
    }
}
