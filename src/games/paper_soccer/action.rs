//! Action representation: one full turn as a chain of directions.
//!
//! A turn is usually a single step, but landing on a vertex that already
//! has a drawn edge forces the ball to keep moving. The whole chain is one
//! action and is applied or reversed atomically.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::direction::Direction;
use super::error::ParseActionError;

/// A complete turn: a non-empty chain of directions in traversal order.
///
/// ## Example
///
/// ```
/// use paper_soccer::games::paper_soccer::{Action, Direction};
///
/// let step = Action::single(Direction::North);
/// assert_eq!(step.len(), 1);
///
/// let chain: Action = "N NE SW".parse().unwrap();
/// assert_eq!(chain.directions(), &[Direction::North, Direction::NorthEast, Direction::SouthWest]);
/// assert_eq!(chain.to_string(), "N NE SW");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAction")]
pub struct Action {
    /// SmallVec keeps short chains (the common case) off the heap.
    directions: SmallVec<[Direction; 8]>,
}

/// Unchecked wire form of `Action`.
#[derive(Deserialize)]
struct RawAction {
    directions: SmallVec<[Direction; 8]>,
}

impl TryFrom<RawAction> for Action {
    type Error = ParseActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        if raw.directions.is_empty() {
            return Err(ParseActionError::Empty);
        }
        Ok(Self {
            directions: raw.directions,
        })
    }
}

impl Action {
    /// Create a one-step action.
    #[must_use]
    pub fn single(direction: Direction) -> Self {
        let mut directions = SmallVec::new();
        directions.push(direction);
        Self { directions }
    }

    /// Create an action from a chain of directions.
    ///
    /// # Panics
    ///
    /// Panics if `directions` is empty.
    #[must_use]
    pub fn from_directions(directions: &[Direction]) -> Self {
        assert!(!directions.is_empty(), "Action must have at least one direction");
        Self {
            directions: SmallVec::from_slice(directions),
        }
    }

    /// `prefix` followed by `last`.
    pub(crate) fn chain(prefix: &[Direction], last: Direction) -> Self {
        let mut directions = SmallVec::with_capacity(prefix.len() + 1);
        directions.extend_from_slice(prefix);
        directions.push(last);
        Self { directions }
    }

    /// Build without the non-empty check.
    #[cfg(test)]
    pub(crate) fn unchecked(directions: &[Direction]) -> Self {
        Self {
            directions: SmallVec::from_slice(directions),
        }
    }

    /// The directions in traversal order.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Number of edges the action traverses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Check if the action bounces at least once.
    #[must_use]
    pub fn is_chain(&self) -> bool {
        self.directions.len() > 1
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, direction) in self.directions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{direction}")?;
        }
        Ok(())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let directions = s
            .split_whitespace()
            .map(str::parse::<Direction>)
            .collect::<Result<SmallVec<[Direction; 8]>, _>>()?;
        Self::try_from(RawAction { directions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single() {
        let action = Action::single(Direction::East);
        assert_eq!(action.directions(), &[Direction::East]);
        assert!(!action.is_chain());
        assert!(!action.is_empty());
    }

    #[test]
    fn test_chain() {
        let action = Action::chain(&[Direction::North, Direction::West], Direction::South);
        assert_eq!(action.len(), 3);
        assert!(action.is_chain());
        assert_eq!(action.to_string(), "N W S");
    }

    #[test]
    #[should_panic(expected = "at least one direction")]
    fn test_empty_rejected() {
        let _ = Action::from_directions(&[]);
    }

    #[test]
    fn test_parse() {
        let action: Action = "  ne  Sw ".parse().unwrap();
        assert_eq!(
            action,
            Action::from_directions(&[Direction::NorthEast, Direction::SouthWest])
        );
        assert_eq!("".parse::<Action>(), Err(ParseActionError::Empty));
        assert!(matches!(
            "N Q".parse::<Action>(),
            Err(ParseActionError::UnknownDirection(_))
        ));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::from_directions(&[Direction::North, Direction::SouthEast]);
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_empty_chain() {
        let err = serde_json::from_str::<Action>(r#"{"directions":[]}"#).unwrap_err();
        assert!(err.to_string().contains("no directions"));

        let ok: Action = serde_json::from_str(r#"{"directions":["North"]}"#).unwrap();
        assert_eq!(ok, Action::single(Direction::North));
    }
}
