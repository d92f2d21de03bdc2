//! Search error types.

/// Failures surfaced by the alpha-beta search.
///
/// All of these are consistency errors between a game's `SearchState`
/// implementation, its heuristic and the caller. None are retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `get_move` was called on a finished position.
    #[error("cannot choose a move from a terminal position")]
    TerminalRoot,

    /// The heuristic stopped at the root, so no action was examined.
    #[error("heuristic stopped the search at the root")]
    RootCutoff,

    /// A position reported itself non-terminal but has no actions.
    #[error("non-terminal position at depth {depth} has no legal actions")]
    NoLegalActions {
        /// Ply at which the position was found, root is 0.
        depth: u32,
    },
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
