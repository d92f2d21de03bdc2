//! Game implementations.

pub mod paper_soccer;
