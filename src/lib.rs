//! Generic puzzle-solving search engine.
//!
//! Any puzzle that can enumerate its own legal next states can be
//! solved by the two strategies provided here: depth-first search
//! returns the first solution found in enumeration order, breadth-first
//! search returns a shortest solution path. Both produce a
//! [`SearchTree`] whose root-to-leaf chain is the sequence of
//! configurations from the initial one to a solved one.

pub mod puzzle;
pub mod sliding_tiles;
pub mod solver;
pub mod tree;
pub mod word_chain;

// Re-export main types
pub use puzzle::Puzzle;
pub use sliding_tiles::SlidingTilesPuzzle;
pub use solver::{breadth_first_search, depth_first_search};
pub use tree::{NodeId, SearchTree};
pub use word_chain::WordChainPuzzle;
