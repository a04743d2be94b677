//! Selector Infrastructure
//!
//! Rules and walkers that decide which subtrees become partials:
//! root selection, boundary detection, pattern counting, the candidate
//! filter and the final deepest-first candidate ordering.

pub mod boundary;
pub mod candidates;
pub mod filter;
pub mod pattern;
pub mod root;
pub mod utils;

pub use candidates::{collect_candidates, Candidate};
pub use pattern::PatternKey;
