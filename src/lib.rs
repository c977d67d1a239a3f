//! corrtop — ranks the strongest pairwise correlations in a CSV export.
//!
//! Hexagonal architecture: the parsing and ranking engine in [`domain`], port
//! traits in [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
