//! Core engine: CSV shape detection, extraction, and top-N ranking.

pub mod grid;
pub mod format;
pub mod symbol;
pub mod base_filter;
pub mod observation;
pub mod extract;
pub mod ranking;
pub mod pipeline;
pub mod basket;
pub mod config_validation;
pub mod error;
