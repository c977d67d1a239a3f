//! Concrete adapter implementations for ports.

pub mod file_source;
pub mod ini_config_adapter;
pub mod text_report;
