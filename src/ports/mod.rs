//! Port traits at the engine's I/O seams.

pub mod config_port;
pub mod source_port;
pub mod report_port;
