//! Concrete adapter implementations for ports.

pub mod csv_codec;
pub mod file_config_adapter;
pub mod json_codec;
