//! Record types, validation, and the per-stock record index.

pub mod line;
pub mod lag;
pub mod heatmap;
pub mod record;
pub mod record_set;
pub mod validation;
pub mod config;
pub mod error;
