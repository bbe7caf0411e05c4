//! Port traits implemented by [`adapters`](crate::adapters).

pub mod config_port;
pub mod record_codec;
