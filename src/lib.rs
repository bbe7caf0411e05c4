//! stocksent — stock sentiment, forward-return, and sentiment/return lag
//! correlation records.
//!
//! Hexagonal architecture: record types and validation in [`domain`], port
//! traits in [`ports`], concrete codecs and configuration in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
