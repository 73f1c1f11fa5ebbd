//! Library components for the flightmap CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
