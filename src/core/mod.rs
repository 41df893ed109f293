//! Core engine types: the injected random source and configuration.

pub mod config;
pub mod rng;

pub use config::{ConfigError, RoundConfig, SessionConfig};
pub use rng::{GameRng, GameRngState};
