//! Errors surfaced by the simulation.
use thiserror::Error;

/// Simulation-level errors
#[derive(Error, Debug)]
pub enum SimError {
    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Too many live objects and nothing left that may be evicted
    #[error("Entity pool exhausted: {live} live objects, capacity {capacity}")]
    PoolExhausted { live: usize, capacity: usize },
}
