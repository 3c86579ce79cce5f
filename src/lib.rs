//! # Sigmoid Neuron
//!
//! A single artificial neuron in Rust.
//!
//! The neuron maps a fixed-size input vector to a scalar through a weighted sum
//! and a sigmoid, computes the local gradient of that output with respect to each
//! weight, and applies a one-step update `w += alpha * grad`.

pub mod activation;
mod config;
mod error;
mod neuron;

// Re-export main types
pub use config::NeuronConfig;
pub use error::{ErrorKind, NeuronError};
pub use neuron::{Neuron, DEFAULT_ALPHA, DEFAULT_FORWARD_GRAD};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
