//! Input/output operations, CLI, and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Fixture defaults and runtime configuration constants
pub mod configuration;
/// Destination tree lifecycle and metadata-preserving file copies
pub mod copy;
/// Error types for fixture generation operations
pub mod error;
/// Progress display for level-by-level population
pub mod progress;
/// Source image pairing, parity selection, and placeholder synthesis
pub mod sources;
