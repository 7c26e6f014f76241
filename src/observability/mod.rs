//! Observability subsystem.
//!
//! The library only emits `tracing` events; whichever subscriber the host
//! installs decides where they go. `logging` sets one up for the CLI.

pub mod logging;
