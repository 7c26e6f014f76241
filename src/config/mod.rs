//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! location string
//!     → loader.rs (try each Loader in order, first Some(bytes) wins)
//!         → local.rs (built-in: "./path" relative to the base directory)
//!         → caller-supplied loaders (remote stores, embedded defaults, ...)
//!     → schema.rs (YAML → Config)
//!     → Config (owned by the caller)
//! ```
//!
//! # Design Decisions
//! - A loader declines with `Ok(None)` and fails with `Err`; both move on to
//!   the next loader, failures are kept for the final error
//! - Empty data is still data: a zero-length document parses to the default tree
//! - No validation beyond what deserialization enforces
//! - Nothing here exits the process; the caller decides what is fatal

pub mod loader;
pub mod local;
mod scalar;
pub mod schema;

pub use loader::{
    load_config, load_config_with, ConfigError, FnLoader, LoadOutcome, Loader, LoaderChain,
    LoaderFailure, SourceError,
};
pub use local::{from_local, LocalLoader};
pub use schema::{Config, Handler, Middleware, Router, Server};
