//! Configuration loading through an ordered chain of loaders.
//!
//! A loader either declines a location (`Ok(None)`), produces the raw
//! document (`Ok(Some(bytes))`), or fails (`Err`). Failures do not stop the
//! chain; they are kept and returned if no loader produces data.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::local::LocalLoader;
use crate::config::schema::Config;

/// What a single loader returns for a location.
pub type LoadOutcome = Result<Option<Vec<u8>>, SourceError>;

/// Why a loader that accepted a location could not produce data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Other(String),
}

/// A loader failure recorded while walking the chain.
#[derive(Debug)]
pub struct LoaderFailure {
    pub loader: String,
    pub error: SourceError,
}

impl fmt::Display for LoaderFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loader, self.error)
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every loader declined or failed.
    #[error("no loader produced configuration data for {location:?}{}", describe(.failures))]
    NoData {
        location: String,
        failures: Vec<LoaderFailure>,
    },

    /// The selected document is not a valid configuration.
    #[error("failed to parse configuration {location:?} from loader {loader}: {source}")]
    Parse {
        location: String,
        loader: String,
        #[source]
        source: serde_yaml::Error,
    },
}

fn describe(failures: &[LoaderFailure]) -> String {
    if failures.is_empty() {
        return String::new();
    }
    let joined: Vec<String> = failures.iter().map(ToString::to_string).collect();
    format!(" ({})", joined.join(", "))
}

/// A source of raw configuration bytes.
pub trait Loader {
    /// Name used in logs and recorded failures.
    fn name(&self) -> &str {
        "custom"
    }

    fn load(&self, location: &str) -> LoadOutcome;
}

impl<F> Loader for F
where
    F: Fn(&str) -> LoadOutcome,
{
    fn load(&self, location: &str) -> LoadOutcome {
        self(location)
    }
}

/// A closure loader carrying its own name.
pub struct FnLoader<F> {
    name: String,
    f: F,
}

impl<F> FnLoader<F>
where
    F: Fn(&str) -> LoadOutcome,
{
    pub fn named(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Loader for FnLoader<F>
where
    F: Fn(&str) -> LoadOutcome,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, location: &str) -> LoadOutcome {
        (self.f)(location)
    }
}

/// An ordered, owned sequence of loaders.
///
/// `LoaderChain::default()` holds only the local filesystem loader; an empty
/// chain built with `new()` falls back to it at load time.
pub struct LoaderChain {
    loaders: Vec<Box<dyn Loader>>,
}

impl LoaderChain {
    pub fn new() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    /// Append a loader; it is tried after every loader already in the chain.
    pub fn with(mut self, loader: impl Loader + 'static) -> Self {
        self.push(loader);
        self
    }

    pub fn push(&mut self, loader: impl Loader + 'static) {
        self.loaders.push(Box::new(loader));
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    /// Load and parse the configuration at `location`.
    pub fn load(&self, location: &str) -> Result<Config, ConfigError> {
        let loaders: Vec<&dyn Loader> = self.loaders.iter().map(|l| l.as_ref()).collect();
        load_config_with(location, &loaders)
    }
}

impl Default for LoaderChain {
    fn default() -> Self {
        Self::new().with(LocalLoader::new())
    }
}

/// Load the configuration at `location` with the local filesystem loader.
pub fn load_config(location: &str) -> Result<Config, ConfigError> {
    load_config_with(location, &[])
}

/// Load the configuration at `location`, trying `loaders` in order.
///
/// An empty slice means the local filesystem loader alone.
pub fn load_config_with(location: &str, loaders: &[&dyn Loader]) -> Result<Config, ConfigError> {
    if loaders.is_empty() {
        return run_chain(location, &[&LocalLoader::new()]);
    }
    run_chain(location, loaders)
}

fn run_chain(location: &str, loaders: &[&dyn Loader]) -> Result<Config, ConfigError> {
    let mut failures = Vec::new();

    for loader in loaders {
        tracing::debug!(loader = loader.name(), location, "Trying configuration loader");

        match loader.load(location) {
            Ok(Some(bytes)) => {
                tracing::info!(
                    loader = loader.name(),
                    location,
                    bytes = bytes.len(),
                    "Configuration data loaded"
                );
                return Config::from_yaml_slice(&bytes).map_err(|source| ConfigError::Parse {
                    location: location.to_string(),
                    loader: loader.name().to_string(),
                    source,
                });
            }
            Ok(None) => {
                tracing::debug!(loader = loader.name(), location, "Loader declined location");
            }
            Err(error) => {
                tracing::warn!(
                    loader = loader.name(),
                    location,
                    error = %error,
                    "Loader failed, trying next"
                );
                failures.push(LoaderFailure {
                    loader: loader.name().to_string(),
                    error,
                });
            }
        }
    }

    tracing::warn!(
        location,
        failures = failures.len(),
        "No loader produced configuration data"
    );
    Err(ConfigError::NoData {
        location: location.to_string(),
        failures,
    })
}
