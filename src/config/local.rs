//! Local filesystem loader.
//!
//! Only locations written as `./relative/path` are handled; anything else is
//! declined so that other loaders in the chain can claim it.

use std::env;
use std::fs;
use std::path::PathBuf;

use crate::config::loader::{LoadOutcome, Loader, SourceError};

/// Prefix marking a location as relative to the local base directory.
pub(crate) const LOCAL_PREFIX: &str = "./";

/// Reads `./`-prefixed locations from disk.
#[derive(Debug, Clone, Default)]
pub struct LocalLoader {
    base: Option<PathBuf>,
}

impl LocalLoader {
    /// Resolve locations against the process working directory at load time.
    pub fn new() -> Self {
        Self { base: None }
    }

    /// Resolve locations against `base` instead of the working directory.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    /// Map a location to the file it names, or `None` if it is not local.
    pub fn resolve(&self, location: &str) -> Result<Option<PathBuf>, SourceError> {
        let Some(relative) = location.strip_prefix(LOCAL_PREFIX) else {
            return Ok(None);
        };
        // "./" + "/etc/x" still stays under the base directory.
        let relative = relative.trim_start_matches('/');

        let base = match &self.base {
            Some(base) => base.clone(),
            None => env::current_dir().map_err(|source| SourceError::Io {
                path: PathBuf::from("."),
                source,
            })?,
        };
        Ok(Some(base.join(relative)))
    }
}

impl Loader for LocalLoader {
    fn name(&self) -> &str {
        "local"
    }

    fn load(&self, location: &str) -> LoadOutcome {
        let Some(path) = self.resolve(location)? else {
            return Ok(None);
        };
        tracing::debug!(path = %path.display(), "Reading local configuration file");
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(source) => Err(SourceError::Io { path, source }),
        }
    }
}

/// Load `location` from the working directory; see [`LocalLoader`].
pub fn from_local(location: &str) -> LoadOutcome {
    LocalLoader::new().load(location)
}
