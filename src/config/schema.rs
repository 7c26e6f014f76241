//! Configuration schema definitions.
//!
//! The tree is `Config → Server → [Router] → ([Middleware], [Handler])`.
//! Every field may be omitted from the document and unknown keys are ignored.
//! Middleware and handler `type` strings are opaque keys into whatever
//! registry the consuming server keeps; nothing here resolves them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::scalar;

/// Root of the configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// The single server described by this document.
    #[serde(deserialize_with = "scalar::or_default")]
    pub server: Server,
}

/// A listening endpoint with its routing rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Server {
    /// Port to listen on, kept as written (e.g. "8080").
    #[serde(deserialize_with = "scalar::or_default")]
    pub port: String,

    /// Routing rules in declaration order. Order is significant to the
    /// consumer; duplicate prefixes are allowed.
    #[serde(deserialize_with = "scalar::or_default")]
    pub routers: Vec<Router>,
}

/// A prefix-scoped set of middlewares and handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Router {
    /// URL prefix this rule applies to.
    #[serde(deserialize_with = "scalar::or_default")]
    pub prefix: String,

    /// Middlewares in the order they should wrap the handlers.
    #[serde(deserialize_with = "scalar::or_default")]
    pub middlewares: Vec<Middleware>,

    /// Handlers in declaration order.
    #[serde(deserialize_with = "scalar::or_default")]
    pub handlers: Vec<Handler>,
}

/// A named, configurable interceptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Middleware {
    /// Implementation key (YAML `type`).
    #[serde(rename = "type", deserialize_with = "scalar::or_default")]
    pub kind: String,

    /// Flat implementation-specific settings.
    #[serde(deserialize_with = "scalar::string_map")]
    pub config: BTreeMap<String, String>,
}

/// A named, configurable path handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Handler {
    /// Path under the router prefix this handler serves.
    #[serde(deserialize_with = "scalar::or_default")]
    pub path: String,

    /// Implementation key (YAML `type`).
    #[serde(rename = "type", deserialize_with = "scalar::or_default")]
    pub kind: String,

    /// Flat implementation-specific settings.
    #[serde(deserialize_with = "scalar::string_map")]
    pub config: BTreeMap<String, String>,
}

impl Config {
    /// Parse a YAML document.
    ///
    /// A blank or comment-only document yields `Config::default()`, as does a
    /// document that is just `null`.
    pub fn from_yaml_slice(bytes: &[u8]) -> Result<Self, serde_yaml::Error> {
        if is_blank(bytes) {
            return Ok(Self::default());
        }
        let config: Option<Self> = serde_yaml::from_slice(bytes)?;
        Ok(config.unwrap_or_default())
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        Self::from_yaml_slice(s.as_bytes())
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl Server {
    /// First router declared with exactly this prefix.
    pub fn router(&self, prefix: &str) -> Option<&Router> {
        self.routers.iter().find(|r| r.prefix == prefix)
    }
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.split(|b| *b == b'\n').all(|line| {
        let line = line.trim_ascii();
        line.is_empty() || line.starts_with(b"#") || line == b"---"
    })
}
