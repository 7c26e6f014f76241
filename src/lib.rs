//! Declarative server configuration: schema and loader chain.
//!
//! Describes a server (port, routers, middlewares, handlers) and loads it from
//! a YAML document fetched by the first loader in a chain that accepts the
//! location. Routing, middleware execution and serving are left to the
//! consumer of the returned [`Config`].

pub mod config;
pub mod observability;

pub use config::{load_config, load_config_with, Config, ConfigError, Loader, LoaderChain};
