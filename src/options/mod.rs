mod config;
mod error;

pub use config::{
    DEFAULT_PREFIX, DEFAULT_SEPARATOR, DEFAULT_SUFFIX, DEFAULT_WILDCARD, PathOption, PathOptions,
    PathOptionsBuilder,
};
pub use error::{ConfigError, ConfigResult};
