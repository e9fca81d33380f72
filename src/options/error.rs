use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("separator must not be empty")]
    EmptySeparator,
    #[error("wildcard token must not be empty")]
    EmptyWildcard,
    #[error("{token} '{value}' contains the separator '{separator}'")]
    TokenContainsSeparator {
        token: &'static str,
        value: String,
        separator: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
