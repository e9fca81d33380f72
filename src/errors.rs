use crate::options::ConfigError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathMatchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type PathMatchResult<T> = Result<T, PathMatchError>;
