use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("parameter segment '{segment}' opens with '{prefix}' but never reaches '{suffix}'")]
    UnterminatedParameter {
        segment: String,
        prefix: String,
        suffix: String,
    },
    #[error("segment '{segment}' closes with '{suffix}' without an opening '{prefix}'")]
    UnmatchedSuffix {
        segment: String,
        prefix: String,
        suffix: String,
    },
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterMissingName { segment: String },
    #[error("parameter key '{key}' in segment '{segment}' runs into another parameter token")]
    AmbiguousKeyBoundary { segment: String, key: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
