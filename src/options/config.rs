use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigResult};

pub const DEFAULT_SEPARATOR: &str = "/";
pub const DEFAULT_PREFIX: &str = ":";
pub const DEFAULT_SUFFIX: &str = "";
pub const DEFAULT_WILDCARD: &str = "*";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathOptions {
    pub separator: String,
    pub prefix: String,
    pub suffix: String,
    pub wildcard: String,
    /// Repeated parameter keys must bind equal values.
    pub equality_check: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            wildcard: DEFAULT_WILDCARD.to_string(),
            equality_check: false,
        }
    }
}

impl PathOptions {
    pub fn builder() -> PathOptionsBuilder {
        PathOptionsBuilder::default()
    }

    /// Folds `options` over the defaults in order, so later entries win.
    pub fn from_options<I>(options: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = PathOption>,
    {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.wildcard.is_empty() {
            return Err(ConfigError::EmptyWildcard);
        }

        let tokens = [
            ("prefix", &self.prefix),
            ("suffix", &self.suffix),
            ("wildcard", &self.wildcard),
        ];
        for (token, value) in tokens {
            if value.contains(self.separator.as_str()) {
                return Err(ConfigError::TokenContainsSeparator {
                    token,
                    value: value.clone(),
                    separator: self.separator.clone(),
                });
            }
        }

        Ok(())
    }
}

/// A single configuration change, applied by [`crate::compile`] in the order given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum PathOption {
    Separator(String),
    Prefix(String),
    Suffix(String),
    Wildcard(String),
    EqualityCheck(bool),
}

impl PathOption {
    pub fn apply(self, config: &mut PathOptions) {
        match self {
            PathOption::Separator(value) => config.separator = value,
            PathOption::Prefix(value) => config.prefix = value,
            PathOption::Suffix(value) => config.suffix = value,
            PathOption::Wildcard(value) => config.wildcard = value,
            PathOption::EqualityCheck(value) => config.equality_check = value,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct PathOptionsBuilder {
    config: PathOptions,
}

impl PathOptionsBuilder {
    pub fn separator<S: Into<String>>(mut self, value: S) -> Self {
        self.config.separator = value.into();
        self
    }

    pub fn prefix<S: Into<String>>(mut self, value: S) -> Self {
        self.config.prefix = value.into();
        self
    }

    pub fn suffix<S: Into<String>>(mut self, value: S) -> Self {
        self.config.suffix = value.into();
        self
    }

    pub fn wildcard<S: Into<String>>(mut self, value: S) -> Self {
        self.config.wildcard = value.into();
        self
    }

    pub fn equality_check(mut self, value: bool) -> Self {
        self.config.equality_check = value;
        self
    }

    pub fn build(self) -> ConfigResult<PathOptions> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_url_style_patterns() {
        let options = PathOptions::default();
        assert_eq!(options.separator, "/");
        assert_eq!(options.prefix, ":");
        assert_eq!(options.suffix, "");
        assert_eq!(options.wildcard, "*");
        assert!(!options.equality_check);
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn later_options_override_earlier_ones() {
        let options = PathOptions::from_options([
            PathOption::Separator(".".to_string()),
            PathOption::EqualityCheck(true),
            PathOption::Separator("::".to_string()),
        ])
        .unwrap();

        assert_eq!(options.separator, "::");
        assert!(options.equality_check);
    }

    #[test]
    fn rejects_token_containing_separator() {
        let err = PathOptions::builder()
            .separator(".")
            .wildcard("*.*")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::TokenContainsSeparator {
                token: "wildcard",
                value: "*.*".to_string(),
                separator: ".".to_string(),
            }
        );
    }
}
