use std::str::FromStr;

use crate::errors::{PathMatchError, PathMatchResult};
use crate::matcher::match_segments;
use crate::options::{PathOption, PathOptions};
use crate::pattern::{Segment, SegmentKinds, parse_pattern};
use crate::types::Captures;

/// A pattern compiled against a fixed set of options.
///
/// Matching never mutates the compiled value, so one instance can be shared
/// across threads and queried concurrently.
///
/// Backtracking is limited to a single wildcard: once matching reaches a second
/// wildcard, the first one can no longer grow. A pattern such as `/*/a/*/b`
/// therefore reports no match for inputs where only a longer first wildcard
/// would let the second one align.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPath {
    pattern: Box<str>,
    options: PathOptions,
    segments: Vec<Segment>,
    kinds: SegmentKinds,
    unnamed: usize,
}

impl CompiledPath {
    #[tracing::instrument(level = "trace", skip(options), fields(pattern = %pattern))]
    pub fn new(pattern: &str, options: PathOptions) -> PathMatchResult<Self> {
        options.validate()?;

        let parsed = parse_pattern(pattern, &options).inspect_err(|err| {
            tracing::debug!(pattern, error = %err, "pattern compilation failed");
        })?;

        Ok(Self {
            pattern: pattern.into(),
            options,
            segments: parsed.segments,
            kinds: parsed.kinds,
            unnamed: parsed.unnamed,
        })
    }

    pub fn is_match(&self, input: &str) -> bool {
        match_segments(&self.segments, &self.options, input, false).is_some()
    }

    /// Captured values keyed by parameter name, or `$n` for wildcards and unnamed
    /// parameters. `None` exactly when [`CompiledPath::is_match`] is false.
    pub fn find_submatch(&self, input: &str) -> Option<Captures> {
        match_segments(&self.segments, &self.options, input, true)
    }

    /// True when the pattern has neither parameters nor wildcards.
    pub fn is_static(&self) -> bool {
        !self
            .kinds
            .intersects(SegmentKinds::PARAMETERIZED | SegmentKinds::WILDCARD)
    }

    pub fn has_wildcard(&self) -> bool {
        self.kinds.contains(SegmentKinds::WILDCARD)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn options(&self) -> &PathOptions {
        &self.options
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn kinds(&self) -> SegmentKinds {
        self.kinds
    }

    /// Number of `$n` keys the pattern can produce.
    pub fn unnamed_count(&self) -> usize {
        self.unnamed
    }
}

impl FromStr for CompiledPath {
    type Err = PathMatchError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern, PathOptions::default())
    }
}

/// Compiles `pattern` after applying `options` to the defaults in order.
pub fn compile<I>(pattern: &str, options: I) -> PathMatchResult<CompiledPath>
where
    I: IntoIterator<Item = PathOption>,
{
    let options = PathOptions::from_options(options)?;
    CompiledPath::new(pattern, options)
}
