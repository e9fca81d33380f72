use crate::options::PathOptions;
use crate::pattern::{PatternError, PatternResult, Segment, SegmentKinds};

/// Segments of a pattern together with a summary of what they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPattern {
    pub segments: Vec<Segment>,
    pub kinds: SegmentKinds,
    /// Number of synthesized `$n` keys.
    pub unnamed: usize,
}

/// Splits `pattern` on the separator and classifies every piece.
///
/// Empty leading and trailing pieces are kept, so `/foo/` compiles to three
/// segments and requires a trailing separator in the input.
#[tracing::instrument(level = "trace", skip(options), fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str, options: &PathOptions) -> PatternResult<ParsedPattern> {
    let mut unnamed = 0usize;
    let segments = pattern
        .split(options.separator.as_str())
        .map(|piece| parse_segment(piece, options, &mut unnamed))
        .collect::<PatternResult<Vec<_>>>()?;

    let kinds = segments
        .iter()
        .fold(SegmentKinds::empty(), |acc, seg| acc | seg.kind());

    Ok(ParsedPattern {
        segments,
        kinds,
        unnamed,
    })
}

fn next_unnamed_key(unnamed: &mut usize) -> Box<str> {
    let key = format!("${}", *unnamed);
    *unnamed += 1;
    key.into_boxed_str()
}

pub fn parse_segment(
    piece: &str,
    options: &PathOptions,
    unnamed: &mut usize,
) -> PatternResult<Segment> {
    if piece == options.wildcard {
        return Ok(Segment::Wildcard {
            key: next_unnamed_key(unnamed),
        });
    }

    let prefix = options.prefix.as_str();
    let suffix = options.suffix.as_str();

    let Some(rest) = piece.strip_prefix(prefix) else {
        if !suffix.is_empty() && piece.ends_with(suffix) {
            return Err(PatternError::UnmatchedSuffix {
                segment: piece.to_string(),
                prefix: prefix.to_string(),
                suffix: suffix.to_string(),
            });
        }
        return Ok(Segment::Static(piece.into()));
    };

    let Some(name) = rest.strip_suffix(suffix) else {
        // with no prefix, a piece lacking the suffix is plain text
        if prefix.is_empty() {
            return Ok(Segment::Static(piece.into()));
        }
        return Err(PatternError::UnterminatedParameter {
            segment: piece.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        });
    };

    let key = if name.is_empty() {
        if prefix.is_empty() != suffix.is_empty() {
            return Err(PatternError::ParameterMissingName {
                segment: piece.to_string(),
            });
        }
        next_unnamed_key(unnamed)
    } else {
        if (!prefix.is_empty() && name.contains(prefix))
            || (!suffix.is_empty() && name.contains(suffix))
        {
            return Err(PatternError::AmbiguousKeyBoundary {
                segment: piece.to_string(),
                key: name.to_string(),
            });
        }
        name.into()
    };

    Ok(Segment::Parameterized {
        key,
        equality_check: options.equality_check,
    })
}
