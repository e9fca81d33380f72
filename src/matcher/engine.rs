use memchr::{memchr, memmem};

use super::CaptureDraft;
use crate::options::PathOptions;
use crate::pattern::Segment;
use crate::types::Captures;

/// Resume state for the one wildcard that may still grow.
#[derive(Debug, Clone, Copy)]
struct SavePoint {
    index: usize,
    start: usize,
    scan_from: usize,
    mark: usize,
}

/// Finds the end of the input segment starting at `cursor`, ignoring separators
/// before `cursor + scan_from`. Returns the end offset and whether it is the last segment.
#[inline]
fn next_boundary(input: &str, separator: &str, cursor: usize, scan_from: usize) -> (usize, bool) {
    let from = cursor + scan_from;
    let haystack = &input.as_bytes()[from..];
    let needle = separator.as_bytes();

    let found = if needle.len() == 1 {
        memchr(needle[0], haystack)
    } else {
        memmem::find(haystack, needle)
    };

    match found {
        Some(pos) => (from + pos, false),
        None => (input.len(), true),
    }
}

/// Matches `input` against a compiled segment sequence.
///
/// Walks the pattern once, keeping a single save point for the most recent
/// non-terminal wildcard. When a later segment fails, the wildcard grows by one
/// input segment and matching resumes right after it. A second wildcard replaces
/// the save point of the first, so the first is never grown again once the second
/// has been reached.
///
/// With `capture` unset the returned map is always empty; bindings are then only
/// recorded when repeated parameters need an equality check.
#[tracing::instrument(
    level = "trace",
    skip(segments, options, input),
    fields(input_len = input.len() as u64, segments = segments.len() as u64)
)]
pub fn match_segments(
    segments: &[Segment],
    options: &PathOptions,
    input: &str,
    capture: bool,
) -> Option<Captures> {
    let separator = options.separator.as_str();
    let last = segments.len().checked_sub(1)?;

    let mut draft = CaptureDraft::new(capture || options.equality_check);
    let mut save: Option<SavePoint> = None;
    let mut cursor = 0usize;
    let mut scan_from = 0usize;
    let mut i = 0usize;

    while i <= last {
        let segment = &segments[i];

        if i == last && segment.is_wildcard() {
            segment.match_span(&mut draft, input, cursor..input.len(), true);
            cursor = input.len();
            break;
        }

        let (end, done) = next_boundary(input, separator, cursor, scan_from);
        if done && i != last {
            return None;
        }

        if segment.is_wildcard() {
            let grown = end - cursor + separator.len();
            save = Some(match save {
                Some(point) if point.index == i => SavePoint {
                    scan_from: grown,
                    ..point
                },
                _ => SavePoint {
                    index: i,
                    start: cursor,
                    scan_from: grown,
                    mark: draft.mark(),
                },
            });
        }

        // the last segment only counts when it also ends the input
        let matched =
            segment.match_span(&mut draft, input, cursor..end, i == last) && (done || i != last);

        if !matched {
            let point = save?;
            tracing::trace!(
                wildcard = point.index,
                failed = i,
                scan_from = point.scan_from,
                "growing wildcard"
            );
            draft.rollback(point.mark);
            i = point.index;
            cursor = point.start;
            scan_from = point.scan_from;
            continue;
        }

        cursor = if done { end } else { end + separator.len() };
        scan_from = 0;
        i += 1;
    }

    if cursor != input.len() {
        return None;
    }

    if capture {
        Some(draft.into_captures(input))
    } else {
        Some(Captures::new())
    }
}
