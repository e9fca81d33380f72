use bitflags::bitflags;
use std::ops::Range;

use crate::matcher::CaptureDraft;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SegmentKinds: u8 {
        const STATIC = 0b00000001;
        const PARAMETERIZED = 0b00000010;
        const WILDCARD = 0b00000100;
    }
}

/// One separator-delimited unit of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the input segment byte for byte.
    Static(Box<str>),
    /// Binds exactly one input segment to `key`.
    Parameterized { key: Box<str>, equality_check: bool },
    /// Binds one or more input segments, joined by the separator, to `key`.
    Wildcard { key: Box<str> },
}

impl Segment {
    pub fn kind(&self) -> SegmentKinds {
        match self {
            Segment::Static(_) => SegmentKinds::STATIC,
            Segment::Parameterized { .. } => SegmentKinds::PARAMETERIZED,
            Segment::Wildcard { .. } => SegmentKinds::WILDCARD,
        }
    }

    /// Capture key, `None` for static segments.
    pub fn key(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Parameterized { key, .. } | Segment::Wildcard { key } => Some(&**key),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Segment::Static(_))
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard { .. })
    }

    /// Tests `input[span]` against this segment and records the binding on success.
    ///
    /// `terminal` marks the last segment of the pattern, the only position where a
    /// parameter may bind an empty value.
    pub(crate) fn match_span<'p>(
        &'p self,
        draft: &mut CaptureDraft<'p>,
        input: &str,
        span: Range<usize>,
        terminal: bool,
    ) -> bool {
        let value = &input[span.clone()];

        match self {
            Segment::Static(literal) => &**literal == value,
            Segment::Parameterized {
                key,
                equality_check,
            } => {
                if value.is_empty() && !terminal {
                    return false;
                }

                if *equality_check
                    && let Some(bound) = draft.bound(key, input)
                    && bound != value
                {
                    return false;
                }

                draft.bind(key, span);
                true
            }
            Segment::Wildcard { key } => {
                draft.bind(key, span);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(key: &str, equality_check: bool) -> Segment {
        Segment::Parameterized {
            key: key.into(),
            equality_check,
        }
    }

    #[test]
    fn static_segment_requires_exact_value() {
        let seg = Segment::Static("users".into());
        let mut draft = CaptureDraft::new(true);

        assert!(seg.match_span(&mut draft, "users", 0..5, false));
        assert!(!seg.match_span(&mut draft, "Users", 0..5, false));
        assert_eq!(draft.mark(), 0);
    }

    #[test]
    fn parameter_rejects_empty_value_unless_terminal() {
        let seg = param("id", false);
        let mut draft = CaptureDraft::new(true);

        assert!(!seg.match_span(&mut draft, "", 0..0, false));
        assert!(seg.match_span(&mut draft, "", 0..0, true));
        assert_eq!(draft.bound("id", ""), Some(""));
    }

    #[test]
    fn parameter_with_equality_check_rejects_conflicting_value() {
        let seg = param("id", true);
        let input = "1/2";
        let mut draft = CaptureDraft::new(true);

        assert!(seg.match_span(&mut draft, input, 0..1, false));
        assert!(!seg.match_span(&mut draft, input, 2..3, false));
        assert!(seg.match_span(&mut draft, input, 0..1, false));
    }

    #[test]
    fn parameter_without_equality_check_accepts_conflicting_value() {
        let seg = param("id", false);
        let input = "1/2";
        let mut draft = CaptureDraft::new(true);

        assert!(seg.match_span(&mut draft, input, 0..1, false));
        assert!(seg.match_span(&mut draft, input, 2..3, false));
        assert_eq!(draft.bound("id", input), Some("2"));
    }

    #[test]
    fn kinds_and_keys_follow_variant() {
        let wildcard = Segment::Wildcard { key: "$0".into() };

        assert_eq!(wildcard.kind(), SegmentKinds::WILDCARD);
        assert_eq!(wildcard.key(), Some("$0"));
        assert!(wildcard.is_wildcard());
        assert!(!wildcard.is_static());
        assert!(Segment::Static("a".into()).is_static());
        assert!(!param("id", false).is_static());
        assert_eq!(Segment::Static("a".into()).key(), None);
        assert_eq!(param("id", false).kind(), SegmentKinds::PARAMETERIZED);
    }
}
