use smallvec::SmallVec;
use std::ops::Range;

use crate::types::Captures;

pub type CaptureSpan = (usize, usize);
pub type CapturedKey<'p> = (&'p str, CaptureSpan);
pub type CaptureList<'p> = SmallVec<[CapturedKey<'p>; 4]>;

/// Bindings collected during one match call.
///
/// Values are kept as byte spans into the input and only turned into owned strings
/// once the whole pattern has matched.
#[derive(Debug)]
pub struct CaptureDraft<'p> {
    bindings: CaptureList<'p>,
    recording: bool,
}

impl<'p> CaptureDraft<'p> {
    /// A non-recording draft ignores every write.
    pub fn new(recording: bool) -> Self {
        Self {
            bindings: SmallVec::new(),
            recording,
        }
    }

    pub fn bind(&mut self, key: &'p str, span: Range<usize>) {
        if self.recording {
            self.bindings.push((key, (span.start, span.end)));
        }
    }

    /// Most recent value bound to `key`.
    pub fn bound<'s>(&self, key: &str, input: &'s str) -> Option<&'s str> {
        self.bindings
            .iter()
            .rev()
            .find(|(bound_key, _)| *bound_key == key)
            .and_then(|(_, (start, end))| input.get(*start..*end))
    }

    pub fn mark(&self) -> usize {
        self.bindings.len()
    }

    /// Drops every binding recorded after `mark`.
    pub fn rollback(&mut self, mark: usize) {
        self.bindings.truncate(mark);
    }

    pub fn into_captures(self, input: &str) -> Captures {
        captures_to_map(input, &self.bindings)
    }
}

pub(crate) fn captures_to_map(input: &str, bindings: &[CapturedKey<'_>]) -> Captures {
    let mut map = Captures::with_capacity(bindings.len());
    for (key, (start, end)) in bindings {
        if let Some(value) = input.get(*start..*end) {
            map.insert((*key).to_string(), value.to_string());
        }
    }
    map
}
