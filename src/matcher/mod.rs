mod capture;
mod engine;

pub use capture::{CaptureDraft, CaptureList, CaptureSpan, CapturedKey};
pub use engine::match_segments;
