mod error;
mod parser;
mod segment;

pub use error::{PatternError, PatternResult};
pub use parser::{ParsedPattern, parse_pattern, parse_segment};
pub use segment::{Segment, SegmentKinds};
