//! Compiles path expressions such as `/api/:version/*` into reusable matchers.
//!
//! A pattern is split on a separator into static, parameterized and wildcard
//! segments. Parameters bind exactly one input segment, wildcards bind one or
//! more.
//!
//! ```
//! use bunner_pathmatch_rs::compile;
//!
//! let path = compile("/api/:version/*", []).unwrap();
//! assert!(!path.is_match("/foo/bar"));
//!
//! let captures = path.find_submatch("/api/v2/foo/bar").unwrap();
//! assert_eq!(captures["version"], "v2");
//! assert_eq!(captures["$0"], "foo/bar");
//! ```

mod compiled;
pub mod errors;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod types;

pub use compiled::{CompiledPath, compile};
pub use errors::{PathMatchError, PathMatchResult};
pub use options::{ConfigError, PathOption, PathOptions, PathOptionsBuilder};
pub use pattern::PatternError;
pub use types::Captures;
