//! Configuration resolution pipeline.
//!
//! A project declares its environment policy in one of several candidate
//! files in the project root. The first candidate that exists wins, in this
//! precedence order:
//! 1. `.clean-env.toml`
//! 2. `.clean-env.yaml`
//! 3. `.clean-env.yml`
//! 4. `.clean-env.json` (comments tolerated)
//! 5. `package.json` (embedded under the top-level `clean-env` key)
//!
//! The loaded file is deep-merged field-by-field over the built-in defaults;
//! nested mappings (`translations`) merge key-by-key, while arrays
//! (`required`, `excluded`) replace the default wholesale. If no candidate
//! exists, the defaults are used as-is.

mod files;
mod loader;
mod merge;
mod types;

pub use files::{CANDIDATES, CandidateSource, ConfigFormat, MANIFEST_KEY, find_candidate};
pub use loader::ConfigLoader;
pub use merge::deep_merge;
pub use types::*;
