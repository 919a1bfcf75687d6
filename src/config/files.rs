//! Candidate configuration sources and discovery.
//!
//! Discovery is first-found-wins over an ordered candidate list; the list
//! order encodes format precedence.

use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level `package.json` key that may embed the configuration.
pub const MANIFEST_KEY: &str = "clean-env";

/// Format of a candidate configuration source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// Native TOML settings file.
    Toml,
    /// YAML file; an empty document counts as an empty mapping.
    Yaml,
    /// JSON file with `//` and `/* */` comments tolerated.
    Json,
    /// Strict-JSON manifest with the configuration embedded under
    /// [`MANIFEST_KEY`].
    Manifest,
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Toml => write!(f, "toml"),
            ConfigFormat::Yaml => write!(f, "yaml"),
            ConfigFormat::Json => write!(f, "json"),
            ConfigFormat::Manifest => write!(f, "manifest"),
        }
    }
}

/// A (filename, format) pair tried during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSource {
    /// Filename relative to the project root.
    pub filename: &'static str,
    /// How to parse the file when selected.
    pub format: ConfigFormat,
}

/// Candidate filenames in precedence order.
///
/// The manifest is special-cased by filename, not extension: `package.json`
/// is parsed as strict JSON and only its `clean-env` field is consulted.
pub const CANDIDATES: &[CandidateSource] = &[
    CandidateSource {
        filename: ".clean-env.toml",
        format: ConfigFormat::Toml,
    },
    CandidateSource {
        filename: ".clean-env.yaml",
        format: ConfigFormat::Yaml,
    },
    CandidateSource {
        filename: ".clean-env.yml",
        format: ConfigFormat::Yaml,
    },
    CandidateSource {
        filename: ".clean-env.json",
        format: ConfigFormat::Json,
    },
    CandidateSource {
        filename: "package.json",
        format: ConfigFormat::Manifest,
    },
];

/// Find the first candidate that exists as a regular file under `root`.
///
/// Returns `None` when no candidate exists, which is the normal
/// "use defaults" path, not an error.
pub fn find_candidate(root: &Path) -> Option<(PathBuf, ConfigFormat)> {
    CANDIDATES.iter().find_map(|candidate| {
        let path = root.join(candidate.filename);
        path.is_file().then_some((path, candidate.format))
    })
}
