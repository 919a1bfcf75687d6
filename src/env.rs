//! Environment snapshot and dotenv overlay.

use crate::config::DotenvSetting;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Snapshot of environment variables, taken once per run.
///
/// The checker receives this snapshot explicitly instead of reading ambient
/// process state, so policy evaluation is testable without mutating the
/// process environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Get a variable's value, or `None` when it is absent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether a variable is present. An empty string still counts as
    /// present; only a missing entry is absent.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Insert a variable only if it is not already present.
    pub fn insert_if_absent(&mut self, name: String, value: String) {
        self.vars.entry(name).or_insert(value);
    }
}

impl FromIterator<(String, String)> for EnvSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

/// Overlay a dotenv file onto the snapshot before policy evaluation.
///
/// Variables already present in the snapshot win over dotenv entries,
/// matching dotenv convention. A missing file is skipped silently; a file
/// that exists but cannot be read or parsed is fatal. Does nothing when the
/// setting is `false`.
pub fn overlay_dotenv(root: &Path, setting: &DotenvSetting, env: &mut EnvSnapshot) -> Result<()> {
    let Some(relative) = setting.path() else {
        debug!("dotenv loading disabled");
        return Ok(());
    };

    let path = root.join(relative);
    if !path.is_file() {
        debug!(path = %path.display(), "no dotenv file found, skipping");
        return Ok(());
    }

    let entries = dotenvy::from_path_iter(&path)
        .with_context(|| format!("failed to open env file {}", path.display()))?;
    for entry in entries {
        let (name, value) =
            entry.with_context(|| format!("failed to parse env file {}", path.display()))?;
        env.insert_if_absent(name, value);
    }

    debug!(path = %path.display(), "dotenv file loaded");
    Ok(())
}
