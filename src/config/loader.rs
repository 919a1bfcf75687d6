//! Configuration loader: discovery, format dispatch, and default merging.

use super::files::{ConfigFormat, MANIFEST_KEY, find_candidate};
use super::merge::deep_merge;
use super::types::Config;
use crate::error::ConfigError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolved configuration for a project root.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// The resolved configuration.
    config: Config,
    /// Path to the config file that was used (if any).
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Resolve the configuration for `root`.
    ///
    /// Tries the candidate files in precedence order and deep-merges the
    /// first match over the built-in defaults. Absence of every candidate,
    /// or a `package.json` without the embedded field, is not an error and
    /// yields the defaults unchanged. A read or parse failure of a selected
    /// candidate is fatal and never falls through to the next candidate.
    ///
    /// Nothing is cached: every call re-reads and re-parses from disk, so
    /// repeated calls within one process observe on-disk edits.
    pub fn resolve(root: &Path) -> Result<Self, ConfigError> {
        let Some((path, format)) = find_candidate(root) else {
            debug!(root = %root.display(), "no configuration file found, using defaults");
            return Ok(Self {
                config: Config::default(),
                config_path: None,
            });
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let Some(loaded) = parse_content(&content, format, &path)? else {
            debug!(path = %path.display(), "manifest has no embedded field, using defaults");
            return Ok(Self {
                config: Config::default(),
                config_path: None,
            });
        };

        // Serializing the defaults cannot fail for this type.
        let defaults = serde_json::to_value(Config::default()).unwrap_or(Value::Null);
        let merged = deep_merge(defaults, loaded);
        let config: Config = serde_json::from_value(merged).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), format = %format, "configuration loaded");
        Ok(Self {
            config,
            config_path: Some(path),
        })
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Get the config file path that was used, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

/// Parse file content into a JSON value according to its format.
///
/// Returns `Ok(None)` when the manifest parses cleanly but has no embedded
/// configuration field, which is distinct from an empty configuration.
fn parse_content(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<Option<Value>, ConfigError> {
    let parse_err = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match format {
        ConfigFormat::Toml => toml::from_str::<Value>(content)
            .map(Some)
            .map_err(|e| parse_err(e.to_string())),
        ConfigFormat::Yaml => {
            // An empty document is an empty mapping, never null, so the
            // merge below always sees a value it can combine.
            if content.trim().is_empty() {
                return Ok(Some(Value::Object(serde_json::Map::new())));
            }
            let value: Value =
                serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))?;
            Ok(Some(match value {
                Value::Null => Value::Object(serde_json::Map::new()),
                other => other,
            }))
        }
        ConfigFormat::Json => {
            let stripped = strip_json_comments(content);
            serde_json::from_str::<Value>(&stripped)
                .map(Some)
                .map_err(|e| parse_err(e.to_string()))
        }
        ConfigFormat::Manifest => {
            let mut manifest: Value =
                serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))?;
            match manifest.get_mut(MANIFEST_KEY) {
                Some(field) => Ok(Some(field.take())),
                None => Ok(None),
            }
        }
    }
}

/// Strip `//` line comments and `/* */` block comments from JSON text.
///
/// String literals are respected, so comment markers inside strings are
/// kept. Newlines inside block comments are preserved so parser error
/// locations still point at the right line. An unterminated `/*` comment
/// consumes the rest of the input; the parser then reports the truncated
/// document as a parse error for the file.
fn strip_json_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        if next == '\n' {
                            out.push('\n');
                        }
                        prev = next;
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}
