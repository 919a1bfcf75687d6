//! Configuration types and built-in defaults.

use serde::{Deserialize, Serialize};

/// Default dotenv file path, relative to the project root.
pub const DEFAULT_DOTENV_PATH: &str = ".env";

/// Dotenv setting: a file path, or a boolean toggle.
///
/// `false` disables dotenv loading entirely. `true` is accepted and means
/// "enabled with the default `.env` path", so the boolean form is total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DotenvSetting {
    /// Load a dotenv file from this path (relative to the project root).
    Path(String),
    /// Toggle loading of the default path on or off.
    Enabled(bool),
}

impl DotenvSetting {
    /// The path to load, or `None` when loading is disabled.
    pub fn path(&self) -> Option<&str> {
        match self {
            DotenvSetting::Path(p) => Some(p),
            DotenvSetting::Enabled(true) => Some(DEFAULT_DOTENV_PATH),
            DotenvSetting::Enabled(false) => None,
        }
    }
}

impl Default for DotenvSetting {
    fn default() -> Self {
        DotenvSetting::Path(DEFAULT_DOTENV_PATH.to_string())
    }
}

/// Console messages, overridable per key.
///
/// After resolution the full key set is always populated: a config file may
/// override any subset and the defaults fill the gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translations {
    /// Heading above the missing-required table.
    #[serde(default = "default_missing_required")]
    pub missing_required: String,

    /// Heading above the found-excluded table.
    #[serde(default = "default_found_excluded")]
    pub found_excluded: String,

    /// Statement printed after the tables when the environment is not clean.
    #[serde(default = "default_error_statement")]
    pub error_statement: String,

    /// Confirmation question asked before overriding a failed check.
    #[serde(default = "default_error_question")]
    pub error_question: String,

    /// The affirmative answer; anything else declines.
    #[serde(default = "default_yes")]
    pub yes: String,
}

impl Default for Translations {
    fn default() -> Self {
        Self {
            missing_required: default_missing_required(),
            found_excluded: default_found_excluded(),
            error_statement: default_error_statement(),
            error_question: default_error_question(),
            yes: default_yes(),
        }
    }
}

fn default_missing_required() -> String {
    "These required environment variables are missing:".to_string()
}

fn default_found_excluded() -> String {
    "These excluded environment variables were found:".to_string()
}

fn default_error_statement() -> String {
    "The environment is not clean.".to_string()
}

fn default_error_question() -> String {
    "Do you want to continue anyway? (yes/no)".to_string()
}

fn default_yes() -> String {
    "yes".to_string()
}

/// Resolved environment policy for a single run.
///
/// `required` and `excluded` are assumed disjoint; a name listed in both
/// would be reported as missing and can never satisfy the policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Variables that must be present in the environment.
    #[serde(default)]
    pub required: Vec<String>,

    /// Variables that must be absent from the environment.
    #[serde(default)]
    pub excluded: Vec<String>,

    /// Dotenv file to overlay before checking, or `false` to skip.
    #[serde(default)]
    pub dotenv: DotenvSetting,

    /// Console messages.
    #[serde(default)]
    pub translations: Translations,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required: Vec::new(),
            excluded: Vec::new(),
            dotenv: DotenvSetting::default(),
            translations: Translations::default(),
        }
    }
}
