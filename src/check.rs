//! Policy evaluation of an environment snapshot.

use crate::config::Config;
use crate::env::EnvSnapshot;

/// A required variable that is absent from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingRequired {
    pub name: String,
}

/// An excluded variable that is present in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundExcluded {
    pub name: String,
    pub value: String,
}

/// Outcome of one policy check.
///
/// Entries preserve the order declared in the configuration's `required`
/// and `excluded` sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub missing_required: Vec<MissingRequired>,
    pub found_excluded: Vec<FoundExcluded>,
}

impl Report {
    /// True when the environment satisfies the policy.
    pub fn is_clean(&self) -> bool {
        self.missing_required.is_empty() && self.found_excluded.is_empty()
    }
}

/// Evaluate the snapshot against the policy.
///
/// Presence means the snapshot has an entry for the name; an empty string
/// value is still present. Required variables without an entry are missing;
/// excluded variables with an entry are reported together with their value.
pub fn check(config: &Config, env: &EnvSnapshot) -> Report {
    let missing_required = config
        .required
        .iter()
        .filter(|name| !env.contains(name.as_str()))
        .map(|name| MissingRequired { name: name.clone() })
        .collect();

    let found_excluded = config
        .excluded
        .iter()
        .filter_map(|name| {
            env.get(name).map(|value| FoundExcluded {
                name: name.clone(),
                value: value.to_string(),
            })
        })
        .collect();

    Report {
        missing_required,
        found_excluded,
    }
}
