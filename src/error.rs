//! Error types for configuration resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure while loading a selected configuration file.
///
/// Absence of every candidate file is not an error (the defaults apply),
/// but once a candidate has been selected, any read or parse failure aborts
/// resolution. There is no silent fallback to the next candidate.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The selected file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected file could not be parsed into a configuration.
    #[error("failed to parse config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_name_the_failing_file() {
        let read = ConfigError::Read {
            path: PathBuf::from("/project/.clean-env.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(read.to_string().contains("/project/.clean-env.json"));

        let parse = ConfigError::Parse {
            path: PathBuf::from("/project/package.json"),
            message: "expected value at line 3".to_string(),
        };
        let rendered = parse.to_string();
        assert!(rendered.contains("/project/package.json"));
        assert!(rendered.contains("expected value at line 3"));
    }
}
