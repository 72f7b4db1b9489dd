use std::fmt;

/// Rejected flag combinations. Raised before any filesystem access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `--time` and `--size` both requested.
    ConflictingSortKeys,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConflictingSortKeys => {
                f.write_str("-t and -s cannot be set at the same time")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
