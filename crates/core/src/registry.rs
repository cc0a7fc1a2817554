//! Namespaced registry keys.
//!
//! Keys such as `dc:iron_ingot` identify items independent of any host
//! registry. They are ordered and validated so that logs and snapshots stay
//! stable across runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default namespace used when a key omits an explicit namespace.
pub const DEFAULT_NAMESPACE: &str = "dc";

/// Error returned when parsing an invalid [`RegistryKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RegistryKeyError {
    message: String,
}

impl RegistryKeyError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A namespaced key of the form `namespace:path`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryKey {
    namespace: String,
    path: String,
}

impl RegistryKey {
    /// Parse a registry key, accepting `namespace:path` or a bare `path`.
    pub fn parse(input: &str) -> Result<Self, RegistryKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(RegistryKeyError::new("RegistryKey cannot be empty"));
        }

        let (namespace, path) = input
            .split_once(':')
            .unwrap_or((DEFAULT_NAMESPACE, input));

        let namespace = namespace.trim();
        let path = path.trim();
        validate_segment("namespace", namespace, 64, false)?;
        validate_segment("path", path, 128, true)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Registry key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Registry key path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for RegistryKey {
    type Err = RegistryKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegistryKey {
    type Error = RegistryKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RegistryKey> for String {
    fn from(key: RegistryKey) -> Self {
        key.to_string()
    }
}

fn validate_segment(
    label: &str,
    segment: &str,
    max_len: usize,
    allow_slash: bool,
) -> Result<(), RegistryKeyError> {
    if segment.is_empty() {
        return Err(RegistryKeyError::new(format!(
            "RegistryKey {label} cannot be empty"
        )));
    }
    if segment.len() > max_len {
        return Err(RegistryKeyError::new(format!(
            "RegistryKey {label} too long (max {max_len})"
        )));
    }
    let valid = segment
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.') || (allow_slash && c == '/'));
    if !valid {
        return Err(RegistryKeyError::new(format!(
            "RegistryKey {label} has invalid characters"
        )));
    }
    Ok(())
}
