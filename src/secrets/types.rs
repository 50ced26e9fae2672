//! Secure types for handling sensitive data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string wrapper that redacts its contents in Debug, Display, and
/// serialization, and zeroes its memory on drop.
///
/// Used for caller-supplied authorization material (secret service tokens).
/// The actual value is only reachable through [`expose_secret`](Self::expose_secret).
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new SecretString from a string value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the underlying secret value. Never log the result.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Never serialize the actual secret value.
        serializer.serialize_str("[REDACTED]")
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(SecretString(value))
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redact() {
        let secret = SecretString::new("service-token");
        assert_eq!(format!("{:?}", secret), "SecretString([REDACTED])");
        assert_eq!(format!("{}", secret), "[REDACTED]");
    }

    #[test]
    fn test_expose_secret() {
        let secret = SecretString::new("service-token");
        assert_eq!(secret.expose_secret(), "service-token");
    }

    #[test]
    fn test_serialization_redacts() {
        let secret = SecretString::new("service-token");
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, "\"[REDACTED]\"");
    }

    #[test]
    fn test_deserialization_accepts_values() {
        let secret: SecretString = serde_json::from_str("\"real-token\"").unwrap();
        assert_eq!(secret.expose_secret(), "real-token");
    }
}
