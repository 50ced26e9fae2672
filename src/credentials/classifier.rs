//! Credential field classification.
//!
//! Decides whether a source-configuration field carries a credential. One
//! generic rule runs first and applies to every source type; after that,
//! classification dispatches on the (lower-cased) source type through a
//! rule registry, so support for a new connector is one `register` call.
//!
//! Source types with no registered rule get nothing extracted beyond the
//! generic rule's refusals: the classifier answers `false` for every
//! field and logs the type. Credentials of unsupported connectors
//! therefore stay inline in the configuration — callers relying on
//! extraction for such connectors must register a rule first.

use std::collections::HashMap;

use regex::Regex;
use tracing::warn;

/// Field-name fragments that mark a credential on any source type.
const GENERIC_PATTERN: &str = r"(?i)password|secret|key|token|credential|auth";

/// Per-connector patterns for credential fields the generic rule misses.
const CONNECTOR_PATTERNS: &[(&str, &str)] = &[
    ("kafka", r"(?i)sasl\.jaas\.config|ssl\.keystore\.password|ssl\.key\.password"),
    ("confluent-kafka", r"(?i)sasl\.jaas\.config|ssl\.keystore\.password|ssl\.key\.password"),
    ("kinesis", r"(?i)accessKey|secretKey|sessionToken|aws\..*\.credentials"),
    ("jdbc", r"(?i)user|username|passwd"),
    ("s3", r"(?i)access|secret|sessionToken|roleArn"),
    ("adls", r"(?i)accountKey|sasToken|clientId|clientSecret|tenantId"),
    ("azure", r"(?i)accountKey|sasToken|clientId|clientSecret|tenantId"),
    ("gcs", r"(?i)credential|privateKey|privateKeyId|clientEmail"),
    ("snowflake", r"(?i)user|password|privateKey|privateKeyPath|role|authenticator"),
    ("bigquery", r"(?i)privateKey|privateKeyId|clientEmail|tokenUri"),
];

/// Registry of credential-classification rules.
#[derive(Debug, Clone)]
pub struct CredentialClassifier {
    generic: Regex,
    rules: HashMap<String, Regex>,
}

impl CredentialClassifier {
    /// Classifier with rules for the known connector set.
    pub fn new() -> Self {
        let mut classifier = Self::empty();
        for (source_type, pattern) in CONNECTOR_PATTERNS {
            classifier
                .register(*source_type, Regex::new(pattern).expect("valid built-in pattern"));
        }
        classifier
    }

    /// Classifier with only the generic rule registered.
    pub fn empty() -> Self {
        Self {
            generic: Regex::new(GENERIC_PATTERN).expect("valid built-in pattern"),
            rules: HashMap::new(),
        }
    }

    /// Register (or replace) the rule for a source type.
    pub fn register(&mut self, source_type: impl Into<String>, rule: Regex) {
        self.rules.insert(source_type.into().to_lowercase(), rule);
    }

    /// True if a rule is registered for `source_type`.
    pub fn has_rule(&self, source_type: &str) -> bool {
        self.rules.contains_key(&source_type.to_lowercase())
    }

    /// Whether `field_name` is credential-bearing for `source_type`.
    ///
    /// Total and deterministic; case-insensitive in both the field name
    /// and the source type.
    pub fn is_credential_field(&self, field_name: &str, source_type: &str) -> bool {
        if self.generic.is_match(field_name) {
            return true;
        }

        match self.rules.get(&source_type.to_lowercase()) {
            Some(rule) => rule.is_match(field_name),
            None => {
                warn!(source_type, "Unrecognized source type, no credential fields extracted");
                false
            }
        }
    }
}

impl Default for CredentialClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_generic_rule_applies_to_every_source_type() {
        let classifier = CredentialClassifier::new();
        for source_type in ["kafka", "s3", "jdbc", "never-heard-of-it"] {
            assert!(classifier.is_credential_field("password", source_type));
            assert!(classifier.is_credential_field("awsSecretAccessKey", source_type));
            assert!(classifier.is_credential_field("oauthToken", source_type));
        }
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        let classifier = CredentialClassifier::new();
        assert!(classifier.is_credential_field("Password", "jdbc"));
        assert!(classifier.is_credential_field("PASSWORD", "jdbc"));
        assert!(classifier.is_credential_field("password", "jdbc"));
        assert!(classifier.is_credential_field("SASL.JAAS.CONFIG", "KAFKA"));
    }

    #[test]
    fn test_connector_specific_rules() {
        let classifier = CredentialClassifier::new();

        assert!(classifier.is_credential_field("sasl.jaas.config", "kafka"));
        assert!(classifier.is_credential_field("sasl.jaas.config", "confluent-kafka"));
        assert!(classifier.is_credential_field("username", "jdbc"));
        assert!(classifier.is_credential_field("roleArn", "s3"));
        assert!(classifier.is_credential_field("sasToken", "adls"));
        assert!(classifier.is_credential_field("clientEmail", "bigquery"));
        assert!(classifier.is_credential_field("authenticator", "snowflake"));

        assert!(!classifier.is_credential_field("bucket", "s3"));
        assert!(!classifier.is_credential_field("topic", "kafka"));
        assert!(!classifier.is_credential_field("fetchTimeoutMs", "kinesis"));
    }

    #[traced_test]
    #[test]
    fn test_unknown_source_type_fails_closed() {
        let classifier = CredentialClassifier::new();

        // These names match per-type rules ("roleArn" for s3, "username"
        // for jdbc) but not the generic rule; an unregistered source type
        // must never borrow another type's rule.
        assert!(!classifier.is_credential_field("roleArn", "pulsar"));
        assert!(!classifier.is_credential_field("username", "pulsar"));
        assert!(!classifier.is_credential_field("username", "unknown"));

        assert!(logs_contain("Unrecognized source type"));
    }

    #[test]
    fn test_register_extends_the_known_set() {
        let mut classifier = CredentialClassifier::new();
        assert!(!classifier.is_credential_field("serviceUrl", "pulsar"));

        classifier.register("pulsar", Regex::new(r"(?i)serviceUrl").unwrap());
        assert!(classifier.has_rule("PULSAR"));
        assert!(classifier.is_credential_field("serviceUrl", "pulsar"));

        // Existing rules are untouched.
        assert!(classifier.is_credential_field("roleArn", "s3"));
    }
}
