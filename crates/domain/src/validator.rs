//! Password validator - aggregates the outcomes of every configured rule.

use serde::{Deserialize, Serialize};

use crate::rules::{default_rules, ValidationRule};

/// Aggregated result of running every rule against one password.
///
/// `is_valid` holds exactly when `errors` is empty; the constructor derives
/// the verdict so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationReport {
    /// Whether every rule passed
    pub is_valid: bool,
    /// Failure messages in rule-registration order
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Build a report from the collected failure messages.
    pub fn new(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Runs an ordered set of rules against passwords.
///
/// The rule list is injected at construction; the validator never builds
/// rules itself. [`PasswordValidator::default`] wires in [`default_rules`]
/// for the production configuration.
pub struct PasswordValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl PasswordValidator {
    /// Create a validator over an ordered rule set.
    pub fn new(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Evaluate every rule against the password and merge the outcomes.
    ///
    /// All rules run even after a failure, so the report carries every
    /// applicable message rather than just the first.
    pub fn validate(&self, password: &str) -> ValidationReport {
        let mut errors = Vec::new();
        for rule in &self.rules {
            errors.extend(rule.evaluate(password).into_messages());
        }
        ValidationReport::new(errors)
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new(default_rules())
    }
}
