//! Password validation rules.
//!
//! Each rule checks one aspect of a password and reports at most one
//! failure message. Rules are stateless; the registration order fixed by
//! [`default_rules`] determines the order of messages in the aggregated
//! report.

mod charset;
mod length;
mod repeats;
mod spaces;

pub use charset::{DigitRule, LowercaseRule, SpecialCharacterRule, UppercaseRule};
pub use length::LengthRule;
pub use repeats::NoRepeatedCharactersRule;
pub use spaces::NoSpacesRule;

#[cfg(test)]
use mockall::automock;

/// Outcome of evaluating a single rule against a password.
///
/// A rule passed iff it produced no messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    messages: Vec<String>,
}

impl RuleOutcome {
    /// Outcome of a rule that found nothing wrong.
    pub fn pass() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Outcome of a rule that found a violation.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Whether the rule passed.
    pub fn passed(&self) -> bool {
        self.messages.is_empty()
    }

    /// Failure messages, empty when the rule passed.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the outcome, yielding its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

/// A single password validation rule.
///
/// Implementations are pure: the outcome depends only on the password.
#[cfg_attr(test, automock)]
pub trait ValidationRule: Send + Sync {
    /// Evaluate the rule against a password.
    fn evaluate(&self, password: &str) -> RuleOutcome;
}

/// The full rule set in registration order.
///
/// The order is load-bearing: aggregated error messages are reported in
/// this order.
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(LengthRule),
        Box::new(DigitRule),
        Box::new(LowercaseRule),
        Box::new(UppercaseRule),
        Box::new(SpecialCharacterRule),
        Box::new(NoRepeatedCharactersRule),
        Box::new(NoSpacesRule),
    ]
}
