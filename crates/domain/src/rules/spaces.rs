//! Space rule.

use super::{RuleOutcome, ValidationRule};

/// Fails passwords containing a space character.
///
/// Only the literal space counts; other whitespace passes.
#[derive(Debug, Default)]
pub struct NoSpacesRule;

impl ValidationRule for NoSpacesRule {
    fn evaluate(&self, password: &str) -> RuleOutcome {
        if password.contains(' ') {
            return RuleOutcome::fail("password must not contain spaces");
        }
        RuleOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_embedded_space() {
        let outcome = NoSpacesRule.evaluate("Abc def1!");
        assert_eq!(outcome.messages(), ["password must not contain spaces"]);
    }

    #[test]
    fn test_accepts_password_without_spaces() {
        assert!(NoSpacesRule.evaluate("Abcdefg1!").passed());
    }

    #[test]
    fn test_other_whitespace_is_not_a_space() {
        assert!(NoSpacesRule.evaluate("Abc\tdef1!").passed());
    }
}
