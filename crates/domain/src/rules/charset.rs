//! Character-class rules - digit, lowercase, uppercase and special character.
//!
//! Each requires at least one character from a fixed class, checked with a
//! precompiled regex.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{RuleOutcome, ValidationRule};

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern"));
static LOWERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[a-z]").expect("lowercase pattern"));
static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Z]").expect("uppercase pattern"));
// The dash is escaped so it stays a member of the class instead of forming
// a range.
static SPECIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[!@#$%^&*()\-+]").expect("special character pattern"));

/// Requires at least one decimal digit.
#[derive(Debug, Default)]
pub struct DigitRule;

impl ValidationRule for DigitRule {
    fn evaluate(&self, password: &str) -> RuleOutcome {
        if !DIGIT.is_match(password) {
            return RuleOutcome::fail("password must contain at least one digit");
        }
        RuleOutcome::pass()
    }
}

/// Requires at least one lowercase letter (`a-z`).
#[derive(Debug, Default)]
pub struct LowercaseRule;

impl ValidationRule for LowercaseRule {
    fn evaluate(&self, password: &str) -> RuleOutcome {
        if !LOWERCASE.is_match(password) {
            return RuleOutcome::fail("password must contain at least one lowercase letter");
        }
        RuleOutcome::pass()
    }
}

/// Requires at least one uppercase letter (`A-Z`).
#[derive(Debug, Default)]
pub struct UppercaseRule;

impl ValidationRule for UppercaseRule {
    fn evaluate(&self, password: &str) -> RuleOutcome {
        if !UPPERCASE.is_match(password) {
            return RuleOutcome::fail("password must contain at least one uppercase letter");
        }
        RuleOutcome::pass()
    }
}

/// Requires at least one character from the set `!@#$%^&*()-+`.
#[derive(Debug, Default)]
pub struct SpecialCharacterRule;

impl ValidationRule for SpecialCharacterRule {
    fn evaluate(&self, password: &str) -> RuleOutcome {
        if !SPECIAL.is_match(password) {
            return RuleOutcome::fail("password must contain at least one special character");
        }
        RuleOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_rule_rejects_letters_only() {
        let outcome = DigitRule.evaluate("NoDigitsHere!");
        assert_eq!(
            outcome.messages(),
            ["password must contain at least one digit"]
        );
    }

    #[test]
    fn test_digit_rule_accepts_single_digit() {
        assert!(DigitRule.evaluate("abc1").passed());
    }

    #[test]
    fn test_lowercase_rule_rejects_uppercase_only() {
        let outcome = LowercaseRule.evaluate("UPPER123!");
        assert_eq!(
            outcome.messages(),
            ["password must contain at least one lowercase letter"]
        );
    }

    #[test]
    fn test_lowercase_rule_accepts_mixed_case() {
        assert!(LowercaseRule.evaluate("Mixed").passed());
    }

    #[test]
    fn test_uppercase_rule_rejects_lowercase_only() {
        let outcome = UppercaseRule.evaluate("lower123!");
        assert_eq!(
            outcome.messages(),
            ["password must contain at least one uppercase letter"]
        );
    }

    #[test]
    fn test_uppercase_rule_accepts_mixed_case() {
        assert!(UppercaseRule.evaluate("Mixed").passed());
    }

    #[test]
    fn test_special_rule_rejects_alphanumeric_only() {
        let outcome = SpecialCharacterRule.evaluate("Alnum1234");
        assert_eq!(
            outcome.messages(),
            ["password must contain at least one special character"]
        );
    }

    #[test]
    fn test_special_rule_accepts_each_set_member() {
        for special in "!@#$%^&*()-+".chars() {
            let password = format!("abc{special}");
            assert!(
                SpecialCharacterRule.evaluate(&password).passed(),
                "'{special}' should count as a special character"
            );
        }
    }

    #[test]
    fn test_special_rule_rejects_characters_outside_the_set() {
        // Punctuation that is not in the fixed set does not count.
        assert!(!SpecialCharacterRule.evaluate("abc._,;?").passed());
    }

    #[test]
    fn test_charset_rules_all_fail_on_empty_input() {
        assert!(!DigitRule.evaluate("").passed());
        assert!(!LowercaseRule.evaluate("").passed());
        assert!(!UppercaseRule.evaluate("").passed());
        assert!(!SpecialCharacterRule.evaluate("").passed());
    }
}
