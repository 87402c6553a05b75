//! Domain layer - password validation rules and aggregation.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The HTTP layer injects the rule set and consumes the produced report.

pub mod constants;
pub mod rules;
pub mod validator;

pub use constants::MIN_PASSWORD_LENGTH;
pub use rules::{
    default_rules, DigitRule, LengthRule, LowercaseRule, NoRepeatedCharactersRule, NoSpacesRule,
    RuleOutcome, SpecialCharacterRule, UppercaseRule, ValidationRule,
};
pub use validator::{PasswordValidator, ValidationReport};
