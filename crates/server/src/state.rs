//! Application state for dependency injection.

use std::sync::Arc;

use domain::PasswordValidator;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<PasswordValidator>,
}

impl AppState {
    /// Create app state with the default rule set wired in.
    pub fn new() -> Self {
        Self::with_validator(PasswordValidator::default())
    }

    /// Create app state over a custom validator.
    pub fn with_validator(validator: PasswordValidator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
