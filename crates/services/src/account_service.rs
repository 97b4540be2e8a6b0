use mindcare_core::model::{AccountError, Notice, SignupForm};

/// Login and signup screens without any real authentication behind them.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountService;

impl AccountService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks the form and returns the confirmation to show.
    ///
    /// # Errors
    ///
    /// Returns `AccountError` when a field is blank or the passwords differ.
    pub fn sign_up(&self, form: &SignupForm) -> Result<Notice, AccountError> {
        form.validate()?;
        tracing::info!("signup form accepted");
        Ok(Notice::new("Signup successful! Please login."))
    }

    /// Login always succeeds; there is no account store to check against.
    pub fn log_in(&self, email: &str) {
        tracing::info!(has_email = !email.trim().is_empty(), "login accepted");
    }
}
