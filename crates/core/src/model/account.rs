use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccountError {
    #[error("please fill in all fields")]
    MissingFields,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Text for a blocking dialog shown in place of a real action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(String);

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Signup form input. Nothing is sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// # Errors
    ///
    /// Returns `AccountError::MissingFields` if any field is blank and
    /// `AccountError::PasswordMismatch` if the passwords differ.
    pub fn validate(&self) -> Result<(), AccountError> {
        let fields = [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(AccountError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(AccountError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            name: "Alex".into(),
            email: "alex@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
        }
    }

    #[test]
    fn accepts_complete_matching_form() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_field_is_missing() {
        let form = SignupForm {
            email: "  ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(AccountError::MissingFields));
    }

    #[test]
    fn missing_fields_checked_before_mismatch() {
        let form = SignupForm {
            name: String::new(),
            confirm_password: "other".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(AccountError::MissingFields));
    }

    #[test]
    fn mismatched_passwords_rejected() {
        let form = SignupForm {
            confirm_password: "secrets".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(AccountError::PasswordMismatch));
    }
}
