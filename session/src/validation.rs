//! Pre-flight checks for the login and registration forms.
//!
//! A failure here means no request is sent.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Local validation failures. The message is shown verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Raw login form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Both fields must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingCredentials`] when either is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

/// Raw registration form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Checks run in order and stop at the first failure: presence, email
    /// shape, password length, confirmation match.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot inside the
/// domain with at least one character on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Any dot works as long as both sides are non-empty.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}
