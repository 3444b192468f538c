//! Error types for the FitForge application

use thiserror::Error;

/// Account error types
///
/// The display strings are the messages clients see.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing username or password")]
    MissingCredentials,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(
            AuthError::MissingCredentials.to_string(),
            "Missing username or password"
        );
        assert_eq!(AuthError::UsernameTaken.to_string(), "Username already taken");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
