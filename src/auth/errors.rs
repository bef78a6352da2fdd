//! Authentication Errors
//! Mission: Distinguish client-input failures internally, collapse them at the boundary

use std::fmt;

/// Authentication failure kinds.
///
/// The first three are client-input errors and never fatal to the service.
/// `Internal` wraps store or codec infrastructure failures and is the only
/// variant that maps to a 5xx response.
#[derive(Debug)]
pub enum AuthError {
    /// Username/password mismatch — deliberately indistinguishable from an
    /// unknown user (enumeration resistance).
    InvalidCredentials,
    /// Token tampered with, signed with the wrong key, or not parseable.
    InvalidSignature,
    /// Token cryptographically valid but past its expiry.
    Expired,
    /// Store or codec infrastructure failure.
    Internal(anyhow::Error),
}

impl AuthError {
    /// True for the kinds that deny a client request (401), false for
    /// infrastructure failures.
    pub fn is_denial(&self) -> bool {
        !matches!(self, AuthError::Internal(_))
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid username or password"),
            AuthError::InvalidSignature => write!(f, "invalid token signature"),
            AuthError::Expired => write!(f, "token expired"),
            AuthError::Internal(e) => write!(f, "internal error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Internal(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for AuthError {
    fn from(e: anyhow::Error) -> Self {
        AuthError::Internal(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denial_classification() {
        assert!(AuthError::InvalidCredentials.is_denial());
        assert!(AuthError::InvalidSignature.is_denial());
        assert!(AuthError::Expired.is_denial());
        assert!(!AuthError::Internal(anyhow::anyhow!("db gone")).is_denial());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "invalid username or password"
        );
        assert_eq!(AuthError::Expired.to_string(), "token expired");
    }
}
