//! Authentication Models
//! Mission: Define the claims payload and the HTTP request/response shapes

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims payload.
///
/// Role travels as a plain string so that a token carrying a role the
/// catalog does not know still round-trips intact and resolves to an empty
/// resource list instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub role: String,
    /// Expiry, unix seconds. Validity is purely signature + this timestamp;
    /// nothing is persisted server-side.
    pub exp: i64,
    /// Issuance time, unix seconds.
    pub iat: i64,
    /// Random nonce: two tokens for the same (username, role) differ even
    /// when issued within the same clock second.
    pub jti: Uuid,
}

/// Successful login outcome.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub role: String,
}

/// Role-resolved resource set for a verified token.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceGrant {
    pub username: String,
    pub role: String,
    pub resources: Vec<String>,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response — `success:false` carries only a generic message.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn granted(session: Session) -> Self {
        Self {
            success: true,
            token: Some(session.token),
            username: Some(session.username),
            role: Some(session.role),
            message: None,
        }
    }

    pub fn denied(message: &str) -> Self {
        Self {
            success: false,
            token: None,
            username: None,
            role: None,
            message: Some(message.to_string()),
        }
    }
}

/// Verify response — claims included only on success.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Claims>,
}

/// Refresh response.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

/// Generic denial body for bearer-protected endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_denied_omits_token() {
        let json = serde_json::to_string(&LoginResponse::denied("Invalid credentials")).unwrap();
        assert!(json.contains(r#""success":false"#));
        assert!(json.contains(r#""message":"Invalid credentials""#));
        assert!(!json.contains("token"));
    }

    #[test]
    fn test_login_response_granted_shape() {
        let session = Session {
            token: "abc.def.ghi".to_string(),
            username: "admin".to_string(),
            role: "admin".to_string(),
        };
        let json = serde_json::to_string(&LoginResponse::granted(session)).unwrap();
        assert!(json.contains(r#""success":true"#));
        assert!(json.contains(r#""token":"abc.def.ghi""#));
        assert!(json.contains(r#""role":"admin""#));
        assert!(!json.contains("message"));
    }

    #[test]
    fn test_verify_response_invalid_omits_user() {
        let json = serde_json::to_string(&VerifyResponse {
            valid: false,
            user: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"valid":false}"#);
    }
}
