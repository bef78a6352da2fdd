//! JWT Token Codec
//! Mission: Encode and validate signed session tokens

use crate::auth::clock::Clock;
use crate::auth::errors::AuthError;
use crate::auth::models::Claims;
use anyhow::{Context, Result};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Codec for self-contained HS256 session tokens.
///
/// Expiry is checked against the injected clock rather than jsonwebtoken's
/// internal system-time validation, so tests can simulate expiry by
/// advancing a manual clock.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl_secs: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
            clock,
        }
    }

    /// Issue a token for (username, role) expiring `ttl_secs` from now.
    pub fn encode(&self, username: &str, role: &str) -> Result<String> {
        let now = self.clock.now();
        let claims = Claims {
            username: username.to_string(),
            role: role.to_string(),
            exp: now + self.ttl_secs,
            iat: now,
            jti: Uuid::new_v4(),
        };

        debug!(username, role, exp = claims.exp, "Issuing token");

        encode(&Header::default(), &claims, &self.encoding_key).context("Failed to sign token")
    }

    /// Decode and validate a token.
    ///
    /// Signature is checked first: tampered, wrong-key, and malformed input
    /// all fail with `InvalidSignature`. A token that verifies but whose
    /// expiry has passed fails with `Expired`.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against the injected clock below.
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidSignature)?;

        if self.clock.now() >= data.claims.exp {
            return Err(AuthError::Expired);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::clock::ManualClock;

    fn test_codec(ttl_secs: i64) -> (TokenCodec, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let codec = TokenCodec::new("test-secret-key-12345", ttl_secs, clock.clone());
        (codec, clock)
    }

    #[test]
    fn test_round_trip_before_expiry() {
        let (codec, _clock) = test_codec(3_600);

        let token = codec.encode("alice", "user").unwrap();
        let claims = codec.decode(&token).unwrap();

        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "user");
        assert_eq!(claims.exp, claims.iat + 3_600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let (codec, clock) = test_codec(3_600);

        let token = codec.encode("alice", "user").unwrap();
        clock.advance(3_600);

        assert!(matches!(codec.decode(&token), Err(AuthError::Expired)));
    }

    #[test]
    fn test_token_valid_until_last_second() {
        let (codec, clock) = test_codec(3_600);

        let token = codec.encode("alice", "user").unwrap();
        clock.advance(3_599);

        assert!(codec.decode(&token).is_ok());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let (codec, _clock) = test_codec(3_600);

        let token = codec.encode("alice", "user").unwrap();
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'Q' { 'A' } else { 'Q' });

        assert!(matches!(
            codec.decode(&tampered),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let clock = Arc::new(ManualClock::new(1_700_000_000));
        let codec1 = TokenCodec::new("secret1", 3_600, clock.clone());
        let codec2 = TokenCodec::new("secret2", 3_600, clock);

        let token = codec1.encode("alice", "user").unwrap();

        assert!(matches!(
            codec2.decode(&token),
            Err(AuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_malformed_input_rejected() {
        let (codec, _clock) = test_codec(3_600);

        for garbage in ["", "garbage", "a.b", "a.b.c", "ey.ey.ey"] {
            assert!(matches!(
                codec.decode(garbage),
                Err(AuthError::InvalidSignature)
            ));
        }
    }

    #[test]
    fn test_different_instants_produce_different_tokens() {
        let (codec, clock) = test_codec(3_600);

        let t1 = codec.encode("alice", "user").unwrap();
        clock.advance(1);
        let t2 = codec.encode("alice", "user").unwrap();

        assert_ne!(t1, t2);
    }

    #[test]
    fn test_same_instant_still_produces_different_tokens() {
        // Refresh within the same clock second must still yield a new token;
        // the jti nonce guarantees it.
        let (codec, _clock) = test_codec(3_600);

        let t1 = codec.encode("alice", "user").unwrap();
        let t2 = codec.encode("alice", "user").unwrap();

        assert_ne!(t1, t2);
    }
}
