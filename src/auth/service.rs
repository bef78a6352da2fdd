//! Auth Service
//! Mission: Orchestrate login, verification, resource resolution, and refresh

use crate::auth::catalog::ResourceCatalog;
use crate::auth::digest::digest;
use crate::auth::errors::AuthError;
use crate::auth::jwt::TokenCodec;
use crate::auth::models::{Claims, ResourceGrant, Session};
use crate::auth::user_store::UserStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Stateless orchestrator over the credential store, token codec, and
/// resource catalog. No operation mutates the store or the catalog, so
/// concurrent requests need no coordination.
pub struct AuthService {
    store: Arc<UserStore>,
    codec: Arc<TokenCodec>,
    catalog: Arc<ResourceCatalog>,
}

impl AuthService {
    pub fn new(store: Arc<UserStore>, codec: Arc<TokenCodec>, catalog: Arc<ResourceCatalog>) -> Self {
        Self {
            store,
            codec,
            catalog,
        }
    }

    /// Exchange credentials for a fresh session token.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let role = self
            .store
            .lookup(username, &digest(password))?
            .ok_or_else(|| {
                warn!(username, "❌ Failed login attempt");
                AuthError::InvalidCredentials
            })?;

        let token = self.codec.encode(username, &role)?;

        info!(username, role, "✅ Login successful");

        Ok(Session {
            token,
            username: username.to_string(),
            role,
        })
    }

    /// Validate a token and return its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.codec.decode(token)
    }

    /// Resolve the resource list for the token's role.
    ///
    /// Verification failures propagate; an unrecognized role is not a
    /// failure and yields an empty list.
    pub fn resources(&self, token: &str) -> Result<ResourceGrant, AuthError> {
        let claims = self.codec.decode(token)?;
        let resources = self.catalog.resources(&claims.role).to_vec();

        Ok(ResourceGrant {
            username: claims.username,
            role: claims.role,
            resources,
        })
    }

    /// Issue a brand-new token with the same username/role and a fresh ttl.
    ///
    /// An expired or tampered token is rejected exactly like in
    /// `verify_token` — there is no refresh bypass.
    pub fn refresh(&self, token: &str) -> Result<String, AuthError> {
        let claims = self.codec.decode(token)?;
        Ok(self.codec.encode(&claims.username, &claims.role)?)
    }
}
