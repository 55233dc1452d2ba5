use async_trait::async_trait;
use axum::http::HeaderMap;
use thiserror::Error;

use crate::services::auth::context::AuthCtx;

/// Why an identity could not be resolved. Every variant surfaces as 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing bearer credential")]
    MissingCredential,
    #[error("malformed credential header")]
    MalformedHeader,
    #[error("credential rejected: {0}")]
    InvalidCredential(String),
}

/// Turns inbound request metadata into an `AuthCtx`.
///
/// Implementations must be cheap to share (`Arc<dyn IdentityResolver>` lives in `AppState`).
#[async_trait]
pub trait IdentityResolver: Send + Sync + 'static {
    // Resolver name (for logging / service descriptor).
    fn name(&self) -> &'static str;

    async fn resolve(&self, headers: &HeaderMap) -> Result<AuthCtx, AuthError>;
}
