//! Factory: build the identity resolver from application `Config`.
use std::sync::Arc;

use crate::config::{AuthMode, Config};
use crate::services::auth::{
    header::HeaderIdentityResolver, jwt::JwtIdentityResolver, resolver::IdentityResolver,
};

pub fn build_identity_resolver(config: &Config) -> Arc<dyn IdentityResolver> {
    match &config.auth_mode {
        AuthMode::Mock => {
            if config.app_env.is_production() {
                tracing::warn!("AUTH_MODE=mock in production: identity headers are trusted as-is");
            }
            Arc::new(HeaderIdentityResolver::new())
        }
        AuthMode::Jwt {
            secret,
            issuer,
            audience,
            leeway_seconds,
        } => Arc::new(JwtIdentityResolver::new(
            secret,
            issuer.as_deref(),
            audience.as_deref(),
            *leeway_seconds,
        )),
    }
}
