use async_trait::async_trait;
use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::services::auth::{
    context::{AuthCtx, Role},
    resolver::{AuthError, IdentityResolver},
};

/// Access token (JWT) claims.
///
/// NOTE:
/// - `org_id` is optional: a token without it still authenticates, but every
///   tenant-scoped operation answers 401.
/// - `orgId` is accepted as an alias for IdPs that emit camelCase custom claims.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub sub: String,
    pub exp: u64,

    #[serde(default, alias = "orgId")]
    pub org_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// HS256 access-token verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtIdentityResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtIdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtIdentityResolver")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtIdentityResolver {
    pub fn new(
        secret: &str,
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = leeway_seconds;
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify signature + `exp` (+ `iss`/`aud` when configured) and decode the claims.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)
                .map_err(|e| AuthError::InvalidCredential(e.to_string()))?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidCredential("empty 'sub' claim".into()));
        }

        Ok(data.claims)
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    auth.strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MalformedHeader)
}

#[async_trait]
impl IdentityResolver for JwtIdentityResolver {
    fn name(&self) -> &'static str {
        "jwt"
    }

    async fn resolve(&self, headers: &HeaderMap) -> Result<AuthCtx, AuthError> {
        let token = bearer_token(headers)?;
        let claims = self.verify(token)?;

        let role = match claims.role.as_deref() {
            None => Role::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "unrecognised role claim; using least-privileged role");
                Role::default()
            }),
        };

        let org_id = claims
            .org_id
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty());

        Ok(AuthCtx::new(claims.sub, org_id, role))
    }
}
