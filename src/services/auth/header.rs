//! Development identity resolver.
//!
//! Reads `x-user-id` / `x-org-id` / `x-role`. Missing or blank values fall back to fixed mock
//! values, and the role falls back to the least-privileged one. A value that is present but not
//! valid UTF-8 is rejected: it must never be mistaken for a missing header.
//! There is no signature or expiry check here; use `JwtIdentityResolver` for that.

use async_trait::async_trait;
use axum::http::{HeaderMap, HeaderName};

use crate::services::auth::{
    context::{AuthCtx, Role},
    resolver::{AuthError, IdentityResolver},
};

pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");
pub const ORG_ID_HEADER: HeaderName = HeaderName::from_static("x-org-id");
pub const ROLE_HEADER: HeaderName = HeaderName::from_static("x-role");

pub const MOCK_USER_ID: &str = "mock-user-123";
pub const MOCK_ORG_ID: &str = "mock-org-456";

#[derive(Debug, Clone, Default)]
pub struct HeaderIdentityResolver;

impl HeaderIdentityResolver {
    pub fn new() -> Self {
        Self
    }
}

/// `Ok(None)` when the header is absent or blank, `Err` when it is present but undecodable.
///
/// Decodes as UTF-8 rather than `HeaderValue::to_str` so ids like `écurie-nord` are kept.
fn header_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Result<Option<&'a str>, AuthError> {
    let Some(raw) = headers.get(name) else {
        return Ok(None);
    };

    let value = std::str::from_utf8(raw.as_bytes()).map_err(|_| AuthError::MalformedHeader)?;
    let value = value.trim();

    Ok((!value.is_empty()).then_some(value))
}

#[async_trait]
impl IdentityResolver for HeaderIdentityResolver {
    fn name(&self) -> &'static str {
        "mock-headers"
    }

    async fn resolve(&self, headers: &HeaderMap) -> Result<AuthCtx, AuthError> {
        let user_id = header_value(headers, &USER_ID_HEADER)?.unwrap_or(MOCK_USER_ID);
        let org_id = header_value(headers, &ORG_ID_HEADER)?.unwrap_or(MOCK_ORG_ID);

        let role = match header_value(headers, &ROLE_HEADER)? {
            None => Role::default(),
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "unrecognised x-role; using least-privileged role");
                Role::default()
            }),
        };

        Ok(AuthCtx::new(user_id, Some(org_id.to_string()), role))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[tokio::test]
    async fn reads_all_three_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("user-1"));
        headers.insert(ORG_ID_HEADER, HeaderValue::from_static("org-456"));
        headers.insert(ROLE_HEADER, HeaderValue::from_static("admin"));

        let ctx = HeaderIdentityResolver::new().resolve(&headers).await.unwrap();
        assert_eq!(ctx, AuthCtx::new("user-1", Some("org-456".into()), Role::Admin));
    }

    #[tokio::test]
    async fn missing_headers_get_mock_defaults() {
        let ctx = HeaderIdentityResolver::new()
            .resolve(&HeaderMap::new())
            .await
            .unwrap();

        assert_eq!(ctx.user_id, MOCK_USER_ID);
        assert_eq!(ctx.org_id.as_deref(), Some(MOCK_ORG_ID));
        assert_eq!(ctx.role, Role::User);
    }

    #[tokio::test]
    async fn blank_headers_count_as_missing() {
        let mut headers = HeaderMap::new();
        headers.insert(ORG_ID_HEADER, HeaderValue::from_static("   "));

        let ctx = HeaderIdentityResolver::new().resolve(&headers).await.unwrap();
        assert_eq!(ctx.org_id.as_deref(), Some(MOCK_ORG_ID));
    }

    #[tokio::test]
    async fn utf8_org_id_is_kept_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(
            ORG_ID_HEADER,
            HeaderValue::from_bytes("écurie-nord".as_bytes()).unwrap(),
        );

        let ctx = HeaderIdentityResolver::new().resolve(&headers).await.unwrap();
        assert_eq!(ctx.org_id.as_deref(), Some("écurie-nord"));
    }

    #[tokio::test]
    async fn undecodable_identity_header_is_rejected() {
        for name in [ORG_ID_HEADER, USER_ID_HEADER] {
            let mut headers = HeaderMap::new();
            headers.insert(name, HeaderValue::from_bytes(&[0x6f, 0xff, 0x67]).unwrap());

            let err = HeaderIdentityResolver::new().resolve(&headers).await.unwrap_err();
            assert!(matches!(err, AuthError::MalformedHeader));
        }
    }

    #[tokio::test]
    async fn unknown_role_degrades_to_user() {
        let mut headers = HeaderMap::new();
        headers.insert(ROLE_HEADER, HeaderValue::from_static("superuser"));

        let ctx = HeaderIdentityResolver::new().resolve(&headers).await.unwrap();
        assert_eq!(ctx.role, Role::User);
    }
}
