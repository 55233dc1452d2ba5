/*
 * Responsibility
 * - Handler から見える「解決済み identity」の型 (AuthCtx)
 * - middleware が resolver で解決して request extensions に格納し、handler はこの型だけを受け取る
 */
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Caller role. Carried for display and future policy; the only access rule today is
/// the organization equality check in `services::tenant`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Identity attached to one request.
///
/// - `user_id` は外部 IdP の subject をそのまま文字列で保持
/// - `org_id` が None の場合、tenant guard が 401 を返す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: String,
    pub org_id: Option<String>,
    pub role: Role,
}

impl AuthCtx {
    pub fn new(user_id: impl Into<String>, org_id: Option<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            org_id,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" user ".parse::<Role>().unwrap(), Role::User);
        let err = "groom".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "unknown role: groom");
    }

    #[test]
    fn least_privileged_role_is_the_default() {
        assert_eq!(Role::default(), Role::User);
    }
}
