//! Tenant guard.
//!
//! Every record operation runs the same checks, in this order:
//! 1. the caller has an organization (`Unauthorized` otherwise)
//! 2. the target record exists (`NotFound`)
//! 3. the record's organization equals the caller's, by exact string match (`Forbidden`)
//!
//! Check-then-act is not atomic against the store: a concurrent delete between the check
//! and the mutation surfaces as `NotFound` from the mutation itself.

use crate::error::AppError;
use crate::repos::models::Horse;
use crate::services::auth::AuthCtx;

/// A record that belongs to exactly one organization.
pub trait OrgScoped {
    fn org_id(&self) -> &str;
}

impl OrgScoped for Horse {
    fn org_id(&self) -> &str {
        &self.org_id
    }
}

/// Step 1: the caller's organization, or `Unauthorized`.
pub fn require_org(ctx: &AuthCtx) -> Result<&str, AppError> {
    ctx.org_id
        .as_deref()
        .filter(|org| !org.is_empty())
        .ok_or(AppError::Unauthorized)
}

/// Steps 2 and 3: existence, then ownership.
pub fn authorize<T: OrgScoped>(
    org_id: &str,
    record: Option<T>,
    resource: &'static str,
    id: &str,
) -> Result<T, AppError> {
    let record = record.ok_or_else(|| AppError::not_found(resource, id))?;

    if record.org_id() != org_id {
        tracing::info!(
            caller_org = %org_id,
            resource,
            id,
            "cross-tenant access denied"
        );
        return Err(AppError::forbidden(resource));
    }

    Ok(record)
}
