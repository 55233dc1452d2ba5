use serde::Serialize;

use crate::services::auth::{AuthCtx, Role};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub user_id: String,
    pub org_id: Option<String>,
    pub role: Role,
}

impl From<AuthCtx> for WhoAmIResponse {
    fn from(ctx: AuthCtx) -> Self {
        Self {
            user_id: ctx.user_id,
            org_id: ctx.org_id,
            role: ctx.role,
        }
    }
}
