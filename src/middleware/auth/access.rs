//! identity 解決 → AuthCtx を extensions に入れる
//!
//! - 解決ロジックは `AppState.identity` (IdentityResolver) に委譲する
//!   - mock: `x-user-id` / `x-org-id` / `x-role` ヘッダ (不足はデフォルト値)
//!   - jwt: `Authorization: Bearer <jwt>` を検証
//! - resolver が拒否した場合は 401 (UNAUTHENTICATED)
//! - org の有無はここでは見ない (tenant guard の責務)

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;

/// `/api/*` に identity 解決を掛けるための middleware を適用する。
///
/// 例：
/// ```ignore
/// let api = api::routes();
/// let api = middleware::auth::access::apply(api, state.clone());
/// app = app.nest("/api", api);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_ctx = state.identity.resolve(req.headers()).await?;

    tracing::debug!(
        resolver = state.identity.name(),
        user_id = %auth_ctx.user_id,
        org_id = ?auth_ctx.org_id,
        role = auth_ctx.role.as_str(),
        "identity resolved"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
