/*
 * Responsibility
 * - GET /api/auth/me: 解決済みの AuthCtx をそのまま返す (デバッグ / クライアントの表示用)
 */
use axum::Json;

use crate::api::{
    dto::{Envelope, auth::WhoAmIResponse},
    extractors::AuthCtxExtractor,
};

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<Envelope<WhoAmIResponse>> {
    Json(Envelope::data(ctx.into()))
}
