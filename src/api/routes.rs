/*
 * Responsibility
 * - /api 配下の URL 構造を定義
 * - /horses (CRUD) と子リソース (/health, /documents)、/auth/me
 * - identity 解決 middleware はこの Router 全体に掛ける (/health と / は対象外)
 */
use axum::{Router, routing::get};

use crate::{middleware, state::AppState};

use crate::api::handlers::{
    auth::me,
    documents::{create_document, list_documents},
    health_records::{create_health_record, list_health_records},
    horses::{create_horse, delete_horse, get_horse, list_horses, update_horse},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let horses = Router::new()
        .route("/", get(list_horses).post(create_horse))
        .route(
            "/{horse_id}",
            get(get_horse)
                .put(update_horse)
                .patch(update_horse)
                .delete(delete_horse),
        )
        .route(
            "/{horse_id}/health",
            get(list_health_records).post(create_health_record),
        )
        .route(
            "/{horse_id}/documents",
            get(list_documents).post(create_document),
        );

    let api = Router::new()
        .nest("/horses", horses)
        .route("/auth/me", get(me));

    middleware::auth::access::apply(api, state)
}
