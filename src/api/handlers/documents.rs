/*
 * Responsibility
 * - /api/horses/{id}/documents (list / create)
 */
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    api::{
        dto::{
            Envelope,
            documents::{CreateDocumentRequest, DocumentResponse},
        },
        extractors::AuthCtxExtractor,
        handlers::horses::owned_horse,
    },
    error::AppError,
    services::tenant,
    state::AppState,
};

pub async fn list_documents(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
) -> Result<Json<Envelope<Vec<DocumentResponse>>>, AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let horse = owned_horse(&state, org_id, &horse_id).await?;

    let rows = state.repo.list_documents(horse.id).await?;
    let res = rows.into_iter().map(DocumentResponse::from).collect();

    Ok(Json(Envelope::list(res)))
}

pub async fn create_document(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<DocumentResponse>>), AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let Json(req) = payload?;

    let horse = owned_horse(&state, org_id, &horse_id).await?;
    let input = req.into_new_document(&horse, &ctx.user_id)?;

    let row = state.repo.create_document(input).await?;
    tracing::info!(horse_id = %horse.id, document_id = %row.id, "document added");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(DocumentResponse::from(row)).with_message("Document added successfully")),
    ))
}
