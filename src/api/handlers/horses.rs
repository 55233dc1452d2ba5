/*
 * Responsibility
 * - /api/horses 系 CRUD handler
 * - 順序: org の有無 (401) → body 検証 (400) → 存在 (404) → 所有 org 一致 (403) → repo 呼び出し
 * - repo の失敗は AppError::Internal に落とす (詳細はログのみ)
 */
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    api::{
        dto::{
            Envelope,
            horses::{CreateHorseRequest, HorseResponse, UpdateHorseRequest},
        },
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    repos::models::Horse,
    services::tenant,
    state::AppState,
};

/// Load a horse the caller's organization owns.
///
/// Ids are opaque to clients: a string that is not a UUID can not name any horse, so it is
/// reported as not found rather than as a malformed request.
pub(crate) async fn owned_horse(
    state: &AppState,
    org_id: &str,
    horse_id: &str,
) -> Result<Horse, AppError> {
    let horse = match Uuid::parse_str(horse_id) {
        Ok(id) => state.repo.get_horse(id).await?,
        Err(_) => None,
    };

    tenant::authorize(org_id, horse, "horse", horse_id)
}

pub async fn list_horses(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Envelope<Vec<HorseResponse>>>, AppError> {
    let org_id = tenant::require_org(&ctx)?;

    let rows = state.repo.list_horses_by_org(org_id).await?;
    let res = rows.into_iter().map(HorseResponse::from).collect();

    Ok(Json(Envelope::list(res)))
}

pub async fn create_horse(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    payload: Result<Json<CreateHorseRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<HorseResponse>>), AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let Json(req) = payload?;
    let input = req.into_new_horse(org_id)?;

    let row = state.repo.create_horse(input).await?;
    tracing::info!(horse_id = %row.id, org_id = %row.org_id, "horse created");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::data(HorseResponse::from(row)).with_message("Horse created successfully")),
    ))
}

pub async fn get_horse(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
) -> Result<Json<Envelope<HorseResponse>>, AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let horse = owned_horse(&state, org_id, &horse_id).await?;

    Ok(Json(Envelope::data(horse.into())))
}

pub async fn update_horse(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
    payload: Result<Json<UpdateHorseRequest>, JsonRejection>,
) -> Result<Json<Envelope<HorseResponse>>, AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let Json(req) = payload?;
    let patch = req.into_patch()?;

    let horse = owned_horse(&state, org_id, &horse_id).await?;

    // Gone between the ownership check and the write.
    let row = state
        .repo
        .update_horse(horse.id, patch)
        .await?
        .ok_or_else(|| AppError::not_found("horse", &horse_id))?;

    Ok(Json(
        Envelope::data(HorseResponse::from(row)).with_message("Horse updated successfully"),
    ))
}

pub async fn delete_horse(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
) -> Result<Json<Envelope<()>>, AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let horse = owned_horse(&state, org_id, &horse_id).await?;

    let deleted = state.repo.delete_horse(horse.id).await?;
    if !deleted {
        return Err(AppError::not_found("horse", horse_id));
    }

    tracing::info!(horse_id = %horse.id, org_id = %org_id, "horse deleted");

    Ok(Json(Envelope::message("Horse deleted successfully")))
}
