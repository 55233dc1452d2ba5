/*
 * Responsibility
 * - /api/horses/{id}/health (list / create)
 * - 親 horse に対して tenant guard を通してから子レコードを扱う
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
            health_records::{CreateHealthRecordRequest, HealthRecordResponse},
        },
        extractors::AuthCtxExtractor,
        handlers::horses::owned_horse,
    },
    error::AppError,
    services::tenant,
    state::AppState,
};

pub async fn list_health_records(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
) -> Result<Json<Envelope<Vec<HealthRecordResponse>>>, AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let horse = owned_horse(&state, org_id, &horse_id).await?;

    let rows = state.repo.list_health_records(horse.id).await?;
    let res = rows.into_iter().map(HealthRecordResponse::from).collect();

    Ok(Json(Envelope::list(res)))
}

pub async fn create_health_record(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Path(horse_id): Path<String>,
    payload: Result<Json<CreateHealthRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<HealthRecordResponse>>), AppError> {
    let org_id = tenant::require_org(&ctx)?;
    let Json(req) = payload?;

    let horse = owned_horse(&state, org_id, &horse_id).await?;
    let input = req.into_new_record(&horse, &ctx.user_id)?;

    let row = state.repo.create_health_record(input).await?;
    tracing::info!(
        horse_id = %horse.id,
        record_id = %row.id,
        record_type = %row.record_type,
        "health record added"
    );

    Ok((
        StatusCode::CREATED,
        Json(
            Envelope::data(HealthRecordResponse::from(row))
                .with_message("Health record added successfully"),
        ),
    ))
}
