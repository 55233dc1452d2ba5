/*
 * Responsibility
 * - horse_documents テーブル向け SQLx 操作 (horse 単位の list / create)
 * - ファイル本体は扱わない (file_url を保持するだけ)
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::{
    error::RepoError,
    models::{HorseDocument, NewHorseDocument},
};

pub async fn list_for_horse(db: &PgPool, horse_id: Uuid) -> Result<Vec<HorseDocument>, RepoError> {
    let rows = sqlx::query_as::<_, HorseDocument>(
        r#"
        SELECT
            id, horse_id, org_id, document_type, document_name, file_url, uploaded_at,
            expires_at, created_by
        FROM horse_documents
        WHERE horse_id = $1
        ORDER BY uploaded_at ASC, id ASC
        "#,
    )
    .bind(horse_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(db: &PgPool, input: &NewHorseDocument) -> Result<HorseDocument, RepoError> {
    let row = sqlx::query_as::<_, HorseDocument>(
        r#"
        INSERT INTO horse_documents (
            id, horse_id, org_id, document_type, document_name, file_url, uploaded_at,
            expires_at, created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, now(), $7, $8)
        RETURNING
            id, horse_id, org_id, document_type, document_name, file_url, uploaded_at,
            expires_at, created_by
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(input.horse_id)
    .bind(&input.org_id)
    .bind(input.document_type.as_str())
    .bind(&input.document_name)
    .bind(input.file_url.as_deref())
    .bind(input.expires_at)
    .bind(&input.created_by)
    .fetch_one(db)
    .await?;

    Ok(row)
}
