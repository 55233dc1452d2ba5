/*
 * Responsibility
 * - health_records テーブル向け SQLx 操作 (horse 単位の list / create)
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::{
    error::RepoError,
    models::{HealthRecord, NewHealthRecord},
};

pub async fn list_for_horse(db: &PgPool, horse_id: Uuid) -> Result<Vec<HealthRecord>, RepoError> {
    let rows = sqlx::query_as::<_, HealthRecord>(
        r#"
        SELECT
            id, horse_id, org_id, record_type, record_date, description, notes, vet_name,
            next_due_date, medication_name, dosage, administration_time, prescribing_vet,
            vaccine_type, created_at, created_by
        FROM health_records
        WHERE horse_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(horse_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(db: &PgPool, input: &NewHealthRecord) -> Result<HealthRecord, RepoError> {
    let row = sqlx::query_as::<_, HealthRecord>(
        r#"
        INSERT INTO health_records (
            id, horse_id, org_id, record_type, record_date, description, notes, vet_name,
            next_due_date, medication_name, dosage, administration_time, prescribing_vet,
            vaccine_type, created_at, created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, now(), $15)
        RETURNING
            id, horse_id, org_id, record_type, record_date, description, notes, vet_name,
            next_due_date, medication_name, dosage, administration_time, prescribing_vet,
            vaccine_type, created_at, created_by
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(input.horse_id)
    .bind(&input.org_id)
    .bind(input.record_type.as_str())
    .bind(input.record_date)
    .bind(input.description.as_deref())
    .bind(input.notes.as_deref())
    .bind(input.vet_name.as_deref())
    .bind(input.next_due_date)
    .bind(input.medication_name.as_deref())
    .bind(input.dosage.as_deref())
    .bind(input.administration_time.as_deref())
    .bind(input.prescribing_vet.as_deref())
    .bind(input.vaccine_type.as_deref())
    .bind(&input.created_by)
    .fetch_one(db)
    .await?;

    Ok(row)
}
