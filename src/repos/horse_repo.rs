/*
 * Responsibility
 * - horses テーブル向け SQLx 操作
 * - PgPool を受け取り CRUD を提供
 * - health_records / horse_documents は FK (ON DELETE CASCADE) 前提で削除挙動を意識
 */
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::{
    error::RepoError,
    models::{Horse, HorsePatch, NewHorse},
};

pub async fn list_by_org(db: &PgPool, org_id: &str) -> Result<Vec<Horse>, RepoError> {
    let rows = sqlx::query_as::<_, Horse>(
        r#"
        SELECT id, org_id, name, breed, age, color, created_at, updated_at
        FROM horses
        WHERE org_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(org_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(db: &PgPool, input: &NewHorse) -> Result<Horse, RepoError> {
    let row = sqlx::query_as::<_, Horse>(
        r#"
        INSERT INTO horses (id, org_id, name, breed, age, color, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, now(), now())
        RETURNING id, org_id, name, breed, age, color, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&input.org_id)
    .bind(&input.name)
    .bind(&input.breed)
    .bind(input.age)
    .bind(input.color.as_deref())
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Horse>, RepoError> {
    let row = sqlx::query_as::<_, Horse>(
        r#"
        SELECT id, org_id, name, breed, age, color, created_at, updated_at
        FROM horses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(db: &PgPool, id: Uuid, patch: &HorsePatch) -> Result<Option<Horse>, RepoError> {
    // color tri-state:
    // - None: do not update
    // - Some(None): set NULL
    // - Some(Some(v)): set v
    let row = sqlx::query_as::<_, Horse>(
        r#"
        UPDATE horses
        SET
            name = COALESCE($2, name),
            breed = COALESCE($3, breed),
            age = COALESCE($4, age),
            color = CASE
                WHEN $5 = false THEN color
                ELSE $6
            END,
            updated_at = now()
        WHERE id = $1
        RETURNING id, org_id, name, breed, age, color, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(patch.name.as_deref())
    .bind(patch.breed.as_deref())
    .bind(patch.age)
    .bind(patch.color.is_some()) // $5: flag to set color
    .bind(patch.color.clone().flatten()) // $6: new color value
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM horses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
