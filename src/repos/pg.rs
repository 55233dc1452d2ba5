//! Durable store: Postgres tables reached through the `*_repo` query modules.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::{
    document_repo, health_record_repo, horse_repo,
    models::{
        HealthRecord, Horse, HorseDocument, HorsePatch, NewHealthRecord, NewHorse,
        NewHorseDocument,
    },
    store::{RepoResult, StableRepo},
};

#[derive(Clone, Debug)]
pub struct PgRepo {
    db: PgPool,
}

impl PgRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StableRepo for PgRepo {
    async fn list_horses_by_org(&self, org_id: &str) -> RepoResult<Vec<Horse>> {
        horse_repo::list_by_org(&self.db, org_id).await
    }

    async fn create_horse(&self, input: NewHorse) -> RepoResult<Horse> {
        horse_repo::create(&self.db, &input).await
    }

    async fn get_horse(&self, id: Uuid) -> RepoResult<Option<Horse>> {
        horse_repo::get(&self.db, id).await
    }

    async fn update_horse(&self, id: Uuid, patch: HorsePatch) -> RepoResult<Option<Horse>> {
        horse_repo::update(&self.db, id, &patch).await
    }

    async fn delete_horse(&self, id: Uuid) -> RepoResult<bool> {
        horse_repo::delete(&self.db, id).await
    }

    async fn list_health_records(&self, horse_id: Uuid) -> RepoResult<Vec<HealthRecord>> {
        health_record_repo::list_for_horse(&self.db, horse_id).await
    }

    async fn create_health_record(&self, input: NewHealthRecord) -> RepoResult<HealthRecord> {
        health_record_repo::create(&self.db, &input).await
    }

    async fn list_documents(&self, horse_id: Uuid) -> RepoResult<Vec<HorseDocument>> {
        document_repo::list_for_horse(&self.db, horse_id).await
    }

    async fn create_document(&self, input: NewHorseDocument) -> RepoResult<HorseDocument> {
        document_repo::create(&self.db, &input).await
    }
}
