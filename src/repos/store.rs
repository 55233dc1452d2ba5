//! Persistence contract shared by the volatile and durable stores.
//!
//! "Not found" is never an error here: lookups return `Option`, deletes return `bool`.
//! Tenant scoping of single-record operations is the caller's job (see `services::tenant`);
//! only `list_horses_by_org` filters by organization itself.

use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::{
    error::RepoError,
    models::{
        HealthRecord, Horse, HorseDocument, HorsePatch, NewHealthRecord, NewHorse,
        NewHorseDocument,
    },
};

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait StableRepo: Send + Sync + 'static {
    async fn list_horses_by_org(&self, org_id: &str) -> RepoResult<Vec<Horse>>;

    /// Assigns a fresh id and timestamps.
    async fn create_horse(&self, input: NewHorse) -> RepoResult<Horse>;

    async fn get_horse(&self, id: Uuid) -> RepoResult<Option<Horse>>;

    /// Merges `patch` and always refreshes `updated_at`, even for an empty patch.
    async fn update_horse(&self, id: Uuid, patch: HorsePatch) -> RepoResult<Option<Horse>>;

    /// Returns whether a horse existed. Health records and documents go with it.
    async fn delete_horse(&self, id: Uuid) -> RepoResult<bool>;

    async fn list_health_records(&self, horse_id: Uuid) -> RepoResult<Vec<HealthRecord>>;

    async fn create_health_record(&self, input: NewHealthRecord) -> RepoResult<HealthRecord>;

    async fn list_documents(&self, horse_id: Uuid) -> RepoResult<Vec<HorseDocument>>;

    async fn create_document(&self, input: NewHorseDocument) -> RepoResult<HorseDocument>;
}
