//! Volatile in-process store.
//!
//! Each instance owns its own tables, so tests get isolated stores by constructing a new one.
//! Every call takes the lock once; there is no multi-call atomicity (last write wins).

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::repos::{
    models::{
        HealthRecord, Horse, HorseDocument, HorsePatch, NewHealthRecord, NewHorse,
        NewHorseDocument,
    },
    store::{RepoResult, StableRepo},
};

#[derive(Clone, Default)]
pub struct MemoryRepo {
    tables: Arc<RwLock<Tables>>,
}

/// Rows are tagged with an insertion sequence so listings keep creation order.
#[derive(Default)]
struct Tables {
    seq: u64,
    horses: HashMap<Uuid, (u64, Horse)>,
    health_records: HashMap<Uuid, (u64, HealthRecord)>,
    documents: HashMap<Uuid, (u64, HorseDocument)>,
}

impl Tables {
    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

fn in_insertion_order<'a, T, I>(rows: I) -> Vec<T>
where
    T: Clone + 'a,
    I: Iterator<Item = &'a (u64, T)>,
{
    let mut rows: Vec<&(u64, T)> = rows.collect();
    rows.sort_by_key(|(seq, _)| *seq);
    rows.into_iter().map(|(_, row)| row.clone()).collect()
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StableRepo for MemoryRepo {
    async fn list_horses_by_org(&self, org_id: &str) -> RepoResult<Vec<Horse>> {
        let tables = self.tables.read().await;
        Ok(in_insertion_order(
            tables.horses.values().filter(|(_, h)| h.org_id == org_id),
        ))
    }

    async fn create_horse(&self, input: NewHorse) -> RepoResult<Horse> {
        let now = Utc::now();
        let horse = Horse {
            id: Uuid::new_v4(),
            org_id: input.org_id,
            name: input.name,
            breed: input.breed,
            age: input.age,
            color: input.color,
            created_at: now,
            updated_at: now,
        };

        let mut tables = self.tables.write().await;
        let seq = tables.next_seq();
        tables.horses.insert(horse.id, (seq, horse.clone()));

        Ok(horse)
    }

    async fn get_horse(&self, id: Uuid) -> RepoResult<Option<Horse>> {
        let tables = self.tables.read().await;
        Ok(tables.horses.get(&id).map(|(_, h)| h.clone()))
    }

    async fn update_horse(&self, id: Uuid, patch: HorsePatch) -> RepoResult<Option<Horse>> {
        let mut tables = self.tables.write().await;
        let Some((_, horse)) = tables.horses.get_mut(&id) else {
            return Ok(None);
        };

        patch.apply(horse);
        horse.updated_at = Utc::now();

        Ok(Some(horse.clone()))
    }

    async fn delete_horse(&self, id: Uuid) -> RepoResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.horses.remove(&id).is_none() {
            return Ok(false);
        }

        tables.health_records.retain(|_, (_, r)| r.horse_id != id);
        tables.documents.retain(|_, (_, d)| d.horse_id != id);

        Ok(true)
    }

    async fn list_health_records(&self, horse_id: Uuid) -> RepoResult<Vec<HealthRecord>> {
        let tables = self.tables.read().await;
        Ok(in_insertion_order(
            tables
                .health_records
                .values()
                .filter(|(_, r)| r.horse_id == horse_id),
        ))
    }

    async fn create_health_record(&self, input: NewHealthRecord) -> RepoResult<HealthRecord> {
        let record = HealthRecord {
            id: Uuid::new_v4(),
            horse_id: input.horse_id,
            org_id: input.org_id,
            record_type: input.record_type,
            record_date: input.record_date,
            description: input.description,
            notes: input.notes,
            vet_name: input.vet_name,
            next_due_date: input.next_due_date,
            medication_name: input.medication_name,
            dosage: input.dosage,
            administration_time: input.administration_time,
            prescribing_vet: input.prescribing_vet,
            vaccine_type: input.vaccine_type,
            created_at: Utc::now(),
            created_by: input.created_by,
        };

        let mut tables = self.tables.write().await;
        let seq = tables.next_seq();
        tables.health_records.insert(record.id, (seq, record.clone()));

        Ok(record)
    }

    async fn list_documents(&self, horse_id: Uuid) -> RepoResult<Vec<HorseDocument>> {
        let tables = self.tables.read().await;
        Ok(in_insertion_order(
            tables
                .documents
                .values()
                .filter(|(_, d)| d.horse_id == horse_id),
        ))
    }

    async fn create_document(&self, input: NewHorseDocument) -> RepoResult<HorseDocument> {
        let document = HorseDocument {
            id: Uuid::new_v4(),
            horse_id: input.horse_id,
            org_id: input.org_id,
            document_type: input.document_type,
            document_name: input.document_name,
            file_url: input.file_url,
            uploaded_at: Utc::now(),
            expires_at: input.expires_at,
            created_by: input.created_by,
        };

        let mut tables = self.tables.write().await;
        let seq = tables.next_seq();
        tables.documents.insert(document.id, (seq, document.clone()));

        Ok(document)
    }
}
