/*
 * Responsibility
 * - store 実装 (memory / postgres) が共通で返す record 型
 * - 書き込み用の入力型 (New* / HorsePatch)
 * - HTTP 表現 (camelCase JSON) は api::dto 側の責務
 */
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Horse {
    pub id: Uuid,
    pub org_id: String,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewHorse {
    pub org_id: String,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub color: Option<String>,
}

/// Partial update. There is no `org_id`: a horse keeps its organization for life.
///
/// `color` is tri-state:
/// - None: leave as is
/// - Some(None): clear
/// - Some(Some(v)): set v
#[derive(Debug, Clone, Default)]
pub struct HorsePatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub color: Option<Option<String>>,
}

impl HorsePatch {
    pub fn apply(self, horse: &mut Horse) {
        if let Some(name) = self.name {
            horse.name = name;
        }
        if let Some(breed) = self.breed {
            horse.breed = breed;
        }
        if let Some(age) = self.age {
            horse.age = age;
        }
        if let Some(color) = self.color {
            horse.color = color;
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordType {
    Vaccination,
    Deworming,
    VetVisit,
    Medication,
    Injury,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vaccination => "vaccination",
            Self::Deworming => "deworming",
            Self::VetVisit => "vet-visit",
            Self::Medication => "medication",
            Self::Injury => "injury",
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "vaccination" => Ok(Self::Vaccination),
            "deworming" => Ok(Self::Deworming),
            "vet-visit" => Ok(Self::VetVisit),
            "medication" => Ok(Self::Medication),
            "injury" => Ok(Self::Injury),
            _ => Err(UnknownVariant {
                kind: "record type",
                value,
            }),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct HealthRecord {
    pub id: Uuid,
    pub horse_id: Uuid,
    pub org_id: String,
    #[sqlx(try_from = "String")]
    pub record_type: RecordType,
    pub record_date: NaiveDate,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub vet_name: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub administration_time: Option<String>,
    pub prescribing_vet: Option<String>,
    pub vaccine_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone)]
pub struct NewHealthRecord {
    pub horse_id: Uuid,
    pub org_id: String,
    pub record_type: RecordType,
    pub record_date: NaiveDate,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub vet_name: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub administration_time: Option<String>,
    pub prescribing_vet: Option<String>,
    pub vaccine_type: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    Registration,
    Insurance,
    Coggins,
    HealthCert,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Insurance => "insurance",
            Self::Coggins => "coggins",
            Self::HealthCert => "health-cert",
            Self::Other => "other",
        }
    }
}

impl TryFrom<String> for DocumentType {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "registration" => Ok(Self::Registration),
            "insurance" => Ok(Self::Insurance),
            "coggins" => Ok(Self::Coggins),
            "health-cert" => Ok(Self::HealthCert),
            "other" => Ok(Self::Other),
            _ => Err(UnknownVariant {
                kind: "document type",
                value,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct HorseDocument {
    pub id: Uuid,
    pub horse_id: Uuid,
    pub org_id: String,
    #[sqlx(try_from = "String")]
    pub document_type: DocumentType,
    pub document_name: String,
    pub file_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub expires_at: Option<NaiveDate>,
    pub created_by: String,
}

#[derive(Debug, Clone)]
pub struct NewHorseDocument {
    pub horse_id: Uuid,
    pub org_id: String,
    pub document_type: DocumentType,
    pub document_name: String,
    pub file_url: Option<String>,
    pub expires_at: Option<NaiveDate>,
    pub created_by: String,
}
