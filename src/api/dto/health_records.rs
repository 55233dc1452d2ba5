/*
 * Responsibility
 * - Health records の request/response DTO
 * - recordType / recordDate は必須、それ以外は任意
 */
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::dto::non_blank;
use crate::error::AppError;
use crate::repos::models::{HealthRecord, Horse, NewHealthRecord, RecordType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHealthRecordRequest {
    pub record_type: Option<RecordType>,
    pub record_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub vet_name: Option<String>,
    pub next_due_date: Option<NaiveDate>,
    pub medication_name: Option<String>,
    pub dosage: Option<String>,
    pub administration_time: Option<String>,
    pub prescribing_vet: Option<String>,
    pub vaccine_type: Option<String>,
}

impl CreateHealthRecordRequest {
    /// The record inherits its organization from the parent horse.
    pub fn into_new_record(self, horse: &Horse, created_by: &str) -> Result<NewHealthRecord, AppError> {
        let (Some(record_type), Some(record_date)) = (self.record_type, self.record_date) else {
            return Err(AppError::bad_request(
                "MISSING_FIELDS",
                "Missing required fields: recordType, recordDate",
            ));
        };

        if let Some(next_due) = self.next_due_date
            && next_due < record_date
        {
            return Err(AppError::bad_request(
                "INVALID_FIELD",
                "nextDueDate must not be before recordDate",
            ));
        }

        Ok(NewHealthRecord {
            horse_id: horse.id,
            org_id: horse.org_id.clone(),
            record_type,
            record_date,
            description: non_blank(self.description),
            notes: non_blank(self.notes),
            vet_name: non_blank(self.vet_name),
            next_due_date: self.next_due_date,
            medication_name: non_blank(self.medication_name),
            dosage: non_blank(self.dosage),
            administration_time: non_blank(self.administration_time),
            prescribing_vet: non_blank(self.prescribing_vet),
            vaccine_type: non_blank(self.vaccine_type),
            created_by: created_by.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordResponse {
    pub id: Uuid,
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
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<HealthRecord> for HealthRecordResponse {
    fn from(r: HealthRecord) -> Self {
        Self {
            id: r.id,
            horse_id: r.horse_id,
            org_id: r.org_id,
            record_type: r.record_type,
            record_date: r.record_date,
            description: r.description,
            notes: r.notes,
            vet_name: r.vet_name,
            next_due_date: r.next_due_date,
            medication_name: r.medication_name,
            dosage: r.dosage,
            administration_time: r.administration_time,
            prescribing_vet: r.prescribing_vet,
            vaccine_type: r.vaccine_type,
            created_at: r.created_at,
            created_by: r.created_by,
        }
    }
}
