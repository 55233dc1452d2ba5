/*
 * Responsibility
 * - Horse documents の request/response DTO
 * - ファイルのアップロード自体は扱わない (fileUrl の参照のみ)
 */
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::dto::non_blank;
use crate::error::AppError;
use crate::repos::models::{DocumentType, Horse, HorseDocument, NewHorseDocument};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentRequest {
    pub document_type: Option<DocumentType>,
    pub document_name: Option<String>,
    pub file_url: Option<String>,
    pub expires_at: Option<NaiveDate>,
}

impl CreateDocumentRequest {
    pub fn into_new_document(self, horse: &Horse, created_by: &str) -> Result<NewHorseDocument, AppError> {
        let (Some(document_type), Some(document_name)) =
            (self.document_type, non_blank(self.document_name))
        else {
            return Err(AppError::bad_request(
                "MISSING_FIELDS",
                "Missing required fields: documentType, documentName",
            ));
        };

        let file_url = non_blank(self.file_url);
        if let Some(url) = &file_url
            && url.len() > 2048
        {
            return Err(AppError::bad_request(
                "INVALID_FIELD",
                "fileUrl must be <= 2048 chars",
            ));
        }

        Ok(NewHorseDocument {
            horse_id: horse.id,
            org_id: horse.org_id.clone(),
            document_type,
            document_name,
            file_url,
            expires_at: self.expires_at,
            created_by: created_by.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: Uuid,
    pub horse_id: Uuid,
    pub org_id: String,
    pub document_type: DocumentType,
    pub document_name: String,
    pub file_url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
    pub expires_at: Option<NaiveDate>,
    pub created_by: String,
}

impl From<HorseDocument> for DocumentResponse {
    fn from(d: HorseDocument) -> Self {
        Self {
            id: d.id,
            horse_id: d.horse_id,
            org_id: d.org_id,
            document_type: d.document_type,
            document_name: d.document_name,
            file_url: d.file_url,
            uploaded_at: d.uploaded_at,
            expires_at: d.expires_at,
            created_by: d.created_by,
        }
    }
}
