/*
 * Responsibility
 * - Horses の request/response DTO
 * - 必須項目 (name, breed, age) の存在と型チェック
 * - orgId / id は body から受け取らない (AuthCtx とサーバ側で決まる)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::dto::{deserialize_some, non_blank};
use crate::error::AppError;
use crate::repos::models::{Horse, HorsePatch, NewHorse};

/// All fields are optional at the serde level so a missing field becomes a 400 with a
/// readable message instead of a generic deserialization error. A present field of the
/// wrong JSON type (e.g. `"age": "5"`) is still rejected during extraction.
#[derive(Debug, Deserialize)]
pub struct CreateHorseRequest {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub color: Option<String>,
}

impl CreateHorseRequest {
    pub fn into_new_horse(self, org_id: &str) -> Result<NewHorse, AppError> {
        let (Some(name), Some(breed), Some(age)) =
            (non_blank(self.name), non_blank(self.breed), self.age)
        else {
            return Err(AppError::bad_request(
                "MISSING_FIELDS",
                "Missing required fields: name, breed, age",
            ));
        };

        validate_age(age)?;

        Ok(NewHorse {
            org_id: org_id.to_string(),
            name,
            breed,
            age,
            color: non_blank(self.color),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateHorseRequest {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (clear)
    // - Some(Some(v)): set value
    #[serde(default, deserialize_with = "deserialize_some")]
    pub color: Option<Option<String>>,
}

impl UpdateHorseRequest {
    pub fn into_patch(self) -> Result<HorsePatch, AppError> {
        let name = match self.name {
            Some(name) => Some(
                non_blank(Some(name))
                    .ok_or_else(|| AppError::bad_request("INVALID_FIELD", "name cannot be empty"))?,
            ),
            None => None,
        };

        let breed = match self.breed {
            Some(breed) => Some(
                non_blank(Some(breed))
                    .ok_or_else(|| AppError::bad_request("INVALID_FIELD", "breed cannot be empty"))?,
            ),
            None => None,
        };

        if let Some(age) = self.age {
            validate_age(age)?;
        }

        Ok(HorsePatch {
            name,
            breed,
            age: self.age,
            // A blank color clears it, same as null.
            color: self.color.map(non_blank),
        })
    }
}

fn validate_age(age: i32) -> Result<(), AppError> {
    if age < 0 {
        return Err(AppError::bad_request(
            "INVALID_FIELD",
            "age must be a non-negative number",
        ));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorseResponse {
    pub id: Uuid,
    pub org_id: String,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Horse> for HorseResponse {
    fn from(h: Horse) -> Self {
        Self {
            id: h.id,
            org_id: h.org_id,
            name: h.name,
            breed: h.breed,
            age: h.age,
            color: h.color,
            created_at: h.created_at,
            updated_at: h.updated_at,
        }
    }
}
