/*
 * Responsibility
 * - request / response DTO (camelCase JSON)
 * - validation (形式チェック) は各 request の validate / into_* に持たせる
 */
pub mod auth;
pub mod documents;
pub mod envelope;
pub mod health_records;
pub mod horses;

use serde::{Deserialize, Deserializer};

pub use envelope::Envelope;

/// Distinguishes an explicit `null` from a missing field:
/// missing → `None` (via `#[serde(default)]`), `null` → `Some(None)`, value → `Some(Some(v))`.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Trimmed, non-empty string or `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
