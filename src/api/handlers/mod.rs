pub mod auth;
pub mod documents;
pub mod health;
pub mod health_records;
pub mod horses;
