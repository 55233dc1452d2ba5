/*
 * Responsibility
 * - persistence adapter の公開インターフェース
 * - StableRepo (trait) と 2 つの実装 (memory / postgres)、起動時の選択 (factory)
 */
pub mod document_repo;
pub mod error;
pub mod factory;
pub mod health_record_repo;
pub mod horse_repo;
pub mod memory;
pub mod models;
pub mod pg;
pub mod store;

pub use error::RepoError;
pub use factory::{Backend, BackendKind, select_backend};
pub use memory::MemoryRepo;
pub use pg::PgRepo;
pub use store::StableRepo;
