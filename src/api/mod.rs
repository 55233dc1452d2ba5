/*
 * Responsibility
 * - HTTP 表面 (routes / handlers / dto / extractors) の公開ポイント
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
