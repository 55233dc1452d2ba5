/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 解決済みのリクエストコンテキスト（AuthCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は services::auth::context に置く
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;

pub use core::AuthCtxExtractor;
pub use crate::services::auth::AuthCtx;
