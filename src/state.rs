/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - repo: 起動時に選択した store (volatile / durable)
 *   - identity: リクエストヘッダから AuthCtx を解決する resolver
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::{BackendKind, MemoryRepo, StableRepo};
use crate::services::auth::{HeaderIdentityResolver, IdentityResolver};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn StableRepo>,
    pub identity: Arc<dyn IdentityResolver>,
    pub backend: BackendKind,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn StableRepo>,
        identity: Arc<dyn IdentityResolver>,
        backend: BackendKind,
    ) -> Self {
        Self {
            repo,
            identity,
            backend,
        }
    }

    /// Fresh volatile store + mock header identity. Each call gets its own store.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryRepo::new()),
            Arc::new(HeaderIdentityResolver::new()),
            BackendKind::Volatile,
        )
    }
}
