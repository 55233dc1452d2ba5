/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (identity 解決), cors, http (request id / trace / limit / timeout), security_headers
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
