/*
 * Responsibility
 * - repo より上、handler より下のドメインロジック
 * - auth: identity resolver (mock headers / JWT)
 * - tenant: organization 単位のアクセスガード
 */
pub mod auth;
pub mod tenant;
