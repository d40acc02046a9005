/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: ApiKey 認証, http: request id / trace / limit / timeout
 */
pub mod auth;
pub mod http;
