/*
 * Responsibility
 * - Handler から見える「API キー認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 */
use crate::services::auth::key_id;

/// `Authorization: ApiKey <key>` を通過したリクエストに付与されるコンテキスト
///
/// - 生の鍵は保持しない。ログやレスポンスには `key_id()` を使う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyCtx {
    key_id: String,
}

impl ApiKeyCtx {
    pub fn new(api_key: &str) -> Self {
        Self {
            key_id: key_id(api_key),
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}
