/*
 * Responsibility
 * - GET /whoami (ApiKey 認証の確認用)
 * - 生の鍵は返さず、key_id だけを返す
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub key_id: String,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        key_id: ctx.key_id().to_owned(),
    })
}
