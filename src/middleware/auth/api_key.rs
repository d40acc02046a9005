//! `Authorization: ApiKey <key>` の検証 → ApiKeyCtx を extensions に入れる
//!
//! - ヘッダの解析そのものは `services::auth::get_api_key` に任せる
//! - 鍵の照合 (key store) はここでは行わない。形式が正しければ通す
//! - 失敗時は 401 + `WWW-Authenticate: ApiKey`

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// 認証が必要なルートに middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/whoami", get(whoami));
/// let protected = middleware::auth::api_key::apply(protected);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    // route_layer: 未定義パスは 404 のまま (認証より先にルーティング)
    router.route_layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let ctx = match get_api_key(req.headers()) {
        Ok(key) => ApiKeyCtx::new(key),
        Err(err) => {
            tracing::warn!(
                reason = err.reason(),
                error = %err,
                method = %req.method(),
                path = %req.uri().path(),
                "api key authentication failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(key_id = %ctx.key_id(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
