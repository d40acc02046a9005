/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - ApiKey が必要な範囲はここで middleware::auth::api_key を route_layer として適用する
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, whoami::whoami};

pub fn routes() -> Router<AppState> {
    let public = Router::new().route("/health", get(health));

    let protected = Router::new().route("/whoami", get(whoami));
    let protected = middleware::auth::api_key::apply(protected);

    public.merge(protected)
}
