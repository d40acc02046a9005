/*
 * Responsibility
 * - HTTP に依存しないドメインロジック (ヘッダ解析、鍵指紋など)
 * - middleware / handler からはこの層を使う
 */
pub mod auth;
