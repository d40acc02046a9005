/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - 鍵の照合先 (key store) などを持たせるならここ。今は空
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
#[derive(Clone, Debug, Default)]
pub struct AppState;

impl AppState {
    pub fn new() -> Self {
        Self
    }
}
