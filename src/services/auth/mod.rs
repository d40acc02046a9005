pub mod api_key;
pub mod key_id;

pub use api_key::{API_KEY_SCHEME, AuthError, get_api_key};
pub use key_id::key_id;
