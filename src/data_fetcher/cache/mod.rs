pub mod http_response_cache;
pub mod types;

pub use http_response_cache::*;
pub use types::*;
