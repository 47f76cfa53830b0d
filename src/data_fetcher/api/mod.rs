pub mod fetch_utils;
pub mod http_client;
pub mod hub_api;
pub mod orchestrator;
pub mod urls;

pub use http_client::*;
pub use hub_api::*;
pub use orchestrator::*;
pub use urls::*;
