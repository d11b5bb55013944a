pub mod http;
pub mod http_client;
pub mod traits;

pub use http::HttpMessageApi;
pub use http_client::build_api_client;
pub use traits::{ApiFuture, MessageApi};
