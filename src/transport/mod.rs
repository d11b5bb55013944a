pub mod api;

pub use api::{ApiFuture, HttpMessageApi, MessageApi};
