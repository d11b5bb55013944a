pub mod schema;

pub use schema::{ApiConfig, ComposerConfig, Config, IdentityConfig, LogConfig, NotifierConfig};
