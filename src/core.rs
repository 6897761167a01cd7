pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use config::{Configuration, HttpClientConfig};
pub use error::{ApiError, Credential, LlmError};
pub use http::HttpClient;
pub use traits::OpenAiApi;
pub use types::{ChatRole, Message};
