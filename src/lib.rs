//! # oaiv1
//!
//! Typed bindings for a subset of the OpenAI v1 REST API. Each endpoint is a
//! single method on [`OpenAiApi`]: validate the input, send one request,
//! decode the response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oaiv1::{ChatCompletionInput, Configuration, Message, OpenAiApi, OpenAiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::new(
//!         Configuration::new()
//!             .with_api_key("sk-...")
//!             .with_organization("org-..."),
//!     )?;
//!
//!     let input = ChatCompletionInput::new("gpt-4o-mini", vec![Message::user("Hello!")]);
//!     let output = client.chat_completions(&input).await?;
//!     println!("{}", output.content().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Status codes are classified into [`LlmError::Unauthorized`],
//! [`LlmError::BadGateway`] and [`LlmError::Unknown`], each carrying the
//! provider's error payload. A 200 response can still embed an error; check
//! the output's `error` field.
//!
//! ## Function calling
//!
//! Declare functions with [`chat::Function`] and pull the model's arguments
//! back out with [`ChatCompletionOutput::parse_arguments`].

pub mod audio;
pub mod chat;
pub mod client;
pub mod core;
pub mod files;
pub mod images;
pub mod models;

pub use audio::{
    AudioFile, AudioTranscriptionInput, AudioTranscriptionOutput, TranscriptionFormat,
};
pub use chat::{ChatCompletionInput, ChatCompletionOutput};
pub use client::OpenAiClient;
pub use crate::core::{
    ApiError, ChatRole, Configuration, Credential, HttpClientConfig, LlmError, Message, OpenAiApi,
};
pub use files::ListFilesOutput;
pub use images::{ImageGenerationInput, ImageGenerationOutput};
pub use models::ListModelsOutput;
