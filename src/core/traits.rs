use async_trait::async_trait;

use super::error::LlmError;
use crate::{
    audio::{AudioTranscriptionInput, AudioTranscriptionOutput},
    chat::{ChatCompletionInput, ChatCompletionOutput},
    files::ListFilesOutput,
    images::{ImageGenerationInput, ImageGenerationOutput},
    models::ListModelsOutput,
};

/// The supported endpoints of the v1 API, one method per endpoint.
///
/// Every method makes exactly one HTTP request. Local validation errors are
/// returned before any request is sent.
#[async_trait]
pub trait OpenAiApi: Send + Sync {
    /// `GET /v1/models`
    async fn list_models(&self) -> Result<ListModelsOutput, LlmError>;

    /// `POST /v1/chat/completions`
    async fn chat_completions(
        &self,
        input: &ChatCompletionInput,
    ) -> Result<ChatCompletionOutput, LlmError>;

    /// `GET /v1/files`
    async fn list_files(&self) -> Result<ListFilesOutput, LlmError>;

    /// `POST /v1/images/generations`
    async fn generate_images(
        &self,
        input: &ImageGenerationInput,
    ) -> Result<ImageGenerationOutput, LlmError>;

    /// `POST /v1/audio/transcriptions`
    async fn transcribe_audio(
        &self,
        input: &AudioTranscriptionInput,
    ) -> Result<AudioTranscriptionOutput, LlmError>;
}
