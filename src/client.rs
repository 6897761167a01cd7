use async_trait::async_trait;

use crate::{
    audio::{AudioTranscriptionInput, AudioTranscriptionOutput},
    chat::{ChatCompletionInput, ChatCompletionOutput},
    core::{Configuration, HttpClient, HttpClientConfig, LlmError, OpenAiApi, constants},
    files::ListFilesOutput,
    images::{ImageGenerationInput, ImageGenerationOutput},
    models::ListModelsOutput,
};

/// Client for the v1 REST API.
///
/// Holds no mutable state, so a single instance can be shared across tasks.
pub struct OpenAiClient {
    http: HttpClient,
}

impl OpenAiClient {
    pub fn new(configuration: Configuration) -> Result<Self, LlmError> {
        Self::with_http_config(configuration, HttpClientConfig::default())
    }

    /// Configuration from `OPENAI_*` environment variables.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::new(Configuration::from_env())
    }

    pub fn with_http_config(
        configuration: Configuration,
        http_config: HttpClientConfig,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            http: HttpClient::new(configuration, &http_config)?,
        })
    }

    /// Send requests through a caller-owned `reqwest::Client`.
    pub fn with_http_client(configuration: Configuration, client: reqwest::Client) -> Self {
        Self {
            http: HttpClient::with_client(configuration, client),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        self.http.configuration()
    }
}

#[async_trait]
impl OpenAiApi for OpenAiClient {
    #[tracing::instrument(name = "list_models", skip(self), err)]
    async fn list_models(&self) -> Result<ListModelsOutput, LlmError> {
        self.http.get(constants::MODELS_ENDPOINT).await
    }

    #[tracing::instrument(
        name = "chat_completions",
        skip(self, input),
        fields(
            model = %input.model,
            messages = input.messages.len(),
            tools = input.tools.len() + input.functions.len()
        ),
        err
    )]
    async fn chat_completions(
        &self,
        input: &ChatCompletionInput,
    ) -> Result<ChatCompletionOutput, LlmError> {
        input.validate()?;
        let output: ChatCompletionOutput = self
            .http
            .post_json(constants::CHAT_COMPLETIONS_ENDPOINT, input)
            .await?;

        if let Some(error) = &output.error {
            tracing::warn!(error = %error, "Completion carries an embedded error");
        }
        Ok(output)
    }

    #[tracing::instrument(name = "list_files", skip(self), err)]
    async fn list_files(&self) -> Result<ListFilesOutput, LlmError> {
        self.http.get(constants::FILES_ENDPOINT).await
    }

    #[tracing::instrument(name = "generate_images", skip(self, input), fields(n = ?input.n), err)]
    async fn generate_images(
        &self,
        input: &ImageGenerationInput,
    ) -> Result<ImageGenerationOutput, LlmError> {
        input.validate()?;
        self.http
            .post_json(constants::IMAGES_GENERATIONS_ENDPOINT, input)
            .await
    }

    #[tracing::instrument(
        name = "transcribe_audio",
        skip(self, input),
        fields(model = %input.model, format = ?input.response_format),
        err
    )]
    async fn transcribe_audio(
        &self,
        input: &AudioTranscriptionInput,
    ) -> Result<AudioTranscriptionOutput, LlmError> {
        input.validate()?;
        // Credentials are checked before the upload is buffered into a form.
        self.http.auth_headers()?;
        let form = input.to_form()?;
        self.http
            .post_multipart(constants::AUDIO_TRANSCRIPTIONS_ENDPOINT, form)
            .await
    }
}
