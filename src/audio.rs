//! `POST /v1/audio/transcriptions`
//!
//! The request is a multipart form; the response is JSON. Only the JSON
//! response formats are accepted since the output is decoded as JSON.

use std::{fmt, path::Path, str::FromStr};

use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::core::{ApiError, LlmError};

/// Response formats the client can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptionFormat {
    #[default]
    Json,
    /// Adds language, duration and timed segments
    VerboseJson,
}

impl TranscriptionFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptionFormat::Json => "json",
            TranscriptionFormat::VerboseJson => "verbose_json",
        }
    }
}

impl FromStr for TranscriptionFormat {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(TranscriptionFormat::Json),
            "verbose_json" => Ok(TranscriptionFormat::VerboseJson),
            other => Err(LlmError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for TranscriptionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audio content to upload, with the filename the API uses to sniff its type.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFile {
    pub filename: String,
    pub bytes: Bytes,
}

impl AudioFile {
    pub fn from_bytes(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk. The upload keeps its base name.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| LlmError::Io {
            message: format!("Failed to read audio file {}", path.display()),
            source: e,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        Ok(Self::from_bytes(filename, bytes))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioTranscriptionInput {
    pub file: Option<AudioFile>,
    pub model: String,
    /// ISO-639-1 code of the spoken language
    pub language: Option<String>,
    pub temperature: Option<f32>,
    pub response_format: Option<String>,
    /// Text to guide style or continue a previous segment
    pub prompt: Option<String>,
}

impl AudioTranscriptionInput {
    pub fn new(file: AudioFile, model: impl Into<String>) -> Self {
        Self {
            file: Some(file),
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_response_format(mut self, response_format: impl Into<String>) -> Self {
        self.response_format = Some(response_format.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Check required fields and the response format, returning the file to
    /// upload and the parsed format.
    pub(crate) fn validate(&self) -> Result<(&AudioFile, Option<TranscriptionFormat>), LlmError> {
        let file = self
            .file
            .as_ref()
            .ok_or_else(|| LlmError::InvalidInput("file is missing".to_string()))?;
        if self.model.trim().is_empty() {
            return Err(LlmError::InvalidInput("model is empty".to_string()));
        }
        let format = self
            .response_format
            .as_deref()
            .map(TranscriptionFormat::from_str)
            .transpose()?;

        Ok((file, format))
    }

    /// Validate, then build the multipart body.
    pub(crate) fn to_form(&self) -> Result<Form, LlmError> {
        let (file, format) = self.validate()?;

        let part = Part::stream_with_length(file.bytes.clone(), file.bytes.len() as u64)
            .file_name(file.filename.clone());

        let mut form = Form::new()
            .part("file", part)
            .text("model", self.model.clone());

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }
        if let Some(temperature) = self.temperature {
            form = form.text("temperature", temperature.to_string());
        }
        if let Some(format) = format {
            form = form.text("response_format", format.as_str());
        }
        if let Some(prompt) = &self.prompt {
            form = form.text("prompt", prompt.clone());
        }

        Ok(form)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioTranscriptionOutput {
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Only present for `verbose_json`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<TranscriptionSegment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionSegment {
    pub id: u32,
    pub seek: u32,
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub tokens: Vec<u32>,
    pub temperature: f64,
    pub avg_logprob: f64,
    pub compression_ratio: f64,
    pub no_speech_prob: f64,
    pub transient: bool,
}

impl fmt::Display for AudioTranscriptionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
