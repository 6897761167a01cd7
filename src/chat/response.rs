use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::core::{ApiError, ChatRole, LlmError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,

    #[serde(default)]
    pub choices: Vec<ChatChoice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,

    #[serde(default)]
    pub message: ChoiceMessage,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The assistant message of one choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawChoiceMessage", into = "RawChoiceMessage")]
pub struct ChoiceMessage {
    pub role: ChatRole,
    pub content: Option<String>,
    pub invocation: Invocation,
}

/// What the model asked the caller to run, if anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Invocation {
    /// Plain reply
    #[default]
    None,
    /// Legacy single `function_call`
    Function(FunctionCall),
    /// Non-empty `tool_calls` list
    Tools(Vec<ToolCall>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,

    /// JSON-encoded arguments, exactly as the model produced them
    #[serde(default)]
    pub arguments: String,
}

impl FunctionCall {
    /// Decode the argument string into `T`.
    pub fn decode_arguments<T: DeserializeOwned>(&self) -> Result<T, LlmError> {
        serde_json::from_str(&self.arguments).map_err(|e| LlmError::Decode {
            message: format!("Failed to decode arguments of function '{}'", self.name),
            source: e,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "type", default = "function_type")]
    pub r#type: String,

    pub function: FunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

/// Wire shape of [`ChoiceMessage`]
#[derive(Serialize, Deserialize)]
struct RawChoiceMessage {
    #[serde(default)]
    role: ChatRole,

    #[serde(default)]
    content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_call: Option<FunctionCall>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<ToolCall>>,
}

impl From<RawChoiceMessage> for ChoiceMessage {
    fn from(raw: RawChoiceMessage) -> Self {
        // A legacy call wins over tool calls on the same message.
        let invocation = match (raw.function_call, raw.tool_calls) {
            (Some(call), _) => Invocation::Function(call),
            (None, Some(calls)) if !calls.is_empty() => Invocation::Tools(calls),
            _ => Invocation::None,
        };

        Self {
            role: raw.role,
            content: raw.content,
            invocation,
        }
    }
}

impl From<ChoiceMessage> for RawChoiceMessage {
    fn from(message: ChoiceMessage) -> Self {
        let (function_call, tool_calls) = match message.invocation {
            Invocation::None => (None, None),
            Invocation::Function(call) => (Some(call), None),
            Invocation::Tools(calls) => (None, Some(calls)),
        };

        Self {
            role: message.role,
            content: message.content,
            function_call,
            tool_calls,
        }
    }
}

impl ChatCompletionOutput {
    /// Text content of the first choice.
    pub fn content(&self) -> Option<&str> {
        self.choices.first()?.message.content.as_deref()
    }

    /// Legacy function calls across all choices.
    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.choices
            .iter()
            .filter_map(|choice| match &choice.message.invocation {
                Invocation::Function(call) => Some(call),
                _ => None,
            })
    }

    /// Non-empty tool call lists across all choices.
    pub fn tool_call_lists(&self) -> impl Iterator<Item = &[ToolCall]> {
        self.choices
            .iter()
            .filter_map(|choice| match &choice.message.invocation {
                Invocation::Tools(calls) => Some(calls.as_slice()),
                _ => None,
            })
    }
}

impl fmt::Display for ChatCompletionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
