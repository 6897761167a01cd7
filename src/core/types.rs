use serde::{Deserialize, Serialize};

use crate::chat::{ChoiceMessage, FunctionCall, Invocation, ToolCall};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    System,
    User,
    #[default]
    Assistant,
    /// Result of a tool call, answered with `tool_call_id`
    Tool,
    /// Result of a legacy function call, answered with `name`
    Function,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Legacy call requested by an assistant turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,

    /// Tool calls requested by an assistant turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl Message {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            name: None,
            tool_call_id: None,
            function_call: None,
            tool_calls: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Answer a tool call with its result.
    pub fn tool(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(tool_call_id.into()),
            ..Self::new(ChatRole::Tool, content)
        }
    }

    /// Answer a legacy function call with its result.
    pub fn function(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(ChatRole::Function, content)
        }
    }
}

/// Replays an assistant reply, including any call it requested, into the
/// history of the next request.
impl From<ChoiceMessage> for Message {
    fn from(message: ChoiceMessage) -> Self {
        let (function_call, tool_calls) = match message.invocation {
            Invocation::None => (None, None),
            Invocation::Function(call) => (Some(call), None),
            Invocation::Tools(calls) => (None, Some(calls)),
        };

        Self {
            role: message.role,
            content: message.content,
            name: None,
            tool_call_id: None,
            function_call,
            tool_calls,
        }
    }
}
