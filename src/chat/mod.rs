//! `POST /v1/chat/completions`, with function and tool calling.

mod arguments;
pub mod function;
pub mod request;
pub mod response;

pub use function::{Function, ParameterSchema, Tool, ToolChoice, json_schema_for};
pub use request::ChatCompletionInput;
pub use response::{
    ChatChoice, ChatCompletionOutput, ChoiceMessage, FunctionCall, Invocation, ToolCall, Usage,
};
