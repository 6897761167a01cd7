//! Locate a named function invocation in a completion and decode its
//! arguments.

use serde::de::DeserializeOwned;

use super::response::ChatCompletionOutput;
use crate::core::LlmError;

impl ChatCompletionOutput {
    /// Decode the arguments the model supplied for `name` into `T`.
    ///
    /// Legacy `function_call` records are searched first. If the response
    /// holds any of them, tool calls are never consulted, even when no legacy
    /// call matches `name`. Otherwise the first tool call named `name` whose
    /// arguments decode wins.
    #[tracing::instrument(
        name = "parse_arguments",
        level = "debug",
        skip(self),
        err(level = "debug")
    )]
    pub fn parse_arguments<T>(&self, name: &str) -> Result<T, LlmError>
    where
        T: DeserializeOwned,
    {
        if self.choices.is_empty() {
            return Err(LlmError::NoChoices);
        }

        let function_calls: Vec<_> = self.function_calls().collect();
        if !function_calls.is_empty() {
            return match function_calls.into_iter().find(|call| call.name == name) {
                Some(call) => call.decode_arguments(),
                None => Err(not_found(name)),
            };
        }

        let mut last_error = None;
        for calls in self.tool_call_lists() {
            let Some(call) = calls.iter().find(|call| call.function.name == name) else {
                continue;
            };
            match call.function.decode_arguments() {
                Ok(arguments) => return Ok(arguments),
                Err(e) => {
                    tracing::debug!(call_id = %call.id, error = %e, "Skipping undecodable tool call");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| not_found(name)))
    }
}

fn not_found(name: &str) -> LlmError {
    LlmError::FunctionNotFound {
        name: name.to_string(),
    }
}
