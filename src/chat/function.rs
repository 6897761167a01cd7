//! Function and tool declarations sent with a chat completion.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON schema describing a function's arguments.
///
/// Implement this for each argument type you declare to the model. Types that
/// already derive [`schemars::JsonSchema`] can use [`json_schema_for`]:
///
/// ```rust
/// use oaiv1::chat::{ParameterSchema, json_schema_for};
///
/// #[derive(schemars::JsonSchema, serde::Deserialize)]
/// struct Weather {
///     city: String,
/// }
///
/// impl ParameterSchema for Weather {
///     fn parameter_schema() -> serde_json::Value {
///         json_schema_for::<Weather>()
///     }
/// }
/// ```
pub trait ParameterSchema {
    fn parameter_schema() -> Value;
}

/// Generate a parameter schema with `schemars`, without the `$schema` marker.
pub fn json_schema_for<T: JsonSchema>() -> Value {
    let mut value = schemars::schema_for!(T).to_value();
    if let Some(object) = value.as_object_mut() {
        object.remove("$schema");
    }
    value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub parameters: Value,
}

impl Function {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
            parameters,
        }
    }

    /// Declare a function whose arguments decode into `T`.
    pub fn for_type<T: ParameterSchema>(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(name, description, T::parameter_schema())
    }
}

/// Entry of the `tools` array. Functions are the only tool kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    Function { function: Function },
}

impl Tool {
    pub fn function(function: Function) -> Self {
        Tool::Function { function }
    }

    pub fn name(&self) -> &str {
        match self {
            Tool::Function { function } => &function.name,
        }
    }
}

impl From<Function> for Tool {
    fn from(function: Function) -> Self {
        Tool::function(function)
    }
}

/// Which tool, if any, the model must call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolChoice {
    None,
    Auto,
    Required,
    Function { name: String },
}

/// Wire shape of [`ToolChoice`]
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum SerializableToolChoice {
    Mode(ToolMode),
    Definite(FunctionToolChoice),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum ToolMode {
    None,
    Auto,
    Required,
}

#[derive(Debug, Serialize)]
struct FunctionToolChoice {
    #[serde(rename = "type")]
    r#type: FunctionType,
    function: FunctionName,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum FunctionType {
    Function,
}

#[derive(Debug, Serialize)]
struct FunctionName {
    name: String,
}

fn create_tool_choice(tool_choice: &ToolChoice) -> SerializableToolChoice {
    match tool_choice {
        ToolChoice::None => SerializableToolChoice::Mode(ToolMode::None),
        ToolChoice::Auto => SerializableToolChoice::Mode(ToolMode::Auto),
        ToolChoice::Required => SerializableToolChoice::Mode(ToolMode::Required),
        ToolChoice::Function { name } => SerializableToolChoice::Definite(FunctionToolChoice {
            r#type: FunctionType::Function,
            function: FunctionName { name: name.clone() },
        }),
    }
}

impl Serialize for ToolChoice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        create_tool_choice(self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(JsonSchema, Deserialize)]
    #[allow(dead_code)]
    struct Forecast {
        /// City to look up
        city: String,
        days: Option<u8>,
    }

    impl ParameterSchema for Forecast {
        fn parameter_schema() -> Value {
            json_schema_for::<Forecast>()
        }
    }

    #[test]
    fn test_tool_choice_serialization() {
        assert_eq!(serde_json::to_string(&ToolChoice::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&ToolChoice::Auto).unwrap(), "\"auto\"");
        assert_eq!(
            serde_json::to_string(&ToolChoice::Required).unwrap(),
            "\"required\""
        );

        let choice = ToolChoice::Function {
            name: "get_forecast".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&choice).unwrap(),
            json!({"type": "function", "function": {"name": "get_forecast"}})
        );
    }

    #[test]
    fn test_tool_serialization_has_function_envelope() {
        let tool = Tool::function(Function::new(
            "get_forecast",
            "Weather forecast for a city",
            json!({"type": "object", "properties": {}}),
        ));

        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["type"], "function");
        assert_eq!(value["function"]["name"], "get_forecast");
        assert_eq!(value["function"]["description"], "Weather forecast for a city");
        assert!(value["function"]["parameters"].is_object());
        assert_eq!(tool.name(), "get_forecast");
    }

    #[test]
    fn test_schema_from_parameter_schema_impl() {
        let function = Function::for_type::<Forecast>("get_forecast", "Weather forecast");
        let parameters = &function.parameters;

        assert!(parameters.get("$schema").is_none());
        assert_eq!(parameters["type"], "object");
        assert_eq!(parameters["properties"]["city"]["type"], "string");
        assert_eq!(parameters["properties"]["city"]["description"], "City to look up");

        let required = parameters["required"].as_array().unwrap();
        assert_eq!(required, &vec![json!("city")]);
    }
}
