use dotenv::dotenv;
use oaiv1::chat::{Function, ParameterSchema, ToolChoice, json_schema_for};
use oaiv1::{ChatCompletionInput, Message, OpenAiApi, OpenAiClient};
use serde::Deserialize;

/// Arguments the model fills in
#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct WeatherQuery {
    /// City name, e.g. Lisbon
    city: String,
    /// celsius or fahrenheit
    unit: Option<String>,
}

impl ParameterSchema for WeatherQuery {
    fn parameter_schema() -> serde_json::Value {
        json_schema_for::<WeatherQuery>()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = OpenAiClient::from_env()?;

    let input = ChatCompletionInput::new(
        "gpt-4o-mini",
        vec![Message::user("What's the weather like in Lisbon?")],
    )
    .with_tool(Function::for_type::<WeatherQuery>(
        "get_weather",
        "Current weather for a city",
    ))
    .with_tool_choice(ToolChoice::Function {
        name: "get_weather".to_string(),
    });

    let output = client.chat_completions(&input).await?;
    let query: WeatherQuery = output.parse_arguments("get_weather")?;

    println!("Model asked for weather in {} ({:?})", query.city, query.unit);
    Ok(())
}
