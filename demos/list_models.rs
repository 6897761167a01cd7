use dotenv::dotenv;
use oaiv1::{OpenAiApi, OpenAiClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Reads OPENAI_API_KEY, OPENAI_ORGANIZATION and optionally OPENAI_BASE_URL
    let client = OpenAiClient::from_env()?;

    match client.list_models().await {
        Ok(output) => {
            for model in &output.data {
                println!("{:<40} {}", model.id, model.owned_by);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(api_error) = e.api_error() {
                eprintln!("Provider said: {api_error}");
            }
        }
    }

    Ok(())
}
