//! toolchat - terminal chat assistant with weather and clock tools.

use anyhow::Context;
use gemini_client::GeminiClient;
use openweather_client::OpenWeatherClient;
use tokio::io::BufReader;
use toolchat::config::Config;
use toolchat::error::AppResult;
use toolchat::orchestrator::Orchestrator;
use toolchat::repl;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.log_level);

    println!("toolchat - chat assistant with live tools");
    println!("Available tools: Weather data, Current time");
    println!("Example questions:");
    println!("- What's the weather in London");
    println!("- Weather for New York");
    println!("- What time is it");
    println!("- Regular questions still work too!");
    println!("{}", "-".repeat(50));

    // Build clients from config; the Gemini key is not checked here, a
    // missing key surfaces on the first model call.
    let gemini = GeminiClient::new(
        &config.gemini_api_key,
        &config.gemini_base_url,
        &config.gemini_model,
    )?;
    info!("Gemini endpoint: {} ({})", config.gemini_base_url, config.gemini_model);

    let weather = OpenWeatherClient::new(
        config.openweather_api_key.clone().unwrap_or_default(),
        &config.openweather_base_url,
    )?;

    let orchestrator = Orchestrator::new(gemini, weather);

    match &config.openweather_api_key {
        None => {
            println!("⚠️  Weather API key not found. Add OPENWEATHER_API_KEY to your .env file");
            println!("⚠️  Get your free API key from: https://openweathermap.org/api");
        }
        Some(key) => {
            println!("✅ Weather API key loaded: {}...", &key[..key.len().min(8)]);

            println!("Testing weather feature...");
            let answer = orchestrator.answer("Weather in London").await?;
            println!("AI: {answer}\n");
        }
    }

    println!("Testing time feature...");
    let answer = orchestrator.answer("What time is it").await?;
    println!("AI: {answer}\n");

    println!("Chat with the assistant (type 'quit' to exit):");
    println!("💡 Tip: Try questions like 'weather in Paris' or 'what time is it'");
    println!();

    repl::run(&orchestrator, BufReader::new(tokio::io::stdin())).await
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
