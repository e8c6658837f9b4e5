use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use futures::StreamExt;
use gemini_bridge::config::Config;
use gemini_bridge::converters::openai::OpenAIRequest;
use gemini_bridge::{is_gemini_3_or_later, logging, GeminiAdapter};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "gemini-bridge")]
#[command(about = "Run an OpenAI-style chat turn against Gemini's native streaming API")]
struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// OpenAI chat-completions request body (JSON)
    #[arg(short, long)]
    request: String,

    /// trace, debug, info, warn, error
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[arg(long)]
    log_file: Option<String>,

    /// socks and http proxy, example: socks5://192.168.0.2:10080
    #[arg(long)]
    proxy: Option<String>,

    /// Print only the final completion instead of every event
    #[arg(long)]
    no_stream: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = Level::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using WARN level.", args.log_level);
        Level::WARN
    });
    logging::init_logging(log_level, args.log_file.as_deref());

    let mut config = Config::from_file(&args.config)?;
    info!("Configuration loaded successfully from: {}", args.config);

    let request = OpenAIRequest::from_file(&args.request)?;
    if let Some(model) = request.model.as_ref().filter(|m| !m.is_empty()) {
        config.llm_params.model = model.clone();
    }
    if let Some(max_tokens) = request.max_tokens {
        config.llm_params.max_output_tokens = Some(max_tokens);
    }

    let client_builder = reqwest::Client::builder();
    let client_builder = match &args.proxy {
        Some(proxy) => client_builder.proxy(reqwest::Proxy::all(proxy)?),
        None => client_builder,
    };
    let http_client = Arc::new(client_builder.build()?);

    let adapter = GeminiAdapter::from_config(&config, http_client)?;
    if !is_gemini_3_or_later(adapter.model()) {
        warn!("{} predates Gemini 3; thought signatures are optional for it", adapter.model());
    }

    if args.no_stream {
        let completion = adapter
            .generate(&request.messages, request.tools(), request.temperature)
            .await?;
        println!("{}", serde_json::to_string(&completion)?);
        return Ok(());
    }

    let events = adapter.generate_stream(&request.messages, request.tools(), request.temperature);
    futures::pin_mut!(events);
    while let Some(event) = events.next().await {
        println!("{}", serde_json::to_string(&event)?);
    }
    Ok(())
}
