//! vl-interpret — exercise the interpretation engine from the command line.
//!
//! Rule-based by default; pass `--model` to go through the Gemini
//! collaborator configured from the environment.

use tracing_subscriber::EnvFilter;

use vl_interpreter::Interpreter;
use vl_interpreter::generative::{GeminiClient, GeminiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let use_model = args.iter().any(|a| a == "--model");
    let transcript = args
        .iter()
        .filter(|a| a.as_str() != "--model")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_lowercase();

    if transcript.is_empty() {
        anyhow::bail!("usage: vl-interpret [--model] <transcript>");
    }

    let config = GeminiConfig::from_env();
    if use_model && config.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set - the model call will fail");
    }
    let interpreter = Interpreter::new(Box::new(GeminiClient::new(config)));

    let action = if use_model {
        interpreter.interpret_via_model(&transcript).await?
    } else {
        interpreter.interpret(&transcript)?
    };

    println!("{}", serde_json::to_string_pretty(&action)?);
    Ok(())
}
