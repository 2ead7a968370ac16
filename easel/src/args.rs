use std::path::PathBuf;

use clap::Parser;

/// Easel image generation relay
#[derive(Debug, Parser)]
#[command(name = "easel", about = "Relay text prompts to an image generation API")]
pub struct Args {
    /// Path to configuration file; built-in defaults are used when omitted
    #[arg(short, long, env = "EASEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "EASEL_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// OpenAI API key, used when the config file does not set one
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,
}
