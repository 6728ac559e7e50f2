use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use reqwest::Url;

use crate::news_client::DEFAULT_ENDPOINT;

/// Process settings, resolved once at startup from flags, the environment and
/// an optional `.env` file.
#[derive(Parser, Debug, Clone)]
#[command(name = "newsfront", about = "Search newsapi.org and browse the results")]
pub struct Config {
    /// newsapi.org access key
    #[arg(long = "apikey", env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory served under /assets/
    #[arg(long, env = "ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Page template; the built-in one is used when unset
    #[arg(long = "template", env = "TEMPLATE_PATH")]
    pub template_path: Option<PathBuf>,

    #[arg(long, env = "NEWS_API_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl Config {
    pub fn load() -> Result<Config> {
        dotenvy::dotenv().ok(); // Load .env file if present
        let config = Config::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            bail!("API key is required");
        }
        self.endpoint_url()?;
        Ok(())
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid news api endpoint: {}", self.endpoint))
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {addr}"))
    }
}
