use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::docs::DEFAULT_SERVER_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub environment: Environment,
    pub docs: DocsConfig,
    pub http: HttpConfig,
}

/// How the OpenAPI document is published.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Base URL written into `servers[0]`.
    pub server_url: String,
    pub swagger_ui: bool,
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// `None` allows any origin.
    pub cors_allowed_origin: Option<String>,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        let environment = match lookup("ENV").unwrap_or_else(|| "local".to_string()).as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Local,
        };

        let docs = DocsConfig::from_lookup(&lookup, &environment)?;
        let http = HttpConfig::from_lookup(&lookup)?;

        let config = Config {
            port,
            environment,
            docs,
            http,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        self.docs.validate()?;
        self.http.validate()?;

        Ok(())
    }
}

impl DocsConfig {
    fn from_lookup<F>(lookup: &F, environment: &Environment) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup("API_SERVER_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        // Swagger UI stays off in production unless asked for explicitly
        let swagger_ui = match lookup("SWAGGER_UI") {
            Some(value) => parse_flag(&value).context("SWAGGER_UI must be true or false")?,
            None => environment.is_local(),
        };

        Ok(DocsConfig {
            server_url,
            swagger_ui,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("API_SERVER_URL must start with 'http://' or 'https://'");
        }

        let host = self
            .server_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or_default();
        if host.trim().is_empty() {
            anyhow::bail!("API_SERVER_URL must include a host");
        }

        Ok(())
    }
}

impl HttpConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty() && origin != "*");

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("REQUEST_TIMEOUT_SECS must be a valid number of seconds")?;

        Ok(HttpConfig {
            cors_allowed_origin,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if let Some(ref origin) = self.cors_allowed_origin {
            if origin.parse::<axum::http::HeaderValue>().is_err() {
                anyhow::bail!("CORS_ALLOWED_ORIGIN is not a valid header value");
            }
        }

        Ok(())
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{}'", other),
    }
}
