//! Prints the OpenAPI document to stdout.
//!
//! Usage:
//!   cargo run --bin export-openapi > openapi.json
//!   cargo run --bin export-openapi -- --yaml > openapi.yaml
//!
//! `API_SERVER_URL` (or `.env`) sets the published server URL. The document
//! is linted first; the process exits non-zero if any check fails.

use anyhow::{Context, Result};

use posts_authors_api_docs::{build_openapi, config::Config, DocsState};

fn main() -> Result<()> {
    let yaml = std::env::args().skip(1).any(|arg| arg == "--yaml");

    let config = Config::from_env().context("Failed to load configuration")?;
    let docs = DocsState::new(build_openapi(&config.docs.server_url))
        .context("OpenAPI document failed its checks")?;

    if yaml {
        print!("{}", docs.yaml()?);
    } else {
        println!("{}", docs.json());
    }

    Ok(())
}
