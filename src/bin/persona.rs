//! persona-systems command-line binary.
//!
//! Converts a Big Five vector into MBTI, HEXACO, Dark Triad and TCI profiles
//! and prints the result as JSON.
//!
//! # Environment Variables
//!
//! - `RUST_LOG` — Tracing filter (default: "warn,persona_systems=info")
//!
//! # Usage
//!
//! ```bash
//! persona generate traits.yaml
//! persona --config engine.yaml convert hexaco traits.yaml
//! cat traits.json | persona advisory -
//! ```

use std::io::Read;

use anyhow::{Context, Result};

use persona_systems::cli::{self, USAGE};
use persona_systems::config::EngineConfig;
use persona_systems::persona::{PersonaError, PersonalityEngine};

fn read_input(source: &str) -> persona_systems::persona::Result<String> {
    if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}

fn main() -> Result<()> {
    // Logs to stderr; stdout carries only the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,persona_systems=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let invocation = match cli::parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(PersonaError::InvalidInput { message, .. }) => {
            eprintln!("error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    let engine = match &invocation.config {
        Some(path) => {
            let config = EngineConfig::from_yaml_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            tracing::info!("Loaded engine config from {}", path.display());
            PersonalityEngine::with_config(config)?
        }
        None => PersonalityEngine::new(),
    };

    tracing::debug!("Running command: {}", invocation.command);
    let output = cli::run(&invocation, &engine, &read_input)
        .with_context(|| format!("'{}' failed", invocation.command))?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
