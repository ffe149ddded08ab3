//! Command-line client for the shortening backend.
//!
//! Runs the same submission flow as the web form, from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin shorturl -- shorten https://example.com --origin https://sho.rt
//!
//! # Show how the front end would serve a path
//! cargo run --bin shorturl -- resolve /AbC12
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (required unless `--api-base` is given): backend base URL
//! - `PUBLIC_ORIGIN` (optional): default for `--origin`

use shorturl_web::domain::SubmissionState;
use shorturl_web::domain::view_mode::{self, ViewMode};
use shorturl_web::prelude::{HttpShortenApi, ShortenService};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI client for the URL shortening backend.
#[derive(Parser)]
#[command(name = "shorturl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "API_BASE_URL", global = true)]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Origin the short link is served from
        #[arg(short, long, env = "PUBLIC_ORIGIN", default_value = "http://localhost:3000")]
        origin: String,
    },

    /// Show whether a path renders the form or redirects
    Resolve {
        /// Request path, e.g. `/AbC12`
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let api_base = cli
        .api_base
        .map(|base| base.trim_end_matches('/').to_string())
        .ok_or_else(|| anyhow::anyhow!("API_BASE_URL must be set (or pass --api-base)"))?;

    match cli.command {
        Commands::Shorten { url, origin } => shorten(&api_base, url, &origin).await,
        Commands::Resolve { path } => {
            resolve(&api_base, &path);
            Ok(())
        }
    }
}

/// Runs one submission and prints the short link or the failure message.
///
/// Exits with status 1 on failure. An empty URL is refused before any request.
async fn shorten(api_base: &str, url: Option<String>, origin: &str) -> Result<()> {
    let url = match url {
        Some(u) => u,
        None => Input::<String>::new().with_prompt("URL").interact_text()?,
    };

    if url.is_empty() {
        println!("{}", "A URL is required".yellow());
        std::process::exit(2);
    }

    let service = ShortenService::new(Arc::new(HttpShortenApi::new(api_base)?));

    match service.shorten(&url, origin).await {
        SubmissionState::Succeeded { short_link } => {
            println!("{}", short_link.bright_green().bold());
            Ok(())
        }
        SubmissionState::Failed { message } => {
            eprintln!("{}", message.red());
            std::process::exit(1);
        }
        SubmissionState::Idle | SubmissionState::Submitting => {
            anyhow::bail!("submission did not complete")
        }
    }
}

fn resolve(api_base: &str, path: &str) {
    match view_mode::resolve(path, api_base) {
        ViewMode::Form => println!("{}", "form".cyan()),
        ViewMode::Redirect { target } => {
            println!("{} {}", "redirect".bright_blue(), target.bright_white())
        }
    }
}
