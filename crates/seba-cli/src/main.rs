//! Command-line front end for the SEBA stock analysis dashboard
//!
//! Drives the dashboard against a live analysis API and writes the painted
//! page, charts included, to an HTML file.
//!
//! # Usage
//!
//! ```bash
//! # Point at the analysis API
//! export SEBA_API_BASE="http://localhost:8000"
//!
//! # One symbol
//! cargo run --bin seba-dashboard -- analyze AAPL --out aapl.html
//!
//! # Page opened with ?symbol=..., Arabic UI
//! cargo run --bin seba-dashboard -- --lang ar open "http://localhost/?symbol=msft"
//!
//! # Type symbols, the page is rewritten after each one
//! cargo run --bin seba-dashboard -- interactive
//! ```

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use seba_dashboard::{
    Dashboard, DashboardConfig, HtmlDocument, Language, RequestState, SebaClient,
    dom::{Document, ids},
};
use seba_utils::LogConfig;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const DEFAULT_OUT: &str = "dashboard.html";

#[derive(Parser, Debug)]
#[command(name = "seba-dashboard")]
#[command(about = "Stock analysis dashboard for the SEBA analysis API", long_about = None)]
struct Cli {
    /// Base URL of the analysis API (overrides SEBA_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// UI language, `en` or `ar` (overrides SEBA_LANG)
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one symbol and write the dashboard page
    Analyze {
        symbol: String,

        #[arg(short, long, default_value = DEFAULT_OUT)]
        out: PathBuf,
    },
    /// Open the dashboard at a URL; a `symbol` query parameter starts an analysis
    Open {
        url: String,

        #[arg(short, long, default_value = DEFAULT_OUT)]
        out: PathBuf,
    },
    /// Read symbols from stdin, rewriting the page after each one
    Interactive {
        #[arg(short, long, default_value = DEFAULT_OUT)]
        out: PathBuf,
    },
}

impl Cli {
    fn log_config(&self) -> LogConfig {
        let config = LogConfig::from_env();
        if self.json_logs { config.json(true) } else { config }
    }

    fn dashboard_config(&self) -> anyhow::Result<DashboardConfig> {
        let mut config = DashboardConfig::from_env();
        if let Some(base) = &self.api_base {
            config.api_base_url.clone_from(base);
        }
        if let Some(lang) = &self.lang {
            config.language = Language::from_code(lang);
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    seba_utils::init_tracing(&cli.log_config());

    let config = cli.dashboard_config()?;
    info!("Using analysis API at {}", config.api_base_url);

    let client = Arc::new(SebaClient::new(&config)?);
    let page = HtmlDocument::dashboard(config.language.clone());
    let mut dashboard = Dashboard::new(client, page, config.language.clone());
    if !dashboard.bind() {
        bail!("dashboard page is missing its input elements");
    }

    match cli.command {
        Command::Analyze { symbol, out } => {
            dashboard.document_mut().set_value(ids::STOCK_SYMBOL, &symbol);
            dashboard.click_analyze().await;
            write_page(&dashboard, &out).await?;
            finish(&dashboard, &out)?;
        },
        Command::Open { url, out } => {
            dashboard.page_load(&url).await?;
            write_page(&dashboard, &out).await?;
            if dashboard.state() == RequestState::Idle {
                println!("No symbol in {url}, wrote an empty dashboard to {}", out.display());
            } else {
                finish(&dashboard, &out)?;
            }
        },
        Command::Interactive { out } => interactive(&mut dashboard, &out).await?,
    }

    Ok(())
}

async fn write_page(dashboard: &Dashboard<HtmlDocument>, out: &Path) -> anyhow::Result<()> {
    let html = dashboard.document().to_html()?;
    tokio::fs::write(out, html)
        .await
        .with_context(|| format!("writing {}", out.display()))?;
    info!("Wrote {}", out.display());
    Ok(())
}

fn finish(dashboard: &Dashboard<HtmlDocument>, out: &Path) -> anyhow::Result<()> {
    if let Some(error) = dashboard.last_error() {
        bail!("{error}");
    }
    println!("Dashboard written to {}", out.display());
    Ok(())
}

async fn interactive(dashboard: &mut Dashboard<HtmlDocument>, out: &Path) -> anyhow::Result<()> {
    println!("Enter a stock symbol and press Enter. /exit quits.");
    println!("The dashboard is rewritten to {} after each analysis.\n", out.display());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("symbol> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!();
                break;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            },
        }

        let input = input.trim();
        if input == "/exit" {
            break;
        }

        dashboard.document_mut().set_value(ids::STOCK_SYMBOL, input);
        dashboard.key_press("Enter").await;

        // Blank input only shows the validation message
        if input.is_empty() {
            if let Some(error) = dashboard.last_error() {
                eprintln!("{error}\n");
            }
            continue;
        }

        write_page(dashboard, out).await?;
        match dashboard.last_error() {
            Some(error) => eprintln!("{error}\n"),
            None => println!("Dashboard written to {}\n", out.display()),
        }
    }

    Ok(())
}
