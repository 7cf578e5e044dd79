//! Querypad - a terminal SQL exercise widget
//! Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use querypad::app::{App, WidgetOptions};
use querypad::term::crossterm::CrosstermBackend;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "querypad")]
#[command(about = "Practice SQL queries against a grading endpoint", long_about = None)]
struct Args {
    /// Grading endpoint base URL (e.g. http://localhost:8000/exercise/1)
    #[arg(short, long)]
    endpoint: String,

    /// File with an initial query to seed the editor
    #[arg(short, long)]
    query_file: Option<PathBuf>,

    /// Exercise prompt shown above the editor
    #[arg(short, long)]
    prompt: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let initial_query = match &args.query_file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file {}", path.display()))?,
        None => String::new(),
    };

    let backend = CrosstermBackend::new()
        .map_err(|e| anyhow::anyhow!("Terminal backend unavailable: {e}"))?;

    let options = WidgetOptions {
        endpoint: args.endpoint,
        initial_query,
        prompt: args.prompt,
    };

    let mut app = App::new(backend, options).context("Failed to initialize widget")?;
    app.run().context("Widget error")?;

    Ok(())
}
