use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use posthover::cli::{CliArgs, OutputFormat};
use posthover::config::HighlightConfig;
use posthover::dom::html;
use posthover::report::PageReport;
use posthover::runtime::{parse_script, run_script, Page};

fn main() -> Result<()> {
    posthover::tracing::init();

    let args = CliArgs::parse();
    let base = match &args.config {
        Some(path) => HighlightConfig::load_from(path).map_err(anyhow::Error::msg)?,
        None => HighlightConfig::load(),
    };
    let run = args.into_run_config(base).map_err(anyhow::Error::msg)?;

    if run.print_config {
        print!("{}", run.highlight.to_yaml().map_err(anyhow::Error::msg)?);
        return Ok(());
    }

    let markup = match &run.page {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read page from stdin")?;
            buf
        }
    };

    let mut page = Page::from_html(&markup, run.highlight)
        .map_err(|e| anyhow::anyhow!("Failed to parse page: {}", e))?;
    page.load();
    tracing::info!("Wired {} post(s)", page.highlighter().wired().len());

    if let Some(path) = &run.script {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let steps = parse_script(&text).map_err(anyhow::Error::msg)?;
        let cmd = run_script(&mut page, &steps).map_err(anyhow::Error::msg)?;
        tracing::debug!(
            "Script restyled {} element(s)",
            cmd.restyled_nodes().len()
        );
    }

    match run.format {
        OutputFormat::Json => {
            let report = PageReport::from_page(&page);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Html => print!("{}", html::to_html(page.document())),
    }

    Ok(())
}
