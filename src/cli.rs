//! Command-line argument parsing
//!
//! Supports:
//! - Reading a page from a file or stdin
//! - Replaying a pointer script after load
//! - Overriding the selector and colors from config
//! - JSON report or serialized HTML output

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::color::CssColor;
use crate::config::HighlightConfig;
use crate::dom::Selector;

/// Highlight blog posts on hover
#[derive(Parser, Debug)]
#[command(name = "posthover", version, about = "Highlight blog posts on hover")]
pub struct CliArgs {
    /// HTML page to load (reads stdin when omitted)
    #[arg(value_name = "PAGE")]
    pub page: Option<PathBuf>,

    /// Config file (defaults to ~/.config/posthover/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pointer script to replay after load
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Selector for post elements (e.g. ".post")
    #[arg(long, value_name = "SELECTOR")]
    pub selector: Option<String>,

    /// Background while hovered
    #[arg(long, value_name = "COLOR")]
    pub hover_color: Option<String>,

    /// Background after the pointer leaves
    #[arg(long, value_name = "COLOR")]
    pub neutral_color: Option<String>,

    /// Write the neutral color to every post at load time
    #[arg(long)]
    pub apply_neutral_on_load: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// What to print after the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Report of wired posts and their hover state
    Json,
    /// The page with current inline styles
    Html,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub page: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub highlight: HighlightConfig,
    pub format: OutputFormat,
    pub print_config: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of the loaded config
    pub fn into_run_config(self, mut highlight: HighlightConfig) -> Result<RunConfig, String> {
        if let Some(selector) = &self.selector {
            highlight.selector = Selector::parse(selector)?;
        }
        if let Some(color) = &self.hover_color {
            highlight.hover_color = CssColor::parse(color)?;
        }
        if let Some(color) = &self.neutral_color {
            highlight.neutral_color = CssColor::parse(color)?;
        }
        if self.apply_neutral_on_load {
            highlight.apply_neutral_on_load = true;
        }

        Ok(RunConfig {
            page: self.page,
            script: self.script,
            highlight,
            format: self.format,
            print_config: self.print_config,
        })
    }
}
