//! mdscroll - Entry Point

use clap::Parser;
use mdscroll::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ResolvedConfig, SettleMode,
};
use mdscroll::integration::settle_fully;
use mdscroll::model::AppError;
use mdscroll::source::{detect_document_source, load_document, DocumentSource};
use mdscroll::view_state::{CellGrid, MonospaceMeasurer, ScrollController};
use std::path::PathBuf;
use tracing::info;

/// mdscroll - terminal pager for markdown documents
#[derive(Parser, Debug)]
#[command(name = "mdscroll")]
#[command(version)]
#[command(about = "Lay out a markdown document as blocks and scroll through it")]
pub struct Args {
    /// Path to the document (reads piped stdin, then ./TEST.md, if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Base font size in layout units
    #[arg(long, value_parser = clap::value_parser!(i32).range(2..=1000))]
    pub font_size: Option<i32>,

    /// How an overscrolled view returns to the end of the document
    #[arg(long, value_parser = ["incremental", "immediate"])]
    pub settle_policy: Option<String>,

    /// Print the settled layout as JSON instead of starting the viewer
    #[arg(long)]
    pub dump_layout: bool,

    /// Terminal width in columns for --dump-layout
    #[arg(long, default_value = "80", value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Terminal height in rows for --dump-layout
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Scroll offset in layout units for --dump-layout
    #[arg(long, default_value = "0", value_parser = clap::value_parser!(i32).range(0..))]
    pub scroll: i32,
}

impl Args {
    fn cli_overrides(&self) -> Result<CliOverrides, AppError> {
        let settle_mode = self
            .settle_policy
            .as_deref()
            .map(str::parse::<SettleMode>)
            .transpose()?;
        Ok(CliOverrides {
            font_size: self.font_size,
            settle_mode,
            no_color: self.no_color,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = resolve_config(&args)?;

    mdscroll::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = detect_document_source(args.file.clone())?;

    if args.dump_layout {
        let json = dump_layout(&source, &config, &args)?;
        println!("{}", json);
        return Ok(());
    }

    mdscroll::view::run_with_source(&source, &config)?;

    Ok(())
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged)?;
    let with_cli = apply_cli_overrides(with_env, args.cli_overrides()?);
    Ok(with_cli.validate()?)
}

/// Lay out the document headlessly and serialize the settled pass.
fn dump_layout(
    source: &DocumentSource,
    config: &ResolvedConfig,
    args: &Args,
) -> Result<String, AppError> {
    let document = load_document(source)?;
    let viewport = CellGrid::for_font_size(config.font_size).viewport(args.width, args.height);

    let mut scroll = ScrollController::new(config.settle_policy());
    scroll.apply_delta(args.scroll);

    let layout = settle_fully(
        &document,
        &mut scroll,
        viewport,
        &config.layout_metrics(),
        &config.font_set(),
        &MonospaceMeasurer,
    );
    info!(
        blocks = layout.blocks.len(),
        offset = scroll.offset(),
        "Dumping layout"
    );
    Ok(serde_json::to_string_pretty(&layout)?)
}
