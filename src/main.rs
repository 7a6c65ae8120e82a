//! domshot command-line entry point
//!
//! Loads an HTML document and exports every marked element.

use anyhow::Context;
use clap::Parser;
use domshot::browser::BrowserConfig;
use domshot::export::{export_document, ExportOptions, DEFAULT_MARKER_CLASS};
use std::path::PathBuf;
use std::process::ExitCode;

/// Export marked DOM elements as PNG and SVG files
#[derive(Parser, Debug)]
#[command(name = "domshot")]
#[command(version)]
#[command(about = "Export marked DOM elements as PNG and SVG files")]
struct Args {
    /// HTML document to load
    #[arg(default_value = "example/screenshots.html")]
    input: PathBuf,

    /// Directory receiving the exported files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// CSS class marking exportable elements
    #[arg(short, long, default_value = DEFAULT_MARKER_CLASS)]
    marker: String,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Disable the browser sandbox
    #[arg(long)]
    no_sandbox: bool,

    /// Viewport width
    #[arg(long, default_value = "1920")]
    width: u32,

    /// Viewport height
    #[arg(long, default_value = "1080")]
    height: u32,

    /// Navigation timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Print the export report as JSON when done
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn browser_config(&self) -> BrowserConfig {
        let mut builder = BrowserConfig::builder()
            .viewport(self.width, self.height)
            .sandbox(!self.no_sandbox)
            .timeout_ms(self.timeout_ms);

        if let Some(ref path) = self.chrome_path {
            builder = builder.chrome_path(path.clone());
        }

        builder.build()
    }

    fn export_options(&self) -> ExportOptions {
        ExportOptions {
            marker_class: self.marker.clone(),
            output_dir: self.out_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };

    // stdout carries progress lines; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    tracing::info!("Exporting marked elements from {}", args.input.display());

    let report = export_document(
        args.browser_config(),
        &args.input,
        args.export_options(),
        std::io::stdout(),
    )
    .await
    .with_context(|| format!("failed to export {}", args.input.display()))?;

    if args.summary {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    tracing::info!("Done: {} files written", report.len());
    Ok(())
}
