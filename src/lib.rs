//! domshot - Export marked DOM elements as PNG and SVG files
//!
//! This crate loads an HTML document into a headless browser, finds every
//! element carrying a marker class, and writes one artifact per element.
//!
//! # Features
//!
//! - **Frames**: ids ending in `-<digits>` are captured as PNG clips of
//!   the element's bounding box
//! - **Diagrams**: any other id is exported as a standalone SVG document
//!   built from the element's first `<svg>` descendant
//! - **Clean overlaps**: each element is removed from the page right after
//!   its capture, so later clips are not polluted by earlier elements
//!
//! # Architecture
//!
//! ```text
//! HTML file ──▶ Browser Controller (CDP) ──▶ Page Navigator
//!                                                 │
//!                                                 ▼
//!                                    Exporter (snapshot, classify)
//!                                          │            │
//!                                          ▼            ▼
//!                                    <id>.png      <id>.svg
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use domshot::browser::BrowserConfig;
//! use domshot::export::{export_document, ExportOptions};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = export_document(
//!         BrowserConfig::default(),
//!         Path::new("example/screenshots.html"),
//!         ExportOptions::default(),
//!         std::io::stdout(),
//!     )
//!     .await?;
//!
//!     println!("Exported {} files", report.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod error;
pub mod export;

// Re-exports for convenience
pub use browser::{BrowserConfig, BrowserController};
pub use error::{Error, Result};
pub use export::{export_document, CaptureTarget, ExportOptions, ExportPage, ExportReport, Exporter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
