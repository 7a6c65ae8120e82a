//! Element export module
//!
//! Classification of marked elements, standalone SVG wrapping, and the
//! orchestrator that captures and removes elements in document order.

pub mod exporter;
pub mod page;
pub mod svg;
pub mod target;

pub use exporter::{
    export_document, Artifact, ExportOptions, ExportReport, Exporter, DEFAULT_MARKER_CLASS,
};
pub use page::ExportPage;
pub use target::{ArtifactKind, CaptureTarget};
