//! Capture orchestration
//!
//! The exporter snapshots the marked elements once, classifies them, and
//! then processes them strictly in document order: announce, measure,
//! capture, write, remove. Removing each element after its capture keeps
//! overlapping elements from showing up in later clips.

use crate::browser::{BrowserConfig, BrowserController, ClipRect, NavigationOptions, PageNavigator};
use crate::error::{ExportError, Result};
use crate::export::page::ExportPage;
use crate::export::svg;
use crate::export::target::{ArtifactKind, CaptureTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default marker class
pub const DEFAULT_MARKER_CLASS: &str = "screenshot";

/// Options for an export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    /// CSS class marking exportable elements
    pub marker_class: String,
    /// Directory receiving the artifacts
    pub output_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// One written output file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Artifact {
    /// Source element id
    pub id: String,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Path the artifact was written to
    pub path: PathBuf,
    /// Size in bytes
    pub bytes: usize,
    /// Element geometry at capture time
    pub clip: ClipRect,
}

/// Artifacts written during one run, in processing order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportReport {
    /// Written artifacts
    pub artifacts: Vec<Artifact>,
}

impl ExportReport {
    /// Number of artifacts written
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Whether nothing was exported
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Number of artifacts of the given kind
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.iter().filter(|a| a.kind == kind).count()
    }
}

/// Exports every marked element of a page
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Export all marked elements of `page`.
    ///
    /// One `Capturing <file>` line is written to `progress` before each
    /// capture. The first failure aborts the run; artifacts already
    /// written stay on disk. Existing files are overwritten.
    #[instrument(skip(self, page, progress), fields(marker = %self.options.marker_class))]
    pub async fn run<P, W>(&self, page: &P, progress: &mut W) -> Result<ExportReport>
    where
        P: ExportPage,
        W: Write + Send,
    {
        let targets = self.enumerate(page).await?;
        info!("Found {} marked elements", targets.len());

        tokio::fs::create_dir_all(&self.options.output_dir).await?;

        let mut report = ExportReport::default();
        for (element, target) in &targets {
            let artifact = self.export_one(page, element, target, progress).await?;
            report.artifacts.push(artifact);
        }

        info!("Exported {} artifacts", report.len());
        Ok(report)
    }

    /// Snapshot and classify the marked elements before any mutation.
    ///
    /// Fails on the first malformed or repeated id, before anything is
    /// written.
    async fn enumerate<P: ExportPage>(
        &self,
        page: &P,
    ) -> Result<Vec<(P::Element, CaptureTarget)>> {
        let elements = page.snapshot(&self.options.marker_class).await?;

        let mut seen = HashSet::with_capacity(elements.len());
        let mut targets = Vec::with_capacity(elements.len());
        for element in elements {
            let id = page.element_id(&element).await?.unwrap_or_default();
            let target = CaptureTarget::classify(&id)?;
            // Two elements sharing an id would write the same file
            if !seen.insert(id) {
                return Err(ExportError::DuplicateId(target.id().to_string()).into());
            }
            targets.push((element, target));
        }
        Ok(targets)
    }

    async fn export_one<P, W>(
        &self,
        page: &P,
        element: &P::Element,
        target: &CaptureTarget,
        progress: &mut W,
    ) -> Result<Artifact>
    where
        P: ExportPage,
        W: Write + Send,
    {
        let id = target.id();
        let file_name = target.file_name();

        writeln!(progress, "Capturing {}", file_name)?;
        progress.flush()?;

        // Geometry must be read while the element is still attached
        let clip = page.bounding_box(element, id).await?;

        let data = match target {
            CaptureTarget::Frame { .. } => page.clip_screenshot(clip).await?,
            CaptureTarget::Diagram { .. } => {
                let markup = page.vector_markup(element, id).await?;
                svg::standalone_document(&markup).into_bytes()
            }
        };

        let path = self.options.output_dir.join(&file_name);
        tokio::fs::write(&path, &data).await?;
        debug!(id, path = %path.display(), bytes = data.len(), "Wrote artifact");

        page.remove(element, id).await?;

        Ok(Artifact {
            id: id.to_string(),
            kind: target.kind(),
            path,
            bytes: data.len(),
            clip,
        })
    }
}

/// Launch a browser, load `input`, and export its marked elements.
///
/// The browser is closed before this returns, whatever the outcome.
pub async fn export_document<W>(
    config: BrowserConfig,
    input: &Path,
    options: ExportOptions,
    mut progress: W,
) -> Result<ExportReport>
where
    W: Write + Send,
{
    let navigation = NavigationOptions::with_timeout(config.timeout_ms);
    let exporter = Exporter::new(options);

    BrowserController::scoped(config, |page| async move {
        PageNavigator::open_file(&page, input, navigation).await?;
        exporter.run(&page, &mut progress).await
    })
    .await
}
