//! Capture targets
//!
//! Every marked element is classified exactly once, when the page is
//! enumerated. Ids ending in `-<digits>` are frames of a raster sequence
//! and are exported as PNG clips; everything else is a vector diagram.

use crate::error::{ExportError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn frame_suffix() -> &'static Regex {
    static FRAME_SUFFIX: OnceLock<Regex> = OnceLock::new();
    FRAME_SUFFIX.get_or_init(|| Regex::new(r"-[0-9]+$").expect("frame suffix pattern is valid"))
}

/// Kind of artifact produced for a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Raster clip of the page
    Png,
    /// Standalone vector document
    Svg,
}

impl ArtifactKind {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Png => "png",
            ArtifactKind::Svg => "svg",
        }
    }

    /// MIME type of the artifact
    pub fn mime_type(&self) -> &'static str {
        match self {
            ArtifactKind::Png => "image/png",
            ArtifactKind::Svg => "image/svg+xml",
        }
    }
}

/// A marked element, tagged by how it will be exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureTarget {
    /// One frame of an animated sequence
    Frame {
        /// Element id
        id: String,
    },
    /// A static vector diagram
    Diagram {
        /// Element id
        id: String,
    },
}

impl CaptureTarget {
    /// Classify an element id.
    ///
    /// The id becomes a file name verbatim, so ids that are empty or that
    /// would escape the output directory are rejected.
    pub fn classify(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(ExportError::MissingId.into());
        }
        if id == "." || id == ".." || id.contains('/') || id.contains('\\') {
            return Err(ExportError::UnsafeId(id.to_string()).into());
        }

        let id = id.to_string();
        if frame_suffix().is_match(&id) {
            Ok(CaptureTarget::Frame { id })
        } else {
            Ok(CaptureTarget::Diagram { id })
        }
    }

    /// Element id
    pub fn id(&self) -> &str {
        match self {
            CaptureTarget::Frame { id } | CaptureTarget::Diagram { id } => id,
        }
    }

    /// Artifact kind produced for this target
    pub fn kind(&self) -> ArtifactKind {
        match self {
            CaptureTarget::Frame { .. } => ArtifactKind::Png,
            CaptureTarget::Diagram { .. } => ArtifactKind::Svg,
        }
    }

    /// Output file name, `<id>.<ext>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.id(), self.kind().extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_suffix_is_frame() {
        let target = CaptureTarget::classify("frame-1").unwrap();
        assert_eq!(target, CaptureTarget::Frame { id: "frame-1".to_string() });
        assert_eq!(target.file_name(), "frame-1.png");
    }

    #[test]
    fn test_multi_digit_suffix_is_frame() {
        let target = CaptureTarget::classify("intro-anim-042").unwrap();
        assert_eq!(target.kind(), ArtifactKind::Png);
    }

    #[test]
    fn test_plain_id_is_diagram() {
        let target = CaptureTarget::classify("diagram-a").unwrap();
        assert_eq!(target, CaptureTarget::Diagram { id: "diagram-a".to_string() });
        assert_eq!(target.file_name(), "diagram-a.svg");
    }

    #[test]
    fn test_digits_without_hyphen_is_diagram() {
        assert_eq!(CaptureTarget::classify("frame1").unwrap().kind(), ArtifactKind::Svg);
        assert_eq!(CaptureTarget::classify("frame-1a").unwrap().kind(), ArtifactKind::Svg);
        assert_eq!(CaptureTarget::classify("frame-").unwrap().kind(), ArtifactKind::Svg);
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = CaptureTarget::classify("").unwrap_err();
        assert!(err.to_string().contains("no id"));
    }

    #[test]
    fn test_path_like_id_rejected() {
        assert!(CaptureTarget::classify("../escape-1").is_err());
        assert!(CaptureTarget::classify("a\\b").is_err());
        assert!(CaptureTarget::classify("..").is_err());
    }

    #[test]
    fn test_artifact_kind_metadata() {
        assert_eq!(ArtifactKind::Png.mime_type(), "image/png");
        assert_eq!(ArtifactKind::Svg.extension(), "svg");
        assert_eq!(serde_json::to_string(&ArtifactKind::Svg).unwrap(), "\"svg\"");
    }
}
