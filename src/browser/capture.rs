//! Element capture functionality
//!
//! This module handles clipped screenshots, element geometry, vector
//! markup serialization, and element removal.

use crate::browser::PageHandle;
use crate::error::{CaptureError, Result};
use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, Viewport};
use chromiumoxide::element::Element;
use chromiumoxide::page::ScreenshotParams;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Page-coordinate geometry of an element, scroll offsets included
const BOUNDING_BOX_FN: &str = r#"
    function() {
        const r = this.getBoundingClientRect();
        return JSON.stringify({
            x: r.left + window.scrollX,
            y: r.top + window.scrollY,
            width: r.width,
            height: r.height
        });
    }
"#;

/// Outer markup of the first svg descendant, or null
const VECTOR_MARKUP_FN: &str = r#"
    function() {
        const svg = this.querySelector('svg');
        return svg ? svg.outerHTML : null;
    }
"#;

const REMOVE_FN: &str = r#"
    function() {
        if (this.parentNode) {
            this.parentNode.removeChild(this);
        }
    }
"#;

/// Axis-aligned rectangle in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width in CSS pixels
    pub width: f64,
    /// Height in CSS pixels
    pub height: f64,
}

impl ClipRect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Convert to a CDP clip viewport at scale 1
    pub fn to_viewport(&self) -> Viewport {
        Viewport {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            scale: 1.0,
        }
    }
}

/// Element capture functionality
pub struct PageCapture;

impl PageCapture {
    /// PNG screenshot of the page restricted to `rect`
    #[instrument(skip(page))]
    pub async fn clip_screenshot(page: &PageHandle, rect: ClipRect) -> Result<Vec<u8>> {
        if rect.is_empty() {
            return Err(CaptureError::ScreenshotFailed(format!(
                "empty clip region {}x{}",
                rect.width, rect.height
            ))
            .into());
        }

        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .clip(rect.to_viewport())
            .from_surface(true)
            .capture_beyond_viewport(true)
            .build();

        let data = page
            .page
            .screenshot(params)
            .await
            .map_err(|e| CaptureError::ScreenshotFailed(e.to_string()))?;

        debug!("Clip screenshot captured: {} bytes", data.len());
        Ok(data)
    }

    /// Compute the element's bounding box in page coordinates
    pub async fn bounding_box(element: &Element, id: &str) -> Result<ClipRect> {
        let failed = |reason: String| CaptureError::BoundingBoxFailed {
            id: id.to_string(),
            reason,
        };

        let returns = element
            .call_js_fn(BOUNDING_BOX_FN, false)
            .await
            .map_err(|e| failed(e.to_string()))?;

        let json = returns
            .result
            .value
            .as_ref()
            .and_then(|v| v.as_str())
            .ok_or_else(|| failed("no geometry returned".to_string()))?;

        let rect: ClipRect = serde_json::from_str(json).map_err(|e| failed(e.to_string()))?;
        debug!(id, ?rect, "Computed bounding box");
        Ok(rect)
    }

    /// Outer HTML of the element's first svg descendant, if any
    pub async fn vector_markup(element: &Element) -> Result<Option<String>> {
        let returns = element
            .call_js_fn(VECTOR_MARKUP_FN, false)
            .await
            .map_err(|e| CaptureError::MarkupFailed(e.to_string()))?;

        Ok(returns
            .result
            .value
            .as_ref()
            .and_then(|v| v.as_str())
            .map(str::to_string))
    }

    /// Detach the element from the document
    pub async fn remove(element: &Element, id: &str) -> Result<()> {
        element
            .call_js_fn(REMOVE_FN, false)
            .await
            .map_err(|e| CaptureError::RemoveFailed {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_rect_to_viewport() {
        let rect = ClipRect::new(10.0, 20.5, 300.0, 150.0);
        let viewport = rect.to_viewport();
        assert_eq!(viewport.x, 10.0);
        assert_eq!(viewport.y, 20.5);
        assert_eq!(viewport.width, 300.0);
        assert_eq!(viewport.height, 150.0);
        assert_eq!(viewport.scale, 1.0);
    }

    #[test]
    fn test_clip_rect_empty() {
        assert!(ClipRect::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(ClipRect::new(0.0, 0.0, 10.0, -1.0).is_empty());
        assert!(!ClipRect::new(5.0, 5.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_clip_rect_from_script_json() {
        let rect: ClipRect =
            serde_json::from_str(r#"{"x":8,"y":1200.5,"width":640,"height":480}"#).unwrap();
        assert_eq!(rect, ClipRect::new(8.0, 1200.5, 640.0, 480.0));
    }
}
