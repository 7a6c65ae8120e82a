//! The page operations the exporter depends on
//!
//! [`ExportPage`] is implemented for the browser-backed [`PageHandle`];
//! tests drive the exporter through an in-memory document instead.

use crate::browser::{ClipRect, PageCapture, PageHandle};
use crate::error::{ExportError, Result};
use async_trait::async_trait;
use chromiumoxide::element::Element;

/// A loaded document whose marked elements can be captured and removed
#[async_trait]
pub trait ExportPage: Send + Sync {
    /// Handle to one element of the document
    type Element: Send + Sync;

    /// All elements carrying `marker_class`, in document order
    async fn snapshot(&self, marker_class: &str) -> Result<Vec<Self::Element>>;

    /// The element's `id` attribute
    async fn element_id(&self, element: &Self::Element) -> Result<Option<String>>;

    /// The element's bounding box in page coordinates
    async fn bounding_box(&self, element: &Self::Element, id: &str) -> Result<ClipRect>;

    /// PNG rendering of the page within `rect`
    async fn clip_screenshot(&self, rect: ClipRect) -> Result<Vec<u8>>;

    /// Outer markup of the element's first svg descendant
    async fn vector_markup(&self, element: &Self::Element, id: &str) -> Result<String>;

    /// Detach the element from the document
    async fn remove(&self, element: &Self::Element, id: &str) -> Result<()>;
}

#[async_trait]
impl ExportPage for PageHandle {
    type Element = Element;

    async fn snapshot(&self, marker_class: &str) -> Result<Vec<Element>> {
        let selector = format!(".{}", marker_class);
        match self.page.find_elements(selector.clone()).await {
            Ok(elements) => Ok(elements),
            Err(e) => Err(ExportError::ElementQuery {
                selector,
                reason: e.to_string(),
            }
            .into()),
        }
    }

    async fn element_id(&self, element: &Element) -> Result<Option<String>> {
        Ok(element.attribute("id").await?)
    }

    async fn bounding_box(&self, element: &Element, id: &str) -> Result<ClipRect> {
        PageCapture::bounding_box(element, id).await
    }

    async fn clip_screenshot(&self, rect: ClipRect) -> Result<Vec<u8>> {
        PageCapture::clip_screenshot(self, rect).await
    }

    async fn vector_markup(&self, element: &Element, id: &str) -> Result<String> {
        PageCapture::vector_markup(element)
            .await?
            .ok_or_else(|| ExportError::MissingVectorChild(id.to_string()).into())
    }

    async fn remove(&self, element: &Element, id: &str) -> Result<()> {
        PageCapture::remove(element, id).await
    }
}
