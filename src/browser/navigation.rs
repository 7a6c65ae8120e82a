//! Page navigation functionality
//!
//! This module loads documents into a page, with timeout handling and
//! resolution of local files into `file://` URLs.

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Resolves once the document and its subresources have loaded
const LOAD_COMPLETE: &str = r#"
    new Promise(resolve => {
        if (document.readyState === 'complete') {
            resolve(true);
        } else {
            window.addEventListener('load', () => resolve(true));
        }
    })
"#;

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout in milliseconds (default: 30000)
    pub timeout_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

impl NavigationOptions {
    /// Options with the given timeout
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}

/// URL validation utilities
pub struct UrlValidator;

impl UrlValidator {
    /// Validate a URL for navigation
    pub fn validate(url: &str) -> std::result::Result<(), String> {
        if url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }

        if !url.starts_with("http://")
            && !url.starts_with("https://")
            && !url.starts_with("file://")
        {
            return Err(format!(
                "URL must start with http://, https://, or file://: {}",
                url
            ));
        }

        Ok(())
    }

    /// Resolve a local path to an absolute `file://` URL
    pub fn file_url(path: &Path) -> Result<Url> {
        let absolute = std::fs::canonicalize(path)
            .map_err(|e| NavigationError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        Url::from_file_path(&absolute).map_err(|_| {
            NavigationError::InvalidUrl(format!(
                "cannot express {} as a file URL",
                absolute.display()
            ))
            .into()
        })
    }
}

/// Page navigator
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL and wait for the load event, both bounded by
    /// the configured timeout
    #[instrument(skip(page))]
    pub async fn goto(page: &PageHandle, url: &str, options: NavigationOptions) -> Result<()> {
        UrlValidator::validate(url).map_err(NavigationError::InvalidUrl)?;

        info!("Navigating to: {}", url);
        let timeout = Duration::from_millis(options.timeout_ms);

        tokio::time::timeout(timeout, page.page.goto(url))
            .await
            .map_err(|_| NavigationError::Timeout(options.timeout_ms))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        tokio::time::timeout(timeout, page.page.evaluate(LOAD_COMPLETE))
            .await
            .map_err(|_| NavigationError::Timeout(options.timeout_ms))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        debug!("Navigation complete: {}", url);
        Ok(())
    }

    /// Load a local HTML document
    #[instrument(skip(page, options))]
    pub async fn open_file(page: &PageHandle, path: &Path, options: NavigationOptions) -> Result<()> {
        let url = UrlValidator::file_url(path)?;
        Self::goto(page, url.as_str(), options).await
    }
}
