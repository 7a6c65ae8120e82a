//! Browser automation module
//!
//! This module provides browser control through ChromiumOxide:
//! lifecycle management, navigation, and element capture.

pub mod capture;
pub mod controller;
pub mod navigation;

pub use capture::{ClipRect, PageCapture};
pub use controller::{BrowserConfig, BrowserController, PageHandle};
pub use navigation::{NavigationOptions, PageNavigator, UrlValidator};
