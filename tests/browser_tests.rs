//! Browser module tests
//!
//! These tests verify the browser configuration and navigation types.
//! The end-to-end test needs a local Chrome/Chromium and is ignored by
//! default: run it with `cargo test -- --ignored`.

use domshot::browser::{BrowserConfig, ClipRect, NavigationOptions, UrlValidator};
use domshot::export::{export_document, ArtifactKind, ExportOptions};

#[test]
fn test_browser_config_default() {
    let config = BrowserConfig::default();
    assert!(config.headless);
    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
    assert!(config.sandbox);
    assert_eq!(config.timeout_ms, 30000);
    assert!(config.chrome_path.is_none());
    assert!(config.extra_args.is_empty());
}

#[test]
fn test_browser_config_builder() {
    let config = BrowserConfig::builder()
        .headless(false)
        .viewport(1280, 720)
        .sandbox(false)
        .timeout_ms(60000)
        .arg("--disable-gpu")
        .arg("--no-first-run")
        .build();

    assert!(!config.headless);
    assert_eq!(config.width, 1280);
    assert_eq!(config.height, 720);
    assert!(!config.sandbox);
    assert_eq!(config.timeout_ms, 60000);
    assert_eq!(config.extra_args.len(), 2);
}

#[test]
fn test_navigation_options_default() {
    let opts = NavigationOptions::default();
    assert_eq!(opts.timeout_ms, 30000);
    assert_eq!(NavigationOptions::with_timeout(2500).timeout_ms, 2500);
}

#[test]
fn test_file_url_for_bundled_example() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("example")
        .join("screenshots.html");
    let url = UrlValidator::file_url(&path).unwrap();
    assert!(url.as_str().starts_with("file://"));
    assert!(UrlValidator::validate(url.as_str()).is_ok());
}

#[test]
fn test_clip_rect_serialization() {
    let rect = ClipRect::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&rect).unwrap();
    assert_eq!(json, r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#);
}

const SCENARIO_HTML: &str = r#"<!DOCTYPE html>
<html>
<body style="margin: 0">
  <div id="diagram-a" class="screenshot" style="position: absolute; top: 0; left: 0; width: 100px; height: 100px">
    <svg width="100" height="100"><rect width="50" height="50" fill="teal"/></svg>
  </div>
  <div id="frame-1" class="screenshot" style="position: absolute; top: 0; left: 0; width: 120px; height: 80px; background: red"></div>
  <div id="frame-2" class="screenshot" style="position: absolute; top: 0; left: 0; width: 120px; height: 80px; background: blue"></div>
</body>
</html>
"#;

#[tokio::test]
#[ignore = "requires a local Chrome/Chromium"]
async fn test_export_document_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("screenshots.html");
    std::fs::write(&input, SCENARIO_HTML).unwrap();
    let out_dir = dir.path().join("out");

    let config = BrowserConfig::builder().sandbox(false).build();
    let mut progress = Vec::new();
    let report = export_document(
        config,
        &input,
        ExportOptions {
            output_dir: out_dir.clone(),
            ..Default::default()
        },
        &mut progress,
    )
    .await
    .unwrap();

    assert_eq!(
        String::from_utf8(progress).unwrap(),
        "Capturing diagram-a.svg\nCapturing frame-1.png\nCapturing frame-2.png\n"
    );
    assert_eq!(report.count(ArtifactKind::Png), 2);

    let svg = std::fs::read_to_string(out_dir.join("diagram-a.svg")).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"<svg xmlns="http://www.w3.org/2000/svg""#));

    let png = std::fs::read(out_dir.join("frame-2.png")).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}
