//! Standalone SVG documents
//!
//! Inline `<svg>` markup serialized out of an HTML page lacks the XML
//! prolog and, usually, the namespace declaration. This module turns it
//! into a file a plain XML consumer can open.

/// SVG namespace URI
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// XML declaration written at the top of every exported SVG
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;

/// SVG 1.1 document type declaration
pub const SVG_DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

/// Wrap inline SVG markup into a standalone document.
///
/// The namespace is injected by replacing the first `<svg` occurrence,
/// unless the exact `xmlns="http://www.w3.org/2000/svg"` attribute is
/// already present. Other spellings of the namespace declaration are not
/// recognised.
pub fn standalone_document(markup: &str) -> String {
    let xmlns = format!("xmlns=\"{}\"", SVG_NAMESPACE);
    let body = if markup.contains(&xmlns) {
        markup.to_string()
    } else {
        markup.replacen("<svg", &format!("<svg {}", xmlns), 1)
    };

    format!("{}\n{}\n{}", XML_DECLARATION, SVG_DOCTYPE, body)
}
