//! Property-based tests for capture target classification and SVG wrapping.

use domshot::export::svg::{standalone_document, SVG_DOCTYPE, XML_DECLARATION};
use domshot::export::{ArtifactKind, CaptureTarget};
use proptest::prelude::*;

/// Strategy for ids that end in a hyphen and digits
fn arb_frame_id() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9_-]{0,20}", "[0-9]{1,6}").prop_map(|(stem, n)| format!("{}-{}", stem, n))
}

/// Strategy for ids without a numeric suffix
fn arb_diagram_id() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,20}[a-z_]"
}

proptest! {
    #[test]
    fn frame_ids_export_png(id in arb_frame_id()) {
        let target = CaptureTarget::classify(&id).unwrap();
        prop_assert_eq!(target.kind(), ArtifactKind::Png);
        prop_assert_eq!(target.file_name(), format!("{}.png", id));
    }

    #[test]
    fn diagram_ids_export_svg(id in arb_diagram_id()) {
        let target = CaptureTarget::classify(&id).unwrap();
        prop_assert_eq!(target.kind(), ArtifactKind::Svg);
        prop_assert_eq!(target.id(), id.as_str());
    }

    #[test]
    fn standalone_document_has_header_and_namespace(attrs in "( [a-w]{1,8}=\"[0-9]{1,4}\"){0,4}") {
        let markup = format!("<svg{}><g/></svg>", attrs);
        let doc = standalone_document(&markup);

        let expected_prefix = format!("{}\n{}\n", XML_DECLARATION, SVG_DOCTYPE);
        prop_assert!(doc.starts_with(&expected_prefix));
        prop_assert!(doc.contains(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
        prop_assert_eq!(doc.matches("xmlns=").count(), 1);
    }
}
