use super::mocks::*;
use super::utils::range_of;

use pretty_assertions::assert_eq;
use tower_lsp::lsp_types::*;

async fn drive_folding_ranges_test(content: &str, expected_ranges: &[Range]) {
    let mut service = MockService::new().await;
    let file = default_file();

    service.did_open(&file, content).await;

    let folding_ranges = service.folding_range(&file).await.unwrap();
    assert_eq!(folding_ranges.len(), expected_ranges.len());
    for (range, expected_range) in folding_ranges.iter().zip(expected_ranges) {
        assert_eq!(range.start_line, expected_range.start.line);
        assert_eq!(range.start_character, Some(expected_range.start.character));
        assert_eq!(range.end_line, expected_range.end.line);
        assert_eq!(range.end_character, Some(expected_range.end.character));
    }

    service.shutdown().await;
}

#[tokio::test]
async fn folding_range() {
    let content = r#"Window {
    title: "main"
    on_close: {
        save()
    }
    header: Banner {
        height: 40
    }
    function layout(w, h) {
        return w * h
    }
}"#;
    let window_body = &content[content.find('{').unwrap()..];
    let expected_ranges = &[
        range_of(window_body, content),
        range_of("{\n        save()\n    }", content),
        range_of("{\n        height: 40\n    }", content),
        range_of("{\n        return w * h\n    }", content),
    ];
    drive_folding_ranges_test(content, expected_ranges).await;
}

#[tokio::test]
async fn folding_range_empty_document() {
    let mut service = MockService::new().await;
    let file = default_file();

    service.did_open(&file, "").await;

    let folding_ranges = service.folding_range(&file).await.unwrap();
    assert!(folding_ranges.is_empty());

    service.shutdown().await;
}

#[tokio::test]
async fn folding_range_survives_a_parse_error() {
    // the body is never closed; its folding range runs to the recovery point
    let content = "Window {\n    width: 40";
    let expected_ranges = &[range_of("{\n    width: 40", content)];
    drive_folding_ranges_test(content, expected_ranges).await;
}
