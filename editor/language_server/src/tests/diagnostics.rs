use super::mocks::*;
use super::utils::range_of;

use pretty_assertions::assert_eq;
use tower_lsp::lsp_types::*;

#[tokio::test]
async fn publishes_parse_diagnostics() {
    let mut service = MockService::new().await;
    let file = default_file();

    let published = service.did_open(&file, "Item { width: 40").await;
    assert_eq!(published.uri, file);
    assert_eq!(published.diagnostics.len(), 1);
    let diagnostic = &published.diagnostics[0];
    assert_eq!(
        diagnostic.code,
        Some(NumberOrString::String("P0003".to_string()))
    );
    assert_eq!(diagnostic.severity, Some(DiagnosticSeverity::Error));
    assert_eq!(diagnostic.source, Some("weft".to_string()));

    // the fix clears the diagnostics on the next change
    let published = service.did_change(&file, "Item { width: 40 }").await;
    assert!(published.diagnostics.is_empty());

    service.shutdown().await;
}

#[tokio::test]
async fn scan_diagnostics_carry_their_span() {
    let mut service = MockService::new().await;
    let file = default_file();

    let content = "Item { width: @ }";
    let published = service.did_open(&file, content).await;
    let codes: Vec<_> = published
        .diagnostics
        .iter()
        .map(|d| d.code.clone())
        .collect();
    // the scanner flags the character, the parser the hole it leaves in the binding
    assert_eq!(
        codes,
        vec![
            Some(NumberOrString::String("S0001".to_string())),
            Some(NumberOrString::String("P0002".to_string())),
        ]
    );
    assert_eq!(published.diagnostics[0].range, range_of("@", content));

    service.shutdown().await;
}

#[tokio::test]
async fn unclosed_body_points_back_at_its_brace() {
    let mut service = MockService::new().await;
    let file = default_file();

    let content = "Item { width: 40";
    let published = service.did_open(&file, content).await;
    let related = published.diagnostics[0]
        .related_information
        .as_ref()
        .expect("the unclosed delimiter names its opening brace");
    assert_eq!(related[0].location.range, range_of("{", content));

    service.shutdown().await;
}
