use super::mocks::*;
use super::utils::range_of;
use crate::source_map::SourceMap;

use pretty_assertions::assert_eq;
use tower_lsp::lsp_types::*;

async fn drive_selection_ranges_test(
    content: &str,
    positions: &[Position],
    expected_ranges: &Option<Vec<SelectionRange>>,
) {
    let mut service = MockService::new().await;
    let file = default_file();

    service.did_open(&file, content).await;

    let selection_ranges = service.selection_range(&file, positions).await;
    assert_eq!(&selection_ranges, expected_ranges);

    service.shutdown().await;
}

#[tokio::test]
async fn selection_range() {
    let content = "Item { on_close: { save() } }";
    let sm = SourceMap::new(content);

    let pos_save = sm.to_position(content.find("save").unwrap());
    let selection_range_save = SelectionRange {
        range: range_of("{ save() }", content),
        parent: Some(Box::new(SelectionRange {
            range: range_of("{ on_close: { save() } }", content),
            parent: None,
        })),
    };
    let pos_start = Position::new(0, 0);

    let tests = &[
        (vec![pos_save], Some(vec![selection_range_save])),
        // pos_start has no selection range, so nothing should be returned because otherwise the
        // condition that selection_range(request[i]) = response[i] would be broken.
        (vec![pos_start], None),
        (vec![pos_save, pos_start], None),
    ];

    for (positions, expected_ranges) in tests {
        drive_selection_ranges_test(content, positions, expected_ranges).await;
    }
}

#[tokio::test]
async fn selection_range_expands_through_nested_blocks() {
    let content = "A { B { function f() { g() } } }";
    let sm = SourceMap::new(content);

    let pos_g = sm.to_position(content.find('g').unwrap());
    let expected = SelectionRange {
        range: range_of("{ g() }", content),
        parent: Some(Box::new(SelectionRange {
            range: range_of("{ function f() { g() } }", content),
            parent: Some(Box::new(SelectionRange {
                range: range_of("{ B { function f() { g() } } }", content),
                parent: None,
            })),
        })),
    };

    drive_selection_ranges_test(content, &[pos_g], &Some(vec![expected])).await;
}
