//! Regression tests pinning the adjective column-merge rules
//!
//! Two historical implementations of this layout disagreed on how the
//! oblique cases merge columns; these tests pin the canonical
//! aggregate-key behavior.

use paradigm_wasm::layout::{adjective_columns, GridBuilder};
use paradigm_wasm::models::paradigm::{AdjSlot, Case};
use paradigm_wasm::models::core::TableData;
use paradigm_wasm::review::ReviewOverlay;
use serde_json::json;

fn render(data: serde_json::Value) -> paradigm_wasm::layout::GridDescription {
    let data: TableData = serde_json::from_value(data).unwrap();
    let overlay = ReviewOverlay::new();
    GridBuilder::new(&overlay).build(&data)
}

fn full_adjective_data() -> serde_json::Value {
    json!({
        "table_type": 2,
        "table": {
            "adjective": {
                "nom":  {"m": {"id": 1, "text": "dobry", "needs_review": false},
                         "n": {"id": 2, "text": "dobre", "needs_review": false},
                         "f": {"id": 3, "text": "dobra", "needs_review": false},
                         "mpl": {"id": 4, "text": "dobrzy", "needs_review": false},
                         "opl": {"id": 8, "text": "dobre", "needs_review": false}},
                "gen":  {"mf": {"id": 5, "text": "dobrego", "needs_review": false},
                         "f":  {"id": 6, "text": "dobrej", "needs_review": false},
                         "pl": {"id": 7, "text": "dobrych", "needs_review": false}}
            }
        }
    })
}

#[test]
fn unmerged_cases_yield_five_independent_cells() {
    for case in [Case::Nom, Case::Acc, Case::Voc] {
        let cols = adjective_columns(case);
        assert_eq!(cols.len(), 5, "case {}", case.as_str());
        assert!(cols.iter().all(|c| c.col_span == 1));
    }

    let grid = render(full_adjective_data());
    // Header order matches the unmerged cell order
    assert_eq!(
        grid.sections[0].column_headers,
        ["", "m", "n", "f", "mpl", "opl"]
    );
    let nom = &grid.sections[0].rows[0];
    assert_eq!(nom.label, "Nom");
    assert_eq!(nom.cells.len(), 5);
    let texts: Vec<&str> = nom.cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, ["dobry", "dobre", "dobra", "dobrzy", "dobre"]);
}

#[test]
fn merged_cases_yield_three_cells_spanning_2_1_2() {
    for case in [Case::Gen, Case::Dat, Case::Inst, Case::Loc] {
        let shape: Vec<(u8, AdjSlot)> = adjective_columns(case)
            .iter()
            .map(|c| (c.col_span, c.source))
            .collect();
        assert_eq!(
            shape,
            [(2, AdjSlot::Mf), (1, AdjSlot::F), (2, AdjSlot::Pl)],
            "case {}",
            case.as_str()
        );
    }
}

#[test]
fn col_spans_sum_to_five_for_every_case() {
    for case in Case::ALL {
        let total: u8 = adjective_columns(case).iter().map(|c| c.col_span).sum();
        assert_eq!(total, 5, "case {}", case.as_str());
    }
}

#[test]
fn genitive_row_reads_aggregate_slots() {
    let grid = render(full_adjective_data());
    let gen = &grid.sections[0].rows[1];
    assert_eq!(gen.label, "Gen");

    let shape: Vec<(u8, &str, Option<i64>)> = gen
        .cells
        .iter()
        .map(|c| (c.col_span, c.text.as_str(), c.source_id))
        .collect();
    assert_eq!(
        shape,
        [
            (2, "dobrego", Some(5)),
            (1, "dobrej", Some(6)),
            (2, "dobrych", Some(7)),
        ]
    );
}

#[test]
fn merged_case_without_aggregate_data_renders_blank_cells() {
    // A row populated only with logical slots must not leak them into
    // the merged cells; the aggregate slots are the only sources.
    let grid = render(json!({
        "table_type": 2,
        "table": {
            "adjective": {
                "dat": {"m": {"id": 11, "text": "dobremu", "needs_review": false},
                        "f": {"id": 12, "text": "dobrej", "needs_review": false}}
            }
        }
    }));

    let dat = &grid.sections[0].rows[2];
    assert_eq!(dat.label, "Dat");
    assert_eq!(dat.cells.len(), 3);
    assert_eq!(dat.cells[0].text, "");
    assert_eq!(dat.cells[0].source_id, None);
    assert_eq!(dat.cells[1].text, "dobrej");
    assert_eq!(dat.cells[2].text, "");
}

#[test]
fn all_seven_case_rows_render_in_canonical_order() {
    let grid = render(full_adjective_data());
    let labels: Vec<&str> = grid.sections[0]
        .rows
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(labels, ["Nom", "Gen", "Dat", "Acc", "Inst", "Loc", "Voc"]);
}
