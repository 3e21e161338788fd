//! Grid description returned to JavaScript
//!
//! This module defines the output structure of the layout engine. The
//! grid description carries everything the host needs to render table
//! DOM — section titles, column headers, row labels, cell text, column
//! spans, and per-cell review state — so the JavaScript side applies no
//! layout rules of its own.

use serde::{Deserialize, Serialize};

/// Top-level grid description for one paradigm table
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GridDescription {
    /// Rendered sections, in display order. Verb tables produce two
    /// (Present, Past); noun and adjective tables produce one. Empty
    /// when the table carries no layout (or violates the type/variant
    /// contract).
    pub sections: Vec<GridSection>,
}

impl GridDescription {
    /// Whether there is anything to render
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// One visually separate sub-table
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridSection {
    /// Section heading ("Present", "Past"); `None` for single-section
    /// layouts
    pub title: Option<String>,

    /// Header row, leading with the empty label-column header
    pub column_headers: Vec<String>,

    /// Data rows in display order
    pub rows: Vec<GridRow>,
}

/// One logical row: a label plus its ordered cells
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GridRow {
    pub label: String,
    pub cells: Vec<GridCell>,
}

/// One visually distinct cell
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// Form text; empty for slots with no data
    pub text: String,

    /// Number of grid columns this cell occupies
    pub col_span: u8,

    /// Id of the form entry feeding this cell, for hit testing and
    /// review toggling. `None` for blank cells.
    pub source_id: Option<i64>,

    /// Effective review flag (overlay value over the stored baseline),
    /// so the host can apply the highlight class directly
    pub needs_review: bool,
}

impl GridCell {
    /// A blank cell spanning `col_span` columns
    pub fn blank(col_span: u8) -> Self {
        Self {
            text: String::new(),
            col_span,
            source_id: None,
            needs_review: false,
        }
    }
}

impl Default for GridCell {
    fn default() -> Self {
        GridCell::blank(1)
    }
}
