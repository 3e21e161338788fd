//! Variant dispatch and grid construction
//!
//! `GridBuilder` turns one `TableData` into a `GridDescription`. The
//! layout is chosen by `table_type` alone; a table whose populated
//! variant does not match its declared type renders as an empty grid.
//! Missing form entries render as blank cells.

use std::collections::HashMap;
use std::hash::Hash;

use crate::models::core::{FormEntry, TableData, TableType};
use crate::models::paradigm::{
    AdjSlot, AdjectiveTable, Case, GenderClass, NounTable, Number, Person, VerbTable,
};
use crate::review::ReviewOverlay;

use super::display_list::{GridCell, GridDescription, GridRow, GridSection};
use super::syncretism::adjective_columns;

/// Builds grid descriptions with review flags resolved through an
/// overlay. Outside an edit session the overlay is empty and cells
/// carry the stored baseline flags unchanged.
pub struct GridBuilder<'a> {
    overlay: &'a ReviewOverlay,
}

impl<'a> GridBuilder<'a> {
    pub fn new(overlay: &'a ReviewOverlay) -> Self {
        Self { overlay }
    }

    /// Render one fetched table. Dispatch is on `table_type` only.
    pub fn build(&self, data: &TableData) -> GridDescription {
        match data.table_type {
            TableType::Verb => match &data.table.verb {
                Some(table) => self.build_verb(table),
                None => GridDescription::default(),
            },
            TableType::Noun => match &data.table.noun {
                Some(table) => self.build_noun(table),
                None => GridDescription::default(),
            },
            TableType::Adjective => match &data.table.adjective {
                Some(table) => self.build_adjective(table),
                None => GridDescription::default(),
            },
            TableType::Unknown => GridDescription::default(),
        }
    }

    /// Verb layout: a Present section (sg/pl columns) and a Past
    /// section (five gender-class columns), person rows in both.
    fn build_verb(&self, table: &VerbTable) -> GridDescription {
        let present = GridSection {
            title: Some("Present".to_string()),
            column_headers: headers(Number::ALL.iter().map(|n| n.as_str())),
            rows: Person::ALL
                .iter()
                .map(|person| GridRow {
                    label: person.as_str().to_string(),
                    cells: self.row_cells(table.present.get(person), &Number::ALL),
                })
                .collect(),
        };

        let past = GridSection {
            title: Some("Past".to_string()),
            column_headers: headers(GenderClass::ALL.iter().map(|g| g.as_str())),
            rows: Person::ALL
                .iter()
                .map(|person| GridRow {
                    label: person.as_str().to_string(),
                    cells: self.row_cells(table.past.get(person), &GenderClass::ALL),
                })
                .collect(),
        };

        GridDescription {
            sections: vec![present, past],
        }
    }

    /// Noun layout: one section, case rows, sg/pl columns
    fn build_noun(&self, table: &NounTable) -> GridDescription {
        let section = GridSection {
            title: None,
            column_headers: headers(Number::ALL.iter().map(|n| n.as_str())),
            rows: Case::ALL
                .iter()
                .map(|case| GridRow {
                    label: case.as_str().to_string(),
                    cells: self.row_cells(table.get(case), &Number::ALL),
                })
                .collect(),
        };

        GridDescription {
            sections: vec![section],
        }
    }

    /// Adjective layout: one section, case rows, with column merging
    /// resolved per case through the syncretism lookup table
    fn build_adjective(&self, table: &AdjectiveTable) -> GridDescription {
        let section = GridSection {
            title: None,
            column_headers: headers(AdjSlot::LOGICAL.iter().map(|s| s.as_str())),
            rows: Case::ALL
                .iter()
                .map(|case| {
                    let row = table.get(case);
                    GridRow {
                        label: case.display_label().to_string(),
                        cells: adjective_columns(*case)
                            .iter()
                            .map(|spec| {
                                self.cell(
                                    row.and_then(|slots| slots.get(&spec.source)),
                                    spec.col_span,
                                )
                            })
                            .collect(),
                    }
                })
                .collect(),
        };

        GridDescription {
            sections: vec![section],
        }
    }

    /// Cells of one unmerged row, in declared column order
    fn row_cells<K: Eq + Hash>(
        &self,
        row: Option<&HashMap<K, FormEntry>>,
        columns: &[K],
    ) -> Vec<GridCell> {
        columns
            .iter()
            .map(|key| self.cell(row.and_then(|r| r.get(key)), 1))
            .collect()
    }

    /// One cell, blank when the slot has no entry
    fn cell(&self, entry: Option<&FormEntry>, col_span: u8) -> GridCell {
        match entry {
            Some(entry) if entry.is_present() => GridCell {
                text: entry.text.clone(),
                col_span,
                source_id: entry.id,
                needs_review: self.overlay.effective(entry),
            },
            _ => GridCell::blank(col_span),
        }
    }
}

/// Header row: empty label-column header followed by column names
fn headers<'s>(columns: impl Iterator<Item = &'s str>) -> Vec<String> {
    std::iter::once(String::new())
        .chain(columns.map(|c| c.to_string()))
        .collect()
}
