//! Case-dependent column merging for the adjective layout
//!
//! Adjective declension is syncretic: in the oblique cases the
//! masculine/neuter forms and the two plural classes each collapse to a
//! single surface form. The grid for those cases shows three merged
//! cells instead of five, fed by the `mf` and `pl` aggregate slots.
//!
//! The whole rule lives in this one lookup table. Cell builders must
//! not re-derive the merge with positional conditionals; they read the
//! column specs for the case and fetch the named source slot.

use crate::models::paradigm::{AdjSlot, Case};

/// Total grid columns of an adjective row
pub const ADJECTIVE_GRID_WIDTH: u8 = 5;

/// One visually distinct column group within an adjective row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Grid columns this cell occupies
    pub col_span: u8,

    /// Logical slot the cell text comes from
    pub source: AdjSlot,
}

impl ColumnSpec {
    const fn new(col_span: u8, source: AdjSlot) -> Self {
        Self { col_span, source }
    }
}

/// Cases without column merging: five independent cells
const FULL_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new(1, AdjSlot::M),
    ColumnSpec::new(1, AdjSlot::N),
    ColumnSpec::new(1, AdjSlot::F),
    ColumnSpec::new(1, AdjSlot::Mpl),
    ColumnSpec::new(1, AdjSlot::Opl),
];

/// Cases with m/n and mpl/opl merged: three cells spanning 2+1+2
const MERGED_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::new(2, AdjSlot::Mf),
    ColumnSpec::new(1, AdjSlot::F),
    ColumnSpec::new(2, AdjSlot::Pl),
];

/// Column layout of one adjective case row
pub fn adjective_columns(case: Case) -> &'static [ColumnSpec] {
    match case {
        Case::Nom | Case::Acc | Case::Voc => FULL_COLUMNS,
        Case::Gen | Case::Dat | Case::Inst | Case::Loc => MERGED_COLUMNS,
    }
}
