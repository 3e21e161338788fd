//! Grid Layout Engine
//!
//! This module turns a fetched `TableData` into a grid description —
//! sections, header rows, and cells with column spans — that the
//! JavaScript side renders to DOM without any layout logic of its own.

pub mod display_list;
pub mod engine;
pub mod syncretism;

pub use display_list::{GridCell, GridDescription, GridRow, GridSection};
pub use engine::GridBuilder;
pub use syncretism::{adjective_columns, ColumnSpec};
