//! Paradigm table rendering API

use wasm_bindgen::prelude::*;

use crate::layout::GridBuilder;
use crate::models::core::TableData;
use crate::wasm_log;

use super::helpers;
use super::review::with_session;

/// Render a fetched paradigm table to its grid description.
///
/// Review flags in the grid are effective values: pending edits from
/// the open edit session overlay the stored baselines. A table whose
/// populated variant does not match its `table_type` yields an empty
/// grid.
#[wasm_bindgen(js_name = renderParadigmTable)]
pub fn render_paradigm_table(table_data: JsValue) -> Result<JsValue, JsValue> {
    let data: TableData = helpers::deserialize(table_data, "Failed to parse table data")?;

    let grid = with_session(|session| GridBuilder::new(session).build(&data));
    wasm_log!(
        "rendered table type {:?}: {} section(s)",
        data.table_type,
        grid.sections.len()
    );

    helpers::serialize(&grid, "Failed to serialize grid description")
}
