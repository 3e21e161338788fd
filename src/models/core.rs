//! Core data structures for fetched paradigm tables
//!
//! A `TableData` value arrives as JSON from the morphology service and
//! carries exactly one populated table variant. The variant that gets
//! rendered is chosen by `table_type` alone; the table payload is never
//! inspected to guess the layout.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::paradigm::{AdjectiveTable, NounTable, VerbTable};

/// One inflected word form inside a paradigm table.
///
/// Entries are read-only once fetched; `needs_review` is the stored
/// baseline and is only ever changed through the review overlay's
/// batched save. The service emits `{}` for slots it has no form for,
/// so every field defaults and an entry without an id counts as absent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FormEntry {
    /// Word id, unique within the table. `None` marks an empty slot.
    #[serde(default)]
    pub id: Option<i64>,

    /// Surface text of the form
    #[serde(default)]
    pub text: String,

    /// Stored review flag for the owning user
    #[serde(default)]
    pub needs_review: bool,
}

impl FormEntry {
    /// Whether this slot actually holds a form
    pub fn is_present(&self) -> bool {
        self.id.is_some()
    }
}

/// Which paradigm layout a `TableData` value uses
#[repr(i8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
pub enum TableType {
    /// Word has no table (e.g. uninflected parts of speech)
    Unknown = -1,

    /// Conjugation table: present tense + past tense sections
    Verb = 0,

    /// Declension table: case rows, sg/pl columns
    Noun = 1,

    /// Declension table: case rows, gender-class columns with
    /// case-dependent column merging
    Adjective = 2,
}

impl Default for TableType {
    fn default() -> Self {
        TableType::Unknown
    }
}

/// The table payload; exactly one variant is populated upstream.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TableVariants {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<VerbTable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noun: Option<NounTable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjective: Option<AdjectiveTable>,
}

/// A fetched paradigm table, as delivered by the morphology service.
///
/// Invariant: the populated variant matches `table_type`. A value that
/// violates this renders as an empty grid rather than panicking; the
/// mismatch is a contract violation on the producer side.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TableData {
    #[serde(default)]
    pub table_type: TableType,

    /// Older service builds named this field `conjugation_table`
    #[serde(default, alias = "conjugation_table")]
    pub table: TableVariants,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_deserializes_as_absent() {
        let entry: FormEntry = serde_json::from_str("{}").unwrap();
        assert!(!entry.is_present());
        assert_eq!(entry.text, "");
        assert!(!entry.needs_review);
    }

    #[test]
    fn test_form_entry_roundtrip() {
        let entry: FormEntry =
            serde_json::from_str(r#"{"id": 5, "text": "dobrego", "needs_review": true}"#).unwrap();
        assert_eq!(entry.id, Some(5));
        assert_eq!(entry.text, "dobrego");
        assert!(entry.needs_review);
    }

    #[test]
    fn test_table_type_wire_values() {
        let t: TableType = serde_json::from_str("2").unwrap();
        assert_eq!(t, TableType::Adjective);
        let t: TableType = serde_json::from_str("-1").unwrap();
        assert_eq!(t, TableType::Unknown);
    }

    #[test]
    fn test_table_field_accepts_legacy_name() {
        let data: TableData =
            serde_json::from_str(r#"{"table_type": 1, "conjugation_table": {"noun": {}}}"#)
                .unwrap();
        assert_eq!(data.table_type, TableType::Noun);
        assert!(data.table.noun.is_some());
    }
}
