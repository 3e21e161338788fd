//! Grammatical axes of the paradigm tables
//!
//! Enumerations for person, number, gender class, and case, plus the
//! typed table variants built from them. Wire names are the short
//! codes the morphology service emits (`"1p"`, `"sg"`, `"mpl"`, ...).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::core::FormEntry;

/// Grammatical person, rows of both verb sections
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1p")]
    First,
    #[serde(rename = "2p")]
    Second,
    #[serde(rename = "3p")]
    Third,
}

impl Person {
    /// Row order of the verb layout
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    pub fn as_str(&self) -> &'static str {
        match self {
            Person::First => "1p",
            Person::Second => "2p",
            Person::Third => "3p",
        }
    }
}

/// Grammatical number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Number {
    #[serde(rename = "sg")]
    Sg,
    #[serde(rename = "pl")]
    Pl,
}

impl Number {
    /// Column order of the present-tense and noun layouts
    pub const ALL: [Number; 2] = [Number::Sg, Number::Pl];

    pub fn as_str(&self) -> &'static str {
        match self {
            Number::Sg => "sg",
            Number::Pl => "pl",
        }
    }
}

/// Gender classes of the verb past-tense section.
///
/// Singular forms split by gender (m/f/n); plural forms split into
/// masculine-personal (`mpl`) and other (`opl`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderClass {
    #[serde(rename = "m")]
    M,
    #[serde(rename = "f")]
    F,
    #[serde(rename = "n")]
    N,
    #[serde(rename = "mpl")]
    Mpl,
    #[serde(rename = "opl")]
    Opl,
}

impl GenderClass {
    /// Column order of the past-tense layout
    pub const ALL: [GenderClass; 5] = [
        GenderClass::M,
        GenderClass::F,
        GenderClass::N,
        GenderClass::Mpl,
        GenderClass::Opl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderClass::M => "m",
            GenderClass::F => "f",
            GenderClass::N => "n",
            GenderClass::Mpl => "mpl",
            GenderClass::Opl => "opl",
        }
    }
}

/// Grammatical case, rows of the noun and adjective layouts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    #[serde(rename = "nom")]
    Nom,
    #[serde(rename = "gen")]
    Gen,
    #[serde(rename = "dat")]
    Dat,
    #[serde(rename = "acc")]
    Acc,
    #[serde(rename = "inst")]
    Inst,
    #[serde(rename = "loc")]
    Loc,
    #[serde(rename = "voc")]
    Voc,
}

impl Case {
    /// Canonical row order of the declension layouts
    pub const ALL: [Case; 7] = [
        Case::Nom,
        Case::Gen,
        Case::Dat,
        Case::Acc,
        Case::Inst,
        Case::Loc,
        Case::Voc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Nom => "nom",
            Case::Gen => "gen",
            Case::Dat => "dat",
            Case::Acc => "acc",
            Case::Inst => "inst",
            Case::Loc => "loc",
            Case::Voc => "voc",
        }
    }

    /// Row label of the adjective layout ("Nom", "Gen", ...)
    pub fn display_label(&self) -> &'static str {
        match self {
            Case::Nom => "Nom",
            Case::Gen => "Gen",
            Case::Dat => "Dat",
            Case::Acc => "Acc",
            Case::Inst => "Inst",
            Case::Loc => "Loc",
            Case::Voc => "Voc",
        }
    }
}

/// Logical column slots of the adjective layout.
///
/// `M` through `Opl` are the five gender-class positions; `Mf` and `Pl`
/// are the syncretic aggregate slots that merged cells read from in the
/// cases that collapse columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdjSlot {
    #[serde(rename = "m")]
    M,
    #[serde(rename = "n")]
    N,
    #[serde(rename = "f")]
    F,
    #[serde(rename = "mpl")]
    Mpl,
    #[serde(rename = "opl")]
    Opl,
    #[serde(rename = "mf")]
    Mf,
    #[serde(rename = "pl")]
    Pl,
}

impl AdjSlot {
    /// Column order of the adjective layout: the five logical slots,
    /// header order and unmerged-cell order alike
    pub const LOGICAL: [AdjSlot; 5] = [
        AdjSlot::M,
        AdjSlot::N,
        AdjSlot::F,
        AdjSlot::Mpl,
        AdjSlot::Opl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdjSlot::M => "m",
            AdjSlot::N => "n",
            AdjSlot::F => "f",
            AdjSlot::Mpl => "mpl",
            AdjSlot::Opl => "opl",
            AdjSlot::Mf => "mf",
            AdjSlot::Pl => "pl",
        }
    }
}

/// Conjugation table of a verb: two sections keyed by person
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct VerbTable {
    #[serde(default)]
    pub present: HashMap<Person, HashMap<Number, FormEntry>>,

    #[serde(default)]
    pub past: HashMap<Person, HashMap<GenderClass, FormEntry>>,
}

/// Declension table of a noun: case rows, sg/pl columns
pub type NounTable = HashMap<Case, HashMap<Number, FormEntry>>;

/// Declension table of an adjective: case rows, logical slot columns
pub type AdjectiveTable = HashMap<Case, HashMap<AdjSlot, FormEntry>>;
