use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column name that collects free-text description fragments.
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Canonical field set consumed downstream (CSV columns, spreadsheet sync).
pub const OUTPUT_COLUMNS: [&str; 7] = [
    "S No",
    "Date",
    "Cheque No",
    "Description",
    "Withdrawal",
    "Deposit",
    "Balance",
];

/// A single extracted transaction: column name -> normalized value.
///
/// Column names come from the active format descriptor, so the field set is
/// open-ended; the canonical columns in [`OUTPUT_COLUMNS`] are always present
/// for the built-in formats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
}

impl Transaction {
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: String) {
        self.fields.insert(column.to_string(), value);
    }

    pub fn description(&self) -> &str {
        self.get(DESCRIPTION_COLUMN)
    }

    /// Append a continuation fragment to the description, space-joined.
    pub fn append_description(&mut self, fragment: &str) {
        let entry = self
            .fields
            .entry(DESCRIPTION_COLUMN.to_string())
            .or_default();
        if entry.is_empty() {
            entry.push_str(fragment);
        } else {
            entry.push(' ');
            entry.push_str(fragment);
        }
    }
}

/// The result of one extraction run. Owned by the caller; the engine keeps
/// no state past the call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub bank: String,
    pub transactions: Vec<Transaction>,
}
