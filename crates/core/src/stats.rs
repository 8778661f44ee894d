use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use serde::Serialize;

use crate::config::CountMode;

/// Label of the `true` total in flat mode.
pub const TRUE_COUNT_KEY: &str = "True Count";
/// Label of the `false` total in flat mode.
pub const FALSE_COUNT_KEY: &str = "False Count";

/// Count per key, ordered by key.
pub type CountMap = BTreeMap<String, usize>;

/// Result of one counting pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Algorithm that produced `counts`.
    pub mode: CountMode,
    /// Whether row 0 was treated as a header and skipped.
    pub has_header: bool,
    /// Number of rows counted (header excluded).
    pub data_rows: usize,
    /// Boolean columns used for combination keys. Empty in flat mode.
    pub boolean_columns: Vec<usize>,
    pub counts: CountMap,
}

impl Tally {
    /// Count stored under `key`, zero when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(true, false)` totals in flat mode.
    #[must_use]
    pub fn flat_totals(&self) -> (usize, usize) {
        (self.get(TRUE_COUNT_KEY), self.get(FALSE_COUNT_KEY))
    }
}
