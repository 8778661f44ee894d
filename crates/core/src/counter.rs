use alloc::string::String;
use alloc::vec::Vec;

use crate::classifier::boolean_columns;
use crate::config::{CountMode, HeaderSplit, TallyOptions};
use crate::error::Result;
use crate::parser::{Dataset, Row};
use crate::stats::{CountMap, FALSE_COUNT_KEY, TRUE_COUNT_KEY, Tally};
use crate::token::BoolToken;

const KEY_SEPARATOR: &str = ", ";

/// Count boolean values in a parsed dataset.
///
/// This is the core entry point for the library. Both modes share the same
/// parsed rows and header detection; `options.header_split` only affects the
/// flat-mode header check.
///
/// # Errors
///
/// In combination mode, returns [`crate::TallyError::NoBooleanColumns`] when
/// no column holds only boolean tokens.
pub fn count_booleans(dataset: &Dataset, options: &TallyOptions) -> Result<Tally> {
    match options.mode {
        CountMode::Combination => count_combinations(dataset),
        CountMode::Flat => Ok(count_flat(dataset, options.header_split)),
    }
}

/// Group data rows by their tuple of boolean-column values.
///
/// Columns are classified over every data row before any row is counted.
///
/// # Errors
///
/// Returns [`crate::TallyError::NoBooleanColumns`] when classification finds
/// nothing to group by.
pub fn count_combinations(dataset: &Dataset) -> Result<Tally> {
    let has_header = dataset.has_header(HeaderSplit::QuoteAware);
    let data_rows = dataset.data_rows(has_header);

    // Pass 1: classify.
    let columns = boolean_columns(data_rows)?;

    // Pass 2: count.
    let mut counts = CountMap::new();
    for row in data_rows {
        *counts.entry(combination_key(row, &columns)).or_insert(0) += 1;
    }

    Ok(Tally {
        mode: CountMode::Combination,
        has_header,
        data_rows: data_rows.len(),
        boolean_columns: columns,
        counts,
    })
}

/// Build the `"true, false, ..."` key of one row.
///
/// Fields missing from a short row count as `false`.
#[must_use]
pub fn combination_key(row: &Row, columns: &[usize]) -> String {
    let values: Vec<&str> = columns
        .iter()
        .map(|&col| {
            row.get(col)
                .and_then(|field| BoolToken::parse(field))
                .unwrap_or(BoolToken::False)
                .as_str()
        })
        .collect();
    values.join(KEY_SEPARATOR)
}

/// Count every boolean token in every data row, ignoring columns.
#[must_use]
pub fn count_flat(dataset: &Dataset, header_split: HeaderSplit) -> Tally {
    let has_header = dataset.has_header(header_split);
    let data_rows = dataset.data_rows(has_header);

    let mut trues = 0;
    let mut falses = 0;
    for field in data_rows.iter().flatten() {
        match BoolToken::parse(field) {
            Some(BoolToken::True) => trues += 1,
            Some(BoolToken::False) => falses += 1,
            None => {}
        }
    }

    let mut counts = CountMap::new();
    counts.insert(String::from(TRUE_COUNT_KEY), trues);
    counts.insert(String::from(FALSE_COUNT_KEY), falses);

    Tally {
        mode: CountMode::Flat,
        has_header,
        data_rows: data_rows.len(),
        boolean_columns: Vec::new(),
        counts,
    }
}
