use alloc::vec::Vec;

use crate::error::{Result, TallyError};
use crate::parser::Row;
use crate::token::is_boolean;

/// Find the columns holding only boolean tokens across `data_rows`.
///
/// The candidate columns are those of the first data row. A column qualifies
/// only if every data row has a field at that index and that field is a
/// boolean token, so a single short row disqualifies it. Indices are returned
/// in ascending order.
///
/// # Errors
///
/// Returns [`TallyError::NoBooleanColumns`] when no column qualifies,
/// including when there are no data rows at all.
pub fn boolean_columns(data_rows: &[Row]) -> Result<Vec<usize>> {
    let Some(first) = data_rows.first() else {
        return Err(TallyError::NoBooleanColumns);
    };

    let columns: Vec<usize> = (0..first.len())
        .filter(|&col| {
            data_rows
                .iter()
                .all(|row| row.get(col).is_some_and(|field| is_boolean(field)))
        })
        .collect();

    if columns.is_empty() {
        return Err(TallyError::NoBooleanColumns);
    }
    Ok(columns)
}
