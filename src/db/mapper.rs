//! Result row mapping.

use super::row::RowData;
use super::value::Value;

/// Zip column names with each row's values, positionally.
///
/// Row order and column order are preserved. When two result columns share
/// a name (e.g. `id` from both sides of a join) the later column's value
/// wins and the name keeps its first position. Extra values beyond the
/// column list are dropped; missing values are simply absent.
pub fn map_rows(columns: &[String], rows: Vec<Vec<Value>>) -> Vec<RowData> {
    rows.into_iter()
        .map(|row| {
            columns
                .iter()
                .zip(row)
                .map(|(name, value)| (name.clone(), value))
                .collect()
        })
        .collect()
}
