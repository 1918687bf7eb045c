use crate::constants::columns::{ADVANCED_SPACERS, PLAYER};
use crate::data_fetcher::models::Table;
use crate::error::AppError;

/// Cleans a raw advanced stats table: drops the rank column, the blank
/// spacer columns and repeated header rows, then re-types the stat columns.
pub fn clean_advanced(raw: Table) -> Result<Table, AppError> {
    let mut table = raw;
    table.drop_leading_columns(1);
    table.drop_columns(&ADVANCED_SPACERS);
    table.drop_rows_matching(PLAYER, PLAYER)?;
    table.infer_types();
    Ok(table)
}
