use crate::constants::columns::{PLAYOFF_TEAM_MARKER, TEAM};
use crate::data_fetcher::models::{Cell, DType, Table};
use crate::error::AppError;

/// Cleans a raw team (or opponent) per-game table: strips the playoff marker
/// from team names, drops the trailing league average row and the rank column.
///
/// The live tables carry no repeated header rows; any that appear are removed
/// and the stat columns re-typed.
pub fn clean_team_per_game(raw: Table) -> Result<Table, AppError> {
    let mut table = raw;
    if table.drop_rows_matching(TEAM, TEAM)? > 0 {
        table.infer_types();
    }
    table.map_column(TEAM, DType::Text, |cell| match cell.as_str() {
        Some(name) => Cell::Text(name.trim_end_matches(PLAYOFF_TEAM_MARKER).to_string()),
        None => cell.clone(),
    })?;
    table.drop_last_row();
    table.drop_leading_columns(1);
    Ok(table)
}
