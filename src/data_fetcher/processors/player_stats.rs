use crate::constants::columns::{AGE, PLAYER, PLAYER_IDENTITY_COLUMNS, POSITION};
use crate::data_fetcher::models::{DType, Table};
use crate::error::AppError;

/// Cleans a raw per-game player table.
///
/// Repeated header rows are removed, `Age` becomes an integer, `Pos` a
/// category and every stat column after the identity columns a float. The
/// rank column is dropped.
pub fn clean_player_per_game(raw: Table) -> Result<Table, AppError> {
    let mut table = raw;
    table.drop_rows_matching(PLAYER, PLAYER)?;
    table.cast_column(AGE, DType::Int)?;
    table.cast_column(POSITION, DType::Category)?;
    table.cast_columns_from(PLAYER_IDENTITY_COLUMNS, DType::Float)?;
    table.drop_leading_columns(1);
    Ok(table)
}
