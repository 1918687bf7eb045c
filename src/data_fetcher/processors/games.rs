use tracing::debug;

use crate::constants::columns::{
    AWAY_MARKER, DATE, OPPONENT, OPPONENT_SCORE, TEAM_SCORE, UNNAMED_PREFIX, VENUE,
};
use crate::data_fetcher::models::{Cell, DType, Table, Venue};
use crate::error::AppError;

/// Column the venue marker lived in before the layout was detected by content
const LEGACY_VENUE_COLUMN: &str = "Unnamed: 5";

/// Finds the unnamed column holding the `@` road-game marker.
///
/// A log with no road games yet has no marker anywhere; the historical
/// position is used then.
pub fn find_venue_column(raw: &Table) -> Result<String, AppError> {
    let detected = raw
        .columns()
        .iter()
        .filter(|c| c.name.starts_with(UNNAMED_PREFIX))
        .find(|c| {
            let Some(values) = raw.column_values(&c.name) else {
                return false;
            };
            let mut present = values.iter().filter(|v| !v.is_missing()).peekable();
            present.peek().is_some() && present.all(|v| v.matches_text(AWAY_MARKER))
        })
        .map(|c| c.name.clone());

    match detected {
        Some(name) => Ok(name),
        None => raw
            .column_position(LEGACY_VENUE_COLUMN)
            .map(|_| LEGACY_VENUE_COLUMN.to_string())
            .ok_or_else(|| AppError::missing_column("venue marker")),
    }
}

/// Cleans a raw game log table.
///
/// Keeps date, opponent, both scores and the venue; removes repeated header
/// rows and unplayed games; scores become 32-bit integers and rows are
/// indexed by date. Resulting columns: `Opponent, Tm, Opp, Venue`.
pub fn clean_games(raw: &Table) -> Result<Table, AppError> {
    let venue_column = find_venue_column(raw)?;
    debug!("Using '{venue_column}' as venue marker column");

    let mut table = raw.select(&[
        DATE,
        OPPONENT,
        TEAM_SCORE,
        OPPONENT_SCORE,
        venue_column.as_str(),
    ])?;
    table.drop_rows_matching(DATE, DATE)?;
    table.rename_column(&venue_column, VENUE)?;
    table.map_column(VENUE, DType::Category, |marker| {
        Cell::Category(Venue::from_marker(marker.as_str()).to_string())
    })?;

    let unplayed = table.drop_missing(&[DATE, OPPONENT, TEAM_SCORE, OPPONENT_SCORE])?;
    debug!("Dropped {unplayed} row(s) with missing values");

    table.cast_column_i32(TEAM_SCORE)?;
    table.cast_column_i32(OPPONENT_SCORE)?;
    table.set_index(DATE)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::html_table::parse_tables;
    use crate::testing_utils::{GameRow, TestPageBuilder};

    fn raw_games(games: &[GameRow]) -> Table {
        let html = TestPageBuilder::games_page(games, None);
        parse_tables(&html).unwrap().remove(0)
    }

    #[test]
    fn test_clean_games_columns_and_types() {
        let raw = raw_games(&[
            GameRow::played("Wed, Oct 20, 2021", "Detroit Pistons", true, 94, 88),
            GameRow::played("Fri, Oct 22, 2021", "New Orleans Pelicans", false, 128, 112),
        ]);
        let cleaned = clean_games(&raw).unwrap();

        assert_eq!(cleaned.column_names(), vec!["Opponent", "Tm", "Opp", "Venue"]);
        assert_eq!(cleaned.index().unwrap().name, "Date");
        assert_eq!(cleaned.dtype("Tm"), Some(DType::Int));
        assert_eq!(cleaned.dtype("Venue"), Some(DType::Category));
        assert_eq!(
            cleaned.lookup("Wed, Oct 20, 2021", "Venue"),
            Some(&Cell::Category("Away".to_string()))
        );
        assert_eq!(
            cleaned.lookup("Fri, Oct 22, 2021", "Venue"),
            Some(&Cell::Category("Home".to_string()))
        );
        assert_eq!(cleaned.lookup("Fri, Oct 22, 2021", "Tm"), Some(&Cell::Int(128)));
    }

    #[test]
    fn test_clean_games_removes_header_rows_and_unplayed() {
        let mut games = TestPageBuilder::season_games(45);
        games.push(GameRow::scheduled("Sun, Apr 10, 2022", "Minnesota Timberwolves", true));
        let raw = raw_games(&games);
        // 46 games plus two repeated header rows
        assert_eq!(raw.len(), 48);

        let cleaned = clean_games(&raw).unwrap();
        assert_eq!(cleaned.len(), 45);
        assert!(cleaned.row_position("Date").is_none());
        assert!(cleaned.row_position("Sun, Apr 10, 2022").is_none());
        for venue in cleaned.column_values("Venue").unwrap() {
            let venue = venue.as_str().and_then(Venue::parse);
            assert!(venue.is_some());
        }
    }

    #[test]
    fn test_clean_games_keeps_original_order() {
        let cleaned = clean_games(&raw_games(&TestPageBuilder::season_games(3))).unwrap();
        assert_eq!(
            cleaned.index().unwrap().labels,
            vec!["Game Day 1", "Game Day 2", "Game Day 3"]
        );
    }

    #[test]
    fn test_venue_column_without_road_games() {
        let raw = raw_games(&[GameRow::played("Wed, Oct 20, 2021", "Detroit Pistons", false, 94, 88)]);
        assert_eq!(find_venue_column(&raw).unwrap(), "Unnamed: 5");
        let cleaned = clean_games(&raw).unwrap();
        assert_eq!(cleaned.get(0, "Venue"), Some(&Cell::Category("Home".to_string())));
    }

    #[test]
    fn test_missing_columns_fail() {
        let raw = Table::from_rows(vec!["Date".into()], vec![vec![Cell::from_raw("x")]]);
        assert!(matches!(
            clean_games(&raw),
            Err(AppError::MissingColumn { .. })
        ));
    }
}
