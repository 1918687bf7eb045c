use super::table::Table;

/// Result of a player stats request whose HTTP failures are not raised.
///
/// Separates "the page was fetched and had no rows" from "the page could not
/// be fetched", which a bare empty table cannot express.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsOutcome {
    /// Cleaned table with at least one row
    Data(Table),
    /// Page was fetched and cleaned but no rows remained
    Empty,
    /// Page could not be fetched; `reason` carries the HTTP-level error
    Unavailable { reason: String },
}

impl StatsOutcome {
    /// Wraps a cleaned table, classifying it as `Data` or `Empty`
    pub fn from_table(table: Table) -> Self {
        if table.is_empty() {
            StatsOutcome::Empty
        } else {
            StatsOutcome::Data(table)
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, StatsOutcome::Unavailable { .. })
    }

    pub fn table(&self) -> Option<&Table> {
        match self {
            StatsOutcome::Data(table) => Some(table),
            _ => None,
        }
    }

    /// Collapses the outcome into a table, using an empty table when there is
    /// no data for any reason
    pub fn into_table(self) -> Table {
        match self {
            StatsOutcome::Data(table) => table,
            StatsOutcome::Empty | StatsOutcome::Unavailable { .. } => Table::empty(),
        }
    }
}
