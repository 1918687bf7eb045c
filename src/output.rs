//! Text and JSON rendering of tables for the command line.

use serde_json::{Map, Value};

use crate::data_fetcher::models::{Cell, Table};
use crate::error::AppError;

/// Output formats supported by the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned plain text
    #[default]
    Table,
    /// Array of JSON objects, one per row
    Json,
}

/// Renders `table` in the requested format
pub fn render(table: &Table, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(render_text(table)),
        OutputFormat::Json => render_json(table),
    }
}

fn header_and_cells(table: &Table) -> (Vec<String>, Vec<Vec<String>>) {
    let mut header: Vec<String> = Vec::with_capacity(table.width() + 1);
    if let Some(index) = table.index() {
        header.push(index.name.clone());
    }
    header.extend(table.column_names().into_iter().map(String::from));

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = Vec::with_capacity(header.len());
            if let Some(index) = table.index() {
                cells.push(index.labels.get(i).cloned().unwrap_or_default());
            }
            cells.extend(row.iter().map(Cell::to_string));
            cells
        })
        .collect();
    (header, rows)
}

/// Renders the table with columns padded to their widest value. Numbers are
/// right-aligned, text left-aligned; the index, when set, comes first.
pub fn render_text(table: &Table) -> String {
    let (header, rows) = header_and_cells(table);
    if header.is_empty() {
        return "(empty table)\n".to_string();
    }

    let offset = usize::from(table.index().is_some());
    let numeric: Vec<bool> = (0..header.len())
        .map(|col| {
            col >= offset
                && table.rows().iter().all(|row| {
                    matches!(row[col - offset], Cell::Int(_) | Cell::Float(_) | Cell::Missing)
                })
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|col| {
            rows.iter()
                .map(|row| row[col].chars().count())
                .chain(std::iter::once(header[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: &[String]| {
        let line = cells
            .iter()
            .enumerate()
            .map(|(col, text)| {
                if numeric[col] {
                    format!("{text:>width$}", width = widths[col])
                } else {
                    format!("{text:<width$}", width = widths[col])
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        line.trim_end().to_string()
    };

    let mut out = String::new();
    out.push_str(&format_line(&header));
    out.push('\n');
    let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"─".repeat(rule_width));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(row));
        out.push('\n');
    }
    out
}

/// Renders the table as an array of objects keyed by column name, in
/// column order. Missing cells become `null`.
pub fn render_json(table: &Table) -> Result<String, AppError> {
    let names = table.column_names();
    let records: Vec<Value> = table
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| -> Result<Value, serde_json::Error> {
            let mut record = Map::new();
            if let Some(index) = table.index() {
                let label = index.labels.get(i).cloned().unwrap_or_default();
                record.insert(index.name.clone(), Value::String(label));
            }
            for (name, cell) in names.iter().zip(row) {
                record.insert((*name).to_string(), serde_json::to_value(cell)?);
            }
            Ok(Value::Object(record))
        })
        .collect::<Result<_, _>>()?;
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::DType;

    fn games() -> Table {
        let mut table = Table::from_rows(
            vec!["Date".into(), "Opponent".into(), "Tm".into(), "Venue".into()],
            vec![
                vec![
                    Cell::from_raw("Wed, Oct 20, 2021"),
                    Cell::from_raw("Detroit Pistons"),
                    Cell::from_raw("94"),
                    Cell::Category("Home".into()),
                ],
                vec![
                    Cell::from_raw("Fri, Oct 22, 2021"),
                    Cell::from_raw("New Orleans Pelicans"),
                    Cell::from_raw("128"),
                    Cell::Category("Away".into()),
                ],
            ],
        );
        table.cast_column("Tm", DType::Int).unwrap();
        table.set_index("Date").unwrap();
        table
    }

    #[test]
    fn test_render_text_aligns_columns() {
        let text = render_text(&games());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Date"));
        assert!(lines[1].starts_with('─'));
        assert!(lines[2].starts_with("Wed, Oct 20, 2021  Detroit Pistons"));
        // Scores are right-aligned under the header
        assert!(lines[2].contains("   94  Home"));
        assert!(lines[3].contains("  128  Away"));
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&Table::empty()), "(empty table)\n");
    }

    #[test]
    fn test_render_json_records() {
        let json = render_json(&games()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["Date"], "Fri, Oct 22, 2021");
        assert_eq!(records[1]["Tm"], 128);
        assert_eq!(records[1]["Venue"], "Away");

        let keys: Vec<&String> = records[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Date", "Opponent", "Tm", "Venue"]);
    }

    #[test]
    fn test_render_json_missing_is_null() {
        let table = Table::from_rows(
            vec!["Player".into(), "FG%".into()],
            vec![vec![Cell::from_raw("Player 0"), Cell::Missing]],
        );
        let json = render(&table, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value[0]["FG%"].is_null());
    }
}
