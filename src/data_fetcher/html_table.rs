//! Reads every `<table>` of an HTML document into [`Table`] values.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::constants::columns::UNNAMED_PREFIX;
use crate::data_fetcher::models::{Cell, Table};
use crate::error::AppError;

/// Upper bound for `colspan` and `rowspan` so a malformed attribute cannot
/// blow up a table
const MAX_SPAN: usize = 256;

/// Parses all tables in document order.
///
/// Tables hidden inside HTML comments are not part of the DOM and are not
/// returned. Nested tables are returned as separate entries.
pub fn parse_tables(html: &str) -> Result<Vec<Table>, AppError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("table")
        .map_err(|e| AppError::html_parse_error(format!("Invalid table selector: {e}")))?;

    let tables: Vec<Table> = document.select(&selector).map(read_table).collect();
    debug!("Parsed {} table(s) from {} bytes of HTML", tables.len(), html.len());
    Ok(tables)
}

/// Direct child elements of `element` whose tag is one of `names`
fn child_elements<'a>(
    element: ElementRef<'a>,
    names: &'static [&'static str],
) -> impl Iterator<Item = ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| names.contains(&child.value().name()))
}

fn read_table(table: ElementRef<'_>) -> Table {
    let mut head_rows: Vec<ElementRef<'_>> = Vec::new();
    let mut body_rows: Vec<ElementRef<'_>> = Vec::new();
    let mut foot_rows: Vec<ElementRef<'_>> = Vec::new();

    for section in child_elements(table, &["thead", "tbody", "tfoot", "tr"]) {
        match section.value().name() {
            "thead" => head_rows.extend(child_elements(section, &["tr"])),
            "tbody" => body_rows.extend(child_elements(section, &["tr"])),
            "tfoot" => foot_rows.extend(child_elements(section, &["tr"])),
            _ => body_rows.push(section),
        }
    }

    // Without a <thead>, leading rows made only of <th> cells are the header
    if head_rows.is_empty() {
        let leading = body_rows.iter().take_while(|row| is_header_row(**row)).count();
        head_rows = body_rows.drain(..leading).collect();
    }

    let header = expand_rows(&head_rows).pop().unwrap_or_default();
    let data: Vec<Vec<String>> = expand_rows(&body_rows)
        .into_iter()
        .chain(expand_rows(&foot_rows))
        .filter(|cells| !cells.is_empty())
        .collect();

    let names = if header.is_empty() {
        let width = data.iter().map(Vec::len).max().unwrap_or(0);
        (0..width).map(|i| i.to_string()).collect()
    } else {
        column_names(&header)
    };

    let rows = data
        .iter()
        .map(|cells| cells.iter().map(|text| Cell::from_raw(text)).collect())
        .collect();

    let mut parsed = Table::from_rows(names, rows);
    parsed.infer_types();
    parsed
}

fn is_header_row(row: ElementRef<'_>) -> bool {
    let mut cells = child_elements(row, &["th", "td"]).peekable();
    cells.peek().is_some() && cells.all(|cell| cell.value().name() == "th")
}

fn span(cell: ElementRef<'_>, attr: &str) -> usize {
    cell.value()
        .attr(attr)
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, MAX_SPAN)
}

/// Whitespace-normalized cell text of each row of one section, with
/// `colspan` repeated across columns and `rowspan` carried down into the
/// following rows of the section
fn expand_rows(rows: &[ElementRef<'_>]) -> Vec<Vec<String>> {
    // Per column position: text spanning down and how many rows it still covers
    let mut carried: Vec<Option<(String, usize)>> = Vec::new();
    let mut expanded = Vec::with_capacity(rows.len());

    for row in rows {
        let mut texts: Vec<String> = Vec::new();
        let mut cells = child_elements(*row, &["th", "td"]);
        let mut pos = 0;
        loop {
            if let Some(slot) = carried.get_mut(pos)
                && let Some((text, left)) = slot.take()
            {
                texts.push(text.clone());
                if left > 1 {
                    *slot = Some((text, left - 1));
                }
                pos += 1;
                continue;
            }

            let Some(cell) = cells.next() else {
                // Spans further right still fill this row; gaps stay blank
                if carried.iter().skip(pos).any(Option::is_some) {
                    texts.push(String::new());
                    pos += 1;
                    continue;
                }
                break;
            };

            let text = cell.text().collect::<String>();
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            let rowspan = span(cell, "rowspan");
            for _ in 0..span(cell, "colspan") {
                if rowspan > 1 {
                    if carried.len() <= pos {
                        carried.resize(pos + 1, None);
                    }
                    carried[pos] = Some((text.clone(), rowspan - 1));
                }
                texts.push(text.clone());
                pos += 1;
            }
        }
        expanded.push(texts);
    }
    expanded
}

/// Labels blank headers `Unnamed: <position>`. Repeated labels are made
/// unique by [`Table::from_rows`].
fn column_names(header: &[String]) -> Vec<String> {
    header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if label.is_empty() {
                format!("{UNNAMED_PREFIX}{i}")
            } else {
                label.clone()
            }
        })
        .collect()
}
