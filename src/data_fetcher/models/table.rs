use super::cell::{Cell, DType};
use crate::error::AppError;
use std::collections::HashSet;

/// Makes every name unique. Later repeats of a label get the first free
/// `.1`, `.2`, ... suffix; a suffix that also appears verbatim among the
/// labels is skipped so that label keeps its own column.
pub fn unique_names(names: Vec<String>) -> Vec<String> {
    let reserved: HashSet<String> = names.iter().cloned().collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .map(|base| {
            if taken.insert(base.clone()) {
                return base;
            }
            let mut n = 1;
            let name = loop {
                let candidate = format!("{base}.{n}");
                if !reserved.contains(&candidate) && !taken.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            };
            taken.insert(name.clone());
            name
        })
        .collect()
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub dtype: DType,
}

/// Row labels taken out of a column with [`Table::set_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct RowIndex {
    pub name: String,
    pub labels: Vec<String>,
}

/// Ordered rows of typed cells under uniquely named, ordered columns.
///
/// Every row holds exactly one cell per column. When an index is set, it
/// holds exactly one label per row and follows every row operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
    index: Option<RowIndex>,
}

impl Table {
    /// Creates a table from column names and rows. Short rows are padded with
    /// `Missing` and long rows truncated so the table stays rectangular.
    /// Repeated names are made unique with [`unique_names`].
    pub fn from_rows(names: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = names.len();
        let columns = unique_names(names)
            .into_iter()
            .map(|name| Column {
                name,
                dtype: DType::Text,
            })
            .collect();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();
        Table {
            columns,
            rows,
            index: None,
        }
    }

    /// A table with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn index(&self) -> Option<&RowIndex> {
        self.index.as_ref()
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Like [`Table::column_position`] but fails with `MissingColumn`
    pub fn require_column(&self, name: &str) -> Result<usize, AppError> {
        self.column_position(name)
            .ok_or_else(|| AppError::missing_column(name))
    }

    pub fn dtype(&self, name: &str) -> Option<DType> {
        self.column_position(name).map(|i| self.columns[i].dtype)
    }

    /// Cell at `row` in column `name`
    pub fn get(&self, row: usize, name: &str) -> Option<&Cell> {
        let col = self.column_position(name)?;
        self.rows.get(row).map(|r| &r[col])
    }

    /// All cells of column `name`, top to bottom
    pub fn column_values(&self, name: &str) -> Option<Vec<&Cell>> {
        let col = self.column_position(name)?;
        Some(self.rows.iter().map(|r| &r[col]).collect())
    }

    /// Position of the first row labelled `label` in the row index
    pub fn row_position(&self, label: &str) -> Option<usize> {
        self.index
            .as_ref()?
            .labels
            .iter()
            .position(|l| l == label)
    }

    /// Cell in column `name` of the row labelled `label`
    pub fn lookup(&self, label: &str, name: &str) -> Option<&Cell> {
        self.get(self.row_position(label)?, name)
    }

    /// Keeps rows for which `keep` returns true, preserving order
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let flags: Vec<bool> = self.rows.iter().map(|r| keep(r.as_slice())).collect();
        let mut flag_iter = flags.iter();
        self.rows.retain(|_| *flag_iter.next().unwrap_or(&false));
        if let Some(index) = self.index.as_mut() {
            let mut flag_iter = flags.iter();
            index.labels.retain(|_| *flag_iter.next().unwrap_or(&false));
        }
    }

    /// Drops every row whose cell in `column` reads exactly `text`.
    /// Returns how many rows were removed.
    pub fn drop_rows_matching(&mut self, column: &str, text: &str) -> Result<usize, AppError> {
        let col = self.require_column(column)?;
        let before = self.rows.len();
        self.retain_rows(|row| !row[col].matches_text(text));
        Ok(before - self.rows.len())
    }

    /// Drops rows with a missing value in any of `columns`.
    /// Returns how many rows were removed.
    pub fn drop_missing(&mut self, columns: &[&str]) -> Result<usize, AppError> {
        let positions = columns
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>, _>>()?;
        let before = self.rows.len();
        self.retain_rows(|row| positions.iter().all(|&p| !row[p].is_missing()));
        Ok(before - self.rows.len())
    }

    pub fn drop_last_row(&mut self) {
        self.rows.pop();
        if let Some(index) = self.index.as_mut() {
            index.labels.pop();
        }
    }

    /// Removes the first `n` columns (fewer if the table is narrower)
    pub fn drop_leading_columns(&mut self, n: usize) {
        let n = n.min(self.columns.len());
        self.columns.drain(..n);
        for row in &mut self.rows {
            row.drain(..n);
        }
    }

    /// Removes the named columns; names that are absent are ignored
    pub fn drop_columns(&mut self, names: &[&str]) {
        let mut positions: Vec<usize> = names
            .iter()
            .filter_map(|name| self.column_position(name))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        for &p in positions.iter().rev() {
            self.columns.remove(p);
            for row in &mut self.rows {
                row.remove(p);
            }
        }
    }

    /// Projects the table onto `names`, in that order
    pub fn select(&self, names: &[&str]) -> Result<Table, AppError> {
        let positions = names
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Table {
            columns: positions.iter().map(|&p| self.columns[p].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| positions.iter().map(|&p| row[p].clone()).collect())
                .collect(),
            index: self.index.clone(),
        })
    }

    /// Renames `from` to `to`. Fails with `DuplicateColumn` when another
    /// column already has the name `to`.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<(), AppError> {
        let col = self.require_column(from)?;
        if self.column_position(to).is_some_and(|existing| existing != col) {
            return Err(AppError::duplicate_column(to));
        }
        self.columns[col].name = to.to_string();
        Ok(())
    }

    /// Replaces every cell of `column` with `f(cell)`; the column takes `dtype`
    pub fn map_column<F>(&mut self, column: &str, dtype: DType, mut f: F) -> Result<(), AppError>
    where
        F: FnMut(&Cell) -> Cell,
    {
        let col = self.require_column(column)?;
        for row in &mut self.rows {
            row[col] = f(&row[col]);
        }
        self.columns[col].dtype = dtype;
        Ok(())
    }

    /// Casts every cell of `column` to `target`, failing on the first value
    /// that cannot be represented
    pub fn cast_column(&mut self, column: &str, target: DType) -> Result<(), AppError> {
        let col = self.require_column(column)?;
        self.cast_position(col, target)
    }

    fn cast_position(&mut self, col: usize, target: DType) -> Result<(), AppError> {
        let converted = self
            .rows
            .iter()
            .map(|row| {
                row[col].cast(target).ok_or_else(|| {
                    AppError::cell_cast(&self.columns[col].name, row[col].to_string(), target.name())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (row, cell) in self.rows.iter_mut().zip(converted) {
            row[col] = cell;
        }
        self.columns[col].dtype = target;
        Ok(())
    }

    /// Casts `column` to integers that fit in 32 bits
    pub fn cast_column_i32(&mut self, column: &str) -> Result<(), AppError> {
        self.cast_column(column, DType::Int)?;
        let col = self.require_column(column)?;
        if let Some(cell) = self.rows.iter().map(|r| &r[col]).find(|c| {
            c.as_i64()
                .is_some_and(|v| i32::try_from(v).is_err())
        }) {
            return Err(AppError::cell_cast(column, cell.to_string(), "i32"));
        }
        Ok(())
    }

    /// Casts every column from position `start` onward to `target`
    pub fn cast_columns_from(&mut self, start: usize, target: DType) -> Result<(), AppError> {
        for col in start..self.columns.len() {
            self.cast_position(col, target)?;
        }
        Ok(())
    }

    /// Narrows text columns to `Int` or `Float` when every non-missing value
    /// parses as one. Columns that are entirely missing stay text.
    pub fn infer_types(&mut self) {
        for col in 0..self.columns.len() {
            if self.columns[col].dtype != DType::Text {
                continue;
            }
            if self.rows.iter().all(|r| r[col].is_missing()) {
                continue;
            }
            let converted = [DType::Int, DType::Float].into_iter().find_map(|target| {
                self.rows
                    .iter()
                    .map(|r| r[col].cast(target))
                    .collect::<Option<Vec<Cell>>>()
                    .map(|cells| (target, cells))
            });
            let Some((target, cells)) = converted else {
                continue;
            };
            for (row, cell) in self.rows.iter_mut().zip(cells) {
                row[col] = cell;
            }
            self.columns[col].dtype = target;
        }
    }

    /// Moves `column` out of the data and into the row index
    pub fn set_index(&mut self, column: &str) -> Result<(), AppError> {
        let col = self.require_column(column)?;
        let removed = self.columns.remove(col);
        let labels = self
            .rows
            .iter_mut()
            .map(|row| row.remove(col).to_string())
            .collect();
        self.index = Some(RowIndex {
            name: removed.name,
            labels,
        });
        Ok(())
    }
}
