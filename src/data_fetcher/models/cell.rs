use serde::Serialize;
use std::fmt;

/// Logical type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DType {
    Text,
    Int,
    Float,
    Category,
}

impl DType {
    pub fn name(self) -> &'static str {
        match self {
            DType::Text => "text",
            DType::Int => "int",
            DType::Float => "float",
            DType::Category => "category",
        }
    }
}

/// A single typed table value. Empty HTML cells are `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Missing,
    Text(String),
    Int(i64),
    Float(f64),
    Category(String),
}

impl Cell {
    /// Builds a cell from raw HTML text; blank text becomes `Missing`
    pub fn from_raw(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Cell::Missing
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the string content of text and category cells
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) | Cell::Category(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns numeric cells as `f64`; integers are widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Float(v) => Some(*v),
            Cell::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Whether the cell renders to exactly `text`. Used to spot embedded
    /// header rows regardless of how the column was typed.
    pub fn matches_text(&self, text: &str) -> bool {
        self.as_str() == Some(text)
    }

    /// Converts the cell to `target`. Missing cells stay missing.
    /// Returns `None` when the value has no representation in `target`.
    pub fn cast(&self, target: DType) -> Option<Cell> {
        match (self, target) {
            (Cell::Missing, _) => Some(Cell::Missing),
            (Cell::Text(s) | Cell::Category(s), DType::Int) => parse_int(s).map(Cell::Int),
            (Cell::Float(v), DType::Int) => {
                (v.fract() == 0.0 && v.is_finite()).then_some(Cell::Int(*v as i64))
            }
            (Cell::Int(v), DType::Int) => Some(Cell::Int(*v)),
            (Cell::Text(s) | Cell::Category(s), DType::Float) => parse_float(s).map(Cell::Float),
            (Cell::Int(v), DType::Float) => Some(Cell::Float(*v as f64)),
            (Cell::Float(v), DType::Float) => Some(Cell::Float(*v)),
            (other, DType::Category) => Some(Cell::Category(other.to_string())),
            (other, DType::Text) => Some(Cell::Text(other.to_string())),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Text(s) | Cell::Category(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => write!(f, "{v}"),
        }
    }
}

fn looks_numeric(s: &str) -> bool {
    !s.is_empty()
        && s.chars().any(|c| c.is_ascii_digit())
        && s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

/// Parses an integer cell. Rejects anything with a decimal point.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    if !looks_numeric(s) {
        return None;
    }
    s.parse::<i64>().ok()
}

/// Parses a floating point cell. Accepts forms like `.512` that the site
/// uses for percentages; rejects `inf`/`nan` spellings.
pub fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim();
    if !looks_numeric(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_blank_is_missing() {
        assert_eq!(Cell::from_raw(""), Cell::Missing);
        assert_eq!(Cell::from_raw("   \n"), Cell::Missing);
        assert_eq!(Cell::from_raw(" CHI "), Cell::Text("CHI".to_string()));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_int("112"), Some(112));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("1.5"), None);
        assert_eq!(parse_int("Tm"), None);
        assert_eq!(parse_float(".512"), Some(0.512));
        assert_eq!(parse_float("27.4"), Some(27.4));
        assert_eq!(parse_float("inf"), None);
        assert_eq!(parse_float("NaN"), None);
        assert_eq!(parse_float("e"), None);
        assert_eq!(parse_float("-"), None);
    }

    #[test]
    fn test_cast_to_int() {
        assert_eq!(
            Cell::Text("108".to_string()).cast(DType::Int),
            Some(Cell::Int(108))
        );
        assert_eq!(Cell::Float(3.0).cast(DType::Int), Some(Cell::Int(3)));
        assert_eq!(Cell::Float(3.5).cast(DType::Int), None);
        assert_eq!(Cell::Text("Opp".to_string()).cast(DType::Int), None);
        assert_eq!(Cell::Missing.cast(DType::Int), Some(Cell::Missing));
    }

    #[test]
    fn test_cast_to_float_and_category() {
        assert_eq!(Cell::Int(12).cast(DType::Float), Some(Cell::Float(12.0)));
        assert_eq!(
            Cell::Text("PG".to_string()).cast(DType::Category),
            Some(Cell::Category("PG".to_string()))
        );
        assert_eq!(
            Cell::Int(7).cast(DType::Text),
            Some(Cell::Text("7".to_string()))
        );
    }

    #[test]
    fn test_display_and_accessors() {
        assert_eq!(Cell::Missing.to_string(), "");
        assert_eq!(Cell::Float(0.5).to_string(), "0.5");
        assert_eq!(Cell::Int(101).as_f64(), Some(101.0));
        assert!(Cell::Category("Home".to_string()).matches_text("Home"));
        assert!(!Cell::Int(1).matches_text("1"));
    }

    #[test]
    fn test_serialize_untagged() {
        let cells = vec![
            Cell::Missing,
            Cell::Int(3),
            Cell::Float(1.5),
            Cell::Text("CHI".to_string()),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,3,1.5,"CHI"]"#);
    }
}
