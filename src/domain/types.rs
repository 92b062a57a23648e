// ==========================================
// Catálogo de Marcas - core domain types
// ==========================================
// Field kinds mirror the format editor's type selector; cell values are a
// tagged variant so spreadsheet data never travels as untyped strings.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// FieldType - format field kind
// ==========================================
// Serialized lowercase to match the `formats.fields` JSON column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Currency,
    Select,
}

impl FieldType {
    /// True for kinds whose values must parse as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Currency)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::Number => write!(f, "number"),
            FieldType::Currency => write!(f, "currency"),
            FieldType::Select => write!(f, "select"),
        }
    }
}

// ==========================================
// CellValue - one spreadsheet cell
// ==========================================
// Heterogeneous by nature (text/number/bool as parsed by the reader);
// `Empty` covers blank cells so row maps never hold ghost keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Render the cell as trimmed text. `Empty` becomes "".
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) => {
                // Integral numbers print without the trailing ".0" so codes
                // like 7501031311309 survive a numeric cell.
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Lenient numeric view: numbers verbatim, text parsed after trimming.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Bool(_) | CellValue::Empty => None,
        }
    }

    /// Integer view with truncation, used for stock quantities.
    pub fn as_integer(&self) -> Option<i64> {
        self.as_number().map(|n| n.trunc() as i64)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(data: &calamine::Data) -> Self {
        use calamine::Data;
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => {
                if s.trim().is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(s.clone())
                }
            }
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(e) => CellValue::Text(format!("{:?}", e)),
        }
    }
}
