// ==========================================
// Catálogo de Marcas - positional column mapper
// ==========================================
// The k-th format field receives the value of the k-th spreadsheet
// column, regardless of header text. Misaligned files silently land
// values on the wrong field; that behavior is inherited and kept, with a
// warn-level log when the counts diverge.
// ==========================================

use crate::domain::format::FormatField;
use crate::domain::types::CellValue;
use std::collections::HashMap;

/// Map one raw row onto a format's fields by position.
///
/// # Rules
/// - field at index i reads the value under `excel_columns[i]`
/// - missing column or absent cell leaves the field unset
/// - output never exceeds the field count
pub fn map_row(
    raw_row: &HashMap<String, CellValue>,
    excel_columns: &[String],
    format_fields: &[FormatField],
) -> HashMap<String, CellValue> {
    let mut mapped = HashMap::new();

    for (field_index, field) in format_fields.iter().enumerate() {
        let Some(excel_column) = excel_columns.get(field_index) else {
            continue;
        };
        if let Some(value) = raw_row.get(excel_column) {
            mapped.insert(field.name.clone(), value.clone());
        }
    }

    mapped
}

/// Emit one warning per import when the sheet and the format disagree on
/// column count. The mapping itself stays silent (inherited behavior).
pub fn warn_on_misalignment(excel_columns: &[String], format_fields: &[FormatField]) {
    if excel_columns.len() != format_fields.len() {
        tracing::warn!(
            excel_columns = excel_columns.len(),
            format_fields = format_fields.len(),
            "el número de columnas del archivo no coincide con el formato; \
             el mapeo posicional puede dejar campos sin valor"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::format::FormatField;
    use crate::domain::types::FieldType;

    fn fields(names: &[&str]) -> Vec<FormatField> {
        names
            .iter()
            .map(|n| FormatField::custom(*n, FieldType::Text, false))
            .collect()
    }

    fn row(pairs: &[(&str, &str)]) -> HashMap<String, CellValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn test_map_row_is_positional_not_name_matched() {
        // headers deliberately do NOT match field names
        let columns = vec!["Col A".to_string(), "Col B".to_string()];
        let format_fields = fields(&["nombre", "precio"]);
        let raw = row(&[("Col A", "Azulejo"), ("Col B", "120")]);

        let mapped = map_row(&raw, &columns, &format_fields);

        assert_eq!(
            mapped.get("nombre"),
            Some(&CellValue::Text("Azulejo".to_string()))
        );
        assert_eq!(
            mapped.get("precio"),
            Some(&CellValue::Text("120".to_string()))
        );
    }

    #[test]
    fn test_map_row_output_bounded_by_field_count() {
        let columns = vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ];
        let format_fields = fields(&["nombre", "precio"]);
        let raw = row(&[("A", "x"), ("B", "y"), ("C", "z"), ("D", "w")]);

        let mapped = map_row(&raw, &columns, &format_fields);
        assert!(mapped.len() <= format_fields.len());
        assert_eq!(mapped.len(), 2);
    }

    #[test]
    fn test_map_row_leaves_uncovered_fields_unset() {
        // fewer columns than fields: positions 2.. have no column
        let columns = vec!["A".to_string(), "B".to_string()];
        let format_fields = fields(&["nombre", "precio", "unidad", "medida"]);
        let raw = row(&[("A", "x"), ("B", "y")]);

        let mapped = map_row(&raw, &columns, &format_fields);
        assert_eq!(mapped.len(), 2);
        assert!(!mapped.contains_key("unidad"));
        assert!(!mapped.contains_key("medida"));
    }

    #[test]
    fn test_map_row_missing_cell_leaves_field_unset() {
        let columns = vec!["A".to_string(), "B".to_string()];
        let format_fields = fields(&["nombre", "precio"]);
        // row has no value under "B"
        let raw = row(&[("A", "x")]);

        let mapped = map_row(&raw, &columns, &format_fields);
        assert_eq!(mapped.len(), 1);
        assert!(!mapped.contains_key("precio"));
    }

    #[test]
    fn test_map_row_positional_property() {
        // mapped[field[i].name] == raw[excel_columns[i]] whenever both exist
        let columns = vec!["H1".to_string(), "H2".to_string(), "H3".to_string()];
        let format_fields = fields(&["f1", "f2", "f3"]);
        let raw = row(&[("H1", "a"), ("H2", "b"), ("H3", "c")]);

        let mapped = map_row(&raw, &columns, &format_fields);
        for (i, field) in format_fields.iter().enumerate() {
            assert_eq!(mapped.get(&field.name), raw.get(&columns[i]));
        }
    }
}
