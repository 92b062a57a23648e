// ==========================================
// Catálogo de Marcas - field validator
// ==========================================
// Validates the mapped values of a row against its format. System fields
// are exempt: the deriver fills them with defaults, so only the custom
// tail of the format can fail a row here.
// ==========================================

use crate::domain::format::Format;
use crate::domain::types::CellValue;
use std::collections::HashMap;

/// Validate one mapped row against the format's custom fields.
///
/// # Rules
/// - required field unset or empty -> error
/// - number/currency value that does not parse -> error
/// - select value outside its option set -> error
///
/// # Returns
/// - error messages, empty when the row is valid
pub fn validate_row(mapped: &HashMap<String, CellValue>, format: &Format) -> Vec<String> {
    let mut errors = Vec::new();

    for field in format.custom_fields() {
        let value = mapped.get(&field.name);
        let empty = value.map(|v| v.is_empty()).unwrap_or(true);

        if field.required && empty {
            errors.push(format!("{} es requerido", field.name));
            continue;
        }

        // empty == false implies the value is present
        let Some(value) = value else {
            continue;
        };
        if empty {
            continue;
        }

        if field.field_type.is_numeric() && value.as_number().is_none() {
            errors.push(format!("{} debe ser un número válido", field.name));
        }

        if field.field_type == crate::domain::types::FieldType::Select
            && !field.options.is_empty()
            && !field.options.contains(&value.as_text())
        {
            errors.push(format!(
                "{} debe ser una de las opciones válidas: {}",
                field.name,
                field.options.join(", ")
            ));
        }
    }

    errors
}
