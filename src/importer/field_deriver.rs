// ==========================================
// Catálogo de Marcas - field deriver
// ==========================================
// Pure derivation of one product record from one mapped row. All the
// area-based pricing logic lives here:
// - rendimiento_M2 (units per square meter) from a "<W>x<H>" dimension
//   string, cm² converted to m²
// - precio_M2 = precio * rendimiento_M2
// Must stay a pure function of (mapped row, row index); the tests rely
// on re-derivation being byte-identical.
// ==========================================

use crate::config::ImportConfig;
use crate::domain::format::Format;
use crate::domain::product::NewProduct;
use crate::domain::types::CellValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// "<number> x <number>", optional decimals, optional whitespace around
/// the x, case-insensitive. E.g. "30x30", "60 X 120", "7.5x15 cm".
static DIMENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*x\s*(\d+\.?\d*)").expect("valid dimension regex"));

/// First non-empty value among the case-variant keys.
fn lookup<'a>(
    mapped: &'a HashMap<String, CellValue>,
    keys: &[&str],
) -> Option<&'a CellValue> {
    keys.iter()
        .filter_map(|k| mapped.get(*k))
        .find(|v| !v.is_empty())
}

fn text_or(mapped: &HashMap<String, CellValue>, keys: &[&str], default: &str) -> String {
    lookup(mapped, keys)
        .map(|v| v.as_text())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn number_or_zero(mapped: &HashMap<String, CellValue>, keys: &[&str]) -> f64 {
    lookup(mapped, keys).and_then(|v| v.as_number()).unwrap_or(0.0)
}

fn integer_or_zero(mapped: &HashMap<String, CellValue>, keys: &[&str]) -> i64 {
    lookup(mapped, keys).and_then(|v| v.as_integer()).unwrap_or(0)
}

/// Units covering one square meter, from the dimension string.
///
/// # Rules
/// - "<W>x<H>" in centimeters: area_m2 = (W * H) / 10000
/// - yield = round(1 / area_m2) when area > 0, else 1
/// - non-matching or empty medida -> 1
pub fn yield_from_medida(medida: &str) -> f64 {
    let Some(caps) = DIMENSION_RE.captures(medida) else {
        return 1.0;
    };

    // capture groups are \d+ based, parse cannot fail
    let width_cm: f64 = caps[1].parse().unwrap_or(0.0);
    let height_cm: f64 = caps[2].parse().unwrap_or(0.0);
    let area_m2 = (width_cm * height_cm) / 10000.0;

    if area_m2 > 0.0 {
        (1.0 / area_m2).round()
    } else {
        1.0
    }
}

/// Build the specifications JSON object from the format's custom fields:
/// non-empty values only, numbers coerced for numeric kinds.
fn build_especificaciones(
    mapped: &HashMap<String, CellValue>,
    format: &Format,
) -> Option<serde_json::Value> {
    let mut spec = serde_json::Map::new();

    for field in format.custom_fields() {
        let Some(value) = mapped.get(&field.name) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        let json_value = if field.field_type.is_numeric() {
            match value.as_number() {
                Some(n) => serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
                None => serde_json::Value::String(value.as_text()),
            }
        } else {
            serde_json::Value::String(value.as_text())
        };
        spec.insert(field.name.clone(), json_value);
    }

    if spec.is_empty() {
        None
    } else {
        Some(serde_json::Value::Object(spec))
    }
}

/// Derive the final product record for one row.
///
/// # Parameters
/// - mapped: field name -> raw cell value, from the positional mapper
/// - row_index: 0-based data row index; default names use index + 1
///
/// Pure: same inputs always produce the same record.
pub fn derive_product(
    mapped: &HashMap<String, CellValue>,
    row_index: usize,
    brand_id: &str,
    format: &Format,
    config: &ImportConfig,
) -> NewProduct {
    let nombre = text_or(
        mapped,
        &["nombre", "Nombre"],
        &format!("Producto {}", row_index + 1),
    );
    let precio = number_or_zero(mapped, &["precio", "Precio"]);
    let unidad = text_or(mapped, &["unidad", "Unidad"], &config.default_unit);
    let medida = text_or(mapped, &["medida", "Medida", "medida_formato"], "");

    // explicit positive yield wins; zero and non-numeric fall through to
    // derivation (the source's falsy chain discards them)
    let explicit_yield = lookup(mapped, &["rendimiento_M2"])
        .and_then(|v| v.as_number())
        .filter(|n| *n > 0.0);

    let rendimiento_m2 = match explicit_yield {
        Some(y) => y,
        None if !medida.is_empty() => yield_from_medida(&medida),
        None => 1.0,
    };

    let precio_m2 = if rendimiento_m2 > 0.0 {
        precio * rendimiento_m2
    } else {
        precio
    };

    NewProduct {
        nombre,
        precio,
        unidad,
        medida,
        rendimiento_m2,
        precio_m2,
        clave: text_or(mapped, &["clave", "Clave"], ""),
        codigo: text_or(mapped, &["codigo", "Codigo"], ""),
        codigo_barras: text_or(mapped, &["codigo_barras"], ""),
        descripcion: text_or(mapped, &["descripcion", "Descripcion"], ""),
        departamento: text_or(
            mapped,
            &["departamento", "Departamento"],
            &config.default_department,
        ),
        activo: true,
        cantidad_stock: integer_or_zero(mapped, &["cantidad_stock"]),
        stock_minimo: integer_or_zero(mapped, &["stock_minimo"]),
        marca_id: brand_id.to_string(),
        especificaciones: build_especificaciones(mapped, format),
    }
}
