// ==========================================
// Catálogo de Marcas - format domain model
// ==========================================
// A format is a brand-scoped, ordered schema of fields. Field order is
// significant: the import pipeline maps spreadsheet columns to fields by
// position, not by header name.
// ==========================================

use crate::domain::types::FieldType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// FormatField - one column of a format
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatField {
    pub name: String, // unique within the format
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Allowed values, select fields only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// System fields are prepended to every format and cannot be removed
    /// or retyped by callers.
    #[serde(default)]
    pub system_field: bool,
}

impl FormatField {
    /// A caller-defined (non-system) field.
    pub fn custom(name: impl Into<String>, field_type: FieldType, required: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            required,
            options: Vec::new(),
            placeholder: None,
            system_field: false,
        }
    }

    fn system(
        name: &str,
        field_type: FieldType,
        required: bool,
        options: &[&str],
        placeholder: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            required,
            options: options.iter().map(|s| s.to_string()).collect(),
            placeholder: Some(placeholder.to_string()),
            system_field: true,
        }
    }
}

/// Sale units offered by the `unidad` system field.
pub const UNIT_OPTIONS: &[&str] = &[
    "Pieza",
    "Caja",
    "Litro",
    "Kit",
    "Metro cuadrado",
    "Metro lineal",
    "Paquete",
];

/// Reserved field names, always present at the head of every format, in
/// this order. The importer's positional mapping depends on it.
pub fn system_fields() -> Vec<FormatField> {
    vec![
        FormatField::system("nombre", FieldType::Text, true, &[], "Nombre del producto"),
        FormatField::system(
            "precio",
            FieldType::Currency,
            true,
            &[],
            "Precio del producto",
        ),
        FormatField::system("unidad", FieldType::Select, true, UNIT_OPTIONS, "Unidad de venta"),
        FormatField::system(
            "medida",
            FieldType::Text,
            true,
            &[],
            "Medida del producto (ej. 30x30 cm)",
        ),
        FormatField::system(
            "rendimiento_M2",
            FieldType::Number,
            true,
            &[],
            "Piezas por metro cuadrado",
        ),
        FormatField::system(
            "precio_M2",
            FieldType::Currency,
            true,
            &[],
            "Precio por metro cuadrado",
        ),
        FormatField::system("clave", FieldType::Text, false, &[], "Clave del producto"),
        FormatField::system("codigo", FieldType::Text, false, &[], "Código interno"),
        FormatField::system("codigo_barras", FieldType::Text, false, &[], "Código de barras"),
        FormatField::system(
            "descripcion",
            FieldType::Text,
            false,
            &[],
            "Descripción del producto",
        ),
    ]
}

/// True if `name` collides with a reserved system field.
pub fn is_system_field_name(name: &str) -> bool {
    system_fields().iter().any(|f| f.name == name)
}

// ==========================================
// Format - persisted schema definition
// ==========================================
// Soft-deactivated via `is_active`; never physically deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Format {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Ordered: position k maps against spreadsheet column k.
    pub fields: Vec<FormatField>,
    pub brand_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Format {
    /// Caller-defined fields, i.e. everything after the system prefix.
    pub fn custom_fields(&self) -> impl Iterator<Item = &FormatField> {
        self.fields.iter().filter(|f| !f.system_field)
    }
}

// ==========================================
// NewFormat - creation payload
// ==========================================
// `fields` holds only the custom tail; the registry prepends the system
// fields before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFormat {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FormatField>,
    pub brand_id: String,
}
