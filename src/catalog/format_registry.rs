// ==========================================
// Catálogo de Marcas - format registry
// ==========================================
// Service layer over FormatRepository. Owns the system-field rules:
// every format persists as system prefix + custom tail, and custom names
// may neither collide with a system field nor with each other.
// ==========================================

use crate::domain::format::{is_system_field_name, system_fields, Format, FormatField, NewFormat};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::format_repo::FormatRepository;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Replacement payload for `update_format`. Fields hold only the custom
/// tail, like `NewFormat`.
#[derive(Debug, Clone)]
pub struct FormatUpdate {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FormatField>,
}

// ==========================================
// FormatRegistry
// ==========================================
pub struct FormatRegistry {
    repo: Arc<dyn FormatRepository>,
}

impl FormatRegistry {
    pub fn new(repo: Arc<dyn FormatRepository>) -> Self {
        Self { repo }
    }

    /// Reject custom fields that shadow a system field or repeat a name.
    fn check_custom_fields(fields: &[FormatField]) -> RepositoryResult<()> {
        let mut seen = HashSet::new();
        for field in fields {
            let name = field.name.trim();
            if name.is_empty() {
                return Err(RepositoryError::ValidationError(
                    "los campos personalizados requieren un nombre".to_string(),
                ));
            }
            if is_system_field_name(name) {
                return Err(RepositoryError::ValidationError(format!(
                    "el campo '{}' está reservado por el sistema",
                    name
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(RepositoryError::ValidationError(format!(
                    "campo duplicado en el formato: '{}'",
                    name
                )));
            }
        }
        Ok(())
    }

    /// System prefix + custom tail, the only field layout ever persisted.
    fn assemble_fields(custom: Vec<FormatField>) -> Vec<FormatField> {
        let mut fields = system_fields();
        fields.extend(custom.into_iter().map(|mut f| {
            f.system_field = false;
            f
        }));
        fields
    }

    /// Active formats for one brand, newest first.
    pub async fn list_formats(&self, brand_id: &str) -> RepositoryResult<Vec<Format>> {
        self.repo.list_formats_by_brand(brand_id).await
    }

    pub async fn get_format(&self, id: &str) -> RepositoryResult<Option<Format>> {
        self.repo.get_format(id).await
    }

    /// Create a format from its custom tail.
    ///
    /// # Errors
    /// - `ValidationError`: empty name, reserved or duplicate custom field
    pub async fn create_format(&self, new_format: NewFormat) -> RepositoryResult<Format> {
        if new_format.name.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "el formato requiere un nombre".to_string(),
            ));
        }
        if new_format.brand_id.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "el formato requiere una marca".to_string(),
            ));
        }
        Self::check_custom_fields(&new_format.fields)?;

        let format = Format {
            id: Uuid::new_v4().to_string(),
            name: new_format.name,
            description: new_format.description,
            fields: Self::assemble_fields(new_format.fields),
            brand_id: new_format.brand_id,
            is_active: true,
            created_at: Utc::now(),
        };

        tracing::info!(format_id = %format.id, brand_id = %format.brand_id, "creando formato");
        self.repo.insert_format(format).await
    }

    /// Replace name/description/custom fields wholesale. The system prefix
    /// is re-prepended; no mapping stability across edits is guaranteed.
    pub async fn update_format(&self, id: &str, update: FormatUpdate) -> RepositoryResult<Format> {
        if update.name.trim().is_empty() {
            return Err(RepositoryError::ValidationError(
                "el formato requiere un nombre".to_string(),
            ));
        }
        Self::check_custom_fields(&update.fields)?;

        let existing = self
            .repo
            .get_format(id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "Format".to_string(),
                id: id.to_string(),
            })?;

        let format = Format {
            name: update.name,
            description: update.description,
            fields: Self::assemble_fields(update.fields),
            ..existing
        };
        self.repo.update_format(format).await
    }

    /// Soft delete. Existing products keep their data.
    pub async fn deactivate_format(&self, id: &str) -> RepositoryResult<()> {
        tracing::info!(format_id = %id, "desactivando formato");
        self.repo.deactivate_format(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::domain::types::FieldType;
    use crate::repository::format_repo_impl::FormatRepositoryImpl;
    use rusqlite::{params, Connection};
    use std::sync::Mutex;

    fn test_registry() -> FormatRegistry {
        let conn = Connection::open_in_memory().unwrap();
        db::configure_sqlite_connection(&conn).unwrap();
        db::initialize_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO brands (id, nombre, departamento, activo, created_at) \
             VALUES (?1, ?2, 'General', 1, datetime('now'))",
            params!["b1", "Marca Prueba"],
        )
        .unwrap();
        let repo = FormatRepositoryImpl::new(Arc::new(Mutex::new(conn)));
        FormatRegistry::new(Arc::new(repo))
    }

    fn new_format(custom: Vec<FormatField>) -> NewFormat {
        NewFormat {
            name: "Azulejos".to_string(),
            description: None,
            fields: custom,
            brand_id: "b1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_prepends_system_fields() {
        let registry = test_registry();
        let custom = vec![FormatField::custom("color", FieldType::Text, false)];

        let format = registry.create_format(new_format(custom)).await.unwrap();

        let system_count = system_fields().len();
        assert_eq!(format.fields.len(), system_count + 1);
        assert_eq!(format.fields[0].name, "nombre");
        assert_eq!(format.fields[system_count].name, "color");
        assert!(!format.fields[system_count].system_field);
    }

    #[tokio::test]
    async fn test_create_rejects_system_name_collision() {
        let registry = test_registry();
        let custom = vec![FormatField::custom("precio", FieldType::Number, false)];

        let result = registry.create_format(new_format(custom)).await;
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_custom_names() {
        let registry = test_registry();
        let custom = vec![
            FormatField::custom("color", FieldType::Text, false),
            FormatField::custom("color", FieldType::Select, false),
        ];

        let result = registry.create_format(new_format(custom)).await;
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_deactivated_format_not_listed_or_fetched() {
        let registry = test_registry();
        let format = registry.create_format(new_format(vec![])).await.unwrap();

        registry.deactivate_format(&format.id).await.unwrap();

        assert!(registry.get_format(&format.id).await.unwrap().is_none());
        assert!(registry.list_formats("b1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_custom_tail() {
        let registry = test_registry();
        let format = registry
            .create_format(new_format(vec![FormatField::custom(
                "color",
                FieldType::Text,
                false,
            )]))
            .await
            .unwrap();

        let updated = registry
            .update_format(
                &format.id,
                FormatUpdate {
                    name: "Azulejos v2".to_string(),
                    description: Some("revisado".to_string()),
                    fields: vec![FormatField::custom("acabado", FieldType::Text, false)],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Azulejos v2");
        let customs: Vec<_> = updated.custom_fields().map(|f| f.name.clone()).collect();
        assert_eq!(customs, vec!["acabado"]);
    }
}
