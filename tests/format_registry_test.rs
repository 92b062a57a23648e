// ==========================================
// Format registry integration tests
// ==========================================

mod test_helpers;

use brand_catalog::domain::format::{system_fields, FormatField};
use brand_catalog::domain::types::FieldType;
use brand_catalog::domain::NewFormat;
use brand_catalog::repository::RepositoryError;
use test_helpers::{catalog_stack, create_test_db, seed_brand};

const BRAND: &str = "marca-1";

fn new_format(name: &str, custom: Vec<FormatField>) -> NewFormat {
    NewFormat {
        name: name.to_string(),
        description: Some("formato de prueba".to_string()),
        fields: custom,
        brand_id: BRAND.to_string(),
    }
}

#[tokio::test]
async fn test_created_format_round_trips_through_sqlite() {
    let (_db, conn) = create_test_db();
    seed_brand(&conn, BRAND, "Marca Uno");
    let stack = catalog_stack(&conn);

    let mut select = FormatField::custom("acabado", FieldType::Select, true);
    select.options = vec!["Mate".to_string(), "Brillante".to_string()];
    let created = stack
        .registry
        .create_format(new_format(
            "Azulejos",
            vec![
                FormatField::custom("grosor_mm", FieldType::Number, false),
                select,
            ],
        ))
        .await
        .unwrap();

    let fetched = stack
        .registry
        .get_format(&created.id)
        .await
        .unwrap()
        .expect("formato recién creado");

    // fields survive the JSON column intact, order included
    assert_eq!(fetched.fields.len(), system_fields().len() + 2);
    assert_eq!(fetched.fields[0].name, "nombre");
    let acabado = fetched.fields.iter().find(|f| f.name == "acabado").unwrap();
    assert_eq!(acabado.field_type, FieldType::Select);
    assert_eq!(acabado.options, vec!["Mate", "Brillante"]);
    assert!(acabado.required);
}

#[tokio::test]
async fn test_list_returns_only_active_formats_of_the_brand() {
    let (_db, conn) = create_test_db();
    seed_brand(&conn, BRAND, "Marca Uno");
    seed_brand(&conn, "marca-2", "Marca Dos");
    let stack = catalog_stack(&conn);

    let keep = stack
        .registry
        .create_format(new_format("Activo", vec![]))
        .await
        .unwrap();
    let drop = stack
        .registry
        .create_format(new_format("Borrado", vec![]))
        .await
        .unwrap();
    stack
        .registry
        .create_format(NewFormat {
            brand_id: "marca-2".to_string(),
            ..new_format("Otra marca", vec![])
        })
        .await
        .unwrap();

    stack.registry.deactivate_format(&drop.id).await.unwrap();

    let listed = stack.registry.list_formats(BRAND).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}

#[tokio::test]
async fn test_update_persists_new_custom_tail() {
    let (_db, conn) = create_test_db();
    seed_brand(&conn, BRAND, "Marca Uno");
    let stack = catalog_stack(&conn);

    let format = stack
        .registry
        .create_format(new_format(
            "Original",
            vec![FormatField::custom("color", FieldType::Text, false)],
        ))
        .await
        .unwrap();

    stack
        .registry
        .update_format(
            &format.id,
            brand_catalog::FormatUpdate {
                name: "Renombrado".to_string(),
                description: None,
                fields: vec![FormatField::custom("textura", FieldType::Text, false)],
            },
        )
        .await
        .unwrap();

    let fetched = stack
        .registry
        .get_format(&format.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Renombrado");
    let customs: Vec<_> = fetched.custom_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(customs, vec!["textura"]);
}

#[tokio::test]
async fn test_update_missing_format_is_not_found() {
    let (_db, conn) = create_test_db();
    seed_brand(&conn, BRAND, "Marca Uno");
    let stack = catalog_stack(&conn);

    let result = stack
        .registry
        .update_format(
            "no-existe",
            brand_catalog::FormatUpdate {
                name: "X".to_string(),
                description: None,
                fields: vec![],
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
}
