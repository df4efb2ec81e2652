//! JSON Schema export for the contact shapes.
//!
//! Projects that copy the contract rather than depend on this crate consume
//! these files. One file per shape, named `<Shape>.schema.json`.

use crate::error::{SchemaExportError, SchemaExportResult};
use crate::models::{Contact, ContactSearchResult, CreateContactDto, UpdateContactDto};
use schemars::{schema_for, Schema};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Generate the schema of every exported shape, keyed by shape name.
pub fn schemas() -> Vec<(&'static str, Schema)> {
    vec![
        ("Contact", schema_for!(Contact)),
        ("CreateContactDto", schema_for!(CreateContactDto)),
        ("UpdateContactDto", schema_for!(UpdateContactDto)),
        ("ContactSearchResult", schema_for!(ContactSearchResult)),
    ]
}

/// File name used for a shape's schema.
pub fn schema_file_name(shape: &str) -> String {
    format!("{}.schema.json", shape)
}

/// Write every schema into `dir`, creating it if needed.
///
/// Existing files with the same names are overwritten. Returns the written
/// paths in the order of [`schemas`].
///
/// # Errors
///
/// Returns `SchemaExportError::Io` if the directory cannot be created or a
/// file cannot be written.
pub fn export_schemas(dir: &Path) -> SchemaExportResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| SchemaExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();

    for (shape, schema) in schemas() {
        let path = dir.join(schema_file_name(shape));
        let mut json = serde_json::to_string_pretty(&schema)?;
        json.push('\n');

        fs::write(&path, json).map_err(|source| SchemaExportError::Io {
            path: path.clone(),
            source,
        })?;

        debug!(shape, path = %path.display(), "Wrote schema");
        written.push(path);
    }

    info!(
        count = written.len(),
        dir = %dir.display(),
        "Exported contact schemas"
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn schema_value(shape: &str) -> Value {
        let (_, schema) = schemas()
            .into_iter()
            .find(|(name, _)| *name == shape)
            .unwrap();
        serde_json::to_value(schema).unwrap()
    }

    fn required(value: &Value) -> Vec<String> {
        let mut fields: Vec<String> = value["required"]
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();
        fields.sort();
        fields
    }

    #[test]
    fn test_contact_required_fields() {
        let value = schema_value("Contact");
        assert_eq!(
            required(&value),
            vec![
                "createdAt",
                "email",
                "firstName",
                "id",
                "isFavorite",
                "lastName",
                "updatedAt"
            ]
        );
        assert!(value["properties"]["tags"].is_object());
    }

    #[test]
    fn test_create_dto_excludes_assigned_fields() {
        let value = schema_value("CreateContactDto");
        assert_eq!(required(&value), vec!["email", "firstName", "lastName"]);
        for assigned in ["id", "isFavorite", "createdAt", "updatedAt"] {
            assert!(value["properties"].get(assigned).is_none(), "{}", assigned);
        }
    }

    #[test]
    fn test_update_dto_has_no_required_fields() {
        let value = schema_value("UpdateContactDto");
        assert!(required(&value).is_empty());
        assert!(value["properties"]["isFavorite"].is_object());
    }

    #[test]
    fn test_search_result_fields() {
        let value = schema_value("ContactSearchResult");
        assert_eq!(
            required(&value),
            vec!["contacts", "page", "pageSize", "total"]
        );
    }

    #[test]
    fn test_schema_file_name() {
        assert_eq!(schema_file_name("Contact"), "Contact.schema.json");
    }
}
