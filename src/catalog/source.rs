use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::DataConfig;
use crate::error::{CatalogError, Result};
use crate::types::RawRecord;

/// Supplier of the raw startup data
pub trait DataSource: Send + Sync {
    /// The mandatory record collection
    fn load_records(&self) -> Result<Vec<RawRecord>>;

    /// The optional nutrition notes
    fn load_notes(&self) -> Result<Vec<Value>>;

    /// Human-readable location, used in log lines
    fn describe(&self) -> String;
}

/// Reads both collections from JSON array files
#[derive(Debug, Clone)]
pub struct FileDataSource {
    catalog_path: PathBuf,
    notes_path: PathBuf,
}

impl FileDataSource {
    pub fn new(catalog_path: impl Into<PathBuf>, notes_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            notes_path: notes_path.into(),
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(&config.catalog_path, &config.notes_path)
    }
}

impl DataSource for FileDataSource {
    fn load_records(&self) -> Result<Vec<RawRecord>> {
        read_json_array(&self.catalog_path)
    }

    fn load_notes(&self) -> Result<Vec<Value>> {
        read_json_array(&self.notes_path).map_err(|e| {
            let reason = match e {
                CatalogError::CatalogUnavailable { path, reason } => format!("{} ({})", path.display(), reason),
                CatalogError::InvalidCatalog(msg) => msg,
                other => format!("{}: {}", self.notes_path.display(), other),
            };
            CatalogError::NotesUnavailable(reason)
        })
    }

    fn describe(&self) -> String {
        self.catalog_path.display().to_string()
    }
}

/// In-memory data, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    pub records: Option<Vec<RawRecord>>,
    pub notes: Option<Vec<Value>>,
}

impl StaticDataSource {
    pub fn new(records: Vec<RawRecord>, notes: Vec<Value>) -> Self {
        Self {
            records: Some(records),
            notes: Some(notes),
        }
    }
}

impl DataSource for StaticDataSource {
    fn load_records(&self) -> Result<Vec<RawRecord>> {
        self.records
            .clone()
            .ok_or_else(|| CatalogError::InvalidCatalog("no records supplied".to_string()))
    }

    fn load_notes(&self) -> Result<Vec<Value>> {
        self.notes
            .clone()
            .ok_or_else(|| CatalogError::NotesUnavailable("no nutrition notes supplied".to_string()))
    }

    fn describe(&self) -> String {
        "static data".to_string()
    }
}

fn read_json_array(path: &Path) -> Result<Vec<Value>> {
    debug!("reading {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| CatalogError::CatalogUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Array(items) => Ok(items),
        other => Err(CatalogError::InvalidCatalog(format!(
            "{} must contain a JSON array, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_reads_json_arrays() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("pasta.json");
        let notes = dir.path().join("notes.json");
        fs::write(&catalog, r#"[{"name": "Penne"}]"#).unwrap();
        fs::write(&notes, r#"["note"]"#).unwrap();

        let source = FileDataSource::new(&catalog, &notes);
        assert_eq!(source.load_records().unwrap().len(), 1);
        assert_eq!(source.load_notes().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let source = FileDataSource::new(dir.path().join("nope.json"), dir.path().join("nope2.json"));
        assert!(matches!(
            source.load_records(),
            Err(CatalogError::CatalogUnavailable { .. })
        ));
    }

    #[test]
    fn test_missing_notes_file_names_the_notes() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("pasta.json");
        fs::write(&catalog, r#"[{"name": "Penne"}]"#).unwrap();

        let source = FileDataSource::new(&catalog, dir.path().join("notes.json"));
        match source.load_notes() {
            Err(e @ CatalogError::NotesUnavailable(_)) => {
                let msg = e.to_string();
                assert!(msg.starts_with("Nutrition notes unavailable"));
                assert!(msg.contains("notes.json"));
                assert!(!msg.contains("Catalog"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_static_source_without_notes() {
        let source = StaticDataSource {
            records: Some(vec![]),
            notes: None,
        };
        assert!(matches!(
            source.load_notes(),
            Err(CatalogError::NotesUnavailable(_))
        ));
    }

    #[test]
    fn test_non_array_document_is_invalid() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("pasta.json");
        fs::write(&catalog, r#"{"name": "Penne"}"#).unwrap();

        let source = FileDataSource::new(&catalog, dir.path().join("notes.json"));
        match source.load_records() {
            Err(CatalogError::InvalidCatalog(msg)) => assert!(msg.contains("an object")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("pasta.json");
        fs::write(&catalog, "[{").unwrap();

        let source = FileDataSource::new(&catalog, dir.path().join("notes.json"));
        assert!(matches!(source.load_records(), Err(CatalogError::Json(_))));
    }
}
