use crate::constants::ALL_TYPES;
use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Raw catalog entry as supplied by the data source
pub type RawRecord = serde_json::Value;

/// A coordinate pair; only ever constructed when both halves are valid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One validated catalog entry.
///
/// Optional text fields stay `None` when absent in the source so that a missing
/// `type` never turns into a synthetic category. The `"N/A"` sentinel is applied
/// only when a record is turned into a display card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PastaRecord {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pasta_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_uses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub location: Option<GeoPoint>,
}

impl PastaRecord {
    /// Minimal record with only a name, handy for fixtures
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pasta_type: None,
            description: None,
            origin: None,
            translation: None,
            common_uses: None,
            image_url: None,
            location: None,
        }
    }

    pub fn with_type(mut self, pasta_type: impl Into<String>) -> Self {
        self.pasta_type = Some(pasta_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// General nutrition note; display order is the source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NutritionNote(pub String);

impl NutritionNote {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NutritionNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort order applied after filtering and search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    NameAscending,
    NameDescending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::NameAscending => "name_asc",
            SortOrder::NameDescending => "name_desc",
        }
    }

    pub fn all() -> [SortOrder; 3] {
        [SortOrder::None, SortOrder::NameAscending, SortOrder::NameDescending]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "Catalog order",
            SortOrder::NameAscending => "Name (A-Z)",
            SortOrder::NameDescending => "Name (Z-A)",
        }
    }
}

impl FromStr for SortOrder {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(SortOrder::None),
            "name_asc" | "asc" | "ascending" => Ok(SortOrder::NameAscending),
            "name_desc" | "desc" | "descending" => Ok(SortOrder::NameDescending),
            other => Err(CatalogError::InvalidCriteria(format!(
                "unknown sort order '{}' (expected none, name_asc or name_desc)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection: the "All" sentinel or one exact category label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeSelection {
    #[default]
    All,
    Only(String),
}

impl TypeSelection {
    /// Empty labels select everything, like the "All" sentinel does.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == ALL_TYPES {
            TypeSelection::All
        } else {
            TypeSelection::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TypeSelection::All => ALL_TYPES,
            TypeSelection::Only(label) => label,
        }
    }
}

/// Query state for a single render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub selected_type: TypeSelection,
    pub search_term: String,
    pub sort_order: SortOrder,
}

impl FilterCriteria {
    pub fn new(selected_type: TypeSelection, search_term: impl Into<String>, sort_order: SortOrder) -> Self {
        Self {
            selected_type,
            search_term: search_term.into(),
            sort_order,
        }
    }
}

/// Number of records carrying one category label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    #[serde(rename = "type")]
    pub category: String,
    pub count: usize,
}
