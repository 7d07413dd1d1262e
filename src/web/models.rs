use serde::Deserialize;

use crate::error::Result;
use crate::types::{FilterCriteria, SortOrder, TypeSelection};

/// Query string of the dashboard routes: `?type=Long&q=pen&sort=name_asc`
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FilterQuery {
    #[serde(rename = "type")]
    pub pasta_type: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

impl FilterQuery {
    /// Fresh criteria for this request; an unknown sort value is an error
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        let sort_order = match self.sort.as_deref() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::None,
        };
        Ok(FilterCriteria::new(
            TypeSelection::from_label(self.pasta_type.as_deref().unwrap_or_default()),
            self.q.clone().unwrap_or_default(),
            sort_order,
        ))
    }
}

/// One `<option>` of a selector
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}
