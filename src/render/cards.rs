use serde::Serialize;
use std::collections::HashMap;

use crate::config::ImageConfig;
use crate::constants::NOT_AVAILABLE;
use crate::types::PastaRecord;

/// Picks the image shown for a record: its own URL, else a category
/// placeholder, else the generic placeholder.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    placeholders: HashMap<String, String>,
    default_placeholder: String,
}

impl ImageResolver {
    pub fn new(placeholders: HashMap<String, String>, default_placeholder: impl Into<String>) -> Self {
        Self {
            placeholders,
            default_placeholder: default_placeholder.into(),
        }
    }

    pub fn from_config(config: &ImageConfig) -> Self {
        Self::new(config.placeholders.clone(), config.default_placeholder.clone())
    }

    pub fn resolve<'a>(&'a self, record: &'a PastaRecord) -> &'a str {
        if let Some(url) = record.image_url.as_deref() {
            return url;
        }
        record
            .pasta_type
            .as_deref()
            .and_then(|t| self.placeholders.get(t))
            .map(String::as_str)
            .unwrap_or(&self.default_placeholder)
    }
}

/// Display-ready card; every absent text field reads "N/A" on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub name: String,
    pub pasta_type: String,
    pub description: String,
    pub origin: String,
    pub translation: String,
    pub common_uses: String,
    pub image_url: String,
    pub anchor: String,
}

impl CardView {
    pub fn from_record(record: &PastaRecord, images: &ImageResolver) -> Self {
        Self {
            name: record.name.clone(),
            pasta_type: or_not_available(&record.pasta_type),
            description: or_not_available(&record.description),
            origin: or_not_available(&record.origin),
            translation: or_not_available(&record.translation),
            common_uses: or_not_available(&record.common_uses),
            image_url: images.resolve(record).to_string(),
            anchor: slug(&record.name),
        }
    }
}

fn or_not_available(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// One line of the two-column showcase; a full-width divider follows each row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowcaseRow {
    pub cards: Vec<CardView>,
}

/// Pair cards into rows of two. The last row holds a single card when the
/// count is odd, so a divider lands after every second card and after the last.
pub fn showcase_rows(cards: Vec<CardView>) -> Vec<ShowcaseRow> {
    cards
        .chunks(2)
        .map(|pair| ShowcaseRow { cards: pair.to_vec() })
        .collect()
}

/// Lowercase, ASCII alphanumerics joined by single dashes
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '-',
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}
