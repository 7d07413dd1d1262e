use serde_json::{Map, Value};
use tracing::debug;

use crate::constants::NOT_AVAILABLE;
use crate::types::{GeoPoint, NutritionNote, PastaRecord, RawRecord};

const COMMON_USES_KEYS: &[&str] = &["commonUses", "common_uses"];
const IMAGE_URL_KEYS: &[&str] = &["imageUrl", "image_url", "image"];
const LATITUDE_KEYS: &[&str] = &["latitude", "lat"];
const LONGITUDE_KEYS: &[&str] = &["longitude", "lon", "lng"];
const NOTE_KEYS: &[&str] = &["note", "text"];

/// Normalize raw catalog entries into validated records.
///
/// Never fails: entries that are not JSON objects still produce a record (named
/// `"N/A"`) so the catalog length and order match the source.
pub fn normalize(raw: &[RawRecord]) -> Vec<PastaRecord> {
    raw.iter().map(normalize_record).collect()
}

/// Normalize a single raw entry
pub fn normalize_record(raw: &RawRecord) -> PastaRecord {
    let empty = Map::new();
    let data = match raw.as_object() {
        Some(map) => map,
        None => {
            debug!("catalog entry is not an object: {}", raw);
            &empty
        }
    };

    PastaRecord {
        name: text_field(data, &["name"]).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        pasta_type: text_field(data, &["type"]),
        description: text_field(data, &["description"]),
        origin: text_field(data, &["origin"]),
        translation: text_field(data, &["translation"]),
        common_uses: text_field(data, COMMON_USES_KEYS),
        image_url: text_field(data, IMAGE_URL_KEYS),
        location: location(data),
    }
}

/// Normalize the optional nutrition notes; unusable entries are skipped.
pub fn normalize_notes(raw: &[Value]) -> Vec<NutritionNote> {
    raw.iter()
        .filter_map(|entry| {
            let text = match entry {
                Value::String(s) => Some(s.as_str()),
                Value::Object(map) => NOTE_KEYS
                    .iter()
                    .find_map(|key| map.get(*key).and_then(Value::as_str)),
                _ => None,
            };
            match text {
                Some(t) if !t.trim().is_empty() => Some(NutritionNote(t.to_string())),
                _ => {
                    debug!("skipping unusable nutrition note: {}", entry);
                    None
                }
            }
        })
        .collect()
}

/// First present, non-blank text value among `keys`.
/// Numbers and booleans are stringified; arrays and objects are ignored.
fn text_field(data: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let text = match data.get(*key)? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    })
}

fn coordinate(data: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| {
        let value = match data.get(*key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        value.is_finite().then_some(value)
    })
}

/// Both halves must be present, finite and in range; otherwise the record has no location.
fn location(data: &Map<String, Value>) -> Option<GeoPoint> {
    let latitude = coordinate(data, LATITUDE_KEYS)?;
    let longitude = coordinate(data, LONGITUDE_KEYS)?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        debug!(latitude, longitude, "coordinates out of range, dropping location");
        return None;
    }
    Some(GeoPoint { latitude, longitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_copies_known_fields() {
        let record = normalize_record(&json!({
            "name": "Penne",
            "type": "Short-cut",
            "description": "Tubes",
            "origin": "Liguria",
            "translation": "Pens",
            "commonUses": "Baked dishes",
            "imageUrl": "https://example.com/penne.png",
            "latitude": 44.3,
            "longitude": 8.4
        }));

        assert_eq!(record.name, "Penne");
        assert_eq!(record.pasta_type.as_deref(), Some("Short-cut"));
        assert_eq!(record.description.as_deref(), Some("Tubes"));
        assert_eq!(record.origin.as_deref(), Some("Liguria"));
        assert_eq!(record.translation.as_deref(), Some("Pens"));
        assert_eq!(record.common_uses.as_deref(), Some("Baked dishes"));
        assert_eq!(record.image_url.as_deref(), Some("https://example.com/penne.png"));
        assert_eq!(record.location, Some(GeoPoint { latitude: 44.3, longitude: 8.4 }));
    }

    #[test]
    fn test_missing_optional_fields_stay_absent() {
        let record = normalize_record(&json!({"name": "Mystery"}));
        assert_eq!(record.name, "Mystery");
        assert!(record.pasta_type.is_none());
        assert!(record.description.is_none());
        assert!(record.common_uses.is_none());
        assert!(record.location.is_none());
    }

    #[test]
    fn test_missing_name_falls_back_to_sentinel() {
        assert_eq!(normalize_record(&json!({"type": "Long"})).name, NOT_AVAILABLE);
        assert_eq!(normalize_record(&json!({"name": "   "})).name, NOT_AVAILABLE);
        assert_eq!(normalize_record(&json!("just a string")).name, NOT_AVAILABLE);
    }

    #[test]
    fn test_snake_case_aliases() {
        let record = normalize_record(&json!({
            "name": "Spaghetti",
            "common_uses": "Tomato sauces",
            "image_url": "spaghetti.png",
            "lat": "37.6",
            "lng": 14.0
        }));
        assert_eq!(record.common_uses.as_deref(), Some("Tomato sauces"));
        assert_eq!(record.image_url.as_deref(), Some("spaghetti.png"));
        assert_eq!(record.location, Some(GeoPoint { latitude: 37.6, longitude: 14.0 }));
    }

    #[test]
    fn test_single_coordinate_means_no_location() {
        assert!(normalize_record(&json!({"name": "A", "latitude": 41.0})).location.is_none());
        assert!(normalize_record(&json!({"name": "B", "longitude": 12.0})).location.is_none());
    }

    #[test]
    fn test_invalid_coordinates_mean_no_location() {
        let cases = [
            json!({"name": "A", "latitude": "north", "longitude": 12.0}),
            json!({"name": "B", "latitude": 95.0, "longitude": 12.0}),
            json!({"name": "C", "latitude": 41.0, "longitude": -190.0}),
            json!({"name": "D", "latitude": null, "longitude": 12.0}),
            json!({"name": "E", "latitude": "NaN", "longitude": 12.0}),
        ];
        for case in &cases {
            assert!(normalize_record(case).location.is_none(), "{}", case);
        }
    }

    #[test]
    fn test_text_values_are_kept_verbatim() {
        // No trimming or case folding: type labels must match the data exactly
        let record = normalize_record(&json!({"name": " Penne", "type": "short-cut "}));
        assert_eq!(record.name, " Penne");
        assert_eq!(record.pasta_type.as_deref(), Some("short-cut "));
    }

    #[test]
    fn test_non_text_values() {
        let record = normalize_record(&json!({
            "name": 42,
            "type": ["Long"],
            "description": {"text": "nested"},
            "origin": true
        }));
        assert_eq!(record.name, "42");
        assert!(record.pasta_type.is_none());
        assert!(record.description.is_none());
        assert_eq!(record.origin.as_deref(), Some("true"));
    }

    #[test]
    fn test_normalize_preserves_order_and_length() {
        let raw = vec![json!({"name": "B"}), json!(null), json!({"name": "A"})];
        let names: Vec<String> = normalize(&raw).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["B", NOT_AVAILABLE, "A"]);
    }

    #[test]
    fn test_normalize_notes() {
        let raw = vec![
            json!("Pasta is a good source of carbohydrates."),
            json!({"note": "Enriched pasta contains iron."}),
            json!({"text": "Whole wheat has more fiber."}),
            json!(""),
            json!(7),
            json!({"other": "ignored"}),
        ];
        let notes = normalize_notes(&raw);
        assert_eq!(notes.len(), 3);
        assert_eq!(notes[0].as_str(), "Pasta is a good source of carbohydrates.");
        assert_eq!(notes[1].as_str(), "Enriched pasta contains iron.");
        assert_eq!(notes[2].as_str(), "Whole wheat has more fiber.");
    }
}
