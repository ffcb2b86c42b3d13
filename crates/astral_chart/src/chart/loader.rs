use crate::chart::data::{AspectType, ChartData, HouseCusps};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when loading chart data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartDataError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Unknown house label: {0} (expected House1..House12)")]
    UnknownHouse(String),
    #[error("Unknown aspect type: {0}")]
    UnknownAspectType(String),
    #[error("Invalid field value: {0}")]
    InvalidFieldValue(String),
}

/// Load chart data from a JSON document.
///
/// Structural problems (wrong container types, unknown house labels, unknown
/// aspect types) are errors. Per-entry problems are not: a body that is not
/// an object, or whose longitude is not a number, is kept with no longitude
/// so the layout can skip it, and an aspect without both body names is
/// dropped.
pub fn load_chart_data_from_json(json: &str) -> Result<ChartData, ChartDataError> {
    let mut parsed: Value =
        serde_json::from_str(json).map_err(|e| ChartDataError::InvalidJson(e.to_string()))?;

    validate_chart_document(&mut parsed)?;

    serde_json::from_value(parsed).map_err(|e| ChartDataError::InvalidFieldValue(e.to_string()))
}

fn validate_chart_document(document: &mut Value) -> Result<(), ChartDataError> {
    let obj = document.as_object_mut().ok_or_else(|| {
        ChartDataError::InvalidFieldValue("chart data must be an object".to_string())
    })?;

    if let Some(points) = obj.get_mut("points") {
        if !points.is_null() {
            let points = points.as_object_mut().ok_or_else(|| {
                ChartDataError::InvalidFieldValue("points must be an object".to_string())
            })?;
            for (name, point) in points.iter_mut() {
                scrub_point(name, point);
            }
        }
    }

    if let Some(houses) = obj.get("houses") {
        if !houses.is_null() {
            validate_houses(houses)?;
        }
    }

    if let Some(aspects) = obj.get_mut("aspects") {
        if !aspects.is_null() {
            let aspects = aspects.as_array_mut().ok_or_else(|| {
                ChartDataError::InvalidFieldValue("aspects must be an array".to_string())
            })?;
            let entries = std::mem::take(aspects);
            for (index, mut aspect) in entries.into_iter().enumerate() {
                if validate_aspect(&mut aspect, index)? {
                    aspects.push(aspect);
                }
            }
        }
    }

    Ok(())
}

fn scrub_point(name: &str, point: &mut Value) {
    if !point.is_object() {
        log::debug!("points.{} is not an object; keeping it with no fields", name);
        *point = Value::Object(Map::new());
    }
    let Some(fields) = point.as_object_mut() else {
        return;
    };

    for key in ["longitude", "latitude"] {
        if let Some(value) = fields.get(key) {
            if !value.is_null() && !value.is_number() {
                log::debug!("points.{}.{} is not a number; dropping it", name, key);
                fields.insert(key.to_string(), Value::Null);
            }
        }
    }

    if let Some(house) = fields.get("house") {
        let valid = house
            .as_u64()
            .map(|n| (1..=12).contains(&n))
            .unwrap_or(house.is_null());
        if !valid {
            log::debug!("points.{}.house out of range; dropping it", name);
            fields.insert("house".to_string(), Value::Null);
        }
    }

    for key in ["sign", "movement"] {
        if let Some(value) = fields.get(key) {
            if !value.is_null() && !value.is_string() {
                fields.insert(key.to_string(), Value::Null);
            }
        }
    }
}

fn validate_houses(houses: &Value) -> Result<(), ChartDataError> {
    let houses: &Map<String, Value> = houses.as_object().ok_or_else(|| {
        ChartDataError::InvalidFieldValue("houses must be an object".to_string())
    })?;

    for (label, degree) in houses {
        if HouseCusps::parse_label(label).is_none() {
            return Err(ChartDataError::UnknownHouse(label.clone()));
        }
        if !degree.is_null() && !degree.is_number() {
            return Err(ChartDataError::InvalidFieldValue(format!(
                "houses.{} must be a number",
                label
            )));
        }
    }

    Ok(())
}

/// Check one aspect entry. `Ok(false)` means the entry is unusable and should
/// be dropped; only an unknown aspect type name is an error.
fn validate_aspect(aspect: &mut Value, index: usize) -> Result<bool, ChartDataError> {
    let Some(fields) = aspect.as_object_mut() else {
        log::debug!("aspects[{}] is not an object; dropping it", index);
        return Ok(false);
    };

    for key in ["planet1", "planet2", "aspect_type"] {
        match fields.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => {}
            _ => {
                log::debug!(
                    "aspects[{}].{} missing or not a non-empty string; dropping it",
                    index,
                    key
                );
                return Ok(false);
            }
        }
    }

    if let Some(Value::String(aspect_type)) = fields.get("aspect_type") {
        AspectType::try_from(aspect_type.clone())?;
    }

    for key in ["angle", "orb"] {
        if fields.get(key).is_some_and(|v| !v.is_null() && !v.is_number()) {
            fields.remove(key);
        }
    }
    if fields.get("applying").is_some_and(|v| !v.is_null() && !v.is_boolean()) {
        fields.remove("applying");
    }

    Ok(true)
}
