//! Model definition validation: non-empty names, usable field names, unique route segments.

use crate::case::to_route_segment;
use crate::config::ModelDef;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Route segments are mounted verbatim, so they must hold no path or router syntax.
static ROUTE_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("static pattern"));

fn invalid(def: &ModelDef, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidModel {
        model: def.name.clone(),
        reason: reason.into(),
    }
}

pub fn validate_def(def: &ModelDef) -> Result<(), ConfigError> {
    let segment = to_route_segment(&def.name);
    if segment.is_empty() {
        return Err(invalid(def, "name must contain at least one word"));
    }
    if !ROUTE_SEGMENT.is_match(&segment) {
        return Err(invalid(
            def,
            format!("route segment '{}' must use only a-z, 0-9 and '-'", segment),
        ));
    }
    if let Some(c) = &def.collection_name {
        if c.trim().is_empty() {
            return Err(invalid(def, "collection_name must not be empty"));
        }
    }
    let mut seen = HashSet::new();
    for f in &def.fields {
        if f.is_empty() {
            return Err(invalid(def, "field names must not be empty"));
        }
        // `_id` is assigned by the store and cannot be written through $set.
        if f == "_id" || f.starts_with('$') || f.contains('.') {
            return Err(invalid(def, format!("field '{}' is not writable", f)));
        }
        if !seen.insert(f.as_str()) {
            return Err(invalid(def, format!("field '{}' declared twice", f)));
        }
    }
    Ok(())
}

pub fn validate(defs: &[ModelDef]) -> Result<(), ConfigError> {
    let mut route_segments = HashSet::new();
    for def in defs {
        validate_def(def)?;
        let segment = to_route_segment(&def.name);
        if !route_segments.insert(segment.clone()) {
            return Err(ConfigError::DuplicatePathSegment(segment));
        }
    }
    Ok(())
}
