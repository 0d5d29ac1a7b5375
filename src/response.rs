//! Message bodies returned in place of a document.

use serde_json::Value;

/// `{"message": "<route> not found"}`
pub fn not_found_message(route_name: &str) -> Value {
    serde_json::json!({ "message": format!("{} not found", route_name) })
}

/// `{"message": "<route> deleted successfully"}`
pub fn deleted_message(route_name: &str) -> Value {
    serde_json::json!({ "message": format!("{} deleted successfully", route_name) })
}

/// Stand-in for a document that could not be read.
pub fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
