//! Request body filtering against a model's declared field list.

use crate::config::ModelDescriptor;
use crate::store::Fields;
use serde_json::Value;

/// How absent (or null) declared fields are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Create / replace: every declared field is written, absent ones as null.
    Full,
    /// Patch: only declared fields carrying a non-null value are written.
    Partial,
}

pub struct FieldFilter;

impl FieldFilter {
    /// Keep declared fields only; unknown keys are dropped.
    pub fn apply(model: &ModelDescriptor, body: &Fields, mode: WriteMode) -> Fields {
        let mut out = Fields::new();
        for field in &model.fields {
            match (body.get(field), mode) {
                (Some(v), _) if !v.is_null() => {
                    out.insert(field.clone(), v.clone());
                }
                (_, WriteMode::Full) => {
                    out.insert(field.clone(), Value::Null);
                }
                (_, WriteMode::Partial) => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelDef;
    use serde_json::json;

    fn model() -> ModelDescriptor {
        ModelDescriptor::from_def(&ModelDef::new("OrderItem", ["sku", "quantity", "note"]))
    }

    fn body(v: Value) -> Fields {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let out = FieldFilter::apply(
            &model(),
            &body(json!({"sku": "A1", "quantity": 2, "note": "x", "admin": true, "_id": "forged"})),
            WriteMode::Full,
        );
        assert_eq!(Value::Object(out), json!({"sku": "A1", "quantity": 2, "note": "x"}));
    }

    #[test]
    fn full_mode_nulls_absent_and_null_fields() {
        let out = FieldFilter::apply(&model(), &body(json!({"sku": "A1", "note": null})), WriteMode::Full);
        assert_eq!(Value::Object(out), json!({"sku": "A1", "quantity": null, "note": null}));
    }

    #[test]
    fn partial_mode_omits_absent_and_null_fields() {
        let out = FieldFilter::apply(&model(), &body(json!({"quantity": 5, "note": null})), WriteMode::Partial);
        assert_eq!(Value::Object(out), json!({"quantity": 5}));
    }

    #[test]
    fn falsy_values_are_kept() {
        let out = FieldFilter::apply(&model(), &body(json!({"sku": "", "quantity": 0})), WriteMode::Partial);
        assert_eq!(Value::Object(out), json!({"sku": "", "quantity": 0}));
    }
}
