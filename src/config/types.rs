//! Raw model definitions: the declared name, field allowlist and optional collection override.

use serde::{Deserialize, Serialize};

/// A model declared in code. Implement on a marker or data type to register it with `ModelDef::of`.
///
/// ```ignore
/// struct OrderItem;
/// impl Model for OrderItem {
///     const NAME: &'static str = "OrderItem";
///     const FIELDS: &'static [&'static str] = &["sku", "quantity"];
/// }
/// ```
pub trait Model {
    /// Class-style name; route and collection names are derived from it.
    const NAME: &'static str;
    /// Field names accepted on write, in declaration order.
    const FIELDS: &'static [&'static str];
    /// Explicit collection name, overriding the derived one.
    const COLLECTION: Option<&'static str> = None;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDef {
    pub name: String,
    pub fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
}

impl ModelDef {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ModelDef {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            collection_name: None,
        }
    }

    pub fn with_collection(mut self, collection_name: impl Into<String>) -> Self {
        self.collection_name = Some(collection_name.into());
        self
    }

    pub fn of<M: Model>() -> Self {
        ModelDef {
            name: M::NAME.to_string(),
            fields: M::FIELDS.iter().map(|f| f.to_string()).collect(),
            collection_name: M::COLLECTION.map(str::to_string),
        }
    }
}

/// Contents of one model file: a single definition or a list of them.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ModelFile {
    One(ModelDef),
    Many(Vec<ModelDef>),
}

impl ModelFile {
    pub fn into_defs(self) -> Vec<ModelDef> {
        match self {
            ModelFile::One(d) => vec![d],
            ModelFile::Many(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;

    impl Model for Invoice {
        const NAME: &'static str = "Invoice";
        const FIELDS: &'static [&'static str] = &["number", "total"];
        const COLLECTION: Option<&'static str> = Some("billing_invoices");
    }

    #[test]
    fn def_from_model_trait_carries_override() {
        let def = ModelDef::of::<Invoice>();
        assert_eq!(def.name, "Invoice");
        assert_eq!(def.fields, vec!["number", "total"]);
        assert_eq!(def.collection_name.as_deref(), Some("billing_invoices"));
    }

    #[test]
    fn model_file_accepts_object_or_array() {
        let one: ModelFile = serde_json::from_str(r#"{"name": "Book", "fields": ["title"]}"#).unwrap();
        assert_eq!(one.into_defs().len(), 1);

        let many: ModelFile = serde_json::from_str(
            r#"[{"name": "Book", "fields": ["title"]}, {"name": "Author", "fields": ["name"], "collection_name": "writers"}]"#,
        )
        .unwrap();
        let defs = many.into_defs();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[1].collection_name.as_deref(), Some("writers"));
    }
}
