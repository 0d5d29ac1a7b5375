//! Resolved model registry: definitions validated and named for runtime use.

use crate::case::{to_collection_name, to_route_segment};
use crate::config::{validate, ModelDef};
use crate::error::ConfigError;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelDescriptor {
    /// Declared name, e.g. "OrderItem".
    pub name: String,
    /// URL segment, e.g. "order-item". Also used in response messages.
    pub route_name: String,
    pub collection_name: String,
    /// Field allowlist in declaration order.
    pub fields: Vec<String>,
}

impl ModelDescriptor {
    pub fn from_def(def: &ModelDef) -> Self {
        ModelDescriptor {
            name: def.name.clone(),
            route_name: to_route_segment(&def.name),
            collection_name: def
                .collection_name
                .clone()
                .unwrap_or_else(|| to_collection_name(&def.name)),
            fields: def.fields.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ModelRegistry {
    models: Vec<Arc<ModelDescriptor>>,
    by_route: HashMap<String, usize>,
}

impl ModelRegistry {
    pub fn models(&self) -> &[Arc<ModelDescriptor>] {
        &self.models
    }

    pub fn by_route(&self, route_name: &str) -> Option<&Arc<ModelDescriptor>> {
        self.by_route.get(route_name).map(|&i| &self.models[i])
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Build the registry from model definitions (validates first). Order of `defs` is preserved.
pub fn resolve(defs: &[ModelDef]) -> Result<ModelRegistry, ConfigError> {
    validate(defs)?;
    let mut registry = ModelRegistry::default();
    for def in defs {
        let descriptor = ModelDescriptor::from_def(def);
        registry
            .by_route
            .insert(descriptor.route_name.clone(), registry.models.len());
        registry.models.push(Arc::new(descriptor));
    }
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_route_and_collection_names() {
        let registry = resolve(&[ModelDef::new("OrderItem", ["sku", "quantity"])]).unwrap();
        let m = registry.by_route("order-item").unwrap();
        assert_eq!(m.route_name, "order-item");
        assert_eq!(m.collection_name, "order_item");
        assert_eq!(m.fields, vec!["sku", "quantity"]);
    }

    #[test]
    fn collection_override_wins() {
        let registry = resolve(&[ModelDef::new("OrderItem", ["sku"]).with_collection("line_items")]).unwrap();
        let m = registry.by_route("order-item").unwrap();
        assert_eq!(m.route_name, "order-item");
        assert_eq!(m.collection_name, "line_items");
    }

    #[test]
    fn preserves_declaration_order() {
        let registry = resolve(&[
            ModelDef::new("Zebra", ["a"]),
            ModelDef::new("Apple", ["b"]),
        ])
        .unwrap();
        let names: Vec<_> = registry.models().iter().map(|m| m.route_name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.by_route("missing").is_none());
    }
}
