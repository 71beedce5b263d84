mod property;
mod representer;

pub use property::{Property, PropertyList};
pub use representer::Representer;

use crate::{Error, validate::validate_schema};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NodeError {
    #[error("representer '{0}' is already defined")]
    DuplicateRepresenter(String),

    #[error("property '{1}' is already declared on representer '{0}'")]
    DuplicateProperty(String, String),
}

///
/// SchemaOptions
///

#[derive(Clone, Copy, Debug, Default)]
pub struct SchemaOptions {
    /// Reject redeclaration of a property ident instead of silently
    /// replacing the earlier definition.
    pub strict_redeclare: bool,
}

///
/// Schema
///
/// Registry of representer nodes, keyed by path. Read-only after
/// declaration, so a validated schema is safely shared across any number
/// of concurrently built instances.
///

#[derive(Debug, Default, Serialize)]
pub struct Schema {
    nodes: BTreeMap<String, Representer>,

    #[serde(skip)]
    options: SchemaOptions,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: SchemaOptions) -> Self {
        Self {
            nodes: BTreeMap::new(),
            options,
        }
    }

    /// Define a representer node and declare its properties.
    pub fn define<F>(&mut self, path: impl Into<String>, f: F) -> Result<(), NodeError>
    where
        F: FnOnce(&mut Representer) -> Result<(), NodeError>,
    {
        let path = path.into();
        if self.nodes.contains_key(&path) {
            return Err(NodeError::DuplicateRepresenter(path));
        }

        let mut node = Representer::new(path.clone(), self.options.strict_redeclare);
        f(&mut node)?;
        self.nodes.insert(path, node);

        Ok(())
    }

    #[must_use]
    pub fn get_node(&self, path: &str) -> Option<&Representer> {
        self.nodes.get(path)
    }

    /// Iterate nodes in path order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Representer)> {
        self.nodes.iter().map(|(path, node)| (path.as_str(), node))
    }

    /// Run full schema validation: naming, target resolution, acyclicity.
    pub fn validate(&self) -> Result<(), Error> {
        validate_schema(self).map_err(Error::Validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redefining_a_representer_path_fails() {
        let mut schema = Schema::new();
        schema
            .define("Item", |r| {
                r.property("value")?;
                Ok(())
            })
            .unwrap();

        let err = schema.define("Item", |r| {
            r.property("value")?;
            Ok(())
        });
        assert_eq!(err, Err(NodeError::DuplicateRepresenter("Item".to_string())));
    }

    #[test]
    fn redeclaration_replaces_in_place_by_default() {
        let mut schema = Schema::new();
        schema
            .define("Order", |r| {
                r.property("id")?;
                r.property("status")?;
                r.property_as("id", "OrderId")?;
                Ok(())
            })
            .unwrap();

        let node = schema.get_node("Order").unwrap();
        let idents: Vec<&str> = node.properties.iter().map(|p| p.ident.as_str()).collect();

        // Replacement keeps the original declaration position.
        assert_eq!(idents, vec!["id", "status"]);
        assert!(node.properties.get("id").unwrap().is_typed());
    }

    #[test]
    fn strict_schema_rejects_redeclaration() {
        let mut schema = Schema::with_options(SchemaOptions {
            strict_redeclare: true,
        });

        let err = schema.define("Order", |r| {
            r.property("id")?;
            r.property("id")?;
            Ok(())
        });
        assert_eq!(
            err,
            Err(NodeError::DuplicateProperty(
                "Order".to_string(),
                "id".to_string()
            ))
        );
    }
}
