use crate::{
    node::{NodeError, Property, PropertyList},
    types::Cardinality,
};
use serde::Serialize;

///
/// Representer
///
/// One schema node per representer type; owns the ordered property
/// definitions exposed by instances of that type. Declared order
/// determines serialization order.
///

#[derive(Clone, Debug, Serialize)]
pub struct Representer {
    pub path: String,
    pub properties: PropertyList,

    #[serde(skip)]
    strict_redeclare: bool,
}

impl Representer {
    pub(crate) const fn new(path: String, strict_redeclare: bool) -> Self {
        Self {
            path,
            properties: PropertyList::new(),
            strict_redeclare,
        }
    }

    /// Declare an untyped single-value property.
    pub fn property(&mut self, ident: impl Into<String>) -> Result<&mut Self, NodeError> {
        self.declare(Property::untyped(ident, Cardinality::One))
    }

    /// Declare a property wrapped by the representer at `target`.
    pub fn property_as(
        &mut self,
        ident: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<&mut Self, NodeError> {
        self.declare(Property::typed(ident, Cardinality::One, target))
    }

    /// Declare an untyped ordered-collection property.
    pub fn collection(&mut self, ident: impl Into<String>) -> Result<&mut Self, NodeError> {
        self.declare(Property::untyped(ident, Cardinality::Many))
    }

    /// Declare an ordered collection whose elements are wrapped by the
    /// representer at `target`.
    pub fn collection_of(
        &mut self,
        ident: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<&mut Self, NodeError> {
        self.declare(Property::typed(ident, Cardinality::Many, target))
    }

    /// Declare a representation-metadata property.
    pub fn metadata(&mut self, ident: impl Into<String>) -> Result<&mut Self, NodeError> {
        self.declare(Property::metadata(ident))
    }

    /// Register a definition. Redeclaring an ident replaces the earlier
    /// definition (last-write-wins) unless the schema is strict.
    pub fn declare(&mut self, property: Property) -> Result<&mut Self, NodeError> {
        if self.strict_redeclare && self.properties.get(&property.ident).is_some() {
            return Err(NodeError::DuplicateProperty(
                self.path.clone(),
                property.ident,
            ));
        }
        self.properties.insert(property);

        Ok(self)
    }
}
