use crate::types::{Cardinality, Category};
use derive_more::Deref;
use serde::Serialize;

///
/// PropertyList
///
/// Insertion-ordered property definitions; declared order is serialization
/// order. Redeclaring an ident replaces the earlier definition in place, so
/// order is stable under redeclaration.
///

#[derive(Clone, Debug, Default, Deref, Serialize)]
pub struct PropertyList {
    properties: Vec<Property>,
}

impl PropertyList {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.ident == ident)
    }

    /// Insert a definition, replacing any earlier one with the same ident.
    /// Returns the replaced definition.
    pub fn insert(&mut self, property: Property) -> Option<Property> {
        match self.properties.iter().position(|p| p.ident == property.ident) {
            Some(pos) => Some(std::mem::replace(&mut self.properties[pos], property)),
            None => {
                self.properties.push(property);
                None
            }
        }
    }
}

///
/// Property
///

#[derive(Clone, Debug, Serialize)]
pub struct Property {
    pub ident: String,
    pub cardinality: Cardinality,
    pub category: Category,

    /// Path of the child representer for typed properties. For `Many`, the
    /// target applies element-wise, never to the sequence itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Property {
    #[must_use]
    pub fn untyped(ident: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            ident: ident.into(),
            cardinality,
            category: Category::Domain,
            target: None,
        }
    }

    #[must_use]
    pub fn typed(
        ident: impl Into<String>,
        cardinality: Cardinality,
        target: impl Into<String>,
    ) -> Self {
        Self {
            ident: ident.into(),
            cardinality,
            category: Category::Domain,
            target: Some(target.into()),
        }
    }

    /// Representation metadata (hypermedia links and the like); excluded
    /// from the persistence-facing attribute view.
    #[must_use]
    pub fn metadata(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            cardinality: Cardinality::One,
            category: Category::Metadata,
            target: None,
        }
    }

    #[must_use]
    pub const fn is_typed(&self) -> bool {
        self.target.is_some()
    }
}
