use crate::{
    attr::{Attr, AttrMap},
    error::MapError,
    model::Model,
};
use std::fmt;
use veneer_schema::{
    node::Representer,
    types::{Cardinality, Category},
};

///
/// Slot
///
/// Materialized state of one declared property on an instance: unset, a
/// verbatim attribute value, a nested instance, or an ordered sequence of
/// nested instances.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Slot<'m> {
    #[default]
    Unset,
    Value(Attr),
    One(Box<Instance<'m>>),
    Many(Vec<Instance<'m>>),
}

impl<'m> Slot<'m> {
    /// The dual-shape primitive: apply `f` to each nested instance,
    /// element-wise through `Many`; values pass through unchanged and
    /// `Unset` maps to `None`. Every typed/collection distinction in the
    /// serializers is one call to this.
    pub fn apply<F>(&self, mut f: F) -> Option<Attr>
    where
        F: FnMut(&Instance<'m>) -> Attr,
    {
        match self {
            Self::Unset => None,
            Self::Value(attr) => Some(attr.clone()),
            Self::One(instance) => Some(f(instance)),
            Self::Many(instances) => Some(Attr::List(instances.iter().map(f).collect())),
        }
    }

    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

///
/// InstanceField
///

#[derive(Clone, Debug, PartialEq)]
pub struct InstanceField<'m> {
    pub ident: String,
    pub cardinality: Cardinality,
    pub category: Category,
    pub typed: bool,
    pub slot: Slot<'m>,
}

///
/// Instance
///
/// Wraps exactly one represented domain object and materializes the
/// schema-declared properties as its own fields, in declaration order.
/// Created by the copy engine (model → instance) or by direct attribute
/// assignment (attribute tree → instance); single-owner, no teardown.
///

#[derive(Clone)]
pub struct Instance<'m> {
    path: String,
    represented: Option<&'m dyn Model>,
    fields: Vec<InstanceField<'m>>,
}

impl<'m> Instance<'m> {
    /// Empty instance for a representer node: all slots unset, no
    /// represented object.
    #[must_use]
    pub fn new(representer: &Representer) -> Self {
        let fields = representer
            .properties
            .iter()
            .map(|p| InstanceField {
                ident: p.ident.clone(),
                cardinality: p.cardinality,
                category: p.category,
                typed: p.is_typed(),
                slot: Slot::Unset,
            })
            .collect();

        Self {
            path: representer.path.clone(),
            represented: None,
            fields,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Provenance back-reference to the model this instance was built
    /// from. Never mutated through the instance.
    #[must_use]
    pub const fn represented(&self) -> Option<&'m dyn Model> {
        self.represented
    }

    pub(crate) const fn set_represented(&mut self, model: &'m dyn Model) {
        self.represented = Some(model);
    }

    /// Declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[InstanceField<'m>] {
        &self.fields
    }

    /// Read the materialized slot for a declared property.
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Slot<'m>> {
        self.fields
            .iter()
            .find(|f| f.ident == ident)
            .map(|f| &f.slot)
    }

    /// Replace the slot for a declared property. Undeclared idents fail;
    /// the instance only ever exposes whitelisted fields.
    pub fn set(&mut self, ident: &str, slot: Slot<'m>) -> Result<(), MapError> {
        match self.fields.iter_mut().find(|f| f.ident == ident) {
            Some(field) => {
                field.slot = slot;
                Ok(())
            }
            None => Err(MapError::UnknownProperty {
                path: self.path.clone(),
                property: ident.to_string(),
            }),
        }
    }

    /// Flatten the instance tree into an attribute tree.
    ///
    /// Keys appear in declaration order and only for declared properties
    /// (undeclared model fields never leak). Nested instances recurse
    /// fully before the parent map is finalized; unset slots are omitted.
    /// Pure: calling twice yields structurally equal trees.
    #[must_use]
    pub fn to_attributes(&self) -> Attr {
        let mut attributes = AttrMap::new();
        for field in &self.fields {
            if let Some(value) = field.slot.apply(Self::to_attributes) {
                attributes.insert(field.ident.clone(), value);
            }
        }

        Attr::Map(attributes)
    }

    /// Persistence-facing variant of [`to_attributes`](Self::to_attributes):
    /// identical traversal, except typed collection keys are renamed
    /// `<ident>_attributes` and metadata properties are excluded entirely,
    /// at every depth.
    #[must_use]
    pub fn to_nested_attributes(&self) -> Attr {
        let mut attributes = AttrMap::new();
        for field in &self.fields {
            if field.category.is_metadata() {
                continue;
            }
            let Some(value) = field.slot.apply(Self::to_nested_attributes) else {
                continue;
            };

            let key = if field.typed && field.cardinality.is_many() {
                format!("{}_attributes", field.ident)
            } else {
                field.ident.clone()
            };
            attributes.insert(key, value);
        }

        Attr::Map(attributes)
    }
}

// Structural equality: provenance is identity, not value, so the
// represented back-reference is ignored.
impl PartialEq for Instance<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.fields == other.fields
    }
}

impl fmt::Debug for Instance<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("path", &self.path)
            .field("represented", &self.represented.is_some())
            .field("fields", &self.fields)
            .finish()
    }
}
