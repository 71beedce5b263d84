use crate::{
    attr::Attr,
    error::MapError,
    instance::{Instance, Slot},
    model::{Model, ModelField},
};
use veneer_schema::{
    node::{Property, Representer, Schema},
    types::Cardinality,
};

///
/// Mapper
///
/// The recursive copy engine between domain models, instance trees, and
/// attribute trees. Holds no state between calls; the borrowed schema is
/// read-only and shareable. Recursion depth is bounded by the schema
/// graph, which validation guarantees is acyclic.
///

pub struct Mapper<'s> {
    schema: &'s Schema,
}

impl<'s> Mapper<'s> {
    #[must_use]
    pub const fn new(schema: &'s Schema) -> Self {
        Self { schema }
    }

    fn node(&self, path: &str) -> Result<&'s Representer, MapError> {
        self.schema
            .get_node(path)
            .ok_or_else(|| MapError::UnknownRepresenter {
                path: path.to_string(),
            })
    }

    /// Wrap `model` in the representer declared at `path`, recursively
    /// wrapping nested models in their declared child representers.
    ///
    /// Per-property reads are buffered and committed only after the whole
    /// pass succeeds, so no partially populated instance escapes on error.
    /// The model itself is never mutated.
    pub fn build_from_model<'m>(
        &self,
        path: &str,
        model: &'m dyn Model,
    ) -> Result<Instance<'m>, MapError> {
        let node = self.node(path)?;

        let mut slots: Vec<(&str, Slot<'m>)> = Vec::with_capacity(node.properties.len());
        for property in node.properties.iter() {
            // Metadata properties are not model concerns; they stay unset
            // until representation features assign them.
            if property.category.is_metadata() {
                continue;
            }

            let read = model
                .field(&property.ident)
                .ok_or_else(|| MapError::MissingAccessor {
                    path: path.to_string(),
                    property: property.ident.clone(),
                })?;
            slots.push((
                property.ident.as_str(),
                self.copy_property(path, property, read)?,
            ));
        }

        let mut instance = Instance::new(node);
        instance.set_represented(model);
        for (ident, slot) in slots {
            instance.set(ident, slot)?;
        }

        Ok(instance)
    }

    // Copy one property read from the model into a slot, dispatching on
    // the typed/untyped and one/many declaration.
    fn copy_property<'m>(
        &self,
        path: &str,
        property: &Property,
        read: ModelField<'m>,
    ) -> Result<Slot<'m>, MapError> {
        let Some(target) = &property.target else {
            // Untyped properties copy verbatim, whatever their shape.
            return match read {
                ModelField::Value(attr) => Ok(Slot::Value(attr)),
                ModelField::One(_) | ModelField::Many(_) => Err(MapError::shape(
                    path,
                    property.ident.as_str(),
                    "untyped property must read as a value",
                )),
            };
        };

        match (property.cardinality, read) {
            (Cardinality::One, ModelField::One(Some(child))) => Ok(Slot::One(Box::new(
                self.build_from_model(target, child)?,
            ))),
            // Absent nested model: leave the field unset rather than
            // recursing into nothing.
            (Cardinality::One, ModelField::One(None)) => Ok(Slot::Unset),
            // Collections always materialize, possibly empty, preserving
            // source order.
            (Cardinality::Many, ModelField::Many(children)) => {
                let mut instances = Vec::with_capacity(children.len());
                for child in children {
                    instances.push(self.build_from_model(target, child)?);
                }
                Ok(Slot::Many(instances))
            }
            (cardinality, _) => Err(MapError::shape(
                path,
                property.ident.as_str(),
                format!("typed {cardinality} property read with mismatched shape"),
            )),
        }
    }

    /// Build an instance directly from an attribute tree.
    pub fn from_attributes(
        &self,
        path: &str,
        attributes: &Attr,
    ) -> Result<Instance<'static>, MapError> {
        self.from_attributes_with(path, attributes, |_| {})
    }

    /// Like [`from_attributes`](Self::from_attributes), but runs
    /// `configure` against the empty instance before population.
    ///
    /// Every key must match a declared property; this is deliberate
    /// strictness, not a permissive merge. Nothing observable is
    /// populated on failure.
    pub fn from_attributes_with<F>(
        &self,
        path: &str,
        attributes: &Attr,
        configure: F,
    ) -> Result<Instance<'static>, MapError>
    where
        F: FnOnce(&mut Instance<'static>),
    {
        let node = self.node(path)?;
        let Some(map) = attributes.as_map() else {
            return Err(MapError::Input {
                path: path.to_string(),
                message: "expected an attribute map".to_string(),
            });
        };

        let mut slots: Vec<(&str, Slot<'static>)> = Vec::with_capacity(map.len());
        for (key, value) in map.iter() {
            let property = node
                .properties
                .get(key)
                .ok_or_else(|| MapError::UnknownProperty {
                    path: path.to_string(),
                    property: key.clone(),
                })?;
            slots.push((key.as_str(), self.assign_property(path, property, value)?));
        }

        let mut instance = Instance::new(node);
        configure(&mut instance);
        for (ident, slot) in slots {
            instance.set(ident, slot)?;
        }

        Ok(instance)
    }

    // Convert one attribute value into a slot, recursing through typed
    // declarations.
    fn assign_property(
        &self,
        path: &str,
        property: &Property,
        value: &Attr,
    ) -> Result<Slot<'static>, MapError> {
        let Some(target) = &property.target else {
            return Ok(Slot::Value(value.clone()));
        };

        match property.cardinality {
            Cardinality::One => Ok(Slot::One(Box::new(self.from_attributes(target, value)?))),
            Cardinality::Many => {
                let Some(items) = value.as_list() else {
                    return Err(MapError::shape(
                        path,
                        property.ident.as_str(),
                        "typed collection expects a list of attribute maps",
                    ));
                };

                let mut instances = Vec::with_capacity(items.len());
                for item in items {
                    instances.push(self.from_attributes(target, item)?);
                }
                Ok(Slot::Many(instances))
            }
        }
    }
}
