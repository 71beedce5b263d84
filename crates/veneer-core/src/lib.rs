//! Core runtime for Veneer: attribute values, representer instances, the
//! model copy engine, and the ergonomics exported via the `prelude`.

pub mod attr;
pub mod copy;
pub mod error;
pub mod instance;
pub mod model;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        attr::{Attr, AttrMap},
        copy::Mapper,
        error::MapError,
        instance::{Instance, Slot},
        model::{Model, ModelField},
    };
    pub use veneer_schema::{
        node::{Schema, SchemaOptions},
        types::{Cardinality, Category},
    };
}
