//! Veneer: a declarative representer engine mapping domain models to
//! nested attribute trees, and attribute trees back to instances.
//!
//! ## Crate layout
//! - `schema`: representer declaration, the property AST, and validation.
//! - `core`: attribute values, instances, and the model copy engine.
//!
//! The `prelude` module mirrors the surface used by representer code.

pub use veneer_core as core;
pub use veneer_schema as schema;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::{
        attr::{Attr, AttrMap},
        copy::Mapper,
        error::MapError,
        instance::{Instance, Slot},
        model::{Model, ModelField},
    };
    pub use crate::schema::{
        Error as SchemaError,
        node::{NodeError, Schema, SchemaOptions},
        types::{Cardinality, Category},
    };
}
