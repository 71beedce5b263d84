//! Schema layer for Veneer: representer declaration, the property AST,
//! and staged schema validation.

pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for representer schema identifiers.
pub const MAX_REPRESENTER_NAME_LEN: usize = 64;

/// Maximum length for property schema identifiers.
pub const MAX_PROPERTY_NAME_LEN: usize = 64;

use crate::{error::ErrorTree, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::{NodeError, Property, PropertyList, Representer, Schema, SchemaOptions},
        types::{Cardinality, Category},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NodeError(#[from] NodeError),

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
