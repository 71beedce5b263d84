use thiserror::Error as ThisError;

///
/// MapError
///
/// Structural violations raised by the copy engine. All errors surface
/// synchronously to the caller of the top-level operation; the core never
/// retries or recovers, and nothing is silently swallowed except the
/// documented absent-scalar-nested read, which is success.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum MapError {
    #[error("representer '{path}' is not defined on the schema")]
    UnknownRepresenter { path: String },

    #[error("representer '{path}' declares no property '{property}'")]
    UnknownProperty { path: String, property: String },

    #[error("model for representer '{path}' exposes no accessor for declared property '{property}'")]
    MissingAccessor { path: String, property: String },

    #[error("representer '{path}', property '{property}': {message}")]
    Shape {
        path: String,
        property: String,
        message: String,
    },

    #[error("representer '{path}': {message}")]
    Input { path: String, message: String },
}

impl MapError {
    pub(crate) fn shape(
        path: impl Into<String>,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Shape {
            path: path.into(),
            property: property.into(),
            message: message.into(),
        }
    }
}
