use crate::attr::Attr;

///
/// ModelField
///
/// One read from a domain object's accessor, as seen by the copy engine.
///

pub enum ModelField<'m> {
    /// Untyped value, copied verbatim.
    Value(Attr),
    /// Single nested model. `None` means the accessor exists and the value
    /// is nil.
    One(Option<&'m dyn Model>),
    /// Ordered nested models. An absent source collection reads as an
    /// empty vec, never as `One(None)`.
    Many(Vec<&'m dyn Model>),
}

///
/// Model
///
/// Read-only contract a domain object exposes to the copy engine. Every
/// property declared on the target representer must be readable; `None`
/// means the accessor itself is missing, which is a configuration error
/// rather than a runtime-recoverable one. The engine never mutates the
/// model.
///

pub trait Model {
    fn field(&self, ident: &str) -> Option<ModelField<'_>>;
}
