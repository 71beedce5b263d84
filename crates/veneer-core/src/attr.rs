use derive_more::Deref;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

///
/// AttrMap
///
/// Insertion-ordered key/value pairs. Declaration order is serialization
/// order, so entries keep the order they were inserted; replacement by key
/// keeps the original position.
///

#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct AttrMap(Vec<(String, Attr)>);

impl AttrMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Attr> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert an entry, replacing any earlier one with the same key in
    /// place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Attr>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(pos) => self.0[pos] = (key, value),
            None => self.0.push((key, value)),
        }
    }

    /// Property names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl From<Vec<(String, Attr)>> for AttrMap {
    fn from(entries: Vec<(String, Attr)>) -> Self {
        let mut map = Self::new();
        for (key, value) in entries {
            map.insert(key, value);
        }

        map
    }
}

///
/// Attr
///
/// The external nested representation produced by flattening an instance
/// tree: a scalar, an ordered list, or an ordered key/value map.
/// Independent of any wire format; the `Serialize` impl is the seam handed
/// to external encoders.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Attr {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    /// Ordered list of values. Source order is preserved.
    List(Vec<Self>),
    /// Insertion-ordered mapping, keyed by property name.
    Map(AttrMap),
}

impl Attr {
    /// Build an `Attr::List` from a list literal.
    ///
    /// Intended for tests and inline construction. Requires `Clone`
    /// because items are borrowed.
    pub fn from_slice<T>(items: &[T]) -> Self
    where
        T: Into<Self> + Clone,
    {
        Self::List(items.iter().cloned().map(Into::into).collect())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&AttrMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<bool> for Attr {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Attr {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Attr {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Attr {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<f64> for Attr {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Attr {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Attr {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Attr {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl From<AttrMap> for Attr {
    fn from(v: AttrMap) -> Self {
        Self::Map(v)
    }
}

impl<T> From<Option<T>> for Attr
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Serialize for Attr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(v) => serializer.serialize_bool(*v),
            Self::Int(v) => serializer.serialize_i64(*v),
            Self::Uint(v) => serializer.serialize_u64(*v),
            Self::Float(v) => serializer.serialize_f64(*v),
            Self::Text(v) => serializer.serialize_str(v),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    entries.serialize_entry(key, value)?;
                }
                entries.end()
            }
        }
    }
}
