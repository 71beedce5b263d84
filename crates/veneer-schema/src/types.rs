use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Cardinality
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

impl Cardinality {
    #[must_use]
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}

///
/// Category
///
/// Per-definition tag distinguishing domain data from representation
/// metadata (hypermedia links and the like). Metadata properties serialize
/// through the general attribute view but are excluded from the
/// persistence-facing view.
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize,
)]
pub enum Category {
    #[default]
    Domain,
    Metadata,
}

impl Category {
    #[must_use]
    pub const fn is_metadata(self) -> bool {
        matches!(self, Self::Metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_from_str() {
        assert_eq!("Many".parse::<Cardinality>().unwrap(), Cardinality::Many);
        assert_eq!(Cardinality::One.to_string(), "One");
        assert_eq!("Metadata".parse::<Category>().unwrap(), Category::Metadata);
    }
}
