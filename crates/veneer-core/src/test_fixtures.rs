//! Shared domain-model fixtures for the copy-engine tests.

use crate::{
    attr::Attr,
    model::{Model, ModelField},
};
use veneer_schema::node::Schema;

///
/// Item
///

pub struct Item {
    pub value: String,
}

impl Item {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl Model for Item {
    fn field(&self, ident: &str) -> Option<ModelField<'_>> {
        match ident {
            "value" => Some(ModelField::Value(Attr::Text(self.value.clone()))),
            _ => None,
        }
    }
}

///
/// Order
/// Carries an undeclared `internal_cost` accessor to exercise
/// whitelisting.
///

pub struct Order {
    pub id: i64,
    pub items: Vec<Item>,
}

impl Model for Order {
    fn field(&self, ident: &str) -> Option<ModelField<'_>> {
        match ident {
            "id" => Some(ModelField::Value(Attr::Int(self.id))),
            "items" => Some(ModelField::Many(
                self.items.iter().map(|i| i as &dyn Model).collect(),
            )),
            "internal_cost" => Some(ModelField::Value(Attr::Float(12.5))),
            _ => None,
        }
    }
}

///
/// Position
///

pub struct Position {
    pub id: i64,
    pub item: Option<Item>,
}

impl Model for Position {
    fn field(&self, ident: &str) -> Option<ModelField<'_>> {
        match ident {
            "id" => Some(ModelField::Value(Attr::Int(self.id))),
            "item" => Some(ModelField::One(
                self.item.as_ref().map(|i| i as &dyn Model),
            )),
            _ => None,
        }
    }
}

/// Schema with `Item`, `Position`, and `Order` representers, validated.
pub fn shop_schema() -> Schema {
    let mut schema = Schema::new();
    schema
        .define("Item", |r| {
            r.property("value")?;
            Ok(())
        })
        .unwrap();
    schema
        .define("Position", |r| {
            r.property("id")?;
            r.property_as("item", "Item")?;
            Ok(())
        })
        .unwrap();
    schema
        .define("Order", |r| {
            r.property("id")?;
            r.collection_of("items", "Item")?;
            Ok(())
        })
        .unwrap();
    schema.validate().unwrap();

    schema
}
