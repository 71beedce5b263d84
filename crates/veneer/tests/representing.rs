//! End-to-end representing flow: declare a schema, wrap a model graph,
//! flatten it, and hand the attribute tree to an external encoder.

use serde_json::json;
use veneer::prelude::*;

///
/// Fixtures
///

struct Item {
    value: String,
}

impl Model for Item {
    fn field(&self, ident: &str) -> Option<ModelField<'_>> {
        match ident {
            "value" => Some(ModelField::Value(Attr::Text(self.value.clone()))),
            _ => None,
        }
    }
}

struct Order {
    id: i64,
    items: Vec<Item>,
}

impl Model for Order {
    fn field(&self, ident: &str) -> Option<ModelField<'_>> {
        match ident {
            "id" => Some(ModelField::Value(Attr::Int(self.id))),
            "items" => Some(ModelField::Many(
                self.items.iter().map(|i| i as &dyn Model).collect(),
            )),
            _ => None,
        }
    }
}

fn order_schema() -> Schema {
    let mut schema = Schema::new();
    schema
        .define("Item", |r| {
            r.property("value")?;
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

///
/// Tests
///

#[test]
fn wraps_flattens_and_encodes_an_order() {
    let schema = order_schema();
    let mapper = Mapper::new(&schema);

    let order = Order {
        id: 1,
        items: vec![
            Item {
                value: "Beer".to_string(),
            },
            Item {
                value: "Ale".to_string(),
            },
        ],
    };

    let instance = mapper.build_from_model("Order", &order).unwrap();
    let attrs = instance.to_attributes();

    // The attribute tree is the sole input handed to a wire encoder.
    let encoded = serde_json::to_value(&attrs).unwrap();
    assert_eq!(
        encoded,
        json!({"id": 1, "items": [{"value": "Beer"}, {"value": "Ale"}]})
    );
}

#[test]
fn persistence_view_renames_collection_keys() {
    let schema = order_schema();
    let mapper = Mapper::new(&schema);

    let order = Order {
        id: 1,
        items: vec![Item {
            value: "Beer".to_string(),
        }],
    };

    let nested = mapper
        .build_from_model("Order", &order)
        .unwrap()
        .to_nested_attributes();
    let encoded = serde_json::to_value(&nested).unwrap();
    assert_eq!(
        encoded,
        json!({"id": 1, "items_attributes": [{"value": "Beer"}]})
    );
}

#[test]
fn decoded_documents_round_trip_through_from_attributes() {
    let schema = order_schema();
    let mapper = Mapper::new(&schema);

    // An external decoder produced this tree from a document.
    let mut items = AttrMap::new();
    items.insert("value", "Beer");
    let mut doc = AttrMap::new();
    doc.insert("id", 1i64);
    doc.insert("items", Attr::List(vec![Attr::Map(items)]));

    let instance = mapper.from_attributes("Order", &Attr::Map(doc.clone())).unwrap();
    assert_eq!(instance.to_attributes(), Attr::Map(doc));
}
