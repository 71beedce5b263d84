use crate::{MAX_PROPERTY_NAME_LEN, MAX_REPRESENTER_NAME_LEN, error::ErrorTree, node::Schema};

/// Check representer and property identifiers against the naming rules.
pub(crate) fn validate_idents(schema: &Schema, errs: &mut ErrorTree) {
    for (path, node) in schema.nodes() {
        if let Err(msg) = validate_name(path, MAX_REPRESENTER_NAME_LEN) {
            errs.add_at(path, msg);
        }

        for property in node.properties.iter() {
            if let Err(msg) = validate_name(&property.ident, MAX_PROPERTY_NAME_LEN) {
                errs.add_at(format!("{path}.{}", property.ident), msg);
            }
        }
    }
}

/// Ensure an identifier is non-empty, ASCII, and within the maximum length.
fn validate_name(name: &str, max: usize) -> Result<(), String> {
    if name.is_empty() {
        return Err("ident is empty".to_string());
    }
    if name.len() > max {
        return Err(format!("ident '{name}' exceeds max length {max}"));
    }
    if !name.is_ascii() {
        return Err(format!("ident '{name}' must be ASCII"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized_idents() {
        assert!(validate_name("", 8).is_err(), "empty identifiers should fail");
        assert!(
            validate_name("way_too_long", 8).is_err(),
            "oversized identifiers should fail"
        );
        assert!(validate_name("crémant", 16).is_err(), "non-ASCII should fail");
    }

    #[test]
    fn accepts_plain_identifier() {
        assert!(validate_name("items", MAX_PROPERTY_NAME_LEN).is_ok());
    }
}
