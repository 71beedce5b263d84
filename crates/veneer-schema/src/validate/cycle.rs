use crate::{err, error::ErrorTree, node::Schema};
use std::collections::BTreeSet;

/// Every typed target must name a defined representer.
pub(crate) fn validate_targets(schema: &Schema, errs: &mut ErrorTree) {
    for (path, node) in schema.nodes() {
        for property in node.properties.iter() {
            let Some(target) = &property.target else {
                continue;
            };
            if schema.get_node(target).is_none() {
                err!(
                    errs,
                    "representer '{path}', property '{0}', references undefined representer '{target}'",
                    property.ident
                );
            }
        }
    }
}

// Instance building recurses through typed targets, so the typed-reference
// graph must be acyclic for termination. A self or transitive cycle fails
// here, at declaration time, never at build time.
pub(crate) fn validate_acyclic(schema: &Schema, errs: &mut ErrorTree) {
    let mut done = BTreeSet::new();

    for (path, _) in schema.nodes() {
        if done.contains(path) {
            continue;
        }
        let mut visiting = Vec::new();
        walk(schema, path, &mut visiting, &mut done, errs);
    }
}

// Depth-first walk over typed targets; `visiting` is the current stack.
fn walk(
    schema: &Schema,
    path: &str,
    visiting: &mut Vec<String>,
    done: &mut BTreeSet<String>,
    errs: &mut ErrorTree,
) {
    if let Some(pos) = visiting.iter().position(|p| p == path) {
        let cycle = visiting[pos..].join(" -> ");
        err!(errs, "typed reference cycle: {cycle} -> {path}");
        return;
    }
    if done.contains(path) {
        return;
    }

    visiting.push(path.to_string());
    if let Some(node) = schema.get_node(path) {
        for property in node.properties.iter() {
            if let Some(target) = &property.target {
                walk(schema, target, visiting, done, errs);
            }
        }
    }
    visiting.pop();

    done.insert(path.to_string());
}
