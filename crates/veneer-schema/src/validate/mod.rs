//! Schema validation orchestration and shared helpers.

pub mod cycle;
pub mod naming;

use crate::{error::ErrorTree, node::Schema};

/// Run full schema validation in a staged, deterministic order.
pub(crate) fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: validate each node (structural + local invariants).
    naming::validate_idents(schema, &mut errors);

    // Phase 2: enforce schema-wide invariants.
    cycle::validate_targets(schema, &mut errors);
    cycle::validate_acyclic(schema, &mut errors);

    errors.result()
}
