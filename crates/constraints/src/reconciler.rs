//! Constraint reconciler
//!
//! Merges machine-fetched constraint results with user-asserted
//! corrections. Disputing one entity must not invalidate a flag still
//! justified by another entity; disputing every entity cascades the
//! invalidation down the category's subtree; and summary flags never
//! survive with zero supporting children.

use std::collections::BTreeSet;

use planpass_core::{key, Patch, Value};
use tracing::warn;

use crate::error::ReconcileResult;
use crate::taxonomy::GranularCategory;
use crate::types::{ConstraintMap, Entity, Overrides, Reconciliation};

/// Umbrella key summarizing designated-land categories
pub const DESIGNATED_KEY: &str = "designated";

/// The prior pass: split a constraint map into starting key sets by each
/// constraint's `value` flag.
pub fn partition(constraints: &ConstraintMap) -> Reconciliation {
    let mut reconciliation = Reconciliation::default();
    for (constraint_key, constraint) in constraints {
        if constraint.value {
            reconciliation.intersecting.push(constraint_key.clone());
        } else {
            reconciliation.not_intersecting.push(constraint_key.clone());
        }
    }
    reconciliation
}

/// Reconcile user disputes against the working key sets.
///
/// One forward pass over the disputed categories; each category's
/// effects are local to its own subtree, so the pass converges in a
/// single application and a second application with the same inputs
/// moves nothing.
///
/// Absent or empty overrides return the inputs unchanged. A disputed
/// category or entity id not found in the constraint data is a
/// data-integrity defect: it is reported and skipped, never fatal.
pub fn reconcile(
    fn_key: &str,
    constraints: &ConstraintMap,
    overrides: Option<&Overrides>,
    mut reconciliation: Reconciliation,
) -> Reconciliation {
    let overrides = match overrides {
        Some(o) if !o.is_empty() => o,
        _ => return reconciliation,
    };

    for (category, dispute) in overrides {
        let Some(constraint) = constraints.get(category) else {
            warn!(
                target_key = fn_key,
                category = category.as_str(),
                "disputed category not present in constraint data"
            );
            continue;
        };
        let stored = constraint.entities();

        // Resolve disputed ids against the stored entities; an id with
        // no stored entity is skipped and does not count toward the
        // all-disputed check. Duplicate ids resolve once.
        let mut disputed = Vec::new();
        for id in &dispute.entities {
            if disputed.iter().any(|entity: &&Entity| &entity.id == id) {
                continue;
            }
            match stored.iter().find(|entity| &entity.id == id) {
                Some(entity) => disputed.push(entity),
                None => warn!(
                    target_key = fn_key,
                    category = category.as_str(),
                    entity_id = id.as_str(),
                    "disputed entity id not found in constraint data"
                ),
            }
        }

        let all_entities_inaccurate = disputed.len() == stored.len();

        if all_entities_inaccurate {
            // The whole category and its granular children become
            // inapplicable.
            let doomed: Vec<String> = reconciliation
                .intersecting
                .iter()
                .filter(|k| key::is_same_or_descendant(k, category))
                .cloned()
                .collect();
            for k in doomed {
                reconciliation.move_to_not_intersecting(&k);
            }
        } else if let Some(taxonomy) = GranularCategory::for_key(category) {
            // Partial dispute: a granular key survives unless every
            // entity implying it was disputed.
            let disputed_ids: BTreeSet<&str> =
                disputed.iter().map(|entity| entity.id.as_str()).collect();

            let disputed_granular: BTreeSet<String> = disputed
                .iter()
                .filter_map(|entity| taxonomy.granular_key(entity))
                .collect();
            let remaining_granular: BTreeSet<String> = stored
                .iter()
                .filter(|entity| !disputed_ids.contains(entity.id.as_str()))
                .filter_map(|entity| taxonomy.granular_key(entity))
                .collect();

            for granular in disputed_granular.difference(&remaining_granular) {
                reconciliation.move_to_not_intersecting(granular);
            }
        }
        // Partial disputes on categories without a derivable taxonomy
        // change nothing.
    }

    sweep_designated_umbrella(&mut reconciliation);
    reconciliation
}

/// No orphaned summary flags: `designated` only stays intersecting while
/// at least one `designated.*` child does.
fn sweep_designated_umbrella(reconciliation: &mut Reconciliation) {
    let has_children = reconciliation
        .intersecting
        .iter()
        .any(|k| key::is_descendant(k, DESIGNATED_KEY));
    if reconciliation.is_intersecting(DESIGNATED_KEY) && !has_children {
        reconciliation.move_to_not_intersecting(DESIGNATED_KEY);
    }
}

/// Reconcile and produce the passport write-back.
///
/// The patch always carries the final intersecting list under `fn` and
/// the non-intersecting list under `fn_nots`; when disputes were
/// supplied, the raw overrides are preserved under `fn_overrides` as the
/// audit trail.
pub fn reconcile_to_patch(
    fn_key: &str,
    constraints: &ConstraintMap,
    overrides: Option<&Overrides>,
    reconciliation: Reconciliation,
) -> ReconcileResult<Patch> {
    let reconciliation = reconcile(fn_key, constraints, overrides, reconciliation);

    let mut patch = Patch::new();
    patch.insert(fn_key, Value::Array(reconciliation.intersecting));
    patch.insert(
        key::nots_key(fn_key),
        Value::Array(reconciliation.not_intersecting),
    );
    if let Some(overrides) = overrides.filter(|o| !o.is_empty()) {
        patch.insert(
            key::overrides_key(fn_key),
            Value::Object(serde_json::to_value(overrides)?),
        );
    }
    Ok(patch)
}
