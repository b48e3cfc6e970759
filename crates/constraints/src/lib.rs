//! PlanPass Constraints - Reconciling fetched constraints with user corrections
//!
//! Planning-constraint taxonomies are hierarchical and many-to-one:
//! several source entities can justify one summary flag. When a user
//! disputes entities, the reconciler keeps the key sets consistent:
//!
//! - disputing *some* entities only removes granular keys no remaining
//!   entity vindicates (`listed` grades, `flood` zones);
//! - disputing *all* entities removes the category and every descendant;
//! - the `designated` umbrella never survives without a `designated.*`
//!   child.
//!
//! ## Key Components
//!
//! - [`types::Constraint`] / [`types::Entity`] - Fetched constraint results
//! - [`types::InaccurateConstraint`] - A user's dispute, keyed by category
//! - [`taxonomy::GranularCategory`] - Explicit parent-to-granular table
//! - [`reconciler::reconcile`] - The single-pass reconciliation
//! - [`reconciler::reconcile_to_patch`] - Passport write-back with audit trail

pub mod error;
pub mod reconciler;
pub mod taxonomy;
pub mod types;

pub use error::{ReconcileError, ReconcileResult};
pub use reconciler::{partition, reconcile, reconcile_to_patch, DESIGNATED_KEY};
pub use taxonomy::GranularCategory;
pub use types::{Constraint, ConstraintMap, Entity, InaccurateConstraint, Overrides, Reconciliation};
