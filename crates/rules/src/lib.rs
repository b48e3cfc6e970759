//! PlanPass Rules - Conditional response visibility
//!
//! Decides whether a response/option is shown to a user at a flow step,
//! based on the current passport. Rules are a small closed set: three
//! simple conditions that always pass, and two conditional ones that
//! compare a single passport key with `Equals` semantics (exact scalar
//! equality, or granular dot-hierarchy matching against array answers).
//!
//! ## Key Components
//!
//! - [`types::Rule`] - Tagged union over the `condition` field
//! - [`evaluator::RuleEvaluator`] - `is_rule_met` / `filter_by_rule`

pub mod error;
pub mod evaluator;
pub mod types;

pub use error::{RuleError, RuleResult};
pub use evaluator::RuleEvaluator;
pub use types::{Condition, Operator, Response, Rule};
