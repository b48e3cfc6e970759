//! Rule evaluator - decides response visibility against the passport

use planpass_core::{key, Passport};
use tracing::warn;

use crate::types::{Condition, Operator, Response, Rule};

/// Stateless rule evaluator
pub struct RuleEvaluator;

impl RuleEvaluator {
    /// Whether a rule is met for the current passport state.
    ///
    /// Simple conditions are always met. Conditional ones look up the
    /// rule's passport key: an absent or falsy value never matches; a
    /// scalar matches on exact equality; an array matches if any element
    /// equals `val` or descends from it in the dot hierarchy
    /// (`testValue.more` matches a rule for `testValue`, but
    /// `testValueSomething` does not).
    pub fn is_rule_met(passport: &Passport, rule: &Rule) -> bool {
        match rule {
            Rule::AlwaysRequired | Rule::AlwaysRecommended | Rule::NotRequired => true,
            Rule::RequiredIf(condition) | Rule::RecommendedIf(condition) => {
                Self::condition_met(passport, condition)
            }
        }
    }

    /// Evaluate a conditional payload
    fn condition_met(passport: &Passport, condition: &Condition) -> bool {
        let value = match passport.get(&condition.fn_key) {
            Some(v) if v.is_truthy() => v,
            _ => return false,
        };

        match condition.operator {
            Operator::Equals => {
                if value.matches_scalar(&condition.val) {
                    return true;
                }
                // Granular match: the rule value must be the element or a
                // whole-segment ancestor of it, never the reverse.
                value
                    .as_array()
                    .map(|elements| {
                        elements
                            .iter()
                            .any(|e| key::is_same_or_descendant(e, &condition.val))
                    })
                    .unwrap_or(false)
            }
        }
    }

    /// Filter candidate responses down to those whose rule is met.
    ///
    /// A response without a rule defaults to [`Rule::AlwaysRequired`].
    /// An empty result is a flow-authoring defect (a step with no valid
    /// options for this passport state); it is reported and returned
    /// as-is rather than crashing the session.
    pub fn filter_by_rule(passport: &Passport, responses: &[Response]) -> Vec<Response> {
        let matched: Vec<Response> = responses
            .iter()
            .filter(|response| {
                let rule = response.rule.as_ref().unwrap_or(&Rule::AlwaysRequired);
                Self::is_rule_met(passport, rule)
            })
            .cloned()
            .collect();

        if matched.is_empty() {
            warn!(
                candidates = responses.len(),
                passport = ?passport,
                "no responses matched the current passport state"
            );
        }

        matched
    }
}
