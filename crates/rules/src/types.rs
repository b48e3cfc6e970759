//! Rule types
//!
//! A rule decides whether a response or option is shown to the user at a
//! flow step. Simple conditions carry no data; conditional ones inspect a
//! single passport key. The split is enforced by the type shape: a
//! conditional rule cannot exist without its `fn`/`operator`/`val`
//! payload, so corrupted authoring data fails at construction or
//! deserialization, never mid-evaluation.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Comparison operator for conditional rules.
///
/// `Equals` is currently the only supported operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Equals,
}

/// The payload of a conditional rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Passport key to inspect
    #[serde(rename = "fn")]
    pub fn_key: String,
    /// How to compare the passport value
    pub operator: Operator,
    /// Expected value
    pub val: String,
}

/// A visibility rule, tagged on its `condition` field.
///
/// The three simple variants always evaluate to true; their distinction
/// is presentational upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition")]
pub enum Rule {
    /// Always shown, marked as required
    AlwaysRequired,
    /// Always shown, marked as recommended
    AlwaysRecommended,
    /// Always shown, marked as not required
    NotRequired,
    /// Shown as required when the condition holds
    RequiredIf(Condition),
    /// Shown as recommended when the condition holds
    RecommendedIf(Condition),
}

impl Rule {
    /// Build a `RequiredIf` rule, rejecting empty `fn`/`val`
    pub fn required_if(
        fn_key: impl Into<String>,
        val: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Ok(Rule::RequiredIf(Condition::equals(fn_key, val)?))
    }

    /// Build a `RecommendedIf` rule, rejecting empty `fn`/`val`
    pub fn recommended_if(
        fn_key: impl Into<String>,
        val: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Ok(Rule::RecommendedIf(Condition::equals(fn_key, val)?))
    }

    /// The condition payload, if this is a conditional variant
    pub fn condition(&self) -> Option<&Condition> {
        match self {
            Rule::RequiredIf(c) | Rule::RecommendedIf(c) => Some(c),
            _ => None,
        }
    }

    /// Whether this rule inspects the passport at all
    pub fn is_conditional(&self) -> bool {
        self.condition().is_some()
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::AlwaysRequired
    }
}

impl Condition {
    /// Build an `Equals` condition, rejecting empty `fn`/`val`
    pub fn equals(
        fn_key: impl Into<String>,
        val: impl Into<String>,
    ) -> Result<Self, RuleError> {
        let fn_key = fn_key.into();
        let val = val.into();
        if fn_key.is_empty() {
            return Err(RuleError::MissingField("fn"));
        }
        if val.is_empty() {
            return Err(RuleError::MissingField("val"));
        }
        Ok(Self {
            fn_key,
            operator: Operator::Equals,
            val,
        })
    }
}

/// A candidate response/option at a flow step.
///
/// A response with no rule defaults to [`Rule::AlwaysRequired`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// The passport value this response contributes when selected
    pub val: String,
    /// Display text (opaque to the evaluator)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Visibility rule; absent means always shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Response {
    /// Create a response with no explicit rule
    pub fn new(val: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            text: None,
            rule: None,
        }
    }

    /// Attach a visibility rule
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = Some(rule);
        self
    }

    /// Attach display text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}
