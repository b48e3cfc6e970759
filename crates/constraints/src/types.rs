//! Constraint types
//!
//! A constraint result maps a dot-hierarchical key (e.g. `listed`,
//! `flood.zone.2`) to whether it applies to the site, with the source
//! entities that justify it. An override is a user's dispute of some of
//! those entities within one category.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A source entity backing a constraint category.
///
/// Several entities can justify one summary flag. Listed-building and
/// flood-risk entities carry the field their granular key derives from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable identifier from the upstream data source
    pub id: String,
    /// Human-readable name, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Listed-building grade (`I`, `II`, `II*`), implying `listed.grade.<G>`
    #[serde(
        rename = "listed-building-grade",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub listed_building_grade: Option<String>,
    /// Flood-risk level (`1`, `2`, `3`), implying `flood.zone.<N>`
    #[serde(
        rename = "flood-risk-level",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub flood_risk_level: Option<String>,
}

impl Entity {
    /// Create a bare entity with only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            listed_building_grade: None,
            flood_risk_level: None,
        }
    }

    /// Attach a listed-building grade
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.listed_building_grade = Some(grade.into());
        self
    }

    /// Attach a flood-risk level
    pub fn with_flood_level(mut self, level: impl Into<String>) -> Self {
        self.flood_risk_level = Some(level.into());
        self
    }
}

/// One keyed entry in a constraint-result map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Whether the constraint applies to the site
    pub value: bool,
    /// Human-readable summary
    pub text: String,
    /// Source entities justifying the flag, when the lookup returned any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Entity>>,
}

impl Constraint {
    /// An applicable constraint with entities
    pub fn intersecting(text: impl Into<String>, data: Vec<Entity>) -> Self {
        Self {
            value: true,
            text: text.into(),
            data: Some(data),
        }
    }

    /// A non-applicable constraint
    pub fn not_intersecting(text: impl Into<String>) -> Self {
        Self {
            value: false,
            text: text.into(),
            data: None,
        }
    }

    /// The stored entities (empty when the lookup returned none)
    pub fn entities(&self) -> &[Entity] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// Full constraint-result map, keyed by constraint key
pub type ConstraintMap = BTreeMap<String, Constraint>;

/// A user's dispute of entities within one constraint category.
///
/// Keyed by the *parent* constraint key in [`Overrides`]; removal of the
/// parent is never stated directly - it is derived from whether every
/// stored entity was disputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InaccurateConstraint {
    /// Ids of the disputed entities
    pub entities: Vec<String>,
    /// Free-text explanation from the user
    pub reason: String,
}

impl InaccurateConstraint {
    /// Create a dispute over the given entity ids
    pub fn new<I, S>(entities: I, reason: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entities: entities.into_iter().map(Into::into).collect(),
            reason: reason.into(),
        }
    }
}

/// Disputed categories, keyed by parent constraint key
pub type Overrides = BTreeMap<String, InaccurateConstraint>;

/// The working true/false key sets for one target passport key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reconciliation {
    /// Keys currently considered applicable
    pub intersecting: Vec<String>,
    /// Keys currently considered not applicable
    pub not_intersecting: Vec<String>,
}

impl Reconciliation {
    /// Build from explicit key lists
    pub fn new(intersecting: Vec<String>, not_intersecting: Vec<String>) -> Self {
        Self {
            intersecting,
            not_intersecting,
        }
    }

    /// Whether a key is currently intersecting
    pub fn is_intersecting(&self, key: &str) -> bool {
        self.intersecting.iter().any(|k| k == key)
    }

    /// Move a key out of the intersecting set.
    ///
    /// A key that is not currently intersecting is left alone, so
    /// repeated moves are harmless.
    pub fn move_to_not_intersecting(&mut self, key: &str) {
        if let Some(pos) = self.intersecting.iter().position(|k| k == key) {
            self.intersecting.remove(pos);
            if !self.not_intersecting.iter().any(|k| k == key) {
                self.not_intersecting.push(key.to_string());
            }
        }
    }
}
