//! Granular constraint taxonomy
//!
//! The two categories whose granular children can be derived from entity
//! data. Membership is an explicit table keyed on exact category names,
//! not string-prefix parsing, so a hypothetical `listedBuilding` category
//! can never collide with `listed`.
//!
//! Other hierarchical categories (e.g. `article4.*`) have no derivable
//! taxonomy and are not granularly reconciled on partial disputes.

use strum_macros::{Display, EnumString};

use crate::types::Entity;

/// A category with a derivable granular taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum GranularCategory {
    /// `listed` -> `listed.grade.<G>` via `listed-building-grade`
    #[strum(serialize = "listed")]
    Listed,
    /// `flood` -> `flood.zone.<N>` via `flood-risk-level`
    #[strum(serialize = "flood")]
    Flood,
}

impl GranularCategory {
    /// Resolve a constraint key to its taxonomy, by exact match only
    pub fn for_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    /// The granular key an entity implies, when it carries the
    /// category's source field
    pub fn granular_key(&self, entity: &Entity) -> Option<String> {
        match self {
            GranularCategory::Listed => entity
                .listed_building_grade
                .as_ref()
                .map(|grade| format!("listed.grade.{}", grade)),
            GranularCategory::Flood => entity
                .flood_risk_level
                .as_ref()
                .map(|level| format!("flood.zone.{}", level)),
        }
    }
}
