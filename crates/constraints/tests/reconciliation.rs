//! End-to-end reconciliation flow: fetch results in, passport patch out.

use planpass_constraints::{
    partition, reconcile_to_patch, Constraint, ConstraintMap, Entity, InaccurateConstraint,
    Overrides,
};
use planpass_core::{Passport, Value};

const FN: &str = "property.constraints.planning";

fn fetched_constraints() -> ConstraintMap {
    let mut constraints = ConstraintMap::new();
    constraints.insert(
        "listed".to_string(),
        Constraint::intersecting(
            "Is, or is within, a Listed Building",
            vec![
                Entity::new("31537307").with_grade("I"),
                Entity::new("31537308").with_grade("II"),
            ],
        ),
    );
    constraints.insert(
        "listed.grade.I".to_string(),
        Constraint::intersecting("Listed Building - Grade I", vec![]),
    );
    constraints.insert(
        "listed.grade.II".to_string(),
        Constraint::intersecting("Listed Building - Grade II", vec![]),
    );
    constraints.insert(
        "designated".to_string(),
        Constraint::intersecting("Designated land", vec![]),
    );
    constraints.insert(
        "designated.conservationArea".to_string(),
        Constraint::intersecting("Conservation area", vec![Entity::new("44000002")]),
    );
    constraints.insert(
        "flood".to_string(),
        Constraint::not_intersecting("Is not in a flood risk zone"),
    );
    constraints
}

#[test]
fn fetch_then_no_disputes_merges_key_sets_into_passport() {
    let constraints = fetched_constraints();
    let patch = reconcile_to_patch(FN, &constraints, None, partition(&constraints)).unwrap();

    let mut passport = Passport::new();
    passport.merge(patch);

    let intersecting = passport.get(FN).and_then(Value::as_array).unwrap();
    assert!(intersecting.contains(&"listed".to_string()));
    assert!(intersecting.contains(&"designated".to_string()));

    let nots = passport
        .get("property.constraints.planning_nots")
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(nots, &["flood".to_string()][..]);

    assert!(!passport.has("property.constraints.planning_overrides"));
}

#[test]
fn disputing_one_grade_leaves_the_other_and_the_category() {
    let constraints = fetched_constraints();
    let mut overrides = Overrides::new();
    overrides.insert(
        "listed".to_string(),
        InaccurateConstraint::new(["31537308"], "that building was demolished"),
    );

    let patch = reconcile_to_patch(
        FN,
        &constraints,
        Some(&overrides),
        partition(&constraints),
    )
    .unwrap();

    let intersecting = patch.get(FN).and_then(Value::as_array).unwrap();
    assert!(intersecting.contains(&"listed".to_string()));
    assert!(intersecting.contains(&"listed.grade.I".to_string()));
    assert!(!intersecting.contains(&"listed.grade.II".to_string()));

    // Raw disputes preserved for the audit trail
    assert!(patch.get("property.constraints.planning_overrides").is_some());
}

#[test]
fn disputing_every_supporting_entity_cascades_and_sweeps_umbrellas() {
    let constraints = fetched_constraints();
    let mut overrides = Overrides::new();
    overrides.insert(
        "listed".to_string(),
        InaccurateConstraint::new(["31537307", "31537308"], "wrong address"),
    );
    overrides.insert(
        "designated.conservationArea".to_string(),
        InaccurateConstraint::new(["44000002"], "boundary error"),
    );

    let patch = reconcile_to_patch(
        FN,
        &constraints,
        Some(&overrides),
        partition(&constraints),
    )
    .unwrap();

    let intersecting = patch.get(FN).and_then(Value::as_array).unwrap();
    assert!(intersecting.is_empty());

    let nots = patch
        .get("property.constraints.planning_nots")
        .and_then(Value::as_array)
        .unwrap();
    for expected in [
        "listed",
        "listed.grade.I",
        "listed.grade.II",
        "designated",
        "designated.conservationArea",
        "flood",
    ] {
        assert!(
            nots.contains(&expected.to_string()),
            "{} missing from non-intersecting set",
            expected
        );
    }
}
