use kinship::{parse_path, Age, Column, Gender, Step, Term, Walk};

#[test]
fn undo_and_reset_recompute_from_scratch() {
    let mut walk = Walk::new(Gender::Male);
    walk.push(Step::Mother);
    walk.push(Step::sibling(Gender::Male, Age::Unknown));
    assert_eq!(walk.resolve().term, Term::MothersBrother);

    walk.push(Step::Son);
    assert_eq!(walk.resolve().term, Term::CousinInLaw { gender: Gender::Male });

    assert_eq!(walk.undo(), Some(Step::Son));
    let res = walk.resolve();
    assert_eq!(res.term, Term::MothersBrother);
    assert_eq!(res.trace.len(), 3);

    walk.reset();
    assert!(walk.is_empty());
    let res = walk.resolve();
    assert_eq!(res.term, Term::Self_);
    assert_eq!(res.last().map(|p| p.cell()), Some((Column::A, 2)));
    assert_eq!(walk.undo(), None);
}

#[test]
fn changing_self_gender_changes_the_spouse_side() {
    let mut walk = Walk::with_steps(Gender::Female, [Step::Husband]);
    assert_eq!(walk.resolve().term.to_string(), "husband");

    walk.set_self_gender(Gender::Male);
    let res = walk.resolve();
    assert_eq!(res.last().map(|p| p.column), Some(Column::A));
    assert_eq!(res.term, Term::SiblingByRelation { gender: Gender::Male });
}

#[test]
fn parsed_paths_drive_a_walk() {
    let steps = parse_path("wife, younger-brother").unwrap();
    let walk = Walk::with_steps(Gender::Male, steps);
    assert_eq!(walk.resolve().term.to_string(), "younger brother-in-law");

    assert_eq!(parse_path("  ").unwrap(), Vec::<Step>::new());
    assert!(parse_path("father uncle").is_err());
}

#[test]
fn resolution_serializes_trace_and_term() {
    let walk = Walk::with_steps(Gender::Male, [Step::Wife, Step::sibling(Gender::Male, Age::Younger)]);
    let json = serde_json::to_value(walk.resolve()).unwrap();

    assert_eq!(json["trace"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["trace"][1]["column"], "B");
    assert_eq!(json["trace"][2]["age_ref"], "wife");
    assert_eq!(json["term"]["term"], "sibling_in_law");
    assert_eq!(json["term"]["age"], "younger");

    let steps = serde_json::to_value(walk.steps()).unwrap();
    assert_eq!(steps[0]["kind"], "wife");
    assert_eq!(steps[1]["kind"], "sibling");
    assert_eq!(steps[1]["gender"], "male");
}
