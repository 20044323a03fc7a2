//! End-to-end paths from self to a kinship term.

use kinship::relation::terms::effective_column;
use kinship::{resolve_term, simulate, Age, AgeRef, Column, Gender, Position, Step, Term, Trace};

fn run(self_gender: Gender, steps: &[Step]) -> (Trace, Term) {
    let trace = simulate(self_gender, steps);
    let last = *trace.last().unwrap();
    let term = resolve_term(&last, steps, self_gender, &trace);
    (trace, term)
}

#[test]
fn empty_path_is_self() {
    let (trace, term) = run(Gender::Male, &[]);
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0].cell(), (Column::A, 2));
    assert_eq!(trace[0].gender, Gender::Male);
    assert_eq!(term, Term::Self_);
    assert_eq!(term.to_string(), "self (you)");
}

#[test]
fn mothers_brother() {
    let steps = [Step::Mother, Step::sibling(Gender::Male, Age::Unknown)];
    let (trace, term) = run(Gender::Male, &steps);
    let last = trace[2];
    assert_eq!(last.cell(), (Column::B, 1));
    assert_eq!(last.gender, Gender::Male);
    assert!(!last.no_sibling_in_generation);
    assert_eq!(term, Term::MothersBrother);
    assert_eq!(term.to_string(), "mother's brother");
}

#[test]
fn fathers_sister() {
    let steps = [Step::Father, Step::sibling(Gender::Female, Age::Unknown)];
    let (trace, term) = run(Gender::Male, &steps);
    assert_eq!(trace[2].cell(), (Column::A, 1));
    assert_eq!(trace[2].gender, Gender::Female);
    assert_eq!(term.to_string(), "father's sister");
}

#[test]
fn a_womans_husband() {
    let (trace, term) = run(Gender::Female, &[Step::Husband]);
    assert_eq!(trace[1].cell(), (Column::B, 2));
    assert_eq!(trace[1].gender, Gender::Male);
    assert_eq!(term, Term::Husband);
    assert_eq!(term.to_string(), "husband");
}

#[test]
fn wifes_younger_brother() {
    let steps = [Step::Wife, Step::sibling(Gender::Male, Age::Younger)];
    let (trace, term) = run(Gender::Male, &steps);
    assert_eq!(trace[2].cell(), (Column::B, 2));
    assert_eq!(trace[2].gender, Gender::Male);
    assert_eq!(
        term,
        Term::SiblingInLaw {
            gender: Gender::Male,
            age: Age::Younger,
            anchor: AgeRef::Wife,
        }
    );
    assert_eq!(term.to_string(), "younger brother-in-law");
    assert_eq!(term.anchor(), Some(AgeRef::Wife));
}

#[test]
fn mothers_mothers_sisters_daughter_is_a_mothers_sister() {
    let steps = [
        Step::Mother,
        Step::Mother,
        Step::sibling(Gender::Female, Age::Unknown),
        Step::Daughter,
    ];
    let (trace, term) = run(Gender::Male, &steps);

    let expected = [
        Position::new(Column::A, 2, Gender::Male, AgeRef::Self_, false),
        Position::new(Column::B, 1, Gender::Female, AgeRef::Mother, true),
        Position::new(Column::A, 0, Gender::Female, AgeRef::Mother, true),
        Position::new(Column::A, 0, Gender::Female, AgeRef::Mother, false),
        Position::new(Column::B, 1, Gender::Female, AgeRef::Self_, true),
    ];
    assert_eq!(trace, expected);

    // The great-aunt heads no household of her own side: her daughter counts on column B.
    let column = effective_column(&trace[4], steps.last().copied(), &trace);
    assert_eq!(column, Column::B);
    assert_eq!(term, Term::MothersSister);
    assert_eq!(term.to_string(), "mother's sister");
}
