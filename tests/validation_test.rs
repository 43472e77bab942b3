// Integration tests for the WFF validator

use wffcheck::{validate, BinOp, Formula, ValidationError};

fn atom(name: char) -> Formula {
    Formula::Atom(name)
}

fn not(sub: Formula) -> Formula {
    Formula::Not(Box::new(sub))
}

fn binary(op: BinOp, left: Formula, right: Formula) -> Formula {
    Formula::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn test_acceptance_and_rejection_examples() {
    assert_eq!(validate("p").expect("atom is valid"), atom('p'));

    assert_eq!(validate("(p)").unwrap_err(), ValidationError::RedundantParens);

    assert_eq!(
        validate("(p and q)").expect("conjunction is valid"),
        binary(BinOp::And, atom('p'), atom('q'))
    );

    assert!(matches!(
        validate("(p and and q)").unwrap_err(),
        ValidationError::UnexpectedToken { .. }
    ));

    assert_eq!(validate("not p").expect("negation is valid"), not(atom('p')));

    assert_eq!(
        validate("((p and q) and )r)").unwrap_err(),
        ValidationError::UnbalancedParens
    );
}

#[test]
fn test_round_trip_reproduces_tree() {
    let formulas = [
        atom('p'),
        not(atom('q')),
        not(not(atom('r'))),
        binary(BinOp::And, atom('p'), atom('q')),
        binary(
            BinOp::Implies,
            binary(BinOp::Or, atom('p'), not(atom('q'))),
            not(binary(BinOp::And, atom('r'), atom('s'))),
        ),
        not(binary(
            BinOp::Or,
            binary(BinOp::And, atom('a'), atom('b')),
            binary(BinOp::Implies, atom('c'), atom('a')),
        )),
    ];

    for formula in formulas {
        let rendered = formula.to_string();
        let reparsed = validate(&rendered)
            .unwrap_or_else(|err| panic!("{} failed to re-validate: {}", rendered, err));
        assert_eq!(reparsed, formula, "round trip changed {}", rendered);
    }
}

#[test]
fn test_revalidation_is_idempotent() {
    let inputs = ["(p and (q or not r))", "not not p", "((p ∧ q) ⇒ (q ∨ p))"];

    for input in inputs {
        let first = validate(input).expect("input is valid");
        let second = validate(&first.to_string()).expect("rendering is valid");
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}

#[test]
fn test_vocabularies_agree() {
    // Keyword, symbol, and LaTeX spellings of the same formula parse to the
    // same tree.
    let spellings = [
        "(not p implies (q or r))",
        "(¬p ⇒ (q ∨ r))",
        "(!p -> (q ∨ r))",
        r"(\lnot p \rightarrow (q \vee r))",
    ];

    let expected = binary(
        BinOp::Implies,
        not(atom('p')),
        binary(BinOp::Or, atom('q'), atom('r')),
    );

    for spelling in spellings {
        assert_eq!(
            validate(spelling).expect("spelling is valid"),
            expected,
            "vocabulary mismatch for {}",
            spelling
        );
    }
}

#[test]
fn test_atoms_are_case_insensitive() {
    assert_eq!(
        validate("(P AND p)").expect("valid"),
        binary(BinOp::And, atom('p'), atom('p'))
    );
}

#[test]
fn test_whitespace_insensitive() {
    let dense = validate("(p∧q)").expect("valid");
    let spaced = validate("  ( p   ∧ q )  ").expect("valid");
    assert_eq!(dense, spaced);
}

#[test]
fn test_unbalanced_paren_family() {
    let inputs = [
        "(p and q",
        "((p or q) implies r",
        "(p ⇒ (q ∧ r)",
        "(not p or",
        ")(",
    ];

    for input in inputs {
        assert_eq!(
            validate(input).unwrap_err(),
            ValidationError::UnbalancedParens,
            "for input {:?}",
            input
        );
    }
}

#[test]
fn test_redundant_paren_family() {
    for name in ['a', 'p', 'z'] {
        let input = format!("({})", name);
        assert_eq!(
            validate(&input).unwrap_err(),
            ValidationError::RedundantParens,
            "for input {:?}",
            input
        );
    }

    assert_eq!(
        validate("((p and q))").unwrap_err(),
        ValidationError::RedundantParens
    );
    assert_eq!(
        validate("(p and (q))").unwrap_err(),
        ValidationError::RedundantParens
    );
}

#[test]
fn test_adjacent_atoms_rejected() {
    for input in ["p q", "p  q", "(p ∧ q) r"] {
        assert!(matches!(
            validate(input).unwrap_err(),
            ValidationError::TrailingTokens { .. }
        ));
    }

    assert!(matches!(
        validate("(p q ∧ r)").unwrap_err(),
        ValidationError::UnexpectedToken { .. }
    ));
}

#[test]
fn test_deep_nesting() {
    // Left-leaning tower of conjunctions; recursion depth tracks nesting.
    let mut input = "p".to_string();
    let mut expected = atom('p');
    for _ in 0..200 {
        input = format!("({} and q)", input);
        expected = binary(BinOp::And, expected, atom('q'));
    }

    assert_eq!(validate(&input).expect("nested formula is valid"), expected);
}

#[test]
fn test_error_offsets_point_at_offender() {
    let err = validate("(p and and q)").unwrap_err();
    assert_eq!(err.offset(), Some(7));

    let err = validate("(p ∧ 1)").unwrap_err();
    assert_eq!(err, ValidationError::UnknownToken { offset: 5 });

    let err = validate("p q").unwrap_err();
    assert_eq!(err.offset(), Some(2));
}

#[test]
fn test_atom_collection() {
    let formula = validate("((p ∨ q) ⇒ (¬p ∧ (r ⇒ q)))").expect("valid");
    let atoms = formula.atoms();

    assert_eq!(atoms.len(), 3);
    for name in ['p', 'q', 'r'] {
        assert!(atoms.contains(&name));
    }
}
