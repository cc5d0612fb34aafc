// Black-box tests for textual expansion.

use parametric_lsystem::{LSystem, LsystemError};

/// An engine whose actions never run during expansion; the consumer type
/// is irrelevant here.
fn system() -> LSystem<()> {
    LSystem::new()
}

#[test]
fn zero_iterations_returns_axiom_unchanged() {
    let sys = system();
    let axiom = "[F<1>F<2>]{G<3>}(2)";
    assert_eq!(sys.expand(axiom, 0).unwrap(), axiom);
}

#[test]
fn substitution_pipeline_computes_arguments() {
    let mut sys = system();
    sys.add_rule("A<p,q>", |_, _| {})
        .unwrap()
        .with_fallback("B<p+q>");
    sys.add_rule("B<x>", |_, _| {}).unwrap();

    assert_eq!(sys.expand("A<3,4>", 1).unwrap(), "B<7>");
}

#[test]
fn branch_precedence_is_declaration_order() {
    let mut sys = system();
    sys.add_rule("A<x>", |_, _| {})
        .unwrap()
        .with_branch("x>0", "P<x>")
        .with_branch("x>-10", "Q<x>")
        .with_fallback("Z<x>");

    assert_eq!(sys.expand("A<1>", 1).unwrap(), "P<1>");
    assert_eq!(sys.expand("A<-5>", 1).unwrap(), "Q<-5>");
    assert_eq!(sys.expand("A<-50>", 1).unwrap(), "Z<-50>");
}

#[test]
fn top_level_repeat_concatenates_expanded_content() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();

    assert_eq!(sys.expand("{F<1>}(3)", 1).unwrap(), "F<1>F<1>F<1>");
}

#[test]
fn zero_count_repeat_contributes_nothing() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();

    assert_eq!(sys.expand("F<9>{F<1>}(0)", 1).unwrap(), "F<9>");
    // The count is an expression, not just a literal.
    assert_eq!(sys.expand("{F<1>}(2-2)", 1).unwrap(), "");
}

#[test]
fn zero_count_repeat_skips_resolution_of_its_content() {
    // Content of an erased block is never expanded, so unknown atoms
    // inside it do not fail the pass.
    let sys = system();
    assert_eq!(sys.expand("{Missing<1>}(0)", 1).unwrap(), "");
}

#[test]
fn separators_between_tokens_are_dropped() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();

    assert_eq!(sys.expand("F<1>   F<2>", 1).unwrap(), "F<1>F<2>");
}

#[test]
fn push_and_pop_pass_through() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();

    assert_eq!(sys.expand("[F<1>]", 1).unwrap(), "[F<1>]");
}

#[test]
fn unknown_atom_fails_expansion() {
    let sys = system();
    assert_eq!(
        sys.expand("Nope<1>", 1).unwrap_err(),
        LsystemError::UnknownAtom {
            atom: "Nope".to_string(),
        }
    );
}

#[test]
fn arity_mismatch_fails_expansion() {
    let mut sys = system();
    sys.add_rule("A<p,q>", |_, _| {}).unwrap();

    assert!(matches!(
        sys.expand("A<1>", 1),
        Err(LsystemError::ArityMismatch { .. })
    ));
}

#[test]
fn iterations_apply_in_sequence() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();
    sys.add_rule("Tree<x>", |_, _| {})
        .unwrap()
        .with_branch("x>0", "F<x>[Tree<x-1>]")
        .with_fallback("F<0>");

    assert_eq!(sys.expand("Tree<2>", 1).unwrap(), "F<2>[Tree<1>]");
    assert_eq!(sys.expand("Tree<2>", 2).unwrap(), "F<2>[F<1>[Tree<0>]]");
    assert_eq!(sys.expand("Tree<2>", 3).unwrap(), "F<2>[F<1>[F<0>]]");
}

#[test]
fn non_terminating_grammar_leaves_calls_unexpanded() {
    let mut sys = system();
    sys.add_rule("A<x>", |_, _| {})
        .unwrap()
        .with_fallback("A<x+1>");

    // No fixed point is sought; each round rewrites once.
    assert_eq!(sys.expand("A<0>", 3).unwrap(), "A<3>");
}

#[test]
fn freshly_registered_rule_expands_to_itself() {
    // Genotype storage: the declaration key doubles as the fallback.
    let mut sys = system();
    sys.add_rule("Geno<x>", |_, _| {}).unwrap();

    assert_eq!(sys.expand("Geno<7>", 4).unwrap(), "Geno<7>");
}

#[test]
fn removed_rule_is_unknown_afterwards() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();
    assert!(sys.expand("F<1>", 1).is_ok());

    sys.remove_rule("F");
    assert!(matches!(
        sys.expand("F<1>", 1),
        Err(LsystemError::UnknownAtom { .. })
    ));
}

#[test]
fn repeat_count_uses_substituted_parameters() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();
    sys.add_rule("Row<n>", |_, _| {})
        .unwrap()
        .with_fallback("{F<n>}(n)");

    assert_eq!(sys.expand("Row<2>", 1).unwrap(), "F<2>F<2>");
}

#[test]
fn nested_repeat_blocks_expand() {
    let mut sys = system();
    sys.add_rule("F<x>", |_, _| {}).unwrap();

    assert_eq!(
        sys.expand("{{F<1>}(2)}(2)", 1).unwrap(),
        "F<1>F<1>F<1>F<1>"
    );
}
