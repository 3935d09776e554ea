//! Integration tests for expression evaluation.

#![expect(clippy::expect_used, reason = "tests assert evaluation outcomes")]

use rstest::{fixture, rstest};

use venn_expr::{Element, ErrorKind, Evaluator, Subset};

#[fixture]
fn evaluator() -> Evaluator {
    Evaluator::default()
}

fn sorted(evaluator: &Evaluator, expr: &str) -> Vec<Element> {
    evaluator
        .evaluate(expr)
        .expect("expression should evaluate")
        .sorted()
}

#[rstest]
#[case("a & b", &[2, 3])]
#[case("!a", &[4, 6, 7, 8])]
#[case("(a & b) | c", &[2, 3, 4, 5, 6])]
#[case("a & (b | c)", &[2, 3, 5])]
#[case("a&(b|c)", &[2, 3, 5])]
#[case("!!b", &[1, 5, 6, 7])]
#[case("a!", &[4, 6, 7, 8])]
fn evaluates_reference_scenarios(
    evaluator: Evaluator,
    #[case] expr: &str,
    #[case] expected: &[Element],
) {
    assert_eq!(sorted(&evaluator, expr), expected);
}

#[rstest]
#[case("!!b", "!b")]
#[case("b!", "!b")]
#[case("!!(a | c)", "!(a | c)")]
#[case("a!", "!a")]
fn repeated_or_trailing_bang_negates_once(
    evaluator: Evaluator,
    #[case] expr: &str,
    #[case] single: &str,
) {
    assert_eq!(sorted(&evaluator, expr), sorted(&evaluator, single));
}

#[rstest]
#[case("a & (", ErrorKind::UnmatchedParenthesis)]
#[case("a & & b", ErrorKind::MalformedSequence)]
#[case("x & a", ErrorKind::UnknownSetName)]
#[case("", ErrorKind::MalformedSequence)]
#[case("(a | b))", ErrorKind::UnmatchedParenthesis)]
fn reports_failure_kinds(evaluator: Evaluator, #[case] expr: &str, #[case] kind: ErrorKind) {
    let err = evaluator.evaluate(expr).expect_err("expression should fail");
    assert_eq!(err.kind(), kind, "got {err}");
}

#[rstest]
fn grouping_distributes_intersection_over_union(evaluator: Evaluator) {
    let grouped = evaluator.evaluate("a & (b | c)").expect("grouped form");
    let expanded = evaluator
        .evaluate("(a & b) | (a & c)")
        .expect("expanded form");
    assert_eq!(grouped, expanded);
}

#[rstest]
fn operators_share_one_precedence_level(evaluator: Evaluator) {
    assert_eq!(
        sorted(&evaluator, "a & b | a & c"),
        sorted(&evaluator, "((a & b) | a) & c")
    );
    assert_eq!(sorted(&evaluator, "a & b | a & c"), vec![3, 5]);
}

#[rstest]
fn reevaluation_is_idempotent(evaluator: Evaluator) {
    let expr = "!(a & (b | !c)) | (c & b)";
    let first = evaluator.evaluate(expr).expect("first pass");
    let second = evaluator.evaluate(expr).expect("second pass");
    assert_eq!(first.as_slice(), second.as_slice());
}

#[rstest]
fn labels_results_by_membership(evaluator: Evaluator) {
    let result: Subset = evaluator.evaluate("!b").expect("complement");
    assert_eq!(evaluator.sections(&result), vec!["a", "ac", "c", "none"]);
}
