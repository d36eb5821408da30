//! Flat-list rendering scenarios: brackets, separators, escaping.

use fmtree_core::{seq, Value};
use fmtree_engine::{render, Engine};

#[test]
fn decimal_list_with_brackets() {
    let out = render("{[:, :]:{=%d}}", &seq![1, 2, 3]).unwrap();
    assert_eq!(out, "[1, 2, 3]");
}

#[test]
fn separator_only_between_siblings() {
    let out = render("{:S::{=%d}}", &seq![10, 20, 30]).unwrap();
    assert_eq!(out, "10S20S30");
    let out = render("{:S::{=%d}}", &seq![10]).unwrap();
    assert_eq!(out, "10");
}

#[test]
fn empty_list_keeps_brackets() {
    let out = render("{[:, :]:{=%d}}", &seq!()).unwrap();
    assert_eq!(out, "[]");
}

#[test]
fn insertion_order_never_changes() {
    let out = render("{:,::{=%d}}", &seq![5, 1, 4, 1, 3]).unwrap();
    assert_eq!(out, "5,1,4,1,3");
}

#[test]
fn escaped_braces_render_as_brackets() {
    // Literal braces as the container brackets themselves.
    let out = render(r"{\{ : ; : \}:{=%d}}", &seq![1, 2]).unwrap();
    assert_eq!(out, "{ 1 ; 2 }");
}

#[test]
fn escaped_structurals_anywhere_in_literals() {
    let out = render(r"x \: y \, z \% w", &Value::Int(0)).unwrap();
    assert_eq!(out, "x : y , z % w");
}

#[test]
fn control_escapes_render_as_control_characters() {
    let out = render(r"{:\n\t::{=%d}}", &seq![1, 2]).unwrap();
    assert_eq!(out, "1\n\t2");
}

#[test]
fn text_list_verbatim() {
    let out = render("{<: | :>:{=%s}}", &seq!["a", "b  ", "c"]).unwrap();
    assert_eq!(out, "<a | b   | c>");
}

#[test]
fn compiled_spec_reused_across_values() {
    let engine = Engine::new();
    let ast = engine.compile("{[:, :]:{=%d}}").unwrap();
    assert_eq!(engine.evaluate(&ast, &seq![1]).unwrap(), "[1]");
    assert_eq!(engine.evaluate(&ast, &seq![9, 8, 7]).unwrap(), "[9, 8, 7]");
}

#[test]
fn recompiling_yields_equal_asts() {
    let engine = Engine::new();
    let spec = r"{[:, :]:{=%d, => %s}}";
    assert_eq!(engine.compile(spec).unwrap(), engine.compile(spec).unwrap());
}
