// tests/unit_graph.rs
//! Call-graph merge and fan-in/fan-out accounting.

use locsmith_core::graph::{extract_calls, CallGraph};
use locsmith_core::lang::Family;

#[test]
fn test_two_function_python_file() {
    // def a calls b; def c calls a.
    let src = "def a():\n    b()\ndef c():\n    a()\n";
    let graph = CallGraph::merge([extract_calls(src, Family::Indent)]);

    assert_eq!(graph.callees("a").unwrap().len(), 1);
    assert!(graph.callees("a").unwrap().contains("b"));
    assert!(graph.callees("c").unwrap().contains("a"));

    let fan = graph.fan_stats();
    assert_eq!(fan["a"].fan_out, 1);
    assert_eq!(fan["c"].fan_out, 1);
    // a is called by c; b is called by a (first sighting); c by nobody.
    assert_eq!(fan["a"].fan_in, 1);
    assert_eq!(fan["b"].fan_in, 1);
    assert_eq!(fan["c"].fan_in, 0);
    // b was never defined and calls nothing.
    assert_eq!(fan["b"].fan_out, 0);
}

#[test]
fn test_undefined_callee_accumulates_distinct_callers() {
    let one = extract_calls("def x():\n    log()\n", Family::Indent);
    let two = extract_calls("def y():\n    log()\n    log()\n", Family::Indent);
    let graph = CallGraph::merge([one, two]);

    let fan = graph.fan_stats();
    // Two distinct callers, duplicate call sites collapsed.
    assert_eq!(fan["log"].fan_in, 2);
    assert_eq!(fan["x"].fan_out, 1);
    assert_eq!(fan["y"].fan_out, 1);
}

#[test]
fn test_one_line_definitions_contribute_no_edges() {
    // A definition line only opens the function; anything after the colon
    // on the same line is not scanned for calls.
    let graph = CallGraph::merge([extract_calls(
        "def a(): b()\ndef c(): a()\n",
        Family::Indent,
    )]);

    assert!(graph.callees("a").unwrap().is_empty());
    assert!(graph.callees("c").unwrap().is_empty());

    let fan = graph.fan_stats();
    assert_eq!(fan["a"].fan_out, 0);
    assert_eq!(fan["c"].fan_out, 0);
    assert_eq!(fan["a"].fan_in, 0);
}

#[test]
fn test_merge_is_order_independent() {
    let a = || extract_calls("def p():\n    q()\n    r()\n", Family::Indent);
    let b = || extract_calls("def q():\n    r()\n", Family::Indent);

    let forward = CallGraph::merge([a(), b()]);
    let reverse = CallGraph::merge([b(), a()]);

    assert_eq!(forward.fan_stats(), reverse.fan_stats());
    let fwd_json = serde_json::to_string(&forward).unwrap();
    let rev_json = serde_json::to_string(&reverse).unwrap();
    assert_eq!(fwd_json, rev_json);
}

#[test]
fn test_fan_out_is_set_cardinality() {
    let src = "int work(int n) {\n    step();\n    step();\n    other();\n}\n";
    let graph = CallGraph::merge([extract_calls(src, Family::CLike)]);
    assert_eq!(graph.fan_out("work"), 2);
}

#[test]
fn test_empty_input_yields_empty_graph() {
    let graph = CallGraph::merge(std::iter::empty());
    assert!(graph.is_empty());
    assert!(graph.fan_stats().is_empty());
}
