//! Highlighting: escape first, mark the literal query, never fail.

use lupa::{highlight, Highlighter};

#[test]
fn test_single_mark_around_match() {
    let out = highlight("Reforma Tributária", "reforma");
    assert_eq!(out.matches("<mark>").count(), 1);
    assert_eq!(out, "<mark>Reforma</mark> Tributária");
}

#[test]
fn test_html_in_text_is_escaped() {
    let out = highlight("<script>alert(\"x\")</script> reforma", "reforma");
    assert!(!out.contains("<script>"));
    assert!(out.contains("&lt;script&gt;"));
    assert!(out.contains("&quot;x&quot;"));
    assert!(out.ends_with("<mark>reforma</mark>"));
}

#[test]
fn test_no_accent_folding_in_marks() {
    // Search folds accents; highlighting marks only the literal text typed.
    assert_eq!(highlight("Política", "politica"), "Política");
}

#[test]
fn test_untrimmed_query_below_minimum() {
    assert!(Highlighter::compile(" a ", 2).unwrap().is_passthrough());
    assert!(!Highlighter::compile(" ab ", 2).unwrap().is_passthrough());
}

#[test]
fn test_metacharacter_queries_never_fail() {
    for query in ["[a", "(?", "\\", "a|b", "$^", "{2}", "**"] {
        let highlighter = Highlighter::compile(query, 2).expect("literal patterns compile");
        let _ = highlighter.apply("texto [a (? \\ a|b $^ {2} **");
    }
    assert_eq!(highlight("x [a y", "[a"), "x <mark>[a</mark> y");
}
