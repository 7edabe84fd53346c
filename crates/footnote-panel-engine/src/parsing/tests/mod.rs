//! Tests for the footnote parser.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.
//! Snapshots use the plain-text rendering from `normalize`.

mod invariants;

use pretty_assertions::assert_eq;

use crate::models::Position;
use crate::parsing::{ParseError, parse_footnotes, parse_footnotes_bytes, try_parse_footnotes};

// Fixture-based snapshot tests

#[test]
fn fixture_basic() {
    assert_fixture("basic");
}

#[test]
fn fixture_multi_line_bodies() {
    assert_fixture("multi_line_bodies");
}

#[test]
fn fixture_redefinition() {
    assert_fixture("redefinition");
}

#[test]
fn fixture_unicode_columns() {
    assert_fixture("unicode_columns");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let footnotes = parse_footnotes(&md);
    invariants::check(&footnotes);

    let snap = normalize::normalize(&footnotes);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Behaviour tests

fn ids(text: &str) -> Vec<String> {
    parse_footnotes(text).into_iter().map(|n| n.id).collect()
}

#[test]
fn text_without_markers_has_no_footnotes() {
    assert!(parse_footnotes("").is_empty());
    assert!(parse_footnotes("plain text\n[not a note]\n^1").is_empty());
}

#[test]
fn parse_is_idempotent() {
    let text = "a[^1] b[^2]\n\n[^2]: two\n    more\n[^1]: one\n[^x]: orphan";
    assert_eq!(parse_footnotes(text), parse_footnotes(text));
}

#[test]
fn first_citation_decides_order() {
    assert_eq!(ids("x[^b] y[^a] z[^b]"), vec!["b", "a"]);
}

#[test]
fn order_ignores_definition_order() {
    assert_eq!(ids("[^z] then [^y]\n\n[^y]: why\n[^z]: zed"), vec!["z", "y"]);
}

#[test]
fn definition_only_sorts_after_cited() {
    let text = "[^x]: defined first\n\nlater[^a]\n[^a]: cited";
    assert_eq!(ids(text), vec!["a", "x"]);
}

#[test]
fn definition_only_footnotes_keep_definition_order() {
    let text = "[^q]: q\n[^p]: p\nbody[^c]";
    assert_eq!(ids(text), vec!["c", "q", "p"]);
}

#[test]
fn undefined_reference_is_kept() {
    let notes = parse_footnotes("dangling[^ghost]");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, "ghost");
    assert_eq!(notes[0].body, "");
    assert_eq!(notes[0].definition, None);
    assert_eq!(notes[0].first_reference(), Some(Position::new(0, 8)));
}

#[test]
fn orphan_definition_has_no_first_reference() {
    let notes = parse_footnotes("[^x]: lonely");
    assert_eq!(notes.len(), 1);
    assert!(notes[0].references.is_empty());
    assert_eq!(notes[0].first_reference(), None);
    assert_eq!(notes[0].definition, Some(Position::new(0, 0)));
}

#[test]
fn multi_line_body_excludes_trailing_text() {
    let notes = parse_footnotes("[^n]: first\n    second\n    third\n\nnot part");
    assert_eq!(notes[0].body, "first\nsecond\nthird");
}

#[test]
fn redefinition_keeps_last_body_and_all_references() {
    let notes = parse_footnotes("a[^n]\n[^n]: one\nb[^n]\n[^n]: two");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].body, "two");
    assert_eq!(notes[0].definition, Some(Position::new(3, 0)));
    assert_eq!(notes[0].references.len(), 2);
}

#[test]
fn definition_anchor_is_never_a_reference() {
    let notes = parse_footnotes("[^n]: body\n[^n]:\n[^n]:x");
    assert_eq!(notes.len(), 1);
    assert!(notes[0].references.is_empty());
}

#[test]
fn labels_are_case_sensitive() {
    assert_eq!(ids("[^A] and [^a]"), vec!["A", "a"]);
}

#[test]
fn labels_may_contain_symbols_and_spaces() {
    assert_eq!(ids("see[^my note!] and [^#3]"), vec!["my note!", "#3"]);
}

#[test]
fn crlf_input_matches_lf_input() {
    let lf = "a[^1]\n\n[^1]: one\n    two\n";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(parse_footnotes(lf), parse_footnotes(&crlf));
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let result = parse_footnotes_bytes(&[b'[', b'^', 0xff, b']']);
    assert!(matches!(result, Err(ParseError::InvalidUtf8(_))));
}

#[test]
fn valid_bytes_parse_like_text() {
    let text = "x[^1]\n[^1]: one";
    assert_eq!(
        parse_footnotes_bytes(text.as_bytes()).unwrap(),
        try_parse_footnotes(text).unwrap()
    );
}
