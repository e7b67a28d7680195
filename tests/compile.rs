mod utils;

use pretty_assertions::assert_eq;
use progex::{AtomKind, Pattern, Repeat, compile, render};
use utils::rendered_atoms;

const CASES: &[(&str, &[&str])] = &[
    ("abc", &["a", "b", "c"]),
    ("ab?c", &["a", "b?", "c"]),
    ("a*b+c?", &["a*", "b+", "c?"]),
    ("[A-Za-z]+", &["[A-Za-z]+"]),
    ("[0-9]{3}-[0-9]{2}", &["[0-9]{3}", "\\-", "[0-9]{2}"]),
    (r"\d{3}-\d{2}", &[r"\d{3}", "\\-", r"\d{2}"]),
    ("  a+  ", &["a+"]),
    ("a{3,1}", &["a{1,3}"]),
    ("a.c", &["a", ".", "c"]),
    ("(a|b)", &["\\(", "a", "\\|", "b", "\\)"]),
    ("[a[b]", &["[a\\[b]"]),
    (r"[\]x]", &[r"[\]x]"]),
    ("[^0-9]*", &["[^0-9]*"]),
    (r"a\*", &["a", r"\*"]),
    (r"\q", &["q"]),
    // Degraded syntax
    ("a{", &["a", "\\{"]),
    ("a{2", &["a", "\\{", "2"]),
    ("*a", &["\\*", "a"]),
    ("a+?", &["a+", "\\?"]),
    ("a]b", &["a", "\\]", "b"]),
    ("a}b", &["a", "\\}", "b"]),
    ("[abc", &["\\[", "a", "b", "c"]),
    ("a\\", &["a", "\\\\"]),
    ("{2}", &["\\{", "2", "\\}"]),
];

#[test]
fn test_many() {
    for (text, expected) in CASES {
        assert_eq!(rendered_atoms(text), *expected, "pattern {:?}", text);
    }
}

#[test]
fn empty_and_blank_text() {
    assert!(compile("").is_empty());
    assert!(compile("   \t ").is_empty());
    assert_eq!(render(&compile("")), "");
}

#[test]
fn escaped_brace_is_one_plain_atom() {
    let pattern = compile("\\{");
    assert_eq!(pattern.len(), 1);
    let atom = &pattern.atoms()[0];
    assert_eq!(atom.content(), "\\{");
    assert_eq!(atom.repeat(), Repeat::Once);
    assert_eq!(atom.kind(), AtomKind::Escaped);
}

#[test]
fn escaped_specials_do_not_open_state() {
    assert_eq!(rendered_atoms(r"\[a\]"), [r"\[", "a", r"\]"]);
    assert_eq!(rendered_atoms(r"\{2\}"), [r"\{", "2", r"\}"]);
    assert_eq!(rendered_atoms(r"a\+"), ["a", r"\+"]);
}

#[test]
fn atom_kinds() {
    let pattern = compile(r"a[bc]\d");
    let kinds: Vec<_> = pattern.atoms().iter().map(|atom| atom.kind()).collect();
    assert_eq!(kinds, [AtomKind::Literal, AtomKind::Class, AtomKind::Escaped]);
}

#[test]
fn repeat_bounds() {
    let pattern = compile("a{2,5}b{3}c{4,}d*");
    let bounds: Vec<_> = pattern
        .atoms()
        .iter()
        .map(|atom| (atom.repeat().min(), atom.repeat().max()))
        .collect();
    assert_eq!(
        bounds,
        [(2, Some(5)), (3, Some(3)), (4, None), (0, None)]
    );
}

#[test]
fn anchors_are_recorded_not_compiled() {
    let pattern = compile("^abc$");
    assert_eq!(pattern.len(), 3);
    assert!(pattern.anchored_start());
    assert!(pattern.anchored_end());
    assert_eq!(pattern.render(), "abc");

    let pattern = compile("abc");
    assert!(!pattern.anchored_start());
    assert!(!pattern.anchored_end());
}

#[test]
fn render_round_trip() {
    let text = "[0-9]{3}-[0-9]{2}";
    let once = compile(text);
    assert_eq!(render(&once), "[0-9]{3}\\-[0-9]{2}");
    let twice = compile(&render(&once));
    assert_eq!(once.atoms(), twice.atoms());
}

#[test]
fn from_str_and_display() {
    let pattern: Pattern = "x{2,}y?".parse().unwrap();
    assert_eq!(pattern.to_string(), "x{2,}y?");
    assert_eq!(Pattern::from("x{2,}y?"), pattern);
}
