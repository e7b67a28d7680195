use progex::{InputFilter, Pattern, ProgressiveRegex, matches};

/// Match a candidate with the on-demand matcher and the precompiled one, and
/// check both agree. Returns the common result.
pub fn check_all_matchers(pattern: &str, candidate: &str) -> bool {
    let compiled = Pattern::new(pattern);
    let on_demand = matches(&compiled, candidate);
    let precompiled = ProgressiveRegex::new(pattern).is_match(candidate);
    assert_eq!(
        on_demand, precompiled,
        "Mismatch for pattern {:?} candidate {:?}",
        pattern, candidate
    );
    on_demand
}

/// Typing `candidate` one keystroke at a time must accept every keystroke iff
/// every non-empty prefix of it is accepted on its own.
pub fn check_keystrokes(pattern: &str, candidate: &str) {
    let regex = ProgressiveRegex::new(pattern);
    let mut filter = InputFilter::new(regex.clone());
    let mut typed = String::new();
    for c in candidate.chars() {
        typed.push(c);
        let expected = regex.is_match(&typed);
        assert_eq!(
            filter.push(c),
            expected,
            "Keystroke {:?} for pattern {:?} after {:?}",
            c,
            pattern,
            filter.value()
        );
        if !expected {
            typed.pop();
        }
    }
    assert_eq!(filter.value(), typed);
}

/// Rendered atoms with their quantifiers, for structural comparisons.
pub fn rendered_atoms(pattern: &str) -> Vec<String> {
    Pattern::new(pattern)
        .atoms()
        .iter()
        .map(|atom| atom.to_string())
        .collect()
}
