//! On-demand progressive matching.
//!
//! The candidate is tested against growing anchored prefixes of the pattern
//! and accepted as soon as one of them matches completely. Nothing is kept
//! between calls; use [`crate::ProgressiveRegex`] to compile the prefixes once.

use tracing::{debug, trace};

use crate::pattern::Pattern;
use crate::regex::Config;

/// True if `candidate` could still be completed into a match of `pattern`.
///
/// An empty pattern matches only the empty candidate.
pub fn matches(pattern: &Pattern, candidate: &str) -> bool {
    matches_with(pattern, candidate, &Config::default())
}

pub fn matches_with(pattern: &Pattern, candidate: &str, config: &Config) -> bool {
    if pattern.is_empty() {
        return candidate.is_empty();
    }
    pattern.prefixes().any(|prefix| match config.regex(&prefix) {
        Ok(re) => {
            let matched = re.is_match(candidate);
            trace!(%prefix, matched, "tested {candidate:?}");
            matched
        }
        Err(e) => {
            debug!(%prefix, "prefix rejected by regex engine: {e}");
            false
        }
    })
}
