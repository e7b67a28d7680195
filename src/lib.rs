//! Progressive pattern matching.
//!
//! A pattern made of literals, escaped characters, bracket classes and
//! quantifiers is compiled into a sequence of quantified atoms. A candidate
//! string matches when it completely matches some anchored prefix of that
//! sequence, meaning it may still be completed into a full match. This is the
//! check an input field runs on every keystroke.
//!
//! ```
//! let pattern = progex::compile("[0-9]{3}-[0-9]{2}");
//! assert!(progex::matches(&pattern, "123-4"));
//! assert!(!progex::matches(&pattern, "123-456"));
//! assert_eq!(progex::render(&pattern), "[0-9]{3}\\-[0-9]{2}");
//! ```

pub mod atom;
pub mod compile;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod pattern;
pub mod regex;

pub use atom::{Atom, AtomKind, Repeat};
pub use error::PatternError;
pub use filter::InputFilter;
pub use matcher::{matches, matches_with};
pub use pattern::{Pattern, Prefixes};
pub use crate::regex::{Builder, Config, ProgressiveRegex};

/// Compiles pattern text. Never fails: unparseable syntax is kept as literal
/// text, and empty or blank text gives the empty pattern.
pub fn compile(text: &str) -> Pattern {
    compile::Compiler::compile(text)
}

/// Renders a pattern back to pattern text.
pub fn render(pattern: &Pattern) -> String {
    pattern.render()
}
