//! Single pass compiler from pattern text to a [`Pattern`].
//!
//! The compiler never fails. Syntax it cannot make sense of (dangling
//! quantifiers, unterminated ranges or classes, stray closing brackets) is
//! kept as literal text.

use regex_syntax::{is_escapeable_character, is_meta_character};
use tracing::{debug, trace};

use crate::atom::{Atom, Repeat};
use crate::pattern::Pattern;

/// Escapes kept with their marker even though the letter itself is not escapeable.
const PERL_ESCAPES: &str = "dDwWsSbBafnrtv";

#[derive(Default)]
pub struct Compiler {
    atoms: Vec<Atom>,
    /// Last atom seen, still open to a trailing quantifier.
    pending: Option<String>,
    class: Option<ClassState>,
    range: Option<RangeState>,
    escaped: bool,
    anchored_start: bool,
    anchored_end: bool,
}

#[derive(Default)]
struct ClassState {
    text: String,
    /// Source characters after the opening `[`.
    source: String,
}

#[derive(Default)]
struct RangeState {
    min: String,
    max: Option<String>,
}

impl RangeState {
    fn digits(&mut self) -> &mut String {
        match &mut self.max {
            Some(max) => max,
            None => &mut self.min,
        }
    }

    fn repeat(&self) -> Option<Repeat> {
        let Some(max) = &self.max else {
            return self.min.parse().ok().map(Repeat::exactly);
        };
        let min = if self.min.is_empty() {
            0
        } else {
            self.min.parse().ok()?
        };
        if max.is_empty() {
            Some(Repeat::at_least(min))
        } else {
            Some(Repeat::between(min, max.parse().ok()?))
        }
    }

    fn source(&self) -> String {
        match &self.max {
            Some(max) => format!("{{{},{}", self.min, max),
            None => format!("{{{}", self.min),
        }
    }
}

impl Compiler {
    pub fn compile(text: &str) -> Pattern {
        let mut compiler = Compiler::default();
        for c in text.trim().chars() {
            compiler.step(c);
        }
        let pattern = compiler.finish();
        debug!(atoms = pattern.len(), "compiled pattern {text:?}");
        pattern
    }

    fn step(&mut self, c: char) {
        if c == '}' && self.range.is_some() {
            self.close_range();
            return;
        }
        if let Some(range) = &mut self.range {
            match c {
                '0'..='9' => {
                    range.digits().push(c);
                    return;
                }
                ',' => {
                    // Only the first comma separates the bounds.
                    if range.max.is_none() {
                        range.max = Some(String::new());
                    }
                    return;
                }
                _ => {}
            }
            self.abandon_range();
        }
        if self.class.is_some() {
            return self.step_class(c);
        }
        if self.escaped {
            self.escaped = false;
            return self.push_atom(escape_text(c));
        }
        match c {
            '\\' => self.escaped = true,
            '[' => {
                self.flush();
                self.class = Some(ClassState {
                    text: String::from("["),
                    source: String::new(),
                });
            }
            '{' => self.range = Some(RangeState::default()),
            '*' => self.quantify(c, Repeat::ZERO_OR_MORE),
            '+' => self.quantify(c, Repeat::ONE_OR_MORE),
            '?' => self.quantify(c, Repeat::ZERO_OR_ONE),
            '^' => self.anchored_start = true,
            '$' => self.anchored_end = true,
            _ => self.push_literal(c),
        }
    }

    fn step_class(&mut self, c: char) {
        let Some(mut class) = self.class.take() else {
            return;
        };
        class.source.push(c);
        if self.escaped {
            self.escaped = false;
            class.text.push_str(&escape_text(c));
        } else {
            match c {
                '\\' => self.escaped = true,
                '[' => class.text.push_str("\\["),
                ']' => {
                    class.text.push(']');
                    self.pending = Some(class.text);
                    return;
                }
                _ => class.text.push(c),
            }
        }
        self.class = Some(class);
    }

    fn quantify(&mut self, c: char, repeat: Repeat) {
        match self.pending.take() {
            Some(content) => self.atoms.push(Atom::new(content, repeat)),
            None => {
                trace!("quantifier {c:?} has nothing to repeat, kept as literal");
                self.push_literal(c);
            }
        }
    }

    fn close_range(&mut self) {
        let Some(range) = self.range.take() else {
            return;
        };
        match (range.repeat(), self.pending.take()) {
            (Some(repeat), Some(content)) => self.atoms.push(Atom::new(content, repeat)),
            (_, pending) => {
                self.pending = pending;
                trace!("range {}}} cannot be applied, kept as literal", range.source());
                self.push_literals(&range.source());
                self.push_literal('}');
            }
        }
    }

    fn abandon_range(&mut self) {
        if let Some(range) = self.range.take() {
            trace!("unterminated range {}, kept as literal", range.source());
            self.push_literals(&range.source());
        }
    }

    fn push_literals(&mut self, text: &str) {
        for c in text.chars() {
            self.push_literal(c);
        }
    }

    fn push_literal(&mut self, c: char) {
        self.push_atom(literal_text(c));
    }

    fn push_atom(&mut self, content: String) {
        self.flush();
        self.pending = Some(content);
    }

    fn flush(&mut self) {
        if let Some(content) = self.pending.take() {
            self.atoms.push(Atom::new(content, Repeat::Once));
        }
    }

    fn finish(mut self) -> Pattern {
        self.abandon_range();
        if let Some(class) = self.class.take() {
            trace!("unterminated class [{}, kept as literal", class.source);
            self.escaped = false;
            self.push_literal('[');
            self.push_literals(&class.source);
        }
        if self.escaped {
            self.push_literal('\\');
        }
        self.flush();
        Pattern::from_parts(self.atoms, self.anchored_start, self.anchored_end)
    }
}

/// Source text for a character taken literally. `.` stays a wildcard.
fn literal_text(c: char) -> String {
    if c != '.' && is_meta_character(c) {
        format!("\\{c}")
    } else {
        c.to_string()
    }
}

/// Source text for a character written after `\`.
fn escape_text(c: char) -> String {
    if is_escapeable_character(c) || PERL_ESCAPES.contains(c) {
        format!("\\{c}")
    } else {
        c.to_string()
    }
}
