//! Keystroke filtering for a single input field.

use tracing::trace;

use crate::regex::ProgressiveRegex;

/// A field value that only grows by keystrokes its pattern can still accept.
#[derive(Debug, Clone)]
pub struct InputFilter {
    regex: ProgressiveRegex,
    value: String,
}

impl InputFilter {
    pub fn new(regex: ProgressiveRegex) -> Self {
        Self {
            regex,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn regex(&self) -> &ProgressiveRegex {
        &self.regex
    }

    /// Appends `c` if the extended value still matches. Returns whether the
    /// keystroke was accepted; a rejected keystroke leaves the value untouched.
    pub fn push(&mut self, c: char) -> bool {
        self.value.push(c);
        if self.regex.is_match(&self.value) {
            return true;
        }
        self.value.pop();
        trace!(value = %self.value, "rejected keystroke {c:?}");
        false
    }

    /// Feeds `text` one keystroke at a time and returns the number accepted.
    pub fn push_str(&mut self, text: &str) -> usize {
        text.chars().filter(|&c| self.push(c)).count()
    }

    /// Backspace is never filtered.
    pub fn pop(&mut self) -> Option<char> {
        self.value.pop()
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
