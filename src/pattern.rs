//! The compiled [`Pattern`] and the anchored prefixes the matcher tests.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::atom::Atom;
use crate::compile::Compiler;

/// An ordered, immutable sequence of atoms compiled from pattern text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    atoms: Vec<Atom>,
    anchored_start: bool,
    anchored_end: bool,
}

impl Pattern {
    /// Compiles `text`. See [`crate::compile`].
    pub fn new(text: &str) -> Self {
        Compiler::compile(text)
    }

    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        Self::from_parts(atoms.into_iter().collect(), false, false)
    }

    pub(crate) fn from_parts(atoms: Vec<Atom>, anchored_start: bool, anchored_end: bool) -> Self {
        Self {
            atoms,
            anchored_start,
            anchored_end,
        }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// True if the source text contained `^`.
    pub fn anchored_start(&self) -> bool {
        self.anchored_start
    }

    /// True if the source text contained `$`.
    pub fn anchored_end(&self) -> bool {
        self.anchored_end
    }

    /// Concatenation of every atom's rendering. Anchors are not included.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Anchored regex text for every prefix the matcher tests, in order.
    ///
    /// Each atom contributes its full rendering appended to the previous
    /// ones, preceded by its partial form when it requires more than one
    /// occurrence.
    pub fn prefixes(&self) -> Prefixes<'_> {
        Prefixes {
            atoms: self.atoms.iter(),
            rendered: String::new(),
            queued: None,
        }
    }

    /// Progressive match of `candidate` with the default configuration.
    pub fn matches(&self, candidate: &str) -> bool {
        crate::matcher::matches(self, candidate)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            write!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Pattern::new(text))
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::new(text)
    }
}

/// Iterator returned by [`Pattern::prefixes`].
pub struct Prefixes<'p> {
    atoms: std::slice::Iter<'p, Atom>,
    rendered: String,
    queued: Option<String>,
}

impl Iterator for Prefixes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(full) = self.queued.take() {
            return Some(full);
        }
        let atom = self.atoms.next()?;
        let partial = atom
            .partial()
            .map(|partial| format!("^{}{partial}$", self.rendered));
        self.rendered.push_str(&atom.to_string());
        let full = format!("^{}$", self.rendered);
        match partial {
            Some(partial) => {
                self.queued = Some(full);
                Some(partial)
            }
            None => Some(full),
        }
    }
}
