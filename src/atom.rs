//! Quantified atoms, the units a [`crate::Pattern`] is made of.

use std::fmt;

/// Repetition bounds of an [`Atom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repeat {
    /// No quantifier was written, the atom occurs exactly once.
    #[default]
    Once,
    /// Between `min` and `max` occurrences. `max == None` is unbounded.
    Range { min: u32, max: Option<u32> },
}

impl Repeat {
    pub const ZERO_OR_MORE: Repeat = Repeat::Range { min: 0, max: None };
    pub const ONE_OR_MORE: Repeat = Repeat::Range { min: 1, max: None };
    pub const ZERO_OR_ONE: Repeat = Repeat::Range {
        min: 0,
        max: Some(1),
    };

    pub fn exactly(count: u32) -> Self {
        Repeat::Range {
            min: count,
            max: Some(count),
        }
    }

    pub fn at_least(min: u32) -> Self {
        Repeat::Range { min, max: None }
    }

    /// Bounded range. Bounds given in reverse order are swapped.
    pub fn between(min: u32, max: u32) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Repeat::Range {
            min,
            max: Some(max),
        }
    }

    /// Minimum number of occurrences.
    pub fn min(&self) -> u32 {
        match self {
            Repeat::Once => 1,
            Repeat::Range { min, .. } => *min,
        }
    }

    /// Maximum number of occurrences, `None` when unbounded.
    pub fn max(&self) -> Option<u32> {
        match self {
            Repeat::Once => Some(1),
            Repeat::Range { max, .. } => *max,
        }
    }

    fn normalized(self) -> Self {
        match self {
            Repeat::Range {
                min,
                max: Some(max),
            } => Repeat::between(min, max),
            other => other,
        }
    }
}

/// Writes the quantifier suffix, nothing for [`Repeat::Once`].
impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Repeat::Once => Ok(()),
            Repeat::Range { min: 0, max: Some(1) } => f.write_str("?"),
            Repeat::Range { min: 1, max: None } => f.write_str("+"),
            Repeat::Range { min: 0, max: None } => f.write_str("*"),
            Repeat::Range { min, max: None } => write!(f, "{{{min},}}"),
            Repeat::Range {
                min,
                max: Some(max),
            } if min == max => write!(f, "{{{min}}}"),
            Repeat::Range {
                min,
                max: Some(max),
            } => write!(f, "{{{min},{max}}}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    /// A single character, stored escaped when it is a regex meta character.
    Literal,
    /// A character written after `\`, kept with its escape marker.
    Escaped,
    /// A complete bracket class such as `[A-Za-z]`.
    Class,
}

/// One quantified unit of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    content: String,
    repeat: Repeat,
}

impl Atom {
    pub fn new(content: impl Into<String>, repeat: Repeat) -> Self {
        Self {
            content: content.into(),
            repeat: repeat.normalized(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Meta characters written as plain literals are stored escaped, so they
    /// report [`AtomKind::Escaped`] like their `\`-prefixed spelling.
    pub fn kind(&self) -> AtomKind {
        if self.content.len() < 2 {
            AtomKind::Literal
        } else if self.content.starts_with('[') {
            AtomKind::Class
        } else if self.content.starts_with('\\') {
            AtomKind::Escaped
        } else {
            AtomKind::Literal
        }
    }

    /// The same atom with fewer than its minimum occurrences, `{1,min-1}`.
    ///
    /// Only atoms requiring more than one occurrence have a partial form.
    pub fn partial(&self) -> Option<Atom> {
        let min = self.repeat.min();
        (min > 1).then(|| Atom::new(self.content.clone(), Repeat::between(1, min - 1)))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.content, self.repeat)
    }
}
