//! Configured, precompiled progressive matching.
//!
//! This module defines [`ProgressiveRegex`], which compiles every anchored
//! prefix of a [`Pattern`] once with the `regex` crate, and the [`Builder`]
//! used to configure it.

use regex::RegexBuilder;
use tracing::debug;

use crate::error::PatternError;
use crate::pattern::Pattern;

/// A pattern with all of its prefixes compiled, ready for repeated matching.
#[derive(Debug, Clone)]
pub struct ProgressiveRegex {
    pattern: Pattern,
    prefixes: Vec<regex::Regex>,
}

impl ProgressiveRegex {
    /// Compiles `text` with the default [`Config`].
    pub fn new(text: &str) -> Self {
        Builder::new(text).build()
    }

    /// True if `candidate` completely matches some prefix of the pattern,
    /// i.e. it can still be completed into a full match.
    pub fn is_match(&self, candidate: &str) -> bool {
        if self.pattern.is_empty() {
            return candidate.is_empty();
        }
        self.prefixes.iter().any(|prefix| prefix.is_match(candidate))
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Full rendering of the underlying pattern.
    pub fn as_str(&self) -> String {
        self.pattern.render()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub case_insensitive: bool,
    pub unicode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            unicode: true,
        }
    }
}

impl Config {
    /// Compiles one anchored prefix with this configuration.
    pub fn regex(&self, prefix: &str) -> Result<regex::Regex, regex::Error> {
        RegexBuilder::new(prefix)
            .case_insensitive(self.case_insensitive)
            .unicode(self.unicode)
            .build()
    }
}

#[derive(Debug, Clone)]
pub struct Builder<'s> {
    text: &'s str,
    config: Config,
}

impl<'s> Builder<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            text,
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.config.case_insensitive = value;
        self
    }

    pub fn unicode(mut self, value: bool) -> Self {
        self.config.unicode = value;
        self
    }

    /// Prefixes the regex engine rejects are skipped; they can never match.
    pub fn build(self) -> ProgressiveRegex {
        let pattern = Pattern::new(self.text);
        let prefixes = pattern
            .prefixes()
            .enumerate()
            .filter_map(|(index, prefix)| match self.config.regex(&prefix) {
                Ok(re) => Some(re),
                Err(e) => {
                    debug!(index, %prefix, "skipping unusable prefix: {e}");
                    None
                }
            })
            .collect();
        ProgressiveRegex { pattern, prefixes }
    }

    /// Like [`Builder::build`], but fails on the first prefix the regex
    /// engine rejects.
    pub fn try_build(self) -> Result<ProgressiveRegex, PatternError> {
        let pattern = Pattern::new(self.text);
        let prefixes = pattern
            .prefixes()
            .enumerate()
            .map(|(index, prefix)| {
                self.config
                    .regex(&prefix)
                    .map_err(|source| PatternError::InvalidPrefix {
                        index,
                        prefix,
                        source,
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(ProgressiveRegex { pattern, prefixes })
    }
}
