use regex::{Regex, RegexBuilder};
use std::fmt;
use thiserror::Error;

/// Flags accepted for compatibility but not affecting matching.
const PASSIVE_FLAGS: &[char] = &['g', 'y', 'u', 'd'];

/// Failure to build a [`RegExp`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegExpError {
    #[error("Invalid regular expression flag '{flag}'")]
    InvalidFlag { flag: char },

    #[error("Duplicate regular expression flag '{flag}'")]
    DuplicateFlag { flag: char },

    #[error("Invalid regular expression /{pattern}/: {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// A compiled regular expression that remembers its source and flags
///
/// Equality compares `pattern` and `flags`, not the compiled automaton.
#[derive(Debug, Clone)]
pub struct RegExp {
    pattern: String,
    flags: String,
    compiled: Regex,
}

impl RegExp {
    /// Compile `pattern` without flags
    ///
    /// # Errors
    ///
    /// Same as [`with_flags`](Self::with_flags).
    pub fn new(pattern: &str) -> Result<Self, RegExpError> {
        Self::with_flags(pattern, "")
    }

    /// Compile `pattern` with flags
    ///
    /// `i`, `m` and `s` change matching. `g`, `y`, `u` and `d` are
    /// recorded only.
    ///
    /// # Errors
    ///
    /// Returns [`RegExpError`] for an unknown or repeated flag or a pattern
    /// the `regex` crate rejects.
    pub fn with_flags(pattern: &str, flags: &str) -> Result<Self, RegExpError> {
        let mut builder = RegexBuilder::new(pattern);
        let mut seen = Vec::with_capacity(flags.len());
        for flag in flags.chars() {
            if seen.contains(&flag) {
                return Err(RegExpError::DuplicateFlag { flag });
            }
            seen.push(flag);
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                f if PASSIVE_FLAGS.contains(&f) => {}
                _ => return Err(RegExpError::InvalidFlag { flag }),
            }
        }

        let compiled = builder
            .build()
            .map_err(|e| RegExpError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            flags: flags.to_string(),
            compiled,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Test the expression against `haystack`
    pub fn is_match(&self, haystack: &str) -> bool {
        self.compiled.is_match(haystack)
    }

    pub fn as_regex(&self) -> &Regex {
        &self.compiled
    }
}

impl PartialEq for RegExp {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.pattern, self.flags)
    }
}
