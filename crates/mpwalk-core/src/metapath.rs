//! Metapath validation and compilation.
//!
//! A metapath is a short string of node-type characters, e.g. `"vapav"`.
//! Its first character is the required type of every starting node; the
//! remainder is the repeating step pattern. Compilation unrolls the pattern
//! into one edge type per step of the requested walk length, once per run,
//! since the unrolled path is independent of the starting node.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// A validated metapath: at least two node-type characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metapath {
    types: Vec<char>,
}

impl Metapath {
    /// Parse and validate a metapath string.
    ///
    /// A single-character metapath has no step pattern and is rejected with
    /// [`Error::InvalidMetapath`].
    pub fn parse(s: &str) -> Result<Self> {
        let types: Vec<char> = s.chars().collect();
        if types.len() < 2 {
            return Err(Error::InvalidMetapath {
                metapath: s.to_string(),
            });
        }
        Ok(Self { types })
    }

    /// The required type of every starting node.
    pub fn start_type(&self) -> char {
        self.types[0]
    }

    /// The repeating step pattern (everything after the first character).
    pub fn pattern(&self) -> &[char] {
        &self.types[1..]
    }

    /// Unroll the step pattern to exactly `walk_length` edge types, so that
    /// step `d` uses `pattern[d % pattern.len()]`.
    pub fn compile(&self, walk_length: usize) -> CompiledPath {
        let pattern = self.pattern();
        let steps = (0..walk_length).map(|d| pattern[d % pattern.len()]).collect();
        CompiledPath { steps }
    }
}

impl FromStr for Metapath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Metapath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.types {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

/// A metapath unrolled to one edge type per walk step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPath {
    steps: Vec<char>,
}

impl CompiledPath {
    /// Edge type used at step `d`.
    pub fn step(&self, d: usize) -> char {
        self.steps[d]
    }

    /// Number of steps, equal to the requested walk length.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for a zero-length walk.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The unrolled edge types.
    pub fn as_slice(&self) -> &[char] {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_short_metapaths() {
        assert!(matches!(
            Metapath::parse(""),
            Err(Error::InvalidMetapath { .. })
        ));
        assert!(matches!(
            Metapath::parse("v"),
            Err(Error::InvalidMetapath { .. })
        ));
        assert!(Metapath::parse("va").is_ok());
    }

    #[test]
    fn test_compile_cycles_the_pattern() {
        let mp = Metapath::parse("vapav").unwrap();
        let path = mp.compile(10);

        assert_eq!(path.len(), 10);
        assert_eq!(path.as_slice(), &['a', 'p', 'a', 'v', 'a', 'p', 'a', 'v', 'a', 'p']);
        // Step d uses pattern[d % pattern_len]
        for d in 0..path.len() {
            assert_eq!(path.step(d), mp.pattern()[d % mp.pattern().len()]);
        }
    }

    #[test]
    fn test_compile_truncates_to_length() {
        let mp = Metapath::parse("vav").unwrap();
        assert_eq!(mp.compile(3).as_slice(), &['a', 'v', 'a']);
        assert_eq!(mp.compile(1).as_slice(), &['a']);
    }

    #[test]
    fn test_compile_zero_length() {
        let mp = Metapath::parse("va").unwrap();
        let path = mp.compile(0);
        assert!(path.is_empty());
    }

    #[test]
    fn test_two_char_metapath_repeats_single_type() {
        let mp = Metapath::parse("va").unwrap();
        assert_eq!(mp.start_type(), 'v');
        assert_eq!(mp.compile(4).as_slice(), &['a', 'a', 'a', 'a']);
    }

    #[test]
    fn test_display_round_trips() {
        let mp = Metapath::parse("vapav").unwrap();
        assert_eq!(mp.to_string(), "vapav");
    }
}
