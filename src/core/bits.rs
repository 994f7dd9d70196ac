//! Binary strings as entered at the prompt.
//!
//! `BitString` is the only way bit data enters the core: parsing rejects
//! anything that is not a non-empty run of ASCII `0`/`1`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::CoreError;

/// Validated binary string - non-empty, ASCII `'0'`/`'1'` only.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitString(String);

impl BitString {
    /// Parse and validate a binary string.
    ///
    /// The prompt layer normalizes (trim + lowercase) before calling this;
    /// parse itself makes no allowance for whitespace.
    pub fn parse(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if s.is_empty() {
            return Err(CoreError::InvalidBits {
                raw: s,
                reason: "empty".into(),
            });
        }
        if let Some(bad) = s.chars().find(|c| *c != '0' && *c != '1') {
            return Err(CoreError::InvalidBits {
                raw: s.clone(),
                reason: format!("contains `{bad}` (only 0s and 1s allowed)"),
            });
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true: parse rejects empty strings. Kept for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of set bits.
    pub fn ones(&self) -> usize {
        self.0.bytes().filter(|b| *b == b'1').count()
    }

    /// Copy with one extra bit appended.
    pub(crate) fn with_appended(&self, bit: char) -> BitString {
        debug_assert!(bit == '0' || bit == '1');
        Self(format!("{}{bit}", self.0))
    }

    /// Copy with the bits at `indices` inverted. Indices must be in bounds.
    pub(crate) fn with_flipped(&self, indices: &[usize]) -> BitString {
        let mut chars: Vec<char> = self.0.chars().collect();
        for &i in indices {
            chars[i] = if chars[i] == '0' { '1' } else { '0' };
        }
        Self(chars.into_iter().collect())
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString({:?})", self.0)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let bits = BitString::parse("1011").unwrap();
        assert_eq!(bits.as_str(), "1011");
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.ones(), 3);
    }

    #[test]
    fn parse_all_zeros() {
        let bits = BitString::parse("000").unwrap();
        assert_eq!(bits.ones(), 0);
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(BitString::parse("").is_err());
    }

    #[test]
    fn parse_rejects_non_binary() {
        assert!(BitString::parse("10x1").is_err());
        assert!(BitString::parse("102").is_err());
        assert!(BitString::parse(" 101").is_err());
        assert!(BitString::parse("q").is_err());
    }

    #[test]
    fn with_appended_extends() {
        let bits = BitString::parse("10").unwrap();
        assert_eq!(bits.with_appended('1').as_str(), "101");
    }

    #[test]
    fn with_flipped_inverts_only_given_indices() {
        let bits = BitString::parse("0000").unwrap();
        let flipped = bits.with_flipped(&[1, 3]);
        assert_eq!(flipped.as_str(), "0101");
        // order of indices does not matter
        assert_eq!(bits.with_flipped(&[3, 1]), flipped);
    }
}
