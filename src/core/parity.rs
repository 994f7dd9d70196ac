//! Single-bit parity: the convention, the computed bit, and the encoded
//! string the trial loop corrupts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::bits::BitString;
use super::error::CoreError;

/// Parity convention for the session.
///
/// `Even`: data + parity bit must contain an even number of set bits.
/// `Odd`: an odd number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParityMode {
    Even,
    Odd,
}

impl ParityMode {
    /// The parity bit that makes `data` plus the bit satisfy this mode.
    pub fn parity_bit(self, data: &BitString) -> char {
        let even_ones = data.ones() % 2 == 0;
        match self {
            ParityMode::Even => {
                if even_ones {
                    '0'
                } else {
                    '1'
                }
            }
            ParityMode::Odd => {
                if even_ones {
                    '1'
                } else {
                    '0'
                }
            }
        }
    }

    /// Whether a received string satisfies this mode's convention.
    pub fn holds(self, received: &BitString) -> bool {
        match self {
            ParityMode::Even => received.ones() % 2 == 0,
            ParityMode::Odd => received.ones() % 2 != 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParityMode::Even => "even",
            ParityMode::Odd => "odd",
        }
    }
}

impl FromStr for ParityMode {
    type Err = CoreError;

    /// Accepts the literals `even` and `odd` (callers lowercase first).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "even" => Ok(ParityMode::Even),
            "odd" => Ok(ParityMode::Odd),
            _ => Err(CoreError::InvalidMode { raw: s.to_string() }),
        }
    }
}

impl fmt::Display for ParityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A data string with its computed parity bit appended.
///
/// Built once per setup; only a reset rebuilds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encoded {
    data: BitString,
    mode: ParityMode,
    bits: BitString,
}

impl Encoded {
    pub fn new(data: BitString, mode: ParityMode) -> Self {
        let bits = data.with_appended(mode.parity_bit(&data));
        Self { data, mode, bits }
    }

    pub fn data(&self) -> &BitString {
        &self.data
    }

    pub fn mode(&self) -> ParityMode {
        self.mode
    }

    /// Data + parity bit.
    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    /// Length of the encoded string - the upper bound for flip requests.
    /// The parity bit itself is a legal flip target.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn parity_bit_even_mode() {
        assert_eq!(ParityMode::Even.parity_bit(&bits("1011")), '1');
        assert_eq!(ParityMode::Even.parity_bit(&bits("11")), '0');
        assert_eq!(ParityMode::Even.parity_bit(&bits("0")), '0');
    }

    #[test]
    fn parity_bit_odd_mode() {
        assert_eq!(ParityMode::Odd.parity_bit(&bits("1011")), '0');
        assert_eq!(ParityMode::Odd.parity_bit(&bits("11")), '1');
        assert_eq!(ParityMode::Odd.parity_bit(&bits("0")), '1');
    }

    #[test]
    fn encoded_total_count_matches_mode() {
        // Appending the computed bit always lands on the mode's convention.
        for data in ["1", "0", "1011", "111", "000110"] {
            let even = Encoded::new(bits(data), ParityMode::Even);
            assert_eq!(even.bits().ones() % 2, 0, "data {data}");
            assert!(ParityMode::Even.holds(even.bits()));

            let odd = Encoded::new(bits(data), ParityMode::Odd);
            assert_eq!(odd.bits().ones() % 2, 1, "data {data}");
            assert!(ParityMode::Odd.holds(odd.bits()));
        }
    }

    #[test]
    fn encoded_examples() {
        let e = Encoded::new(bits("1011"), ParityMode::Even);
        assert_eq!(e.bits().as_str(), "10111");

        let e = Encoded::new(bits("1011"), ParityMode::Odd);
        assert_eq!(e.bits().as_str(), "10110");
    }

    #[test]
    fn holds_truth_table() {
        // even ones count
        assert!(ParityMode::Even.holds(&bits("1010")));
        assert!(!ParityMode::Odd.holds(&bits("1010")));
        // odd ones count
        assert!(!ParityMode::Even.holds(&bits("1011")));
        assert!(ParityMode::Odd.holds(&bits("1011")));
        // zero ones is even
        assert!(ParityMode::Even.holds(&bits("000")));
        assert!(!ParityMode::Odd.holds(&bits("000")));
    }

    #[test]
    fn mode_parses_literals_only() {
        assert_eq!("even".parse::<ParityMode>().unwrap(), ParityMode::Even);
        assert_eq!("odd".parse::<ParityMode>().unwrap(), ParityMode::Odd);
        assert!("Even".parse::<ParityMode>().is_err());
        assert!("parity".parse::<ParityMode>().is_err());
        assert!("".parse::<ParityMode>().is_err());
    }
}
