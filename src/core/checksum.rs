//! 8-bit one's-complement checksum over ASCII text.
//!
//! Sender: sum the byte values, fold carries back into the low byte until
//! none remain, complement. Receiver: add the received checksum to the same
//! sum, fold, complement; zero means intact.

use std::fmt;

use serde::Serialize;

use super::error::CoreError;

/// 8-bit one's-complement checksum value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum(u8);

impl Checksum {
    /// Compute the checksum of `data`'s bytes.
    pub fn of(data: &str) -> Self {
        let sum: u32 = data.bytes().map(u32::from).sum();
        Self(!(fold_carries(sum) as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn to_hex(self) -> String {
        format!("{:02X}", self.0)
    }

    /// Parse a hex byte (one or two digits, any case).
    pub fn parse_hex(s: &str) -> Result<Self, CoreError> {
        let t = s.trim();
        if t.is_empty() || t.len() > 2 {
            return Err(CoreError::InvalidChecksum {
                raw: s.to_string(),
                reason: "must be 1-2 hex digits".into(),
            });
        }
        let value = u8::from_str_radix(t, 16).map_err(|_| CoreError::InvalidChecksum {
            raw: s.to_string(),
            reason: format!("contains invalid hex: {t}"),
        })?;
        Ok(Self(value))
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({})", self.to_hex())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Checksum {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Checksum plus the step-by-step computation log shown to students.
#[derive(Debug, Clone, Serialize)]
pub struct ChecksumTrace {
    pub checksum: Checksum,
    pub steps: Vec<String>,
}

impl ChecksumTrace {
    pub fn of(data: &str) -> Self {
        let mut steps = Vec::new();
        steps.push(format!("Starting calculation for: {data:?}"));

        let codes: Vec<u32> = data.bytes().map(u32::from).collect();
        steps.push(format!(
            "ASCII values: [{}]",
            codes
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ));

        let mut sum = 0u32;
        for (i, code) in codes.iter().enumerate() {
            sum += code;
            steps.push(format!("Step {}: adding {code} (sum: {sum})", i + 1));
        }

        while sum >> 8 != 0 {
            let carry = sum >> 8;
            steps.push(format!("Carry detected: {carry}. Folding back into sum..."));
            sum = (sum & 0xFF) + carry;
        }

        let checksum = Checksum(!(sum as u8));
        steps.push(format!("One's complement: {checksum} (checksum)"));
        Self { checksum, steps }
    }
}

/// Receiver-side verdict.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub valid: bool,
    pub status: &'static str,
}

impl VerifyReport {
    /// Re-run the receiver arithmetic: data sum + received checksum, fold,
    /// complement. A zero residue means no detected corruption.
    pub fn check(data: &str, received: Checksum) -> Self {
        let sum: u32 = data.bytes().map(u32::from).sum::<u32>() + u32::from(received.value());
        let valid = !(fold_carries(sum) as u8) == 0;
        Self {
            valid,
            status: if valid { "Data Intact" } else { "Data Corrupted" },
        }
    }
}

fn fold_carries(mut sum: u32) -> u32 {
    while sum >> 8 != 0 {
        sum = (sum & 0xFF) + (sum >> 8);
    }
    sum
}
