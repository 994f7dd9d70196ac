//! Simulated transmission errors: invert distinct random positions.

use rand::Rng;
use rand::seq::index;

use super::bits::BitString;

/// One trial's corrupted copy plus the positions that were inverted.
///
/// `flipped` is in sampling order, not sorted, and is reported to the user
/// as-is.
#[derive(Debug, Clone)]
pub struct Corruption {
    pub bits: BitString,
    pub flipped: Vec<usize>,
}

/// Flip `requested` distinct random bits using the process-wide generator.
///
/// Not deterministic and not seeded; each run differs.
pub fn corrupt(bits: &BitString, requested: usize) -> Corruption {
    corrupt_with(bits, requested, &mut rand::rng())
}

/// Flip `requested` distinct random bits drawn from `rng`.
///
/// The effective count is clamped to the string length. Under normal flow
/// the session has already rejected over-large requests; the clamp is a
/// safety net for direct callers.
pub fn corrupt_with<R: Rng + ?Sized>(
    bits: &BitString,
    requested: usize,
    rng: &mut R,
) -> Corruption {
    let count = requested.min(bits.len());
    let flipped = index::sample(rng, bits.len(), count).into_vec();
    Corruption {
        bits: bits.with_flipped(&flipped),
        flipped,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn zero_flips_is_identity() {
        let b = bits("10111");
        let c = corrupt(&b, 0);
        assert_eq!(c.bits, b);
        assert!(c.flipped.is_empty());
    }

    #[test]
    fn flip_count_and_bounds() {
        let b = bits("1010011");
        let mut rng = StdRng::seed_from_u64(7);
        for requested in 0..=b.len() {
            let c = corrupt_with(&b, requested, &mut rng);
            assert_eq!(c.flipped.len(), requested);
            assert!(c.flipped.iter().all(|&i| i < b.len()));

            let mut sorted = c.flipped.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), requested, "duplicate index");
        }
    }

    #[test]
    fn differs_exactly_at_flipped_indices() {
        let b = bits("110010101");
        let mut rng = StdRng::seed_from_u64(42);
        let c = corrupt_with(&b, 4, &mut rng);

        let before: Vec<char> = b.as_str().chars().collect();
        let after: Vec<char> = c.bits.as_str().chars().collect();
        for i in 0..b.len() {
            if c.flipped.contains(&i) {
                assert_ne!(before[i], after[i], "index {i} not inverted");
            } else {
                assert_eq!(before[i], after[i], "index {i} changed");
            }
        }
    }

    #[test]
    fn oversized_request_clamps_to_length() {
        let b = bits("101");
        let mut rng = StdRng::seed_from_u64(1);
        let c = corrupt_with(&b, 999, &mut rng);
        assert_eq!(c.flipped.len(), 3);
        // every bit inverted
        assert_eq!(c.bits.as_str(), "010");
    }

    #[test]
    fn flipping_everything_twice_restores() {
        let b = bits("10011");
        let mut rng = StdRng::seed_from_u64(3);
        let once = corrupt_with(&b, b.len(), &mut rng);
        let twice = corrupt_with(&once.bits, b.len(), &mut rng);
        assert_eq!(twice.bits, b);
    }
}
