//! Character alphabets and the uniform random sampler built on them.

use rand::Rng;

/// An ordered, non-empty set of ASCII characters to sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet(&'static [u8]);

impl Alphabet {
    /// Decimal digits `0-9`.
    pub const DIGITS: Self = Self(b"0123456789");

    /// Decimal digits followed by uppercase ASCII letters `A-Z`.
    pub const ALPHANUMERIC: Self = Self(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    /// Returns true if every byte of `s` belongs to this alphabet.
    #[must_use]
    pub fn contains_all(&self, s: &str) -> bool {
        s.bytes().all(|b| self.0.contains(&b))
    }

    /// Draws `length` characters independently and uniformly from this alphabet.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> String {
        (0..length)
            .map(|_| char::from(self.0[rng.random_range(0..self.0.len())]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_sample_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Alphabet::DIGITS.sample(&mut rng, 0), "");
        assert_eq!(Alphabet::DIGITS.sample(&mut rng, 10).len(), 10);
        assert_eq!(Alphabet::ALPHANUMERIC.sample(&mut rng, 20).len(), 20);
    }

    #[test]
    fn test_sample_stays_within_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let s = Alphabet::DIGITS.sample(&mut rng, 16);
            assert!(s.bytes().all(|b| b.is_ascii_digit()), "{s}");
            let s = Alphabet::ALPHANUMERIC.sample(&mut rng, 16);
            assert!(Alphabet::ALPHANUMERIC.contains_all(&s), "{s}");
        }
    }

    #[test]
    fn test_contains_all() {
        assert!(Alphabet::DIGITS.contains_all("0123"));
        assert!(!Alphabet::DIGITS.contains_all("01A3"));
        assert!(!Alphabet::ALPHANUMERIC.contains_all("abc"));
    }

    #[test]
    fn test_thread_rng_samples_are_not_constant() {
        let mut rng = rand::rng();
        let samples: std::collections::HashSet<_> =
            (0..20).map(|_| Alphabet::ALPHANUMERIC.sample(&mut rng, 12)).collect();
        assert!(samples.len() > 1);
    }
}
