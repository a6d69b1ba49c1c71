use crate::data::{alphas::DNA_ACGT_UC, err::SequenceError, validation::validate_pattern};
use std::collections::HashSet;

/// Upper bound on the number of slots reserved up front for a neighborhood.
/// Larger neighborhoods still work, they just grow on demand.
const MAX_PREALLOCATION: usize = 1 << 16;

/// An iterator over every k-mer at Hamming distance exactly one from a source
/// k-mer, substituting each position with each other base of `ACGT` in turn.
/// The source k-mer itself is never produced, and the iterator yields `3k`
/// items for an uppercase `ACGT` source.
#[derive(Debug, Clone)]
pub struct OneMismatchIter<'a> {
    source:   &'a [u8],
    position: usize,
    base:     usize,
}

impl<'a> OneMismatchIter<'a> {
    /// Creates an iterator over the one-mismatch variants of `kmer`.
    #[inline]
    #[must_use]
    pub fn new(kmer: &'a [u8]) -> Self {
        OneMismatchIter {
            source:   kmer,
            position: 0,
            base:     0,
        }
    }
}

impl Iterator for OneMismatchIter<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.source.len() {
            if self.base >= DNA_ACGT_UC.len() {
                self.position += 1;
                self.base = 0;
                continue;
            }

            let substitute = DNA_ACGT_UC[self.base];
            self.base += 1;

            if substitute != self.source[self.position] {
                let mut variant = self.source.to_vec();
                variant[self.position] = substitute;
                return Some(variant);
            }
        }
        None
    }
}

/// The exact number of distinct sequences within Hamming distance `d` of a
/// length-`k` pattern over a four letter alphabet:
/// $\sum_{i=0}^{\min(d,k)} \binom{k}{i} 3^i$. Returns [`usize::MAX`] when the
/// count does not fit.
///
/// ## Example
/// ```
/// # use dnamotif::kmer::neighborhood_size;
/// assert_eq!(neighborhood_size(3, 1), 10);
/// assert_eq!(neighborhood_size(1, 2), 4);
/// ```
#[must_use]
pub fn neighborhood_size(k: usize, d: usize) -> usize {
    let mut total = 0u128;
    let mut binomial = 1u128;
    let mut power = 1u128;

    for i in 0..=d.min(k) {
        if i > 0 {
            // C(k, i) = C(k, i - 1) * (k - i + 1) / i stays integral
            let (Some(b), Some(p)) = (binomial.checked_mul((k - i + 1) as u128), power.checked_mul(3)) else {
                return usize::MAX;
            };
            binomial = b / i as u128;
            power = p;
        }

        let Some(t) = binomial.checked_mul(power).and_then(|shell| total.checked_add(shell)) else {
            return usize::MAX;
        };
        total = t;
    }

    usize::try_from(total).unwrap_or(usize::MAX)
}

/// Builds the distance-`d` neighborhood of an already validated pattern by
/// expanding one mismatch shell at a time. Each level only expands the
/// sequences first reached at the previous level, which yields the same set as
/// re-expanding everything accumulated so far.
pub(crate) fn neighborhood_set(pattern: &[u8], d: usize) -> HashSet<Vec<u8>> {
    let d = d.min(pattern.len());
    let mut neighbors = HashSet::with_capacity(neighborhood_size(pattern.len(), d).min(MAX_PREALLOCATION));
    neighbors.insert(pattern.to_vec());

    let mut frontier = vec![pattern.to_vec()];
    for _ in 0..d {
        let mut next_shell = Vec::new();
        for kmer in &frontier {
            for variant in OneMismatchIter::new(kmer) {
                if !neighbors.contains(&variant) {
                    neighbors.insert(variant.clone());
                    next_shell.push(variant);
                }
            }
        }
        frontier = next_shell;
    }

    neighbors
}

/// Generates every `ACGT` sequence of the same length as `pattern` whose
/// Hamming distance from `pattern` is at most `d`, sorted lexicographically.
/// The pattern itself is always included. Budgets larger than the pattern
/// length behave like `d = pattern.len()`.
///
/// ## Example
/// ```
/// # use dnamotif::kmer::neighborhood;
/// let neighbors = neighborhood(b"ACG", 1).unwrap();
/// assert_eq!(neighbors.len(), 10);
/// assert!(neighbors.contains(&b"TCG".to_vec()));
/// assert_eq!(neighborhood(b"A", 2).unwrap(), vec![b"A".to_vec(), b"C".to_vec(), b"G".to_vec(), b"T".to_vec()]);
/// ```
///
/// ### Limitations
///
/// The neighborhood grows exponentially with `d`, so this is intended for
/// short patterns (k ≤ ~12) with small budgets (d ≤ ~4).
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `pattern` is empty.
/// * [`SequenceError::InvalidSymbol`] if `pattern` contains a byte outside of
///   uppercase `ACGT`.
pub fn neighborhood(pattern: &[u8], d: usize) -> Result<Vec<Vec<u8>>, SequenceError> {
    validate_pattern(pattern)?;
    let mut neighbors: Vec<_> = neighborhood_set(pattern, d).into_iter().collect();
    neighbors.sort_unstable();
    Ok(neighbors)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::distance::hamming;

    #[test]
    fn one_mismatch() {
        let variants: Vec<_> = OneMismatchIter::new(b"AAAGGGTTTCCC").collect();
        assert_eq!(variants.len(), 12 * 3);

        let unique: HashSet<_> = variants.iter().collect();
        assert_eq!(unique.len(), 12 * 3);

        for v in &variants {
            assert_eq!(hamming(b"AAAGGGTTTCCC", v), Ok(1));
        }
        assert_eq!(OneMismatchIter::new(b"").count(), 0);
    }

    #[test]
    fn acg_one_mismatch() {
        let expected: Vec<Vec<u8>> = [
            b"AAG", b"ACA", b"ACC", b"ACG", b"ACT", b"AGG", b"ATG", b"CCG", b"GCG", b"TCG",
        ]
        .iter()
        .map(|s| s.to_vec())
        .collect();
        assert_eq!(neighborhood(b"ACG", 1), Ok(expected));
    }

    #[test]
    fn zero_budget() {
        assert_eq!(neighborhood(b"GATTACA", 0), Ok(vec![b"GATTACA".to_vec()]));
    }

    #[test]
    fn single_base() {
        let all = vec![b"A".to_vec(), b"C".to_vec(), b"G".to_vec(), b"T".to_vec()];
        assert_eq!(neighborhood(b"A", 1), Ok(all.clone()));
        assert_eq!(neighborhood(b"T", 2), Ok(all));
    }

    #[test]
    fn sizes_match_closed_form() {
        for pattern in [b"A".as_slice(), b"CG", b"ACG", b"GATTACA", b"GCGGTAGGAGA"] {
            for d in 0..=4 {
                let n = neighborhood(pattern, d).unwrap();
                assert_eq!(n.len(), neighborhood_size(pattern.len(), d), "k = {}, d = {d}", pattern.len());
            }
        }
        assert_eq!(neighborhood_size(10, 2), 1 + 30 + 45 * 9);
        assert_eq!(neighborhood_size(4, 9), 256);
        assert_eq!(neighborhood_size(0, 3), 1);
    }

    #[test]
    fn nested_and_bounded() {
        let pattern = b"CCAGTCAATG";
        let mut previous = neighborhood(pattern, 0).unwrap();
        for d in 1..=3 {
            let current = neighborhood(pattern, d).unwrap();
            for member in &previous {
                assert!(current.binary_search(member).is_ok());
            }
            for member in &current {
                assert!(hamming(pattern, member).unwrap() <= d);
            }
            assert!(current.windows(2).all(|w| w[0] < w[1]));
            previous = current;
        }
    }

    #[test]
    fn errors() {
        assert_eq!(
            neighborhood(b"", 1),
            Err(SequenceError::InvalidInput("the pattern must not be empty"))
        );
        assert_eq!(
            neighborhood(b"ACU", 1),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'U',
                position: 2,
            })
        );
    }
}
