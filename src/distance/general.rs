use crate::data::err::SequenceError;
use std::iter::zip;

/// Calculates the number of differences at the byte (or base/residue) level
/// between two sequences of equal length.
///
/// # Example
/// ```
/// use dnamotif::distance::hamming;
///
/// let s1 = b"GGGCCGTTGGT";
/// let s2 = b"GGACCGTTGAC";
///
/// assert_eq!(hamming(s1, s2), Ok(3));
/// assert!(hamming(s1, b"GGG").is_err());
/// ```
///
/// # Errors
///
/// Returns [`SequenceError::LengthMismatch`] if the lengths differ.
#[inline]
pub fn hamming(x: &[u8], y: &[u8]) -> Result<usize, SequenceError> {
    if x.len() != y.len() {
        return Err(SequenceError::LengthMismatch {
            left:  x.len(),
            right: y.len(),
        });
    }
    Ok(hamming_unchecked(x, y))
}

/// Counts mismatches over the common prefix of two sequences, ignoring any
/// length difference.
#[inline]
#[must_use]
pub(crate) fn hamming_unchecked(x: &[u8], y: &[u8]) -> usize {
    zip(x, y).filter(|(a, b)| a != b).count()
}

/// Whether two equal-length windows differ in at most `max_mismatches`
/// positions. Stops scanning once the budget is exceeded. Only the common
/// prefix is compared, so callers must pass windows of equal length.
#[must_use]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn hamming_within(x: &[u8], y: &[u8], max_mismatches: usize) -> bool {
    let mut differences = 0;
    for (&a, &b) in zip(x, y) {
        if a != b {
            differences += 1;
            if differences > max_mismatches {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hamming() {
        assert_eq!(hamming(b"", b""), Ok(0));
        assert_eq!(hamming(b"ACGT", b"ACGT"), Ok(0));
        assert_eq!(hamming(b"ACGT", b"TGCA"), Ok(4));
        assert_eq!(
            hamming(b"ACGT", b"ACG"),
            Err(SequenceError::LengthMismatch { left: 4, right: 3 })
        );
    }

    #[test]
    fn symmetric_and_bounded() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"GGGCCGTTGGT", b"GGACCGTTGAC"),
            (b"AAAA", b"AAAT"),
            (b"CTTGAAGTGGACCTCTAGTTCCTCTACAA", b"ATGCCTTACCTAGATGCAATGACGGACGT"),
            (b"A", b"A"),
        ];

        for (x, y) in pairs {
            let d = hamming(x, y).unwrap();
            assert_eq!(d, hamming(y, x).unwrap());
            assert!(d <= x.len());
            assert_eq!(hamming(x, x), Ok(0));
        }
    }

    #[test]
    fn within() {
        assert!(hamming_within(b"ACGT", b"ACGA", 1));
        assert!(!hamming_within(b"ACGT", b"TCGA", 1));
        assert!(hamming_within(b"ACGT", b"TGCA", 4));
        assert!(hamming_within(b"ACGT", b"ACGT", 0));
        assert!(!hamming_within(b"ACGT", b"ACGA", 0));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn within_agrees_with_hamming() {
        use crate::generate::rand_sequence;

        for seed in 0..25 {
            let x = rand_sequence(b"ACGT", 12, seed);
            let y = rand_sequence(b"ACGT", 12, seed + 1000);
            let d = hamming(&x, &y).unwrap();
            for budget in 0..=12 {
                assert_eq!(hamming_within(&x, &y, budget), d <= budget);
            }
        }
    }
}
