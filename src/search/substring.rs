use crate::data::{err::SequenceError, validation::CheckSequence, validation::validate_pattern};
use std::ops::Range;

use super::inexact::{approximate_positions_iter, fuzzy_substring_match};

/// Trait for searching byte substrings within any byte sequence, including
/// [`Nucleotides`](crate::data::nucleotides::Nucleotides).
pub trait ByteSubstring {
    /// Returns `true` is the substring is found and `false` if not. Searches in
    /// the forward direction.
    fn contains_substring(&self, needle: impl AsRef<[u8]>) -> bool;
    /// Returns the substring's index range if found or [`None`] if not.
    /// Searches in the forward direction.
    fn find_substring(&self, needle: impl AsRef<[u8]>) -> Option<Range<usize>>;
    /// Finds the leftmost window within `differences_allowed` substitutions
    /// of `needle`. See [`fuzzy_substring_match`] for more details.
    fn find_fuzzy_substring(&self, needle: impl AsRef<[u8]>, differences_allowed: usize) -> Option<Range<usize>>;
}

impl<T: AsRef<[u8]> + ?Sized> ByteSubstring for T {
    #[inline]
    fn contains_substring(&self, needle: impl AsRef<[u8]>) -> bool {
        self.find_substring(needle).is_some()
    }

    #[inline]
    fn find_substring(&self, needle: impl AsRef<[u8]>) -> Option<Range<usize>> {
        let needle = needle.as_ref();
        substring_match(self.as_ref(), needle).map(|s| s..s + needle.len())
    }

    #[inline]
    fn find_fuzzy_substring(&self, needle: impl AsRef<[u8]>, differences_allowed: usize) -> Option<Range<usize>> {
        let needle = needle.as_ref();
        fuzzy_substring_match(self.as_ref(), needle, differences_allowed).map(|s| s..s + needle.len())
    }
}

/// Returns the first index of `needle` in `haystack`, or [`None`] if absent or
/// if the needle is empty.
#[inline]
#[must_use]
pub fn substring_match(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// All start offsets of exact, possibly overlapping, occurrences of `pattern`
/// in `host`, in increasing order.
///
/// ## Example
/// ```
/// # use dnamotif::search::pattern_positions;
/// assert_eq!(pattern_positions(b"ATAT", b"GATATATGCATATACTT").unwrap(), vec![1, 3, 9]);
/// ```
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `pattern` is empty.
/// * [`SequenceError::InvalidSymbol`] if either sequence contains a byte
///   outside of uppercase `ACGT`.
pub fn pattern_positions(pattern: &[u8], host: &[u8]) -> Result<Vec<usize>, SequenceError> {
    validate_pattern(pattern)?;
    host.validate_acgt()?;
    Ok(approximate_positions_iter(pattern, host, 0).collect())
}

/// The number of exact, possibly overlapping, occurrences of `pattern` in
/// `host`.
///
/// # Errors
///
/// The same as [`pattern_positions`].
pub fn pattern_count(pattern: &[u8], host: &[u8]) -> Result<usize, SequenceError> {
    validate_pattern(pattern)?;
    host.validate_acgt()?;
    Ok(approximate_positions_iter(pattern, host, 0).count())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact() {
        assert_eq!(pattern_count(b"ATAT", b"GATATATGCATATACTT"), Ok(3));
        assert_eq!(pattern_count(b"GCG", b"GCGCG"), Ok(2));
        assert_eq!(pattern_count(b"GCGCGA", b"GCGCG"), Ok(0));
        assert_eq!(pattern_positions(b"CTTGATCAT", b"CTTGATCATCTTGATCAT"), Ok(vec![0, 9]));
    }

    #[test]
    fn trait_methods() {
        let s = b"TTGACCGATACCA";
        assert!(s.contains_substring(b"GATA"));
        assert_eq!(s.find_substring("ACC"), Some(3..6));
        assert_eq!(s.find_substring(""), None);
        assert_eq!(s.find_fuzzy_substring(b"GATT", 1), Some(6..10));
        assert_eq!(s.find_fuzzy_substring(b"GGGG", 1), None);
    }
}
