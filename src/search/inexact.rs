use crate::{
    data::{err::SequenceError, validation::CheckSequence, validation::validate_pattern},
    distance::hamming_within,
};

/// Provides the starting index of the first "fuzzy substring" with at most
/// `differences_allowed` mismatches from the needle, otherwise [`None`] is
/// returned. Only substitutions are considered.
///
/// ### Limitations
///
/// The naïve algorithm should not be used except for small haystacks.
#[must_use]
#[inline]
pub fn fuzzy_substring_match(haystack: &[u8], needle: &[u8], differences_allowed: usize) -> Option<usize> {
    if needle.len() > haystack.len() || needle.is_empty() {
        return None;
    }

    if differences_allowed >= needle.len() {
        return Some(0);
    }

    haystack
        .windows(needle.len())
        .position(|w| hamming_within(w, needle, differences_allowed))
}

/// Iterates over every start offset in `host` whose window is within `d`
/// mismatches of `pattern`, in increasing order. Inputs are not validated.
#[inline]
pub(crate) fn approximate_positions_iter<'a>(
    pattern: &'a [u8], host: &'a [u8], d: usize,
) -> impl Iterator<Item = usize> + 'a {
    let size = if pattern.is_empty() { host.len() + 1 } else { pattern.len() };
    host.windows(size)
        .enumerate()
        .filter_map(move |(i, w)| hamming_within(w, pattern, d).then_some(i))
}

/// Finds all start offsets in `host` where the `pattern`-length window has
/// Hamming distance at most `d` from `pattern`. Offsets are returned in
/// increasing order, and an empty list is returned if `pattern` is longer than
/// `host`. Every window is scored independently.
///
/// ## Example
/// ```
/// # use dnamotif::search::approximate_match_positions;
/// let host = b"CGCCCGAATCCAGAACGCATTCCCATATTTCGGGACCACTGGCCTCCACGGTACGGACGTCAATCAAAT";
/// let positions = approximate_match_positions(b"ATTCTGGA", host, 3).unwrap();
/// assert_eq!(positions, vec![6, 7, 26, 27]);
/// ```
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `pattern` is empty.
/// * [`SequenceError::InvalidSymbol`] if either sequence contains a byte
///   outside of uppercase `ACGT`.
pub fn approximate_match_positions(pattern: &[u8], host: &[u8], d: usize) -> Result<Vec<usize>, SequenceError> {
    validate_pattern(pattern)?;
    host.validate_acgt()?;
    Ok(approximate_positions_iter(pattern, host, d).collect())
}

/// Counts the windows of `host` within Hamming distance `d` of `pattern`. This
/// is the length of [`approximate_match_positions`].
///
/// # Errors
///
/// The same as [`approximate_match_positions`].
pub fn approximate_pattern_count(pattern: &[u8], host: &[u8], d: usize) -> Result<usize, SequenceError> {
    validate_pattern(pattern)?;
    host.validate_acgt()?;
    Ok(approximate_positions_iter(pattern, host, d).count())
}

#[cfg(test)]
mod test {
    #![allow(clippy::type_complexity)]

    use super::*;

    static DATA: [(&[u8], &[u8], usize, Option<usize>); 9] = [
        (b"aaaaaaaaaaaaaaaaaa", b"aaa", 0, Some(0)),
        (b"aaaaaaaaaaaaaaabbb", b"bbb", 0, Some(15)),
        (b"aaaaaabbbaaaaaaaaa", b"bbb", 0, Some(6)),
        (b"aaaaaababaaaaaaaaa", b"bbb", 1, Some(6)),
        (b"bababababababababa", b"bbb", 1, Some(0)),
        (b"aaaaaababaaaaaaaaa", b"bbb", 2, Some(4)),
        (b"aaaaaaaaaaaaaaaaaa", b"bbb", 2, None),
        (b"aaa", b"aaaaaaaaaaaaaaaaaa", 3, None),
        (b"aaaaaaaaaaaaaaaaaa", b"bbb", 3, Some(0)),
    ];

    #[test]
    fn test_fuzzy_naive() {
        for (haystack, needle, d, expected) in DATA {
            assert_eq!(fuzzy_substring_match(haystack, needle, d), expected);
        }
    }

    #[test]
    fn positions() {
        assert_eq!(approximate_match_positions(b"GAGG", b"TTTAGAGCCTTCAGAGG", 2), Ok(vec![2, 4, 11, 13]));
        assert_eq!(approximate_pattern_count(b"GAGG", b"TTTAGAGCCTTCAGAGG", 2), Ok(4));
        assert_eq!(approximate_pattern_count(b"AAAAA", b"AACAAGCTGATAAACATTTAAAGAG", 2), Ok(11));
    }

    #[test]
    fn pattern_longer_than_host() {
        assert_eq!(approximate_match_positions(b"AAAAA", b"AA", 0), Ok(vec![]));
        assert_eq!(approximate_match_positions(b"AAAAA", b"AA", 5), Ok(vec![]));
    }

    #[test]
    fn exact_when_zero_mismatches() {
        let host = b"GATATATGCATATACTT";
        let naive: Vec<usize> = (0..=host.len() - 4).filter(|&i| &host[i..i + 4] == b"ATAT").collect();
        assert_eq!(approximate_match_positions(b"ATAT", host, 0), Ok(naive));
    }

    #[test]
    fn budget_at_least_pattern_length_matches_everywhere() {
        assert_eq!(approximate_match_positions(b"CC", b"AAAA", 2), Ok(vec![0, 1, 2]));
    }

    #[test]
    fn errors() {
        assert_eq!(
            approximate_match_positions(b"", b"ACGT", 1),
            Err(SequenceError::InvalidInput("the pattern must not be empty"))
        );
        assert_eq!(
            approximate_match_positions(b"AC", b"ACxT", 1),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'x',
                position: 2,
            })
        );
        assert!(approximate_pattern_count(b"aC", b"ACGT", 1).is_err());
    }
}
