use super::kmer_counter::KmerCounter;
use crate::data::{err::SequenceError, validation::CheckSequence};
use std::collections::HashSet;

/// Finds every distinct k-mer that forms an `(L, t)`-clump in `genome`: a
/// k-mer occurring at least `min_occurrences` times within some window of
/// length `window_length`. The result is sorted lexicographically and is empty
/// when `genome` is shorter than `window_length`.
///
/// The window tally is updated incrementally as the window slides, so each
/// step costs one removal and one insertion.
///
/// ## Example
/// ```
/// # use dnamotif::kmer::find_clumps;
/// let genome = b"CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA";
/// let clumps = find_clumps(genome, 5, 50, 4).unwrap();
/// assert_eq!(clumps, vec![b"CGACA".to_vec(), b"GAAGA".to_vec()]);
/// ```
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `k` or `min_occurrences` is 0, or if
///   `k` is larger than `window_length`.
/// * [`SequenceError::InvalidSymbol`] if `genome` contains a byte outside of
///   uppercase `ACGT`.
pub fn find_clumps(
    genome: &[u8], k: usize, window_length: usize, min_occurrences: usize,
) -> Result<Vec<Vec<u8>>, SequenceError> {
    let mut tally = KmerCounter::new(k)?;
    if min_occurrences == 0 {
        return Err(SequenceError::InvalidInput("the minimum number of occurrences must be positive"));
    }
    if k > window_length {
        return Err(SequenceError::InvalidInput("the k-mer length must not exceed the window length"));
    }
    genome.validate_acgt()?;

    if genome.len() < window_length {
        return Ok(Vec::new());
    }

    let first = &genome[..window_length];
    tally.insert_from_sequence(first);
    let mut clumps: HashSet<&[u8]> = first
        .windows(k)
        .filter(|kmer| tally.get(kmer) >= min_occurrences)
        .collect();

    // Window starting at `start` drops the k-mer at `start - 1` and gains the
    // one ending at `start + window_length`
    for start in 1..=genome.len() - window_length {
        tally.remove_kmer(&genome[start - 1..start - 1 + k]);

        let end = start + window_length;
        let incoming = &genome[end - k..end];
        tally.insert_kmer(incoming);
        if tally.get(incoming) >= min_occurrences {
            clumps.insert(incoming);
        }
    }

    log::debug!(
        "Found {n} clumped {k}-mers in windows of length {window_length}",
        n = clumps.len()
    );

    let mut clumps: Vec<Vec<u8>> = clumps.into_iter().map(<[u8]>::to_vec).collect();
    clumps.sort_unstable();
    Ok(clumps)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clumps() {
        assert_eq!(find_clumps(b"AAAACGTCGAAAAA", 2, 4, 2), Ok(vec![b"AA".to_vec()]));
        assert_eq!(
            find_clumps(b"ACGT", 2, 4, 1),
            Ok(vec![b"AC".to_vec(), b"CG".to_vec(), b"GT".to_vec()])
        );
    }

    #[test]
    fn agrees_with_window_recount() {
        let genome = b"GATCAGCATAAGGGTCCCTGCAATGCATGACAAGCCTGCAGTTGTTTTACGATCAGCATAAGGG";
        let (k, window_length, t) = (4, 25, 3);

        let mut expected = Vec::new();
        for window in genome.windows(window_length) {
            let mut counter = KmerCounter::new(k).unwrap();
            counter.insert_from_sequence(window);
            for (kmer, count) in counter.iter() {
                if count >= t && !expected.contains(&kmer.to_vec()) {
                    expected.push(kmer.to_vec());
                }
            }
        }
        expected.sort();

        assert_eq!(find_clumps(genome, k, window_length, t), Ok(expected));
    }

    #[test]
    fn short_genome() {
        assert_eq!(find_clumps(b"ACGTACGT", 2, 10, 1), Ok(vec![]));
    }

    #[test]
    fn errors() {
        assert!(find_clumps(b"ACGT", 0, 4, 1).is_err());
        assert!(find_clumps(b"ACGT", 2, 4, 0).is_err());
        assert_eq!(
            find_clumps(b"ACGT", 5, 4, 1),
            Err(SequenceError::InvalidInput("the k-mer length must not exceed the window length"))
        );
        assert!(find_clumps(b"ACGU", 2, 4, 1).is_err());
    }
}
