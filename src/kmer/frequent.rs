use super::kmer_counter::{KmerCounter, most_frequent_by};
use crate::data::{err::SequenceError, nucleotides::reverse_complement_unchecked, validation::CheckSequence};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Returns the most frequent exact k-mers of `host`, sorted
/// lexicographically. Every overlapping window is counted, and a `host`
/// shorter than `k` yields an empty list.
///
/// ## Example
/// ```
/// # use dnamotif::kmer::frequent_words;
/// let words = frequent_words(b"ACGTTGCATGTCGCATGATGCATGAGAGCT", 4).unwrap();
/// assert_eq!(words, vec![b"CATG".to_vec(), b"GCAT".to_vec()]);
/// ```
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `k` is 0.
/// * [`SequenceError::InvalidSymbol`] if `host` contains a byte outside of
///   uppercase `ACGT`.
pub fn frequent_words(host: &[u8], k: usize) -> Result<Vec<Vec<u8>>, SequenceError> {
    let mut counter = KmerCounter::new(k)?;
    host.validate_acgt()?;
    counter.insert_from_sequence(host);
    Ok(counter.most_frequent())
}

/// Finds the k-mers that occur most often in `host` when up to `d` mismatches
/// are tolerated.
///
/// A candidate is any k-mer within distance `d` of at least one window of
/// `host`. Its score is the number of windows within distance `d` of it. When
/// `with_reverse_complement` is set, the same count for the candidate's reverse
/// complement is added. All candidates tied at the best score are returned,
/// sorted lexicographically. A `host` shorter than `k` yields an empty list.
///
/// Scores are gathered in one pass: each window adds one to every member of
/// its own neighborhood, so no candidate is ever rescored.
///
/// <div class="warning note">
///
/// **Note**
///
/// The reverse-complement score is a sum. A k-mer that is its own reverse
/// complement (such as `ACGT`) has its occurrences counted twice.
///
/// </div>
///
/// ## Example
/// ```
/// # use dnamotif::kmer::frequent_words_with_mismatches;
/// let host = b"ACGTTGCATGTCGCATGATGCATGAGAGCT";
///
/// let words = frequent_words_with_mismatches(host, 4, 1, false).unwrap();
/// assert_eq!(words, vec![b"ATGC".to_vec(), b"ATGT".to_vec(), b"GATG".to_vec()]);
///
/// let words = frequent_words_with_mismatches(host, 4, 1, true).unwrap();
/// assert_eq!(words, vec![b"ACAT".to_vec(), b"ATGT".to_vec()]);
/// ```
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `k` is 0.
/// * [`SequenceError::InvalidSymbol`] if `host` contains a byte outside of
///   uppercase `ACGT`.
pub fn frequent_words_with_mismatches(
    host: &[u8], k: usize, d: usize, with_reverse_complement: bool,
) -> Result<Vec<Vec<u8>>, SequenceError> {
    if k == 0 {
        return Err(SequenceError::InvalidInput("the k-mer length must be positive"));
    }
    host.validate_acgt()?;

    if host.len() < k {
        return Ok(Vec::new());
    }

    let tally = tally_neighborhoods(host, k, d);
    log::debug!(
        "Scored {candidates} candidate {k}-mers from {windows} windows with up to {d} mismatches",
        candidates = tally.len(),
        windows = host.len() - k + 1
    );

    let words = if with_reverse_complement {
        most_frequent_by(tally.iter().map(|(kmer, count)| {
            let rc_count = tally.get(reverse_complement_unchecked(kmer));
            (kmer, count + rc_count)
        }))
    } else {
        tally.most_frequent()
    };

    Ok(words)
}

/// For every k-mer within `d` of some window, counts the windows within `d`
/// of it.
#[cfg(not(feature = "parallel"))]
fn tally_neighborhoods(host: &[u8], k: usize, d: usize) -> KmerCounter {
    let mut tally = KmerCounter::with_length(k);
    for window in host.windows(k) {
        tally.insert_kmer_with_variants(window, d);
    }
    tally
}

#[cfg(feature = "parallel")]
fn tally_neighborhoods(host: &[u8], k: usize, d: usize) -> KmerCounter {
    host.par_windows(k)
        .fold(
            || KmerCounter::with_length(k),
            |mut tally, window| {
                tally.insert_kmer_with_variants(window, d);
                tally
            },
        )
        .reduce(|| KmerCounter::with_length(k), KmerCounter::merge)
}
