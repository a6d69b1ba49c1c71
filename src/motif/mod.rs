//! ## Motif enumeration across several sequences.
//!
//! An `(k, d)`-motif is a k-mer that appears, with at most `d` mismatches, in
//! every sequence of a collection. [`enumerate_motifs`] finds all of them by
//! brute force over the neighborhoods of the first sequence.

use crate::{
    data::{err::SequenceError, validation::CheckSequence},
    kmer::neighborhood_set,
    search::fuzzy_substring_match,
};
use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Enumerates every k-mer that lies within Hamming distance `d` of some window
/// in each of `sequences`, sorted lexicographically.
///
/// Candidates are seeded from the neighborhoods of the first sequence's
/// windows, since any motif must be close to one of them. Each candidate is
/// then checked against the remaining sequences, stopping at the first
/// sequence without a close enough window. With a single sequence, the result
/// is the union of its windows' neighborhoods. If any sequence is shorter than
/// `k`, no motif exists and the result is empty.
///
/// ## Example
/// ```
/// # use dnamotif::motif::enumerate_motifs;
/// let sequences = ["ATTTGGC", "TGCCTTA", "CGGTATC", "GAAAATT"];
/// let motifs = enumerate_motifs(&sequences, 3, 1).unwrap();
/// assert_eq!(motifs, vec![b"ATA".to_vec(), b"ATT".to_vec(), b"GTT".to_vec(), b"TTT".to_vec()]);
/// ```
///
/// # Errors
///
/// * [`SequenceError::InvalidInput`] if `sequences` is empty or `k` is 0.
/// * [`SequenceError::InvalidSymbol`] if any sequence contains a byte outside
///   of uppercase `ACGT`.
pub fn enumerate_motifs<S>(sequences: &[S], k: usize, d: usize) -> Result<Vec<Vec<u8>>, SequenceError>
where
    S: AsRef<[u8]> + Sync, {
    let Some((first, rest)) = sequences.split_first() else {
        return Err(SequenceError::InvalidInput("at least one sequence is required"));
    };
    if k == 0 {
        return Err(SequenceError::InvalidInput("the k-mer length must be positive"));
    }
    for sequence in sequences {
        sequence.as_ref().validate_acgt()?;
    }

    if sequences.iter().any(|s| s.as_ref().len() < k) {
        return Ok(Vec::new());
    }

    let mut candidates = HashSet::new();
    for window in first.as_ref().windows(k) {
        candidates.extend(neighborhood_set(window, d));
    }

    let seeded = candidates.len();
    let mut motifs = filter_candidates(candidates, rest, d);
    motifs.sort_unstable();

    log::debug!(
        "Kept {kept} of {seeded} candidate {k}-mers across {n} sequences",
        kept = motifs.len(),
        n = sequences.len()
    );

    Ok(motifs)
}

/// Whether some window of every sequence is within `d` of `candidate`.
#[inline]
fn occurs_in_all<S: AsRef<[u8]>>(candidate: &[u8], sequences: &[S], d: usize) -> bool {
    sequences
        .iter()
        .all(|s| fuzzy_substring_match(s.as_ref(), candidate, d).is_some())
}

#[cfg(not(feature = "parallel"))]
fn filter_candidates<S: AsRef<[u8]> + Sync>(candidates: HashSet<Vec<u8>>, sequences: &[S], d: usize) -> Vec<Vec<u8>> {
    candidates
        .into_iter()
        .filter(|candidate| occurs_in_all(candidate, sequences, d))
        .collect()
}

#[cfg(feature = "parallel")]
fn filter_candidates<S: AsRef<[u8]> + Sync>(candidates: HashSet<Vec<u8>>, sequences: &[S], d: usize) -> Vec<Vec<u8>> {
    candidates
        .into_par_iter()
        .filter(|candidate| occurs_in_all(candidate, sequences, d))
        .collect()
}
