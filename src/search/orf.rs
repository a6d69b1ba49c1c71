use crate::data::{StdGeneticCode, err::SequenceError, validation::CheckSequence};

/// An open reading frame on the forward strand: a start codon followed by
/// in-frame codons up to, but excluding, the first in-frame stop codon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpenReadingFrame {
    /// The 0-based offset of the start codon.
    pub start:    usize,
    /// The reading frame, 1 through 3.
    pub frame:    usize,
    /// The bases from the start codon through the last codon before the stop.
    pub sequence: Vec<u8>,
}

impl OpenReadingFrame {
    /// The number of bases in the ORF, not counting the stop codon.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Finds every open reading frame in the three forward frames of an
/// uppercase `ACGT` sequence. `ATG`, `GTG`, and `TTG` are start codons, and
/// each one yields its own ORF, so nested starts give nested ORFs. A start
/// with no in-frame stop after it is not reported.
///
/// Results are ordered by frame and then by start.
///
/// ## Example
/// ```
/// # use dnamotif::search::find_orfs;
/// let orfs = find_orfs(b"TTGATGAAATAGGTGCCCTGA").unwrap();
/// let found: Vec<_> = orfs.iter().map(|orf| (orf.start, orf.sequence.as_slice())).collect();
/// assert_eq!(found, [
///     (0, b"TTGATGAAA".as_slice()),
///     (3, b"ATGAAA".as_slice()),
///     (12, b"GTGCCC".as_slice()),
/// ]);
/// ```
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSymbol`] for the first byte outside of
/// uppercase `ACGT`.
pub fn find_orfs(seq: &[u8]) -> Result<Vec<OpenReadingFrame>, SequenceError> {
    seq.validate_acgt()?;

    let mut orfs = Vec::new();
    let mut pending = Vec::new();

    for frame in 0..3.min(seq.len()) {
        pending.clear();
        let (codons, _) = seq[frame..].as_chunks::<3>();

        for (i, codon) in codons.iter().enumerate() {
            let position = frame + 3 * i;
            if StdGeneticCode::is_stop(codon) {
                orfs.extend(pending.drain(..).map(|start| OpenReadingFrame {
                    start,
                    frame: frame + 1,
                    sequence: seq[start..position].to_vec(),
                }));
            } else if StdGeneticCode::is_start(codon) {
                pending.push(position);
            }
        }
    }

    log::debug!("found {} open reading frames in {} bases", orfs.len(), seq.len());
    Ok(orfs)
}

#[cfg(test)]
mod test {
    use super::*;

    fn summarize(orfs: &[OpenReadingFrame]) -> Vec<(&[u8], usize, usize)> {
        orfs.iter()
            .map(|orf| (orf.sequence.as_slice(), orf.start, orf.frame))
            .collect()
    }

    #[test]
    fn nested_and_shifted_frames() {
        let orfs = find_orfs(b"ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG").unwrap();
        assert_eq!(
            summarize(&orfs),
            [
                (b"ATGGCCATTGTAATGGGCCGC".as_slice(), 0, 1),
                (b"ATGGGCCGC".as_slice(), 12, 1),
                (b"TTG".as_slice(), 7, 2),
            ]
        );
        assert_eq!(orfs[0].len(), 21);
    }

    #[test]
    fn alternative_starts() {
        let orfs = find_orfs(b"TTGATGAAATAGGTGCCCTGA").unwrap();
        assert_eq!(
            summarize(&orfs),
            [
                (b"TTGATGAAA".as_slice(), 0, 1),
                (b"ATGAAA".as_slice(), 3, 1),
                (b"GTGCCC".as_slice(), 12, 1),
            ]
        );
    }

    #[test]
    fn requires_stop() {
        assert!(find_orfs(b"ATGAAA").unwrap().is_empty());
        assert!(find_orfs(b"").unwrap().is_empty());
        assert!(find_orfs(b"AT").unwrap().is_empty());
    }

    #[test]
    fn start_directly_before_stop() {
        let orfs = find_orfs(b"ATGTAA").unwrap();
        assert_eq!(summarize(&orfs), [(b"ATG".as_slice(), 0, 1)]);
    }

    #[test]
    fn rejects_lowercase() {
        assert!(matches!(
            find_orfs(b"atgtaa"),
            Err(SequenceError::InvalidSymbol { symbol: b'a', position: 0 })
        ));
    }
}
