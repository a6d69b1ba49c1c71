use crate::data::{constants::mappings::StdGeneticCode, err::SequenceError, validation::CheckSequence};

/// Iterator translating uppercase `ACGT` codon by codon with a reading frame
/// starting from 0. A trailing partial codon is skipped.
///
/// This is created by [`Nucleotides::to_aa_iter`](super::Nucleotides::to_aa_iter).
#[derive(Debug, Clone)]
pub struct TranslatedNucleotidesIter<'a> {
    codons: std::slice::Iter<'a, [u8; 3]>,
}

impl<'a> TranslatedNucleotidesIter<'a> {
    #[inline]
    pub(crate) fn new(seq: &'a [u8]) -> Self {
        let (codons, _) = seq.as_chunks::<3>();
        Self { codons: codons.iter() }
    }
}

impl Iterator for TranslatedNucleotidesIter<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.codons
            .next()
            .map(|codon| StdGeneticCode::get(codon).unwrap_or(b'X'))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.codons.size_hint()
    }
}

impl ExactSizeIterator for TranslatedNucleotidesIter<'_> {}
impl std::iter::FusedIterator for TranslatedNucleotidesIter<'_> {}

/// Translates a coding strand of uppercase `ACGT` into amino acids under the
/// standard genetic code, with stop codons written as `*`. Translation
/// continues through stop codons and a trailing partial codon is ignored.
///
/// ## Example
/// ```
/// # use dnamotif::data::nucleotides::translate_sequence;
/// let protein = translate_sequence(b"ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG").unwrap();
/// assert_eq!(protein, b"MAIVMGR*KGAR*");
/// ```
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSymbol`] for the first byte outside of
/// uppercase `ACGT`.
pub fn translate_sequence(coding_strand: &[u8]) -> Result<Vec<u8>, SequenceError> {
    coding_strand.validate_acgt()?;
    Ok(TranslatedNucleotidesIter::new(coding_strand).collect())
}
