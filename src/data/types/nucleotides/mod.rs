use crate::{
    composition::gc_content,
    data::{err::SequenceError, validation::Recode},
};

mod rev_comp;
mod std_traits;
mod transcription;
mod translation;

#[cfg(test)]
mod test;

pub use rev_comp::*;
pub use transcription::*;
pub use translation::*;

/// [`Nucleotides`] is a transparent, new-type wrapper around [`Vec<u8>`]
/// holding uppercase canonical DNA. Construction through [`TryFrom`] or
/// [`Nucleotides::from_dna`] upper-cases `acgt` and rejects every other byte,
/// so the search functions never see invalid symbols from this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Nucleotides(pub(crate) Vec<u8>);

impl Nucleotides {
    /// Create a new `Nucleotides` empty object.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Nucleotides(Vec::new())
    }

    /// Creates [`Nucleotides`] from any case of `ACGT`, converting to
    /// uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSymbol`] on the first byte outside of
    /// `ACGTacgt`.
    #[inline]
    pub fn from_dna(bytes: impl Into<Vec<u8>>) -> Result<Self, SequenceError> {
        let mut bytes = bytes.into();
        bytes.recode_to_acgt_uc()?;
        Ok(Nucleotides(bytes))
    }

    /// The length of the stored sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the sequence empty?
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Obtains the bytes as a slice.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Consumes the sequence and returns the inner bytes.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    /// Create an iterator over the nucleotides as `u8`.
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Iterates over the overlapping `k`-length windows of the sequence. The
    /// iterator is empty if `k` is zero or larger than the sequence.
    #[inline]
    pub fn kmers(&self, k: usize) -> impl Iterator<Item = &[u8]> {
        let k = if k == 0 { self.0.len() + 1 } else { k };
        self.0.windows(k)
    }

    /// Returns the reverse complement as a new sequence.
    #[inline]
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        Self(reverse_complement_unchecked(&self.0))
    }

    /// Reverse complements the sequence in place.
    #[inline]
    pub fn make_reverse_complement(&mut self) {
        make_reverse_complement(&mut self.0);
    }

    /// Transcribes the sequence into mRNA, returning `ACGU` bytes.
    #[inline]
    #[must_use]
    pub fn transcribe(&self) -> Vec<u8> {
        self.0.iter().map(|&b| if b == b'T' { b'U' } else { b }).collect()
    }

    /// Translates the sequence under the standard genetic code. See
    /// [`translate_sequence`].
    #[inline]
    #[must_use]
    pub fn translate(&self) -> Vec<u8> {
        self.to_aa_iter().collect()
    }

    /// Creates an iterator over the amino acids of the reading frame starting
    /// at 0.
    #[inline]
    #[must_use]
    pub fn to_aa_iter(&self) -> TranslatedNucleotidesIter<'_> {
        TranslatedNucleotidesIter::new(&self.0)
    }

    /// The fraction of `G` and `C` bases, or `None` if the sequence is empty.
    #[inline]
    #[must_use]
    pub fn gc_content(&self) -> Option<f64> {
        gc_content(&self.0)
    }
}
