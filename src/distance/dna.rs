use crate::{data::err::SequenceError, distance::hamming};

/// Distance methods for any sequence of DNA bytes, such as
/// [`Nucleotides`](crate::data::nucleotides::Nucleotides).
pub trait NucleotidesDistance: AsRef<[u8]> {
    /// Calculates hamming distance between [`self`] and another sequence.
    ///
    /// # Example
    /// ```
    /// # use dnamotif::{data::nucleotides::Nucleotides, distance::dna::NucleotidesDistance};
    /// let s1 = Nucleotides::try_from("GGGCCGTTGGT").unwrap();
    /// let s2 = Nucleotides::try_from("GGACCGTTGAC").unwrap();
    ///
    /// assert_eq!(s1.distance_hamming(&s2), Ok(3));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::LengthMismatch`] if the lengths differ.
    #[inline]
    fn distance_hamming<T: AsRef<[u8]> + ?Sized>(&self, other_sequence: &T) -> Result<usize, SequenceError> {
        hamming(self.as_ref(), other_sequence.as_ref())
    }
}

impl<T: AsRef<[u8]> + ?Sized> NucleotidesDistance for T {}
