use crate::data::{
    constants::mappings::{IS_DNA_ACGT, IS_DNA_ACGT_UC},
    err::SequenceError,
};

/// Provides validation of sequences against the canonical DNA alphabet.
pub trait CheckSequence: AsRef<[u8]> {
    /// Checks that every byte is an uppercase `A`, `C`, `G`, or `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSymbol`] for the first byte outside of
    /// `ACGT`.
    #[inline]
    fn validate_acgt(&self) -> Result<(), SequenceError> {
        match self.as_ref().iter().position(|&b| !IS_DNA_ACGT_UC[b as usize]) {
            Some(position) => Err(SequenceError::InvalidSymbol {
                symbol: self.as_ref()[position],
                position,
            }),
            None => Ok(()),
        }
    }

    /// Whether every byte is `ACGT` in upper case.
    #[inline]
    #[must_use]
    fn is_acgt_uc(&self) -> bool {
        self.as_ref().iter().all(|&b| IS_DNA_ACGT_UC[b as usize])
    }

    /// Whether every byte is `ACGT` in either case.
    #[inline]
    #[must_use]
    fn is_acgt(&self) -> bool {
        self.as_ref().iter().all(|&b| IS_DNA_ACGT[b as usize])
    }
}

impl<T: AsRef<[u8]> + ?Sized> CheckSequence for T {}

/// Validates a k-mer like pattern: non-empty and `ACGT` only.
#[inline]
pub(crate) fn validate_pattern(pattern: &[u8]) -> Result<(), SequenceError> {
    if pattern.is_empty() {
        return Err(SequenceError::InvalidInput("the pattern must not be empty"));
    }
    pattern.validate_acgt()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn validate() {
        assert!(b"ACGTTGCA".validate_acgt().is_ok());
        assert!(b"".validate_acgt().is_ok());
        assert_eq!(
            b"ACgT".validate_acgt(),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'g',
                position: 2,
            })
        );
        assert!(b"acgtACGT".is_acgt());
        assert!(!b"acgtACGT".is_acgt_uc());
        assert!(!b"ACGN".is_acgt());
    }

    #[test]
    fn pattern() {
        assert_eq!(
            validate_pattern(b""),
            Err(SequenceError::InvalidInput("the pattern must not be empty"))
        );
        assert!(validate_pattern(b"GATTACA").is_ok());
    }
}
