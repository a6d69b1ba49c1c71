use crate::data::{constants::mappings::TO_DNA_ACGT_UC, err::SequenceError};

/// Provides method for recoding a sequence based on a byte mapping.
pub trait Recode: AsMut<[u8]> {
    /// Recode the sequence data using a given byte mapping.
    #[inline]
    fn recode(&mut self, transformation_mapping: &'static [u8; 256]) {
        for b in self.as_mut() {
            *b = transformation_mapping[*b as usize];
        }
    }

    /// Converts `acgt` to uppercase in place.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSymbol`] for the first byte that is not
    /// `ACGT` in either case. The sequence is left unmodified in that case.
    #[inline]
    fn recode_to_acgt_uc(&mut self) -> Result<(), SequenceError> {
        let bases = self.as_mut();
        if let Some(position) = bases.iter().position(|&b| TO_DNA_ACGT_UC[b as usize] == 0) {
            return Err(SequenceError::InvalidSymbol {
                symbol: bases[position],
                position,
            });
        }
        bases.recode(&TO_DNA_ACGT_UC);
        Ok(())
    }
}

impl<T: AsMut<[u8]> + ?Sized> Recode for T {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn recode_uc() {
        let mut s = b"acGTtg".to_vec();
        s.recode_to_acgt_uc().unwrap();
        assert_eq!(s, b"ACGTTG");

        let mut bad = b"acNt".to_vec();
        assert_eq!(
            bad.recode_to_acgt_uc(),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'N',
                position: 2,
            })
        );
        assert_eq!(bad, b"acNt");
    }
}
