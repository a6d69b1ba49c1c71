use crate::data::{
    constants::mappings::{TO_DNA_FROM_RNA_UC, TO_RNA_ACGU_UC},
    err::SequenceError,
};

/// Applies a byte mapping in which 0 marks an invalid input byte.
fn map_checked(bases: &[u8], mapping: &[u8; 256]) -> Result<Vec<u8>, SequenceError> {
    bases
        .iter()
        .enumerate()
        .map(|(position, &b)| match mapping[b as usize] {
            0 => Err(SequenceError::InvalidSymbol { symbol: b, position }),
            mapped => Ok(mapped),
        })
        .collect()
}

/// Transcribes a coding strand of uppercase `ACGT` into mRNA by replacing `T`
/// with `U`. The template strand is the [`reverse_complement`](super::reverse_complement) of the coding
/// strand.
///
/// ## Example
/// ```
/// # use dnamotif::data::nucleotides::{reverse_complement, transcribe};
/// let coding = b"ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";
/// assert_eq!(transcribe(coding).unwrap(), b"AUGGCCAUUGUAAUGGGCCGCUGAAAGGGUGCCCGAUAG");
/// assert_eq!(reverse_complement(coding).unwrap(), b"CTATCGGGCACCCTTTCAGCGGCCCATTACAATGGCCAT");
/// ```
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSymbol`] for the first byte outside of
/// uppercase `ACGT`.
///
/// [`reverse_complement`]: super::reverse_complement
pub fn transcribe(coding_strand: &[u8]) -> Result<Vec<u8>, SequenceError> {
    map_checked(coding_strand, &TO_RNA_ACGU_UC)
}

/// Back-transcribes uppercase `ACGU` RNA into DNA by replacing `U` with `T`.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSymbol`] for the first byte outside of
/// uppercase `ACGU`, including `T`.
pub fn back_transcribe(rna: &[u8]) -> Result<Vec<u8>, SequenceError> {
    map_checked(rna, &TO_DNA_FROM_RNA_UC)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let dna = b"ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";
        let rna = transcribe(dna).unwrap();
        assert!(!rna.contains(&b'T'));
        assert_eq!(back_transcribe(&rna).unwrap(), dna);
        assert_eq!(back_transcribe(b"AUGGCCAUUG").unwrap(), b"ATGGCCATTG");
    }

    #[test]
    fn rejects_wrong_alphabet() {
        assert_eq!(
            transcribe(b"ACGU"),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'U',
                position: 3,
            })
        );
        assert_eq!(
            back_transcribe(b"ACGT"),
            Err(SequenceError::InvalidSymbol {
                symbol:   b'T',
                position: 3,
            })
        );
        assert_eq!(transcribe(b""), Ok(vec![]));
    }
}
