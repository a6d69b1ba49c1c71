use super::alphas::*;

/// Utility function for building *is alpha*-like maps
const fn make_is_alpha_mapping<const N: usize>(alpha: &[u8; N]) -> [bool; 256] {
    let mut mapping = [false; 256];
    let mut i = 0;

    while i < N {
        mapping[alpha[i] as usize] = true;
        i += 1;
    }
    mapping
}

/// Utility function for making a mapping with a default value.
const fn make_mapping_with_default<const N: usize>(from_byte: &[u8; N], dest_byte: &[u8; N], all_others: u8) -> [u8; 256] {
    let mut mapping = [all_others; 256];
    let mut i = 0;

    while i < N {
        mapping[from_byte[i] as usize] = dest_byte[i];
        i += 1;
    }
    mapping
}

/// A boolean mapping of the uppercase canonical bases `ACGT`.
pub(crate) const IS_DNA_ACGT_UC: [bool; 256] = make_is_alpha_mapping(DNA_ACGT_UC);

/// A boolean mapping of `ACGT` in either case.
pub(crate) const IS_DNA_ACGT: [bool; 256] = make_is_alpha_mapping(DNA_ACGT);

/// Complements uppercase `ACGT`. All other bytes map to 0 so that invalid
/// input can be detected after the lookup.
#[rustfmt::skip]
pub(crate) const TO_COMPLEMENT_ACGT_UC: [u8; 256] = make_mapping_with_default(
    b"ACGT",
    b"TGCA",
    0,
);

/// Converts `ACGT` in either case to uppercase. All other bytes map to 0.
#[rustfmt::skip]
pub(crate) const TO_DNA_ACGT_UC: [u8; 256] = make_mapping_with_default(
    b"acgtACGT",
    b"ACGTACGT",
    0,
);

/// Transcribes uppercase `ACGT` to `ACGU`. All other bytes map to 0.
#[rustfmt::skip]
pub(crate) const TO_RNA_ACGU_UC: [u8; 256] = make_mapping_with_default(
    b"ACGT",
    b"ACGU",
    0,
);

/// Back-transcribes uppercase `ACGU` to `ACGT`. All other bytes map to 0.
#[rustfmt::skip]
pub(crate) const TO_DNA_FROM_RNA_UC: [u8; 256] = make_mapping_with_default(
    b"ACGU",
    b"ACGT",
    0,
);

/// Maps uppercase `ACGT` to its two-bit index in `TCAG` order, the order in
/// which the standard genetic code is tabulated. Other bytes map to 4.
#[rustfmt::skip]
const TO_TCAG_INDEX: [u8; 256] = make_mapping_with_default(
    b"TCAG",
    &[0, 1, 2, 3],
    4,
);

/// The standard genetic code (NCBI translation table 1) for canonical
/// uppercase DNA codons. Stop codons translate to `*`.
#[derive(Debug)]
pub struct StdGeneticCode;

impl StdGeneticCode {
    /// Amino acids for every codon, with bases ordered `TCAG` at each
    /// position.
    const TABLE: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

    /// Retrieves the amino acid for a codon, or `None` if it contains a byte
    /// outside of uppercase `ACGT`.
    #[inline]
    #[must_use]
    pub const fn get(codon: &[u8; 3]) -> Option<u8> {
        let first = TO_TCAG_INDEX[codon[0] as usize] as usize;
        let second = TO_TCAG_INDEX[codon[1] as usize] as usize;
        let third = TO_TCAG_INDEX[codon[2] as usize] as usize;

        if first > 3 || second > 3 || third > 3 {
            None
        } else {
            Some(Self::TABLE[first * 16 + second * 4 + third])
        }
    }

    /// Whether the codon is `TAA`, `TAG`, or `TGA`.
    #[inline]
    #[must_use]
    pub const fn is_stop(codon: &[u8; 3]) -> bool {
        matches!(Self::get(codon), Some(b'*'))
    }

    /// Whether the codon is one of the bacterial start codons `ATG`, `GTG`, or
    /// `TTG`.
    #[inline]
    #[must_use]
    pub const fn is_start(codon: &[u8; 3]) -> bool {
        matches!(codon, b"ATG" | b"GTG" | b"TTG")
    }
}
