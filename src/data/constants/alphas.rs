/// Canonical uppercase nucleotide bases in lexicographic order.
pub(crate) const DNA_ACGT_UC: &[u8; 4] = b"ACGT";
/// Canonical nucleotide bases in upper and lower case.
pub(crate) const DNA_ACGT: &[u8; 8] = b"acgtACGT";
