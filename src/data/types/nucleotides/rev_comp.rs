use crate::data::{constants::mappings::TO_COMPLEMENT_ACGT_UC, err::SequenceError};

/// Computes the reverse complement of an uppercase `ACGT` sequence into a new
/// vector (`A`↔`T`, `C`↔`G`, read back to front).
///
/// ## Example
/// ```
/// # use dnamotif::data::nucleotides::reverse_complement;
/// assert_eq!(reverse_complement(b"AAACCG").unwrap(), b"CGGTTT");
/// ```
///
/// # Errors
///
/// Returns [`SequenceError::InvalidSymbol`] if any byte is not `A`, `C`, `G`,
/// or `T`. The reported position refers to the input.
#[inline]
pub fn reverse_complement(bases: &[u8]) -> Result<Vec<u8>, SequenceError> {
    let mut out = Vec::with_capacity(bases.len());
    for (i, &b) in bases.iter().enumerate().rev() {
        match TO_COMPLEMENT_ACGT_UC[b as usize] {
            0 => return Err(SequenceError::InvalidSymbol { symbol: b, position: i }),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Reverse complement for bases that are already known to be uppercase
/// `ACGT`.
#[inline]
#[must_use]
pub(crate) fn reverse_complement_unchecked(bases: &[u8]) -> Vec<u8> {
    bases.iter().rev().map(|&b| TO_COMPLEMENT_ACGT_UC[b as usize]).collect()
}

/// Performs the reverse complement of uppercase `ACGT` bases in place.
#[inline]
pub(crate) fn make_reverse_complement(bases: &mut [u8]) {
    bases.reverse();
    for b in bases {
        *b = TO_COMPLEMENT_ACGT_UC[*b as usize];
    }
}
