//! Implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for the sequence types, producing only uppercase `ACGT`.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::data::{alphas::DNA_ACGT_UC, nucleotides::Nucleotides};
use arbitrary::{Arbitrary, Result, Unstructured};

impl<'a> Arbitrary<'a> for Nucleotides {
    #[inline]
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let len = u.arbitrary_len::<u8>()?;
        let mut bases = Vec::with_capacity(len);
        for _ in 0..len {
            bases.push(*u.choose(DNA_ACGT_UC)?);
        }
        Ok(Nucleotides(bases))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::validation::CheckSequence;

    #[test]
    fn only_canonical_bases() {
        let raw: Vec<u8> = (0..=255).cycle().take(2048).collect();
        let mut u = Unstructured::new(&raw);
        while let Ok(seq) = Nucleotides::arbitrary(&mut u) {
            assert!(seq.is_acgt_uc());
            if u.is_empty() {
                break;
            }
        }
    }
}
