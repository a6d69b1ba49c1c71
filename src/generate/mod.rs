use crate::data::{alphas::DNA_ACGT_UC, nucleotides::Nucleotides};
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a reproducible random sequence drawn uniformly from `alpha`. An
/// empty `alpha` yields an empty sequence.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    if alpha.is_empty() {
        return Vec::new();
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates a reproducible random uppercase `ACGT` sequence.
#[must_use]
pub fn rand_dna(length: usize, seed: u64) -> Nucleotides {
    Nucleotides(rand_sequence(DNA_ACGT_UC, length, seed))
}
