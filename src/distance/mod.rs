/// Hamming distance methods for [`Nucleotides`](crate::data::nucleotides::Nucleotides).
pub mod dna;

/// General string-based distance functions.
mod general;

pub use general::*;
