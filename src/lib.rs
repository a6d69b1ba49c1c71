#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports,
    clippy::enum_glob_use
)]

/// Nucleotide composition: GC content and skew.
pub mod composition;
/// Data types, validation, and sequence input.
pub mod data;
/// Distance functions for sequence data.
pub mod distance;
/// K-mer neighborhoods, counting, and frequent-word searches.
pub mod kmer;
/// Motifs shared by a collection of sequences.
pub mod motif;
/// Exact and mismatch-tolerant pattern search.
pub mod search;

/// Generate random sequences.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::err::{OrFail, SequenceError};
    pub use crate::data::input::{parse_sequence_text, read_sequence_file};
    pub use crate::data::nucleotides::{Nucleotides, reverse_complement, transcribe, translate_sequence};
    pub use crate::data::{CheckSequence, Recode};
    pub use crate::distance::{dna::NucleotidesDistance, hamming};
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_dna;
    pub use crate::kmer::{KmerCounter, frequent_words_with_mismatches, neighborhood};
    pub use crate::motif::enumerate_motifs;
    pub use crate::search::{ByteSubstring, OpenReadingFrame, approximate_match_positions, find_orfs};
}
