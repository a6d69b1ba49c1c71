//! ## K-mer neighborhoods, counting, and frequent-word searches.
//!
//! A k-mer is a length-`k` window of a nucleotide sequence. This module
//! provides:
//! * [`neighborhood`], every k-mer within a Hamming distance budget of a
//!   pattern, along with the closed-form [`neighborhood_size`] and the
//!   single-substitution iterator [`OneMismatchIter`]
//! * [`KmerCounter`], a multiset of k-mers with helpers such as
//!   [`insert_from_sequence`] and [`most_frequent`]
//! * [`frequent_words`] and [`frequent_words_with_mismatches`], which find the
//!   most common k-mers of a sequence, optionally tolerating mismatches and
//!   folding in reverse complements
//! * [`find_clumps`], which finds k-mers repeated densely within a window
//!
//! All k-mers are plain byte vectors of uppercase `ACGT`, and every list
//! returned by this module is sorted lexicographically.
//!
//! ## Examples
//!
//! Count the 3-mers in a sequence:
//! ```
//! # use dnamotif::kmer::KmerCounter;
//! let mut kmer_counter = KmerCounter::new(3).unwrap();
//! kmer_counter.insert_from_sequence(b"GGCCACCAAGGCCA");
//! assert_eq!(kmer_counter.get(b"GCC"), 2);
//! ```
//!
//! Find the most frequent 4-mers when up to one mismatches are allowed:
//! ```
//! # use dnamotif::kmer::frequent_words_with_mismatches;
//! let sequence = b"ACGTTGCATGTCGCATGATGCATGAGAGCT";
//! let words = frequent_words_with_mismatches(sequence, 4, 1, false).unwrap();
//! assert!(words.contains(&b"GATG".to_vec()));
//! ```
//!
//! [`insert_from_sequence`]: KmerCounter::insert_from_sequence
//! [`most_frequent`]: KmerCounter::most_frequent

mod clumps;
mod frequent;
mod kmer_counter;
mod neighbors;

pub use clumps::*;
pub use frequent::*;
pub use kmer_counter::*;
pub use neighbors::*;
