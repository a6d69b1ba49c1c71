//! ## Data types, validation, and sequence input.
//!
//! The search functions in this crate operate on plain byte slices of
//! uppercase `ACGT`. [`Nucleotides`] is an owned wrapper that guarantees this
//! alphabet at construction, upper-casing `acgt` and rejecting everything
//! else:
//! ```
//! # use dnamotif::data::nucleotides::Nucleotides;
//! let sequence = Nucleotides::from_dna("ggccACCAAG").unwrap();
//! assert_eq!(sequence.as_bytes(), b"GGCCACCAAG");
//! assert_eq!(sequence.reverse_complement().as_bytes(), b"CTTGGTGGCC");
//! assert!(Nucleotides::from_dna("GGNN").is_err());
//! ```
//!
//! Raw slices can be checked with [`CheckSequence`] or reverse complemented
//! directly:
//! ```
//! # use dnamotif::data::{CheckSequence, nucleotides::reverse_complement};
//! assert!(b"ACGT".is_acgt_uc());
//! assert_eq!(reverse_complement(b"AAGC").unwrap(), b"GCTT");
//! ```
//!
//! ## Errors
//!
//! All sequence operations report failures through [`SequenceError`], which
//! the caller can match on or display. File input wraps these together with
//! [`std::io::Error`] in [`InputError`]. Command line tools can use
//! [`unwrap_or_fail`] and [`unwrap_or_die`] to print the error and exit with
//! the code from [`GetCode`].
//!
//! [`Nucleotides`]: types::nucleotides::Nucleotides
//! [`SequenceError`]: err::SequenceError
//! [`InputError`]: input::InputError
//! [`GetCode`]: err::GetCode
//! [`unwrap_or_fail`]: err::OrFail::unwrap_or_fail
//! [`unwrap_or_die`]: err::OrFail::unwrap_or_die

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// Reading flat text and FASTA sequence files.
pub mod input;
/// A module for storing more fundamental types, like
/// [`Nucleotides`](self::types::nucleotides::Nucleotides).
pub mod types;

/// A private module for helper alphabets and maps that can be used within
/// public methods.
pub(crate) mod constants;

/// Used for type validation
pub(crate) mod validation;

pub use types::nucleotides;
pub use constants::mappings::StdGeneticCode;
pub use validation::{CheckSequence, Recode};

pub(crate) use constants::alphas;
