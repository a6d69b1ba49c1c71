/// Search for fuzzy substrings
mod inexact;
/// Open reading frames on the forward strand
mod orf;
/// Search byte substrings
mod substring;

pub use inexact::*;
pub use orf::*;
pub use substring::*;
