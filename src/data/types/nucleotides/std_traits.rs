use super::*;
use std::fmt;

impl AsRef<[u8]> for Nucleotides {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Nucleotides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only ASCII `ACGT` can be stored.
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl TryFrom<Vec<u8>> for Nucleotides {
    type Error = SequenceError;

    fn try_from(vec: Vec<u8>) -> Result<Self, Self::Error> {
        Nucleotides::from_dna(vec)
    }
}

impl TryFrom<&[u8]> for Nucleotides {
    type Error = SequenceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Nucleotides::from_dna(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8; N]> for Nucleotides {
    type Error = SequenceError;

    fn try_from(bytes: &[u8; N]) -> Result<Self, Self::Error> {
        Nucleotides::from_dna(bytes.as_slice())
    }
}

impl TryFrom<String> for Nucleotides {
    type Error = SequenceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Nucleotides::from_dna(s.into_bytes())
    }
}

impl TryFrom<&str> for Nucleotides {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Nucleotides::from_dna(s.as_bytes())
    }
}

impl std::str::FromStr for Nucleotides {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nucleotides::try_from(s)
    }
}

impl From<Nucleotides> for Vec<u8> {
    fn from(n: Nucleotides) -> Self {
        n.0
    }
}

impl IntoIterator for Nucleotides {
    type Item = u8;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Nucleotides {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
