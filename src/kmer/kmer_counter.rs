use super::neighbors::neighborhood_set;
use crate::data::err::SequenceError;
use std::collections::{HashMap, hash_map};

/// A [`KmerCounter`] stores counts of k-mers of a fixed length, or it can be
/// considered as a multiset. It is the occurrence tally behind the
/// frequent-word and clump searches.
///
/// ## Example
/// ```
/// # use dnamotif::kmer::KmerCounter;
/// let mut counter = KmerCounter::new(3).unwrap();
/// counter.insert_from_sequence(b"ACGTTTACGTT");
/// assert_eq!(counter.get(b"ACG"), 2);
/// assert_eq!(counter.most_frequent(), vec![b"ACG".to_vec(), b"CGT".to_vec(), b"GTT".to_vec()]);
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct KmerCounter {
    map:         HashMap<Vec<u8>, usize>,
    kmer_length: usize,
}

impl KmerCounter {
    /// Creates a new [`KmerCounter`] with the specified k-mer length.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidInput`] if `kmer_length` is 0.
    #[inline]
    pub fn new(kmer_length: usize) -> Result<Self, SequenceError> {
        if kmer_length == 0 {
            return Err(SequenceError::InvalidInput("the k-mer length must be positive"));
        }
        Ok(Self::with_length(kmer_length))
    }

    /// Creates a counter for a length that has already been checked.
    #[inline]
    pub(crate) fn with_length(kmer_length: usize) -> Self {
        Self {
            map: HashMap::default(),
            kmer_length,
        }
    }

    /// Gets the length of the k-mers being counted.
    #[inline]
    #[must_use]
    pub fn kmer_length(&self) -> usize {
        self.kmer_length
    }

    /// The number of distinct k-mers with a nonzero count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no k-mers have been counted.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// If the k-mer is present in this counter, then increment its count.
    /// Otherwise, add it to the counter with a count of 1. The k-mer is
    /// assumed to have the counter's length; consider [`insert_kmer_checked`]
    /// otherwise.
    ///
    /// [`insert_kmer_checked`]: KmerCounter::insert_kmer_checked
    #[inline]
    pub fn insert_kmer(&mut self, kmer: impl AsRef<[u8]>) {
        let kmer = kmer.as_ref();
        debug_assert_eq!(kmer.len(), self.kmer_length);

        if let Some(count) = self.map.get_mut(kmer) {
            *count += 1;
        } else {
            self.map.insert(kmer.to_vec(), 1);
        }
    }

    /// As [`insert_kmer`](KmerCounter::insert_kmer), but returns `false` and
    /// does nothing if the k-mer has the wrong length.
    #[inline]
    pub fn insert_kmer_checked(&mut self, kmer: impl AsRef<[u8]>) -> bool {
        if kmer.as_ref().len() != self.kmer_length {
            return false;
        }
        self.insert_kmer(kmer);
        true
    }

    /// Decrements the count of a k-mer, removing it once the count reaches
    /// zero. Absent k-mers are ignored.
    #[inline]
    pub fn remove_kmer(&mut self, kmer: impl AsRef<[u8]>) {
        let kmer = kmer.as_ref();
        if let Some(count) = self.map.get_mut(kmer) {
            *count -= 1;
            if *count == 0 {
                self.map.remove(kmer);
            }
        }
    }

    /// Counts every overlapping k-mer of `seq`. Sequences shorter than the
    /// k-mer length add nothing.
    #[inline]
    pub fn insert_from_sequence(&mut self, seq: impl AsRef<[u8]>) {
        for kmer in seq.as_ref().windows(self.kmer_length) {
            self.insert_kmer(kmer);
        }
    }

    /// Counts every k-mer within Hamming distance `d` of `kmer` (including
    /// `kmer` itself) once. After calling this for every window of a host
    /// sequence, the count of any k-mer equals the number of windows within
    /// distance `d` of it. The k-mer must be uppercase `ACGT`.
    #[inline]
    pub fn insert_kmer_with_variants(&mut self, kmer: impl AsRef<[u8]>, d: usize) {
        for variant in neighborhood_set(kmer.as_ref(), d) {
            *self.map.entry(variant).or_default() += 1;
        }
    }

    /// Get the count of a k-mer. If the k-mer is not present in the counter,
    /// then `0` is returned.
    #[inline]
    #[must_use]
    pub fn get(&self, kmer: impl AsRef<[u8]>) -> usize {
        self.map.get(kmer.as_ref()).copied().unwrap_or_default()
    }

    /// Iterate over the k-mers and counts in the counter, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> {
        self.map.iter().map(|(kmer, &count)| (kmer.as_slice(), count))
    }

    /// The largest count in the counter, if any.
    #[inline]
    #[must_use]
    pub fn max_count(&self) -> Option<usize> {
        self.map.values().copied().max()
    }

    /// All k-mers tied at the largest count, sorted lexicographically.
    #[must_use]
    pub fn most_frequent(&self) -> Vec<Vec<u8>> {
        most_frequent_by(self.iter())
    }

    /// Adds all the counts from `other` into `self`.
    #[must_use]
    pub fn merge(mut self, other: KmerCounter) -> Self {
        debug_assert_eq!(self.kmer_length, other.kmer_length);
        for (kmer, count) in other.map {
            *self.map.entry(kmer).or_default() += count;
        }
        self
    }
}

/// Collects the items tied at the maximum score, sorted lexicographically.
pub(crate) fn most_frequent_by<'a>(scores: impl Iterator<Item = (&'a [u8], usize)>) -> Vec<Vec<u8>> {
    let mut best = 0;
    let mut winners: Vec<&[u8]> = Vec::new();

    for (kmer, score) in scores {
        if score > best {
            best = score;
            winners.clear();
            winners.push(kmer);
        } else if score == best && score > 0 {
            winners.push(kmer);
        }
    }

    winners.sort_unstable();
    winners.into_iter().map(<[u8]>::to_vec).collect()
}

impl IntoIterator for KmerCounter {
    type Item = (Vec<u8>, usize);
    type IntoIter = hash_map::IntoIter<Vec<u8>, usize>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
