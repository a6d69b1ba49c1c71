/// Calculates GC content using scalar operations. Returns count of G and C
/// nucleotides in the sequence, in either case.
#[must_use]
pub fn gc_count(s: &[u8]) -> usize {
    s.iter()
        .map(|&b| b.to_ascii_uppercase())
        .filter(|&b| b == b'G' || b == b'C')
        .count()
}

/// The fraction of bases in the sequence that are `G` or `C`. Returns `None`
/// for an empty sequence.
///
/// ## Example
/// ```
/// # use dnamotif::composition::gc_content;
/// assert_eq!(gc_content(b"ATGC"), Some(0.5));
/// assert_eq!(gc_content(b""), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn gc_content(s: &[u8]) -> Option<f64> {
    if s.is_empty() {
        None
    } else {
        Some(gc_count(s) as f64 / s.len() as f64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_count(b"ggCCatN"), 4);
        assert_eq!(gc_content(b"AAAA"), Some(0.0));
        assert_eq!(gc_content(b"GCGC"), Some(1.0));
        assert_eq!(gc_content(b"ATGCATGC"), Some(0.5));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn test_gc_content_bounds() {
        for length in [16, 1200] {
            let s = crate::generate::rand_sequence(b"ATCG", length, 42);
            let fraction = gc_content(&s).unwrap();
            assert!((0.0..=1.0).contains(&fraction), "when testing for length {length}");
        }
    }
}
