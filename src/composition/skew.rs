/// Computes the running GC skew of a genome: entry `i` is the number of `G`
/// minus the number of `C` in the first `i` bases. The returned vector has
/// length `genome.len() + 1` and always starts at 0. Bases are compared
/// case-insensitively and any other byte leaves the skew unchanged.
///
/// ## Example
/// ```
/// # use dnamotif::composition::skew;
/// assert_eq!(skew(b"CATGGGCATCGGCCATACGCC")[..8], [0, -1, -1, -1, 0, 1, 2, 1]);
/// ```
#[must_use]
pub fn skew(genome: &[u8]) -> Vec<i64> {
    let mut out = Vec::with_capacity(genome.len() + 1);
    let mut current = 0i64;
    out.push(current);

    for &b in genome {
        match b.to_ascii_uppercase() {
            b'G' => current += 1,
            b'C' => current -= 1,
            _ => {}
        }
        out.push(current);
    }

    out
}

/// Positions (indices into [`skew`]) where the skew reaches its minimum. In a
/// bacterial genome the minimum skew tends to mark the replication origin.
#[must_use]
pub fn minimum_skew_positions(genome: &[u8]) -> Vec<usize> {
    extreme_positions(&skew(genome), |values| values.min())
}

/// Positions (indices into [`skew`]) where the skew reaches its maximum.
#[must_use]
pub fn maximum_skew_positions(genome: &[u8]) -> Vec<usize> {
    extreme_positions(&skew(genome), |values| values.max())
}

fn extreme_positions<'a>(skew: &'a [i64], pick: impl FnOnce(std::slice::Iter<'a, i64>) -> Option<&'a i64>) -> Vec<usize> {
    let Some(&target) = pick(skew.iter()) else {
        return Vec::new();
    };

    skew.iter()
        .enumerate()
        .filter_map(|(i, &s)| (s == target).then_some(i))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn skew_values() {
        assert_eq!(skew(b""), vec![0]);
        assert_eq!(
            skew(b"CATGGGCATCGGCCATACGCC"),
            vec![0, -1, -1, -1, 0, 1, 2, 1, 1, 1, 0, 1, 2, 1, 0, 0, 0, 0, -1, 0, -1, -2]
        );
        assert_eq!(skew(b"gagc"), vec![0, 1, 1, 2, 1]);
    }

    #[test]
    fn minimum_skew() {
        assert_eq!(
            minimum_skew_positions(b"TAAAGACTGCCGAGAGGCCAACACGAGTGCTAGAACGAGGGGCGTAAACGCGGGTCCGAT"),
            vec![11, 24]
        );
        assert_eq!(minimum_skew_positions(b"GGG"), vec![0]);
        assert_eq!(minimum_skew_positions(b""), vec![0]);
    }

    #[test]
    fn maximum_skew() {
        assert_eq!(maximum_skew_positions(b"GAGCCACCGCGATA"), vec![3]);
        assert_eq!(maximum_skew_positions(b"CCC"), vec![0]);
    }
}
