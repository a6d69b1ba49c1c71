use super::*;

#[test]
fn from_dna_uppercases() {
    let s = Nucleotides::from_dna(b"acgTTg".as_slice()).unwrap();
    assert_eq!(s.as_bytes(), b"ACGTTG");
    assert_eq!(s.to_string(), "ACGTTG");
}

#[test]
fn from_dna_rejects() {
    assert_eq!(
        Nucleotides::try_from("ACGU"),
        Err(SequenceError::InvalidSymbol {
            symbol:   b'U',
            position: 3,
        })
    );
    assert!("GATTACA".parse::<Nucleotides>().is_ok());
    assert!(Nucleotides::try_from(b"AC GT").is_err());
}

#[test]
fn reverse_complement_values() {
    assert_eq!(reverse_complement(b"AAAACCCGGT").unwrap(), b"ACCGGGTTTT");
    assert_eq!(reverse_complement(b"").unwrap(), b"");
    assert_eq!(
        reverse_complement(b"ACNGT"),
        Err(SequenceError::InvalidSymbol {
            symbol:   b'N',
            position: 2,
        })
    );
    assert!(reverse_complement(b"acgt").is_err());
}

#[test]
fn reverse_complement_involution() {
    for s in [b"A".as_slice(), b"GATTACA", b"CCCTTTAAAGGG", b"ACGTACGTTTGCA"] {
        let rc = reverse_complement(s).unwrap();
        assert_eq!(reverse_complement(&rc).unwrap(), s);
    }

    let mut n = Nucleotides::try_from("ATGCATTT").unwrap();
    let rc = n.reverse_complement();
    n.make_reverse_complement();
    assert_eq!(n, rc);
    assert_eq!(n.as_bytes(), b"AAATGCAT");
    n.make_reverse_complement();
    assert_eq!(n.as_bytes(), b"ATGCATTT");
}

#[cfg(feature = "rand")]
#[test]
fn reverse_complement_involution_random() {
    use crate::{data::alphas::DNA_ACGT_UC, generate::rand_sequence};

    for seed in 0..20 {
        let s = rand_sequence(DNA_ACGT_UC, 97, seed);
        let rc = reverse_complement(&s).unwrap();
        assert_eq!(rc.len(), s.len());
        assert_eq!(reverse_complement(&rc).unwrap(), s);
    }
}

#[test]
fn kmers_windows() {
    let s = Nucleotides::try_from("ACGTA").unwrap();
    assert_eq!(s.kmers(3).collect::<Vec<_>>(), vec![b"ACG".as_slice(), b"CGT", b"GTA"]);
    assert_eq!(s.kmers(6).count(), 0);
    assert_eq!(s.kmers(0).count(), 0);
}

#[test]
fn gc() {
    let s = Nucleotides::try_from("GGCCAATT").unwrap();
    assert_eq!(s.gc_content(), Some(0.5));
    assert_eq!(Nucleotides::new().gc_content(), None);
}
