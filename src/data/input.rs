//! Reading DNA sequences from flat text or FASTA files.

use crate::data::{
    err::{GetCode, SequenceError},
    nucleotides::Nucleotides,
};
use std::{fmt::Display, path::Path};

/// An error raised while loading sequences, either from the file system or
/// from the content itself.
#[derive(Debug)]
#[non_exhaustive]
pub enum InputError {
    /// The file could not be read. The message includes the path.
    Io(std::io::Error),
    /// The zero-based `record` contained something other than DNA.
    Sequence { record: usize, source: SequenceError },
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InputError::Io(err) => write!(f, "{err}"),
            InputError::Sequence { record, source } => write!(f, "Sequence record {record}: {source}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(err) => Some(err),
            InputError::Sequence { source, .. } => Some(source),
        }
    }
}

impl GetCode for InputError {
    fn get_code(&self) -> i32 {
        match self {
            InputError::Io(err) => err.get_code(),
            InputError::Sequence { source, .. } => source.get_code(),
        }
    }
}

/// Reads every sequence stored in `path`. See [`parse_sequence_text`] for the
/// accepted formats.
///
/// # Errors
///
/// * [`InputError::Io`] if the file cannot be read, with the path in the
///   message.
/// * [`InputError::Sequence`] if a record contains a byte outside of
///   `ACGTacgt`, or if a FASTA record has no sequence.
pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> Result<Vec<Nucleotides>, InputError> {
    let path = path.as_ref();
    let text = std::fs::read(path).map_err(|err| {
        InputError::Io(std::io::Error::new(
            err.kind(),
            format!("file read error for sequence file '{path}': {err}", path = path.display()),
        ))
    })?;

    let sequences = parse_sequence_text(&text)?;
    log::debug!("Read {n} sequences from '{path}'", n = sequences.len(), path = path.display());
    Ok(sequences)
}

/// Parses sequences from text in one of two formats:
///
/// * FASTA, when the first non-whitespace byte is `>`. Each record is
///   returned separately and header lines are skipped.
/// * Flat text otherwise, returned as a single sequence.
///
/// In both cases all whitespace is removed and lowercase bases are converted
/// to uppercase. Text holding only whitespace yields no sequences.
///
/// ## Example
/// ```
/// # use dnamotif::data::input::parse_sequence_text;
/// let records = parse_sequence_text(b">one\nACGT\nacgt\n>two\nGGCC\n").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].as_bytes(), b"ACGTACGT");
///
/// let flat = parse_sequence_text(b"ACG TTA\nCCA\n").unwrap();
/// assert_eq!(flat[0].as_bytes(), b"ACGTTACCA");
/// ```
///
/// # Errors
///
/// [`InputError::Sequence`] if a record contains a byte outside of `ACGTacgt`
/// (positions count only the bases), or if a FASTA record has no sequence.
pub fn parse_sequence_text(text: &[u8]) -> Result<Vec<Nucleotides>, InputError> {
    let is_fasta = text.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'>');

    let raw_records: Vec<Vec<u8>> = if is_fasta {
        let mut records = Vec::new();
        for line in text.split(|&b| b == b'\n') {
            if line.starts_with(b">") {
                records.push(Vec::new());
            } else if let Some(current) = records.last_mut() {
                current.extend(line.iter().filter(|b| !b.is_ascii_whitespace()));
            }
        }
        records
    } else {
        let flat: Vec<u8> = text.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect();
        if flat.is_empty() { Vec::new() } else { vec![flat] }
    };

    raw_records
        .into_iter()
        .enumerate()
        .map(|(record, bases)| {
            if bases.is_empty() {
                return Err(InputError::Sequence {
                    record,
                    source: SequenceError::InvalidInput("a FASTA record has no sequence"),
                });
            }
            Nucleotides::from_dna(bases).map_err(|source| InputError::Sequence { record, source })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fasta_records() {
        let records = parse_sequence_text(b"\n>seq1 first\nACGT\r\nTT\n>seq2\ngattaca\n").unwrap();
        let bytes: Vec<&[u8]> = records.iter().map(Nucleotides::as_bytes).collect();
        assert_eq!(bytes, vec![b"ACGTTT".as_slice(), b"GATTACA".as_slice()]);
    }

    #[test]
    fn flat_text() {
        let records = parse_sequence_text(b"ACGT\nTTGA\n\n").unwrap();
        assert_eq!(records, vec![Nucleotides::from_dna("ACGTTTGA").unwrap()]);
        assert!(parse_sequence_text(b" \n\t").unwrap().is_empty());
    }

    #[test]
    fn errors() {
        let err = parse_sequence_text(b">a\nACGT\n>b\nACNT\n").unwrap_err();
        assert_eq!(err.to_string(), "Sequence record 1: Invalid DNA symbol 'N' at position 2");
        assert_eq!(err.get_code(), 1);

        assert!(matches!(
            parse_sequence_text(b">a\n>b\nACGT\n"),
            Err(InputError::Sequence { record: 0, .. })
        ));

        let err = read_sequence_file("this/file/does/not/exist.fa").unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
        assert!(err.to_string().contains("this/file/does/not/exist.fa"));
    }
}
