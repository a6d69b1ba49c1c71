use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Errors raised by the sequence comparison and search functions. These are
/// always precondition violations and are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    /// Two sequences that must be compared position by position had different
    /// lengths.
    LengthMismatch { left: usize, right: usize },
    /// A byte outside of `ACGT` was found at the zero-based `position`.
    InvalidSymbol { symbol: u8, position: usize },
    /// The call itself was malformed, such as an empty pattern or an empty
    /// list of sequences.
    InvalidInput(&'static str),
}

impl Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SequenceError::LengthMismatch { left, right } => {
                write!(f, "Sequences must be of equal length, but found lengths {left} and {right}")
            }
            SequenceError::InvalidSymbol { symbol, position } => {
                if symbol.is_ascii_graphic() {
                    write!(f, "Invalid DNA symbol '{}' at position {position}", *symbol as char)
                } else {
                    write!(f, "Invalid DNA byte 0x{symbol:02X} at position {position}")
                }
            }
            SequenceError::InvalidInput(message) => write!(f, "Invalid input: {message}"),
        }
    }
}

impl std::error::Error for SequenceError {}

impl GetCode for SequenceError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SequenceError::LengthMismatch { left: 3, right: 4 }.to_string(),
            "Sequences must be of equal length, but found lengths 3 and 4"
        );
        assert_eq!(
            SequenceError::InvalidSymbol {
                symbol:   b'N',
                position: 7,
            }
            .to_string(),
            "Invalid DNA symbol 'N' at position 7"
        );
        assert_eq!(
            SequenceError::InvalidSymbol {
                symbol:   b'\n',
                position: 0,
            }
            .to_string(),
            "Invalid DNA byte 0x0A at position 0"
        );
        assert_eq!(SequenceError::InvalidInput("k must be positive").get_code(), 1);
    }
}
