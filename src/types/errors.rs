use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityCodeError {
    #[error("expected 11 characters, found {0}")]
    InvalidLength(usize),
    #[error("contains a non-digit character")]
    NonDigit,
    #[error("century digit [{0}] is not in 1..=8")]
    InvalidCentury(u32),
    #[error("birth date [{year:04}-{month:02}-{day:02}] does not exist")]
    InvalidBirthDate {
        year: i32,
        month: u32,
        day: u32
    },
    #[error("check digit [{actual}] does not match expected [{expected}]")]
    ChecksumMismatch {
        expected: u32,
        actual: u32
    }
}
