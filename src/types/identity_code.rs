use chrono::NaiveDate;

use crate::types::errors::IdentityCodeError;

const CODE_LENGTH: usize = 11;
const PRIMARY_WEIGHTS: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECONDARY_WEIGHTS: [u32; 10] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Format and checksum rule for a national personal identity code.
pub trait IdentityCodeValidator: Send + Sync + 'static {
    fn validate(&self, identity_code: &str) -> Result<(), IdentityCodeError>;

    fn is_valid(&self, identity_code: &str) -> bool {
        self.validate(identity_code).is_ok()
    }
}

/// Validates Estonian personal codes (`GYYMMDDSSSC`).
///
/// `G` encodes century and gender, `YYMMDD` the birth date, `SSS` a serial number
/// and `C` the modulo-11 check digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct EstonianPersonalCodeValidator;

impl IdentityCodeValidator for EstonianPersonalCodeValidator {
    fn validate(&self, identity_code: &str) -> Result<(), IdentityCodeError> {
        if identity_code.len() != CODE_LENGTH {
            return Err(IdentityCodeError::InvalidLength(identity_code.len()))
        }

        let digits = identity_code.chars()
            .map(|character| character.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or(IdentityCodeError::NonDigit)?;

        let century = match digits[0] {
            1 | 2 => 1800,
            3 | 4 => 1900,
            5 | 6 => 2000,
            7 | 8 => 2100,
            other => return Err(IdentityCodeError::InvalidCentury(other))
        };

        let year = century + (digits[1] * 10 + digits[2]) as i32;
        let month = digits[3] * 10 + digits[4];
        let day = digits[5] * 10 + digits[6];

        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(IdentityCodeError::InvalidBirthDate { year, month, day })
        }

        let expected = check_digit(&digits[..10]);
        let actual = digits[10];

        if expected != actual {
            return Err(IdentityCodeError::ChecksumMismatch { expected, actual })
        }

        Ok(())
    }
}

fn check_digit(digits: &[u32]) -> u32 {
    let weighted_remainder = |weights: &[u32; 10]| {
        digits.iter().zip(weights).map(|(digit, weight)| digit * weight).sum::<u32>() % 11
    };

    match weighted_remainder(&PRIMARY_WEIGHTS) {
        10 => match weighted_remainder(&SECONDARY_WEIGHTS) {
            10 => 0,
            remainder => remainder
        },
        remainder => remainder
    }
}
