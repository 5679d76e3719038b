use crate::constants::VALID_IDENTIFIER_LENGTHS;
use crate::error::AppError;
use serde::{Serialize, Serializer};
use std::fmt;

/// A normalized API number: digits only, 10, 12 or 14 of them.
///
/// The layout is `SS CCC UUUUU [DD [DD]]`: state code, county code, unique
/// well number, then optional sidetrack/event digits. The portal's wellbore
/// search takes the county code and the well number as separate arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WellIdentifier(String);

impl WellIdentifier {
    /// Strips every non-digit character from `input` and validates the length.
    pub fn normalize(input: &str) -> Result<Self, AppError> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

        if !VALID_IDENTIFIER_LENGTHS.contains(&digits.len()) {
            return Err(AppError::InvalidIdentifier {
                input: input.to_string(),
                digits: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    /// Returns the normalized digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The three county digits that follow the state code.
    pub fn county_prefix(&self) -> &str {
        &self.0[2..5]
    }

    /// The well sequence digits after the county code.
    ///
    /// Up to six digits are taken; a 10-digit identifier only has five.
    pub fn sequence_suffix(&self) -> &str {
        let end = self.0.len().min(11);
        &self.0[5..end]
    }
}

impl fmt::Display for WellIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for WellIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization_strips_separators() {
        let id = WellIdentifier::normalize("42-501-20130").unwrap();
        assert_eq!(id.as_str(), "4250120130");

        let id = WellIdentifier::normalize(" 42 501 20130 03 00 ").unwrap();
        assert_eq!(id.as_str(), "42501201300300");
    }

    #[test]
    fn test_invalid_lengths() {
        for input in ["", "42", "425012013", "42501201300", "4250120130030", "425012013003001"] {
            match WellIdentifier::normalize(input) {
                Err(AppError::InvalidIdentifier { digits, .. }) => {
                    assert_eq!(digits, input.chars().filter(char::is_ascii_digit).count())
                }
                other => panic!("expected InvalidIdentifier for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_letters_do_not_count_as_digits() {
        assert!(WellIdentifier::normalize("API 42-501-2013X").is_err());
    }

    #[test]
    fn test_prefix_and_suffix() {
        let id = WellIdentifier::normalize("42-501-20130-03-00").unwrap();
        assert_eq!(id.county_prefix(), "501");
        assert_eq!(id.sequence_suffix(), "201300");

        let short = WellIdentifier::normalize("4250120130").unwrap();
        assert_eq!(short.county_prefix(), "501");
        assert_eq!(short.sequence_suffix(), "20130");
    }
}
