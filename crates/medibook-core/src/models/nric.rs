//! NRIC (national registration identity card) numbers.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{ModelError, ValueObject};

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static NRIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[STFGM][0-9]{7}[A-Z]$").expect("NRIC pattern compiles"));

/// National ID of a patient or doctor, e.g. `S1234567A`.
///
/// Prefix letter (S, T, F, G or M), seven digits, then a check letter. Only the
/// shape of the check letter is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nric(String);

impl Nric {
    /// Parse and validate an NRIC.
    pub fn new(raw: &str) -> Result<Self, ModelError> {
        raw.parse()
    }

    /// The NRIC as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Nric {
    const TYPE_NAME: &'static str = "Nric";

    const MESSAGE_CONSTRAINTS: &'static str = "NRIC should start with S, T, F, G or M, \
        followed by 7 digits, and end with an uppercase letter";

    fn is_valid(raw: &str) -> bool {
        NRIC_PATTERN.is_match(raw)
    }
}

impl FromStr for Nric {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !<Self as ValueObject>::is_valid(s) {
            return Err(ModelError::Constraint(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Nric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
