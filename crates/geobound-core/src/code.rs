// crates/geobound-core/src/code.rs
use crate::error::CodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized ISO 3166-1 country code.
///
/// Accepts 2-letter (alpha-2) or 3-letter (alpha-3) input in any case,
/// trims surrounding whitespace and stores the uppercase form.
///
/// ```rust
/// use geobound_core::CountryCode;
///
/// let code: CountryCode = " can ".parse().unwrap();
/// assert_eq!(code.as_str(), "CAN");
/// assert!(code.is_alpha3());
/// assert!("C4N".parse::<CountryCode>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let code = input.trim();
        if code.is_empty() {
            return Err(CodeError::Empty);
        }
        if !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CodeError::NonAlphabetic(code.to_owned()));
        }
        if !(2..=3).contains(&code.len()) {
            return Err(CodeError::Length(code.to_owned()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_alpha2(&self) -> bool {
        self.0.len() == 2
    }

    pub fn is_alpha3(&self) -> bool {
        self.0.len() == 3
    }
}

impl FromStr for CountryCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(CountryCode::parse("\tus\n").unwrap().as_str(), "US");
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(CountryCode::parse(""), Err(CodeError::Empty));
        assert_eq!(
            CountryCode::parse("USAX"),
            Err(CodeError::Length("USAX".into()))
        );
        assert_eq!(CountryCode::parse("A"), Err(CodeError::Length("A".into())));
        assert_eq!(
            CountryCode::parse("U5"),
            Err(CodeError::NonAlphabetic("U5".into()))
        );
    }

    #[test]
    fn serde_uses_plain_string() {
        let code = CountryCode::parse("deu").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"DEU\"");
        let back: CountryCode = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(back.as_str(), "DE");
        assert!(serde_json::from_str::<CountryCode>("\"1\"").is_err());
    }
}
