use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("currency code must be three ASCII letters (ISO 4217), got '{0}'")]
pub struct CurrencyCodeError(pub String);

/// ISO 4217 alphabetic currency code, stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Indian rupee, the currency courses are listed in by default.
    pub fn inr() -> Self {
        Self("INR".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses a code, trimming whitespace and upper-casing it.
    pub fn parse(s: &str) -> Result<Self, CurrencyCodeError> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(CurrencyCodeError(s.to_string()))
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::inr()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_upper_case_code() {
        let code = CurrencyCode::parse("USD").unwrap();

        assert_eq!(code.as_str(), "USD");
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let code = CurrencyCode::parse("  inr ").unwrap();

        assert_eq!(code, CurrencyCode::inr());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            CurrencyCode::parse("RUPEE"),
            Err(CurrencyCodeError("RUPEE".to_string()))
        );
        assert_eq!(
            CurrencyCode::parse(""),
            Err(CurrencyCodeError(String::new()))
        );
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert!(CurrencyCode::parse("IN1").is_err());
        assert!(CurrencyCode::parse("₹").is_err());
    }

    #[test]
    fn default_is_inr() {
        assert_eq!(CurrencyCode::default().to_string(), "INR");
    }
}
