use std::str::FromStr;

use derive_more::{AsRef, Display};

/// A status code exactly as it appears in a log line: three ASCII digits.
/// Kept as text so ordering and prefix checks work on the literal code.
#[derive(Debug, Display, AsRef, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(String);

impl StatusCode {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn class(&self) -> StatusClass {
        // Construction guarantees a leading ASCII digit.
        StatusClass(self.0.as_bytes()[0] as char)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl FromStr for StatusCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.into()))
        } else {
            Err(format!("not a 3-digit status code: {s:?}"))
        }
    }
}

/// Leading digit of a status code, shown as `2xx`, `5xx`, ...
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0}xx")]
pub struct StatusClass(char);
