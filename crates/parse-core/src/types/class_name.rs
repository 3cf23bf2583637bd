//! Class (collection) name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated Parse class name.
///
/// Class names are case-sensitive, start with a letter and contain only
/// `a-zA-Z0-9_`. System classes such as `_User` and `_Role` are the one
/// exception and start with an underscore.
///
/// # Example
///
/// ```
/// use parse_core::ClassName;
///
/// let class = ClassName::new("GameScore").unwrap();
/// assert_eq!(class.as_str(), "GameScore");
/// assert!(!class.is_system());
///
/// assert!(ClassName::new("_User").unwrap().is_system());
/// assert!(ClassName::new("9lives").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassName(String);

impl ClassName {
    /// Create a new class name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains characters the
    /// service rejects.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the class name as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for service-managed classes (`_User`, `_Role`, ...).
    pub fn is_system(&self) -> bool {
        self.0.starts_with('_')
    }

    fn validate(s: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ClassName {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("cannot be empty"));
        };

        if first == '_' {
            // System class: the underscore must be followed by a letter.
            match chars.next() {
                Some(c) if c.is_ascii_alphabetic() => {}
                _ => return Err(invalid("system class names must be '_' followed by a letter")),
            }
        } else if !first.is_ascii_alphabetic() {
            return Err(invalid("must start with a letter"));
        }

        if let Some(c) = s.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
            return Err(invalid(&format!("contains invalid character '{}'", c)));
        }

        Ok(())
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClassName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClassName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ClassName {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> Self {
        name.0
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
