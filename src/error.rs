//! Constructs for reporting errors within this library

use std::io;
use thiserror::Error;

use crate::ParamType;

/// Crate-specific result type for ease-of-use
pub type Result<T> = std::result::Result<T, Error>;

/// Represents failures which stop parsing or querying altogether
#[derive(Error, Debug)]
pub enum Error {
    /// Flag given on the command line was never declared
    #[error("Flag '-{0}' provided could not be found")]
    UnknownFlag(String),
    /// Non-boolean flag was given without a value
    #[error("Flag '-{0}' needs a value but none was given")]
    MissingValue(String),
    /// Token looked like a flag but couldn't be read as one
    #[error("Bad flag syntax '{0}'")]
    BadFlagSyntax(String),
    /// Boolean flag was given a value which isn't a boolean
    #[error("Invalid boolean value '{value}' for flag '-{name}'")]
    InvalidBool { name: String, value: String },
    /// No parameter is registered under the queried name
    #[error("No parameter found with '{0}' name")]
    NotFound(String),
    /// Typed accessor was used on a parameter of another type
    #[error("Parameter '{name}' is {actual}, not {expected}")]
    KindMismatch {
        name: String,
        expected: ParamType,
        actual: ParamType,
    },
    /// Current executable name is invalid
    #[error("Current executable name is invalid")]
    InvalidCurExe,
    /// Input/output error
    #[error("Input/output error, {0}")]
    Io(#[from] io::Error),
}

/// A single parameter which failed validation
///
/// Violations never stop the validation pass, every parameter is checked and
/// all of them are handed back together inside [Outcome::Invalid](crate::Outcome::Invalid).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Required parameter was absent or empty
    #[error("Parameter '-{name}' is required")]
    MissingRequired { name: String },
    /// Integer parameter couldn't be parsed as a base-10 integer
    #[error("Parameter '-{name}' should be an integer, got '{value}'")]
    InvalidInteger { name: String, value: String },
    /// Option parameter was given a value outside of its option set
    #[error("Parameter '-{name}' can't be '{value}', it only takes specific values")]
    InvalidOption { name: String, value: String },
}

impl Violation {
    /// Name of the offending parameter
    pub fn name(&self) -> &str {
        match self {
            Violation::MissingRequired { name }
            | Violation::InvalidInteger { name, .. }
            | Violation::InvalidOption { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_names() {
        let missing = Violation::MissingRequired { name: "m".into() };
        let int = Violation::InvalidInteger {
            name: "P".into(),
            value: "abc".into(),
        };
        assert_eq!(missing.name(), "m");
        assert_eq!(int.name(), "P");
        assert_eq!(
            int.to_string(),
            "Parameter '-P' should be an integer, got 'abc'"
        );
    }

    #[test]
    fn kind_mismatch_display() {
        let err = Error::KindMismatch {
            name: "v".into(),
            expected: ParamType::Int,
            actual: ParamType::Bool,
        };
        assert_eq!(err.to_string(), "Parameter 'v' is bool, not int");
    }
}
