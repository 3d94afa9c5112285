//! This library converts the keys of nested JSON values between naming conventions:
//! `snake_case`, `camelCase` and `PascalCase`. Values, structure and key order are
//! preserved; only mapping keys change.
//! - [`to_snake_case`], [`to_camel_case`], [`to_pascal_case`]: single-string converters.
//! - [`keys_to_snake_case`], [`keys_to_camel_case`], [`keys_to_pascal_case`]: rename the
//!   keys of one mapping level, non-recursively.
//! - [`parse_keys`]: walk an arbitrarily nested [`serde_json::Value`] and rename every
//!   mapping key at every depth.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod case;
mod parse;

pub use case::{
    keys_to_camel_case, keys_to_pascal_case, keys_to_snake_case, to_camel_case, to_pascal_case,
    to_snake_case,
};
pub use parse::parse_keys;

/// The key naming conventions this library can convert to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Lowercase words joined by underscores: `foo_bar`.
    #[default]
    Snake,
    /// First word lowercase, subsequent words capitalized, no separator: `fooBar`.
    Camel,
    /// All words capitalized, no separator: `FooBar`.
    Pascal,
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "snake" => Ok(Self::Snake),
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            other => Err(Error::InvalidConvention(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snake => write!(f, "snake"),
            Self::Camel => write!(f, "camel"),
            Self::Pascal => write!(f, "pascal"),
        }
    }
}

/// Errors returned when driving the key conversion with invalid arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The convention token is not one of `snake`, `camel` or `pascal`.
    #[error("invalid convention '{0}', use snake, camel or pascal")]
    InvalidConvention(String),
    /// The top-level value is neither an object nor an array.
    #[error("invalid input type, use an object or an array")]
    InvalidInputType,
}
