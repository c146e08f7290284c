//! Record factory error types.

use std::fmt;

use thiserror::Error;

/// Identifier rule broken by a type or field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingRule {
    /// Contains something other than alphanumerics and underscores.
    InvalidCharacter,
    /// Collides with a reserved word.
    ReservedWord,
    /// Starts with a digit.
    LeadingDigit,
    /// Empty string.
    Empty,
}

impl fmt::Display for NamingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingRule::InvalidCharacter => {
                write!(f, "can only contain alphanumeric characters and underscores")
            }
            NamingRule::ReservedWord => write!(f, "cannot be a reserved word"),
            NamingRule::LeadingDigit => write!(f, "cannot start with a number"),
            NamingRule::Empty => write!(f, "cannot be empty"),
        }
    }
}

/// Errors raised while building record types or constructing records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Type or field name violates identifier rules
    #[error("type names and field names {rule}: {name:?}")]
    Naming { name: String, rule: NamingRule },

    /// Duplicate field name with renaming disabled
    #[error("encountered duplicate field name: {name:?}")]
    DuplicateField { name: String },

    /// Field name starts with an underscore with renaming disabled
    #[error("field names cannot start with an underscore: {name:?}")]
    LeadingUnderscore { name: String },

    /// Wrong number of values for the record type
    #[error("expected {expected} arguments, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// Field name not declared by the record type
    #[error("record type '{type_name}' has no field {field:?}")]
    UnknownField { type_name: String, field: String },

    /// Field supplied more than once during construction
    #[error("record type '{type_name}' got multiple values for field {field:?}")]
    DuplicateArgument { type_name: String, field: String },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        RecordError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
