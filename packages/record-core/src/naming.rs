//! Field-name parsing, validation and renaming.
//!
//! Names follow identifier rules: alphanumerics and underscores only, no
//! leading digit, no reserved word. Field names additionally may not start
//! with an underscore or repeat, unless renaming is requested, in which case
//! each offending name is replaced by `_<position>`.

use std::collections::HashSet;

use crate::error::{NamingRule, RecordError, Result};

/// Words that can never be used as a type or field name.
const RESERVED_WORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Caller-supplied field names prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// Names separated by whitespace and/or commas, e.g. `"x, y z"`.
    Text(String),
    /// Explicit ordered names.
    Names(Vec<String>),
}

impl FieldSpec {
    /// Splits the spec into raw, unvalidated names.
    pub fn into_names(self) -> Vec<String> {
        match self {
            FieldSpec::Text(text) => text
                .replace(',', " ")
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            FieldSpec::Names(names) => names,
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(text: &str) -> Self {
        FieldSpec::Text(text.to_string())
    }
}

impl From<String> for FieldSpec {
    fn from(text: String) -> Self {
        FieldSpec::Text(text)
    }
}

impl<T: ToString> From<Vec<T>> for FieldSpec {
    fn from(names: Vec<T>) -> Self {
        FieldSpec::Names(names.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for FieldSpec {
    fn from(names: &[T]) -> Self {
        FieldSpec::Names(names.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for FieldSpec {
    fn from(names: [T; N]) -> Self {
        FieldSpec::Names(names.iter().map(ToString::to_string).collect())
    }
}

/// Returns `true` if `name` is a reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns the first identifier rule `name` breaks, if any.
pub fn identifier_violation(name: &str) -> Option<NamingRule> {
    let first = name.chars().next()?;
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Some(NamingRule::InvalidCharacter);
    }
    if is_reserved_word(name) {
        return Some(NamingRule::ReservedWord);
    }
    if first.is_ascii_digit() {
        return Some(NamingRule::LeadingDigit);
    }
    None
}

/// Checks a type or field name against the identifier rules.
pub fn check_identifier(name: &str) -> Result<()> {
    let rule = if name.is_empty() {
        Some(NamingRule::Empty)
    } else {
        identifier_violation(name)
    };
    match rule {
        Some(rule) => Err(RecordError::Naming {
            name: name.to_string(),
            rule,
        }),
        None => Ok(()),
    }
}

/// Replaces every invalid, underscore-prefixed or repeated name with
/// `_<index>`.
///
/// Repeats are detected against the names as the caller typed them, so the
/// first occurrence keeps its name and only later ones are renamed.
pub fn rename_invalid(names: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let needs_rename = name.is_empty()
                || identifier_violation(&name).is_some()
                || name.starts_with('_')
                || seen.contains(&name);
            let result = if needs_rename {
                let renamed = format!("_{index}");
                if renamed != name {
                    tracing::debug!(
                        "Renamed field {:?} at position {} to {}",
                        name,
                        index,
                        renamed
                    );
                }
                renamed
            } else {
                name.clone()
            };
            seen.insert(name);
            result
        })
        .collect()
}

/// Produces the final ordered field names for a record type.
///
/// The type name is validated alongside the fields. With `rename` disabled,
/// underscore-prefixed and duplicate field names are rejected.
pub fn normalize(type_name: &str, spec: FieldSpec, rename: bool) -> Result<Vec<String>> {
    let mut names = spec.into_names();
    if rename {
        names = rename_invalid(names);
    }

    check_identifier(type_name)?;
    for name in &names {
        check_identifier(name)?;
    }

    let mut seen = HashSet::with_capacity(names.len());
    for name in &names {
        if name.starts_with('_') && !rename {
            return Err(RecordError::LeadingUnderscore { name: name.clone() });
        }
        if !seen.insert(name.as_str()) {
            return Err(RecordError::DuplicateField { name: name.clone() });
        }
    }

    Ok(names)
}
