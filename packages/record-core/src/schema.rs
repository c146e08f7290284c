//! Record type construction.
//!
//! A record type is a descriptor: its name, its ordered field names and a
//! lookup table from name to position, built once. Instances share the
//! descriptor through an `Arc` and store only their values.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::BuildOptions;
use crate::error::{RecordError, Result};
use crate::naming::{self, FieldSpec};
use crate::record::Record;
use crate::value::Value;

/// Builds a record type from a type name and a field spec.
///
/// With `rename` set, invalid or repeated field names are replaced by
/// `_<position>` instead of failing.
///
/// ```
/// use record_core::build_record_type;
///
/// let bad = build_record_type("Bad", "x x", true).unwrap();
/// assert_eq!(bad.field_names(), ["x", "_1"]);
/// ```
pub fn build_record_type(
    type_name: &str,
    field_spec: impl Into<FieldSpec>,
    rename: bool,
) -> Result<RecordType> {
    RecordType::build(type_name, field_spec, &BuildOptions { rename })
}

/// Handle to a record shape known only at run time.
///
/// Cloning is cheap; clones share one descriptor. Two handles compare equal
/// when their names and field lists match, whether or not they share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordType {
    inner: Arc<Descriptor>,
}

/// # Invariants
///
/// - `fields` holds unique, valid identifiers in declaration order
/// - `index[fields[i]] == i` for every field
#[derive(Debug, PartialEq, Eq)]
struct Descriptor {
    /// Type name
    name: String,
    /// Field names in positional order
    fields: Vec<String>,
    /// Field name to position
    index: HashMap<String, usize>,
}

impl RecordType {
    /// Validates the names and builds the type.
    pub fn build(
        type_name: &str,
        field_spec: impl Into<FieldSpec>,
        options: &BuildOptions,
    ) -> Result<Self> {
        let fields = naming::normalize(type_name, field_spec.into(), options.rename)?;
        let index = fields
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        tracing::debug!(
            "Built record type {} with {} fields (rename={})",
            type_name,
            fields.len(),
            options.rename
        );

        Ok(Self {
            inner: Arc::new(Descriptor {
                name: type_name.to_string(),
                fields,
                index,
            }),
        })
    }

    /// Returns `true` if both handles share one descriptor.
    pub fn ptr_eq(&self, other: &RecordType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the field names in positional order.
    pub fn field_names(&self) -> &[String] {
        &self.inner.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.inner.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.fields.is_empty()
    }

    /// Returns `true` if the type declares `name`.
    pub fn has_field(&self, name: &str) -> bool {
        self.inner.index.contains_key(name)
    }

    /// Returns the position of the named field.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.inner
            .index
            .get(name)
            .copied()
            .ok_or_else(|| RecordError::UnknownField {
                type_name: self.inner.name.clone(),
                field: name.to_string(),
            })
    }

    /// Returns the constructor signature, e.g. `Point(x, y)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.inner.name, self.inner.fields.join(", "))
    }

    /// Constructs a record from values in field order.
    ///
    /// The number of values must match the number of fields exactly.
    pub fn construct<I>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != self.inner.fields.len() {
            return Err(RecordError::Arity {
                expected: self.inner.fields.len(),
                actual: values.len(),
            });
        }
        Ok(Record::from_parts(self.clone(), values))
    }

    /// Constructs a record from `(field, value)` pairs covering every field.
    pub fn construct_named<I, K>(&self, named: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        self.construct_with(Vec::<Value>::new(), named)
    }

    /// Constructs a record from leading positional values followed by
    /// named values for the remaining fields.
    ///
    /// Unknown names fail with [`RecordError::UnknownField`], a field given
    /// twice with [`RecordError::DuplicateArgument`], and too many or too few
    /// values with [`RecordError::Arity`].
    pub fn construct_with<P, I, K>(&self, positional: P, named: I) -> Result<Record>
    where
        P: IntoIterator,
        P::Item: Into<Value>,
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let expected = self.inner.fields.len();
        let mut slots: Vec<Option<Value>> =
            positional.into_iter().map(|v| Some(v.into())).collect();
        if slots.len() > expected {
            return Err(RecordError::Arity {
                expected,
                actual: slots.len(),
            });
        }
        slots.resize(expected, None);

        for (name, value) in named {
            let name = name.as_ref();
            let index = self.position(name)?;
            if slots[index].replace(value).is_some() {
                return Err(RecordError::DuplicateArgument {
                    type_name: self.inner.name.clone(),
                    field: name.to_string(),
                });
            }
        }

        let supplied = slots.iter().filter(|slot| slot.is_some()).count();
        if supplied != expected {
            return Err(RecordError::Arity {
                expected,
                actual: supplied,
            });
        }

        let values = slots.into_iter().flatten().collect();
        Ok(Record::from_parts(self.clone(), values))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}
