//! Record instances.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::error::{RecordError, Result};
use crate::schema::RecordType;
use crate::value::Value;

/// Immutable, fixed-length sequence of values bound to a [`RecordType`].
///
/// # Invariants
///
/// - `len()` always equals the number of fields of `record_type()`
/// - values are never mutated; [`Record::replaced`] returns a new record
///
/// Equality and ordering compare the positional values only, the way two
/// tuples compare.
#[derive(Clone)]
pub struct Record {
    ty: RecordType,
    values: Box<[Value]>,
}

impl Record {
    /// Binds already-checked values to their type.
    pub(crate) fn from_parts(ty: RecordType, values: Vec<Value>) -> Self {
        debug_assert_eq!(ty.len(), values.len());
        Self {
            ty,
            values: values.into_boxed_slice(),
        }
    }

    /// Returns the record type this record belongs to.
    pub fn record_type(&self) -> &RecordType {
        &self.ty
    }

    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    pub fn field_names(&self) -> &[String] {
        self.ty.field_names()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Returns the value of the named field.
    pub fn field(&self, name: &str) -> Result<&Value> {
        let index = self.ty.position(name)?;
        Ok(&self.values[index])
    }

    /// Returns a field-name to value mapping in field order.
    pub fn to_mapping(&self) -> IndexMap<String, Value> {
        self.ty
            .field_names()
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// Fields not named in `changes` are copied unchanged. Fails without
    /// producing anything if a name is unknown or appears twice.
    pub fn replaced<I, K>(&self, changes: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut values = self.values.to_vec();
        let mut touched = HashSet::new();
        for (name, value) in changes {
            let name = name.as_ref();
            let index = self.ty.position(name)?;
            if !touched.insert(index) {
                return Err(RecordError::DuplicateArgument {
                    type_name: self.ty.name().to_string(),
                    field: name.to_string(),
                });
            }
            values[index] = value;
        }
        Ok(Record::from_parts(self.ty.clone(), values))
    }

    /// Returns the positional values.
    ///
    /// Passing them back to [`RecordType::construct`] yields an equal record.
    pub fn to_values(&self) -> Vec<Value> {
        self.values.to_vec()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values.into_vec()
    }

    /// Unpacks the values into a fixed-size array.
    pub fn unpack<const N: usize>(&self) -> Result<[Value; N]> {
        <[Value; N]>::try_from(self.to_values()).map_err(|values| RecordError::Arity {
            expected: N,
            actual: values.len(),
        })
    }

    /// Renders `TypeName(field=value, ...)`.
    pub fn repr_named(&self) -> String {
        format!("{:#}", self)
    }

    /// Converts to a JSON object keyed by field name.
    pub fn to_json(&self) -> JsonValue {
        JsonValue::Object(
            self.ty
                .field_names()
                .iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Index<usize> for Record {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.values[index]
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl PartialEq<[Value]> for Record {
    fn eq(&self, other: &[Value]) -> bool {
        &*self.values == other
    }
}

impl PartialEq<Vec<Value>> for Record {
    fn eq(&self, other: &Vec<Value>) -> bool {
        &*self.values == other.as_slice()
    }
}

impl Eq for Record {}

impl PartialOrd for Record {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Record {
    fn cmp(&self, other: &Self) -> Ordering {
        self.values.cmp(&other.values)
    }
}

/// Positional form `Point(11, 22)`; the alternate form `{:#}` renders
/// `Point(x=11, y=22)`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let named = f.alternate();
        write!(f, "{}(", self.ty.name())?;
        let fields = self.ty.field_names().iter().zip(self.values.iter());
        for (i, (name, value)) in fields.enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if named {
                write!(f, "{}=", name)?;
            }
            fmt::Display::fmt(value, f)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.ty.name());
        for (name, value) in self.ty.field_names().iter().zip(self.values.iter()) {
            s.field(name, value);
        }
        s.finish()
    }
}

impl IntoIterator for Record {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
