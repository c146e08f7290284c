//! Serialization of records.
//!
//! A [`Record`] serializes as the plain sequence of its values. Reading it
//! back needs the record type, supplied through [`RecordSeed`]. The
//! [`SelfDescribing`] form also carries the type name and field names so it
//! can be decoded on its own; nested records inside a [`Value`] use it.

use std::fmt;

use serde::de::{self, DeserializeSeed, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::BuildOptions;
use crate::error::Result;
use crate::record::Record;
use crate::schema::RecordType;
use crate::value::Value;

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// Deserializes a value sequence into a record of a known type.
#[derive(Debug, Clone, Copy)]
pub struct RecordSeed<'a> {
    ty: &'a RecordType,
}

impl RecordType {
    /// Returns a seed decoding records of this type from their values.
    pub fn seed(&self) -> RecordSeed<'_> {
        RecordSeed { ty: self }
    }

    /// Decodes a record from a JSON array of its values.
    pub fn from_json_values(&self, json: &str) -> Result<Record> {
        let mut de = serde_json::Deserializer::from_str(json);
        let record = self.seed().deserialize(&mut de)?;
        de.end()?;
        Ok(record)
    }
}

impl Record {
    /// Encodes the record as a JSON array of its values.
    pub fn to_json_values(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'de> DeserializeSeed<'de> for RecordSeed<'_> {
    type Value = Record;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<Record, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de> Visitor<'de> for RecordSeed<'_> {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} values for {}", self.ty.len(), self.ty.name())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Record, A::Error> {
        let mut values = Vec::with_capacity(self.ty.len());
        while let Some(value) = seq.next_element::<Value>()? {
            values.push(value);
        }
        self.ty.construct(values).map_err(de::Error::custom)
    }
}

/// Record paired with its type description for standalone encoding.
///
/// Encoded as `{"type": "Point", "fields": ["x", "y"], "values": [..]}`.
/// Decoding rebuilds the type with renaming enabled, which leaves names
/// produced by a previous rename untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfDescribing(pub Record);

#[derive(Serialize)]
struct EncodedRef<'a> {
    #[serde(rename = "type")]
    type_name: &'a str,
    fields: &'a [String],
    values: &'a Record,
}

#[derive(Deserialize)]
struct Encoded {
    #[serde(rename = "type")]
    type_name: String,
    fields: Vec<String>,
    values: Vec<Value>,
}

impl Serialize for SelfDescribing {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self_describing::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for SelfDescribing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        self_describing::deserialize(deserializer).map(SelfDescribing)
    }
}

/// `#[serde(with = ..)]` helpers for floats. Finite values are plain numbers;
/// `NaN`, `inf` and `-inf` are written as strings, which JSON numbers cannot
/// express.
pub mod float_text {
    use super::*;

    pub fn serialize<S: Serializer>(
        n: &f64,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        if n.is_finite() {
            serializer.serialize_f64(*n)
        } else if n.is_nan() {
            serializer.serialize_str("NaN")
        } else if n.is_sign_positive() {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<f64, D::Error> {
        deserializer.deserialize_any(FloatVisitor)
    }

    struct FloatVisitor;

    impl<'de> Visitor<'de> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a number or one of \"NaN\", \"inf\", \"-inf\"")
        }

        fn visit_f64<E: de::Error>(self, n: f64) -> std::result::Result<f64, E> {
            Ok(n)
        }

        fn visit_i64<E: de::Error>(self, n: i64) -> std::result::Result<f64, E> {
            Ok(n as f64)
        }

        fn visit_u64<E: de::Error>(self, n: u64) -> std::result::Result<f64, E> {
            Ok(n as f64)
        }

        fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<f64, E> {
            match s {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                _ => Err(E::invalid_value(de::Unexpected::Str(s), &self)),
            }
        }
    }
}

/// `#[serde(with = ..)]` helpers for the self-describing record encoding.
pub mod self_describing {
    use super::*;

    pub fn serialize<S: Serializer>(
        record: &Record,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        EncodedRef {
            type_name: record.type_name(),
            fields: record.field_names(),
            values: record,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Record, D::Error> {
        let encoded = Encoded::deserialize(deserializer)?;
        let ty = RecordType::build(
            &encoded.type_name,
            encoded.fields.clone(),
            &BuildOptions { rename: true },
        )
        .map_err(de::Error::custom)?;
        if ty.field_names() != encoded.fields.as_slice() {
            return Err(de::Error::custom(format!(
                "invalid field names for record type {}",
                encoded.type_name
            )));
        }
        ty.construct(encoded.values).map_err(de::Error::custom)
    }
}
