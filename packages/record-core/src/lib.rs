//! Immutable named records with runtime-defined field layouts.
//!
//! A [`RecordType`] is built once from a type name and an ordered list of
//! field names. Its instances ([`Record`]) are fixed-length value sequences
//! that can be indexed, iterated and compared like tuples, while every
//! element is also reachable by field name.
//!
//! ```
//! use record_core::{build_record_type, Value};
//!
//! let point = build_record_type("Point", "x y", false).unwrap();
//! let p = point.construct([Value::from(11), Value::from(22)]).unwrap();
//!
//! assert_eq!(p.field("x").unwrap(), &Value::I64(11));
//! assert_eq!(p[1], Value::I64(22));
//! assert_eq!(p.to_string(), "Point(11, 22)");
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod record;
pub mod schema;
pub mod serde_support;
pub mod value;

pub use config::BuildOptions;
pub use error::{NamingRule, RecordError, Result};
pub use naming::FieldSpec;
pub use record::Record;
pub use schema::{build_record_type, RecordType};
pub use serde_support::{RecordSeed, SelfDescribing};
pub use value::Value;
