//! Shared fixtures.

use record_core::{build_record_type, Record, RecordType, Value};

pub fn point_type() -> RecordType {
    build_record_type("Point", "x y", false).unwrap()
}

pub fn point(x: i64, y: i64) -> Record {
    point_type().construct([x, y]).unwrap()
}

/// Values of every variant, nested one level.
pub fn mixed_values() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(false),
        Value::from(-3),
        Value::from(u64::MAX),
        Value::from(2.5),
        Value::from("sm\u{e9}"),
        Value::from(vec![0u8, 10, 255]),
        Value::from(vec![Value::from(1), Value::from("a")]),
        Value::from(point(1, 2)),
    ]
}
