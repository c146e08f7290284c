//! Round trips through values, serde and the self-describing form.

use record_core::{build_record_type, SelfDescribing, Value};

use super::helpers::{mixed_values, point};

#[test]
fn test_values_round_trip() {
    let p = point(5, -5);
    let rebuilt = p.record_type().construct(p.to_values()).unwrap();
    assert_eq!(rebuilt, p);
}

#[test]
fn test_mixed_values_json_round_trip() {
    let values = mixed_values();
    let names: Vec<String> = (0..values.len()).map(|i| format!("f{i}")).collect();
    let ty = build_record_type("Mixed", names, false).unwrap();
    let record = ty.construct(values).unwrap();

    let json = record.to_json_values().unwrap();
    let decoded = ty.from_json_values(&json).unwrap();
    assert_eq!(decoded, record);
    assert_eq!(decoded.to_string(), record.to_string());
}

#[test]
fn test_self_describing_value() {
    let value = Value::from(point(1, 2));
    let json = serde_json::to_string(&value).unwrap();
    let decoded: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, value);
    assert_eq!(decoded.as_record().unwrap().repr_named(), "Point(x=1, y=2)");
}

#[test]
fn test_self_describing_from_plain_json() {
    let json = serde_json::json!({
        "type": "Point",
        "fields": ["x", "y"],
        "values": [{"I64": 3}, {"I64": 4}],
    });
    let value = Value::try_from(json).unwrap();
    assert_eq!(value, Value::from(point(3, 4)));

    let SelfDescribing(record) = serde_json::from_str(
        r#"{"type": "Point", "fields": ["x", "y"], "values": [{"I64": 3}, {"I64": 4}]}"#,
    )
    .unwrap();
    assert_eq!(record, point(3, 4));
}

#[test]
fn test_display_nested() {
    let outer = build_record_type("Line", "start end", false).unwrap();
    let line = outer
        .construct([Value::from(point(0, 0)), Value::from(point(1, 1))])
        .unwrap();
    assert_eq!(line.to_string(), "Line(Point(0, 0), Point(1, 1))");
    assert_eq!(
        line.repr_named(),
        "Line(start=Point(x=0, y=0), end=Point(x=1, y=1))"
    );
    assert_eq!(
        line.to_json(),
        serde_json::json!({"start": {"x": 0, "y": 0}, "end": {"x": 1, "y": 1}})
    );
}
