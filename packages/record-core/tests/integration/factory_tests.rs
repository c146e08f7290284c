//! Factory scenarios.

use anyhow::Result;

use record_core::{build_record_type, BuildOptions, NamingRule, RecordError, RecordType, Value};

use super::helpers::{point, point_type};

#[test]
fn test_point_scenario() -> Result<()> {
    let p = point_type().construct([11, 22])?;

    assert_eq!(p.field("x")?, &Value::I64(11));
    assert_eq!(p.field("y")?, &Value::I64(22));
    assert_eq!(p[0].as_i64().unwrap() + p[1].as_i64().unwrap(), 33);

    let mapping = p.to_mapping();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["x"], Value::I64(11));
    assert_eq!(mapping["y"], Value::I64(22));

    assert_eq!(p.to_string(), "Point(11, 22)");
    assert_eq!(format!("{:#}", p), "Point(x=11, y=22)");
    Ok(())
}

#[test]
fn test_replace_scenario() -> Result<()> {
    let p = point(11, 22);
    let q = p.replaced([("x", Value::from(100))])?;

    assert_eq!(q.field("x")?, &Value::I64(100));
    assert_eq!(q.field("y")?, &Value::I64(22));
    assert_eq!(q.field_names(), p.field_names());
    assert_eq!(p.to_string(), "Point(11, 22)");
    Ok(())
}

#[test]
fn test_mapping_reconstructs() -> Result<()> {
    let p = point(11, 22);
    let q = point_type().construct_named(p.to_mapping())?;
    assert_eq!(p, q);
    Ok(())
}

#[test]
fn test_duplicate_with_and_without_rename() {
    let renamed = build_record_type("Bad", "x x", true).unwrap();
    assert_eq!(renamed.field_names(), ["x", "_1"]);

    let err = build_record_type("Bad", "x x", false).unwrap_err();
    assert_eq!(
        err,
        RecordError::DuplicateField {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_arity_scenario() {
    let err = point_type().construct([1, 2, 3]).unwrap_err();
    assert_eq!(
        err,
        RecordError::Arity {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_invalid_type_names() {
    for (name, rule) in [
        ("", NamingRule::Empty),
        ("Has Space", NamingRule::InvalidCharacter),
        ("impl", NamingRule::ReservedWord),
        ("3D", NamingRule::LeadingDigit),
    ] {
        let err = build_record_type(name, "a", false).unwrap_err();
        assert_eq!(
            err,
            RecordError::Naming {
                name: name.to_string(),
                rule
            }
        );
    }
}

#[test]
fn test_list_field_spec() -> Result<()> {
    let ty = build_record_type("Submit", vec!["service_type", "source_addr", "esm_class"], false)?;
    assert_eq!(ty.signature(), "Submit(service_type, source_addr, esm_class)");

    let ty = build_record_type("Pair", ["left", "right"], false)?;
    assert_eq!(ty.len(), 2);
    Ok(())
}

#[test]
fn test_build_with_options() -> Result<()> {
    let options = BuildOptions::from_json(r#"{"rename": true}"#)?;
    let ty = RecordType::build("Row", "id, class, id", &options)?;
    assert_eq!(ty.field_names(), ["id", "class", "_2"]);
    Ok(())
}

#[test]
fn test_records_of_equal_types_compare_by_value() {
    let a = point_type().construct([1, 2]).unwrap();
    let b = point_type().construct([1, 2]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, point(2, 1));
}

/// Behavior is added by wrapping a record rather than extending the type.
struct Vector(record_core::Record);

impl Vector {
    fn new(x: f64, y: f64) -> Self {
        let ty = build_record_type("Vector", "x y", false).unwrap();
        Vector(ty.construct([x, y]).unwrap())
    }

    fn hypot(&self) -> f64 {
        let x = self.0.field("x").unwrap().as_f64().unwrap();
        let y = self.0.field("y").unwrap().as_f64().unwrap();
        (x * x + y * y).sqrt()
    }
}

#[test]
fn test_wrapping_adds_behavior() {
    let v = Vector::new(3.0, 4.0);
    assert_eq!(v.hypot(), 5.0);
    assert_eq!(v.0.to_string(), "Vector(3.0, 4.0)");
}

#[test]
fn test_types_are_shareable_across_threads() {
    let ty = point_type();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let ty = ty.clone();
            std::thread::spawn(move || ty.construct([i, i * 2]).unwrap())
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let record = handle.join().unwrap();
        assert_eq!(record.field("y").unwrap().as_i64(), Some(i as i64 * 2));
    }
}
