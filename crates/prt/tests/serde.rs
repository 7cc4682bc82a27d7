#![cfg(feature = "serde")]

use prt::{CoefficientSet, SensorType};

#[test]
fn sensor_type_uses_upper_case_names() {
    let json = serde_json::to_string(&SensorType::Pt1000).unwrap();
    assert_eq!(json, "\"PT1000\"");

    let sensor: SensorType = serde_json::from_str("\"PT500\"").unwrap();
    assert_eq!(sensor, SensorType::Pt500);
}

#[test]
fn coefficient_set_round_trips() {
    let set = CoefficientSet::iec60751(100.0).unwrap();
    let json = serde_json::to_string(&set).unwrap();
    let back: CoefficientSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, set);
}

#[test]
fn deserializing_validates_coefficients() {
    let json = r#"{"a": 3.9083e-3, "b": 5.775e-7, "c": -4.183e-12, "r0": 100.0}"#;
    let err = serde_json::from_str::<CoefficientSet>(json).unwrap_err();
    assert!(err.to_string().contains("B must be negative"));
}
