use super::*;

#[test]
fn missing_fields_use_defaults() {
    let s = ContextSettings::from_json_str("{}").unwrap();
    assert_eq!(s, ContextSettings::default());
    assert_eq!(s.initial_capacity, 64);
}

#[test]
fn capacity_is_read_from_json() {
    let s = ContextSettings::from_json_str(r#"{ "initial_capacity": 512 }"#).unwrap();
    assert_eq!(s.initial_capacity, 512);
}

#[test]
fn malformed_json_is_a_settings_error() {
    let err = ContextSettings::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, LayoutError::Settings(_)));
}
