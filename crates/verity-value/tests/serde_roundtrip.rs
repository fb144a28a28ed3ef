use std::collections::BTreeMap;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use verity_value::{Value, ValueKind};

#[test]
fn value_json_roundtrip() {
    let mut map = BTreeMap::new();
    map.insert("limit".to_string(), Value::Float(2.5));
    let value = Value::Seq(vec![
        Value::Null,
        Value::Bool(true),
        Value::Int(-7),
        Value::UInt(7),
        Value::from("text"),
        Value::Decimal(BigDecimal::from_str("10.25").unwrap()),
        Value::Map(map),
    ]);
    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, back);
}

#[test]
fn opaque_roundtrip_preserves_identity_token() {
    let value = Value::opaque("Widget", "<Widget id=7>");
    let json = serde_json::to_string(&value).unwrap();
    let back: Value = serde_json::from_str(&json).unwrap();
    // Raw equality is token identity, so a faithful roundtrip compares equal.
    assert_eq!(value, back);
}

#[test]
fn kind_json_roundtrip() {
    let json = serde_json::to_string(&ValueKind::Decimal).unwrap();
    let back: ValueKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ValueKind::Decimal);
}
