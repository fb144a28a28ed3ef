use verity_core::{CheckError, Message, SignalInfo};

#[test]
fn check_error_json_roundtrip() {
    let err = CheckError::Failure(
        SignalInfo::new("values differ")
            .with_expected("1")
            .with_actual("1.5"),
    );
    let json = serde_json::to_string(&err).unwrap();
    let back: CheckError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}

#[test]
fn check_error_uses_tagged_representation() {
    let err = CheckError::skip("later");
    let value: serde_json::Value = serde_json::to_value(&err).unwrap();
    assert_eq!(value["signal"], "Skip");
    assert_eq!(value["detail"]["message"], "later");
}

#[test]
fn signal_info_bincode_roundtrip() {
    // Fully populated payload: bincode has no field framing, so skipped
    // optional fields do not round-trip through it.
    let info = SignalInfo::new("out of range")
        .with_expected("[1, 10]")
        .with_actual("12");
    let bytes = bincode::serialize(&info).unwrap();
    let back: SignalInfo = bincode::deserialize(&bytes).unwrap();
    assert_eq!(info, back);
}

#[test]
fn message_json_roundtrip() {
    let message = Message::template("expected {0}", ["42"]);
    let json = serde_json::to_string(&message).unwrap();
    let back: Message = serde_json::from_str(&json).unwrap();
    assert_eq!(message, back);
}
