use std::collections::HashSet;
use std::time::SystemTime;
use crate::{
    Error,
    ObjectId,
};

#[test]
fn test_new_ids_are_unique() {
    let ids: HashSet<ObjectId> = (0..1000).map(|_| ObjectId::new()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_timestamp() {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs() as u32;
    let id = ObjectId::new();
    assert!(id.timestamp() <= now + 1);
    assert!(id.timestamp() + 5 >= now);
}

#[test]
fn test_hex_roundtrip() {
    let id = ObjectId::new();
    let hex = id.to_string();
    assert_eq!(hex.len(), 24);
    assert_eq!(hex, hex.to_lowercase());

    let parsed = ObjectId::try_from(hex.as_str()).expect("invalid object id");
    assert_eq!(parsed, id);

    let parsed: ObjectId = hex.to_uppercase().parse().expect("invalid object id");
    assert_eq!(parsed, id);
}

#[test]
fn test_malformed() {
    // one digit short of a well-formed id.
    let inputs = [
        "5a3d5da59070081a82a3445",
        "5a3d5da59070081a82a344555",
        "5a3d5da59070081a82a3445z",
        "",
        "not-an-id",
    ];
    for input in inputs {
        assert_eq!(ObjectId::is_valid(input), false);
        match ObjectId::try_from(input) {
            Err(Error::Argument(msg)) => assert_eq!(msg, "malformatted id"),
            other => panic!("unexpected result {:?} for {}", other, input),
        }
    }
    assert_eq!(ObjectId::is_valid("5a3d5da59070081a82a3445b"), true);
}

#[test]
fn test_bytes() {
    let bytes = [0u8, 0, 0, 42, 1, 2, 3, 4, 5, 6, 7, 8];
    let id = ObjectId::from_bytes(bytes);
    assert_eq!(id.as_bytes(), &bytes);
    assert_eq!(id.timestamp(), 42);
    assert_eq!(id.to_hex(), "0000002a0102030405060708");
}

#[test]
fn test_serde() {
    let id = ObjectId::try_from("0000002a0102030405060708").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"0000002a0102030405060708\"");

    let decoded: ObjectId = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, id);

    let result = serde_json::from_str::<ObjectId>("\"0000002a01020304050607\"");
    assert!(result.is_err());
}
