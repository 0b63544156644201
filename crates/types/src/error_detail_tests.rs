// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

fn detail(id: &str, title: &str, exception: &str) -> ErrorDetail {
    ErrorDetail::builder()
        .id(id)
        .title(title)
        .exception(exception)
        .build()
        .unwrap()
}

#[test]
fn builder_with_all_fields_succeeds() {
    let d = detail("photo-123", "Failed to import photo", "IoError: broken pipe");
    assert_eq!(d.id(), "photo-123");
    assert_eq!(d.title(), "Failed to import photo");
    assert_eq!(d.exception(), "IoError: broken pipe");
}

#[parameterized(
    missing_id = { ErrorDetail::builder().title("t").exception("e"), "id" },
    missing_title = { ErrorDetail::builder().id("i").exception("e"), "title" },
    missing_exception = { ErrorDetail::builder().id("i").title("t"), "exception" },
)]
fn builder_rejects_missing_field(builder: ErrorDetailBuilder, field: &str) {
    assert_eq!(builder.build(), Err(MissingField(field)));
}

#[test]
fn map_form_has_exactly_three_keys() {
    let map = detail("i", "t", "e").to_map();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("Id").map(String::as_str), Some("i"));
    assert_eq!(map.get("Title").map(String::as_str), Some("t"));
    assert_eq!(map.get("Exception").map(String::as_str), Some("e"));
}

#[test]
fn serialized_form_uses_fixed_keys() {
    let json = serde_json::to_value(detail("i", "t", "e")).unwrap();
    let obj = json.as_object().unwrap();
    let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["Exception", "Id", "Title"]);
}

#[test]
fn deserialize_ignores_unknown_keys() {
    let json = r#"{"Id":"i","Title":"t","Exception":"e","Severity":"fatal"}"#;
    let d: ErrorDetail = serde_json::from_str(json).unwrap();
    assert_eq!(d, detail("i", "t", "e"));
}

#[test]
fn from_error_renders_source_chain() {
    let inner = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let d = ErrorDetail::from_error("job-9", "export failed", &inner);
    assert_eq!(d.id(), "job-9");
    assert_eq!(d.title(), "export failed");
    assert!(d.exception().contains("pipe closed"));
}
