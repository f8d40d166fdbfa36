use serde::{Deserialize, Serialize};
use serde_json::json;

use json_io::{
    get_contents, get_contents_value, put_contents, put_contents_value, EncodeOptions, Error,
};

fn bare_arrays() -> Option<EncodeOptions> {
    // force_object would rewrite arrays on disk and break structural equality
    Some(EncodeOptions {
        force_object: false,
        ..Default::default()
    })
}

#[test]
fn put_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let value = json!({
        "name": "demo",
        "port": 8080,
        "ratio": 0.5,
        "tags": ["a", "b"],
        "nested": {"flag": true, "nothing": null}
    });

    put_contents_value(&value, &path, bare_arrays()).unwrap();
    let read = get_contents_value(&path, None).unwrap();
    assert_eq!(read, value);
}

#[test]
fn typed_put_then_get() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Peer {
        host: String,
        port: u16,
        active: bool,
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("peer.json");
    let peer = Peer {
        host: "10.0.0.7".to_string(),
        port: 4000,
        active: true,
    };

    put_contents(&peer, &path, None).unwrap();
    let read: Peer = get_contents(&path, None).unwrap();
    assert_eq!(read, peer);
}

#[test]
fn put_overwrites_existing_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    put_contents_value(&json!({"generation": 1, "history": "long".repeat(64)}), &path, None)
        .unwrap();
    put_contents_value(&json!({"generation": 2}), &path, None).unwrap();

    let read = get_contents_value(&path, None).unwrap();
    assert_eq!(read, json!({"generation": 2}));
}

#[test]
fn default_bundle_writes_empty_object_for_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    put_contents_value(&json!([]), &path, None).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn missing_file_is_read_error_naming_path() {
    let err = get_contents_value("/nonexistent/path.json", None).unwrap_err();
    assert!(matches!(err, Error::FileRead { .. }));
    assert!(err.to_string().contains("/nonexistent/path.json"));
}

#[test]
fn unwritable_path_is_write_error_naming_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.json");

    let err = put_contents_value(&json!({"a": 1}), &path, None).unwrap_err();
    assert!(matches!(err, Error::FileWrite { .. }));
    assert!(err.to_string().contains("no-such-dir"));
}

#[test]
fn decode_failure_from_file_names_path_not_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{invalid json").unwrap();

    let err = get_contents_value(&path, None).unwrap_err();
    match &err {
        Error::Decode { input, .. } => {
            assert_eq!(input, &path.display().to_string());
        }
        other => panic!("expected Decode, got {other:?}"),
    }
    assert!(err.to_string().contains("broken.json"));
    assert!(!err.to_string().contains("{invalid"));
}

#[test]
fn typed_shape_mismatch_from_file_names_path() {
    #[derive(Deserialize, Debug)]
    struct Narrow {
        #[allow(dead_code)]
        port: u16,
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wide.json");
    std::fs::write(&path, r#"{"port": "nope"}"#).unwrap();

    let err = get_contents::<Narrow>(&path, None).unwrap_err();
    match err {
        Error::Decode { input, .. } => assert_eq!(input, path.display().to_string()),
        other => panic!("expected Decode, got {other:?}"),
    }
}
