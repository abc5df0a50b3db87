//! Property tests for the merge engine and the differ

use mcaddon::archive::AddonArchive;
use mcaddon::diff::diff_archives;
use mcaddon::merge::deep_merge;
use mcaddon::pack::JsonFile;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn json_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100i64..100).prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn json_value() -> impl Strategy<Value = Value> {
    json_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

/// Archive with a subset of five fixed JSON paths
fn json_archive(name: &'static str) -> impl Strategy<Value = AddonArchive> {
    prop::collection::vec(prop::option::of(json_value()), 5).prop_map(move |values| {
        let mut archive = AddonArchive::new(name);
        for (i, value) in values.into_iter().enumerate() {
            if let Some(value) = value {
                archive.write_text(format!("P/file{i}.json"), &value.to_string());
            }
        }
        archive
    })
}

fn paths(files: &[JsonFile]) -> Vec<String> {
    let mut paths: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
    paths.sort();
    paths
}

proptest! {
    /// Property: merging the same source twice changes nothing more
    #[test]
    fn deep_merge_is_idempotent(dest in json_value(), source in json_value()) {
        let once = deep_merge(&dest, &source, true);
        let twice = deep_merge(&once, &source, true);
        prop_assert_eq!(once, twice);
    }

    /// Property: an empty source object leaves the destination unchanged
    #[test]
    fn deep_merge_empty_source_is_identity(dest in json_value()) {
        prop_assert_eq!(deep_merge(&dest, &Value::Object(Map::new()), true), dest);
    }

    /// Property: swapping the arguments swaps only_in_a and only_in_b
    #[test]
    fn diff_classification_is_symmetric(a in json_archive("a.mcaddon"), b in json_archive("b.mcaddon")) {
        let forward = diff_archives(&a, &b);
        let backward = diff_archives(&b, &a);

        prop_assert_eq!(paths(&forward.only_in_a), paths(&backward.only_in_b));
        prop_assert_eq!(paths(&forward.only_in_b), paths(&backward.only_in_a));

        let mut modified_forward: Vec<&str> = forward.modified.iter().map(|m| m.path.as_str()).collect();
        let mut modified_backward: Vec<&str> = backward.modified.iter().map(|m| m.path.as_str()).collect();
        modified_forward.sort_unstable();
        modified_backward.sort_unstable();
        prop_assert_eq!(modified_forward, modified_backward);
    }

    /// Property: an archive never differs from itself
    #[test]
    fn self_diff_is_empty(a in json_archive("a.mcaddon")) {
        prop_assert!(diff_archives(&a, &a).is_empty());
    }

    /// Property: reformatting a file is not a modification
    #[test]
    fn diff_ignores_formatting(value in json_value()) {
        let mut compact = AddonArchive::new("compact.mcaddon");
        compact.write_text("P/x.json", &value.to_string());
        let mut pretty = AddonArchive::new("pretty.mcaddon");
        pretty.write_text("P/x.json", &serde_json::to_string_pretty(&value).unwrap());

        prop_assert!(diff_archives(&compact, &pretty).modified.is_empty());
    }

    /// Property: writing an integer as a float or in exponent form is not a modification
    #[test]
    fn diff_ignores_number_formatting(n in -1_000_000i64..1_000_000, scale in 0u32..4) {
        let mut plain = AddonArchive::new("plain.mcaddon");
        plain.write_text("P/x.json", &format!(r#"{{"damage": {n}, "scale": {}}}"#, 10i64.pow(scale)));
        let mut spelled = AddonArchive::new("spelled.mcaddon");
        spelled.write_text("P/x.json", &format!(r#"{{"damage": {n}.0, "scale": 1e{scale}}}"#));

        prop_assert!(diff_archives(&plain, &spelled).modified.is_empty());
    }
}
