//! Order-preserving config merging

use serde_json::{Map, Value};

const COMPILER_OPTIONS: &str = "compilerOptions";

/// Overlay `patch` onto `base`.
///
/// Top-level keys from the patch win outright, except `compilerOptions`,
/// which is merged key-by-key so that unrelated options contributed by an
/// earlier config survive a later override. Insertion order is preserved:
/// overwritten keys keep their original position, new keys are appended.
pub(crate) fn apply_overlay(base: &mut Map<String, Value>, mut patch: Map<String, Value>) {
    let patch_options = match patch.remove(COMPILER_OPTIONS) {
        Some(Value::Object(options)) => Some(options),
        // A non-object compilerOptions cannot be merged per key; let it
        // overwrite like any other top-level value.
        Some(other) => {
            base.insert(COMPILER_OPTIONS.to_string(), other);
            None
        }
        None => None,
    };

    for (key, value) in patch {
        base.insert(key, value);
    }

    if let Some(options) = patch_options {
        match base.get_mut(COMPILER_OPTIONS) {
            Some(Value::Object(existing)) => {
                for (key, value) in options {
                    existing.insert(key, value);
                }
            }
            _ => {
                base.insert(COMPILER_OPTIONS.to_string(), Value::Object(options));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn patch_wins_at_top_level() {
        let mut base = object(json!({"include": ["src"], "strict": true}));
        apply_overlay(&mut base, object(json!({"include": ["lib"]})));

        assert_eq!(base.get("include"), Some(&json!(["lib"])));
        assert_eq!(base.get("strict"), Some(&json!(true)));
    }

    #[test]
    fn compiler_options_merge_per_key() {
        let mut base = object(json!({
            "compilerOptions": {"paths": {"@a/*": ["./a/*"]}, "strict": true}
        }));
        apply_overlay(
            &mut base,
            object(json!({"compilerOptions": {"paths": {"@b/*": ["./b/*"]}}})),
        );

        let options = base.get("compilerOptions").unwrap();
        assert_eq!(options["paths"], json!({"@b/*": ["./b/*"]}));
        assert_eq!(options["strict"], json!(true));
    }

    #[test]
    fn compiler_options_from_patch_survive_when_base_has_none() {
        let mut base = object(json!({"include": ["src"]}));
        apply_overlay(
            &mut base,
            object(json!({"compilerOptions": {"target": "es2022"}})),
        );

        assert_eq!(
            base.get("compilerOptions"),
            Some(&json!({"target": "es2022"}))
        );
    }

    #[test]
    fn no_phantom_compiler_options() {
        let mut base = object(json!({"include": ["src"]}));
        apply_overlay(&mut base, object(json!({"exclude": ["dist"]})));

        assert!(!base.contains_key("compilerOptions"));
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut base = object(json!({
            "compilerOptions": {"strict": true},
            "include": ["src"]
        }));
        let before = base.clone();
        apply_overlay(&mut base, Map::new());

        assert_eq!(base, before);
    }

    #[test]
    fn overwritten_keys_keep_their_position() {
        let mut base = object(json!({"a": 1, "b": 2, "c": 3}));
        apply_overlay(&mut base, object(json!({"b": 20, "d": 4})));

        let keys: Vec<&str> = base.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert_eq!(base.get("b"), Some(&json!(20)));
    }
}
