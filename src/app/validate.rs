//! Shape checks for dispatched payloads and persisted blobs.
//!
//! These never look at the session: an empty theme list or an unknown theme
//! name is shape-valid and gets rejected later by the reducer.

use crate::app::action::ActionKind;
use serde_json::Value;

#[must_use]
pub fn is_theme_class_list(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

/// A non-negative integer strictly below `len`.
#[must_use]
pub fn is_valid_current_index(value: &Value, len: usize) -> bool {
    value
        .as_u64()
        .and_then(|index| usize::try_from(index).ok())
        .is_some_and(|index| index < len)
}

/// `{ "current": <index>, "theme_classes": [<string>...] }` with `current`
/// in range. Other keys are tolerated.
#[must_use]
pub fn is_theme_record(value: &Value) -> bool {
    let Some(object) = value.as_object() else {
        return false;
    };
    let Some(classes) = object.get("theme_classes") else {
        return false;
    };
    if !is_theme_class_list(classes) {
        return false;
    }
    let len = classes.as_array().map_or(0, Vec::len);
    object
        .get("current")
        .is_some_and(|current| is_valid_current_index(current, len))
}

#[must_use]
pub fn is_valid_payload(kind: &str, payload: &Value) -> bool {
    let Some(kind) = ActionKind::parse(kind) else {
        return false;
    };
    match kind {
        ActionKind::SetLoadingState | ActionKind::FlagPersistedDataLoad => payload.is_boolean(),
        ActionKind::SetThemeClasses => is_theme_class_list(payload),
        ActionKind::SetCurrentThemeClass | ActionKind::SetDefault => payload.is_string(),
        ActionKind::ToggleTheme => payload.is_null(),
        ActionKind::LoadState => is_theme_record(payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_boolean_payloads() {
        for kind in ["SET_LOADING_STATE", "FLAG_PERSISTED_DATA_LOAD"] {
            assert!(is_valid_payload(kind, &json!(true)));
            assert!(is_valid_payload(kind, &json!(false)));
            assert!(!is_valid_payload(kind, &json!("true")));
            assert!(!is_valid_payload(kind, &Value::Null));
        }
    }

    #[test]
    fn test_theme_class_lists() {
        assert!(is_valid_payload("SET_THEME_CLASSES", &json!(["a", "b"])));
        // Emptiness is the reducer's problem, not a shape error
        assert!(is_valid_payload("SET_THEME_CLASSES", &json!([])));
        assert!(!is_valid_payload("SET_THEME_CLASSES", &json!(["a", 1])));
        assert!(!is_valid_payload("SET_THEME_CLASSES", &json!("a")));
    }

    #[test]
    fn test_string_payloads() {
        for kind in ["SET_CURRENT_THEME_CLASS", "SET_DEFAULT"] {
            assert!(is_valid_payload(kind, &json!("dark")));
            assert!(is_valid_payload(kind, &json!("")));
            assert!(!is_valid_payload(kind, &json!(["dark"])));
            assert!(!is_valid_payload(kind, &Value::Null));
        }
    }

    #[test]
    fn test_toggle_takes_no_payload() {
        assert!(is_valid_payload("TOGGLE_THEME", &Value::Null));
        assert!(!is_valid_payload("TOGGLE_THEME", &json!(0)));
        assert!(!is_valid_payload("TOGGLE_THEME", &json!({})));
    }

    #[test]
    fn test_load_state_payloads() {
        let ok = json!({"current": 1, "theme_classes": ["light", "dark"]});
        assert!(is_valid_payload("LOAD_STATE", &ok));

        let cases = [
            json!({"current": 2, "theme_classes": ["light", "dark"]}),
            json!({"current": -1, "theme_classes": ["light"]}),
            json!({"current": 0.5, "theme_classes": ["light"]}),
            json!({"current": 0, "theme_classes": []}),
            json!({"current": 0, "theme_classes": [1]}),
            json!({"theme_classes": ["light"]}),
            json!({"current": 0}),
            json!([0, ["light"]]),
            Value::Null,
        ];
        for case in cases {
            assert!(!is_valid_payload("LOAD_STATE", &case), "{case} should be rejected");
        }
    }

    #[test]
    fn test_unknown_kind() {
        assert!(!is_valid_payload("SET_EVERYTHING", &Value::Null));
        assert!(!is_valid_payload("toggle_theme", &Value::Null));
    }
}
