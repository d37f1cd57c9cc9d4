//! Tagged Option/Result values with a stable JSON shape, plus guards and
//! type checks for loosely-typed JSON input.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{Result, UtilError};

pub const DEFAULT_ASSERT_MESSAGE: &str = "Assertion failed";
pub const DEFAULT_MISSING_MESSAGE: &str = "Missing value";
pub const DEFAULT_INVALID_MESSAGE: &str = "Value is invalid!";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));
static UUID_V4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("valid regex")
});

/// Presence or absence of a value; serialized as `{"kind": "some", "value": …}`
/// or `{"kind": "none"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Maybe<T> {
    Some { value: T },
    None,
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Maybe::Some { value },
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(m: Maybe<T>) -> Self {
        match m {
            Maybe::Some { value } => Some(value),
            Maybe::None => None,
        }
    }
}

/// Success or failure; serialized as `{"ok": true, "value": …}` or
/// `{"ok": false, "error": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "OutcomeWire<T, E>")]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

#[derive(Deserialize)]
struct OutcomeWire<T, E> {
    ok: bool,
    value: Option<T>,
    error: Option<E>,
}

impl<T, E> TryFrom<OutcomeWire<T, E>> for Outcome<T, E> {
    type Error = String;

    fn try_from(wire: OutcomeWire<T, E>) -> std::result::Result<Self, Self::Error> {
        match (wire.ok, wire.value, wire.error) {
            (true, Some(value), _) => Ok(Outcome::Ok(value)),
            (false, _, Some(error)) => Ok(Outcome::Err(error)),
            (true, None, _) => Err("`ok: true` requires a `value`".to_string()),
            (false, _, None) => Err("`ok: false` requires an `error`".to_string()),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Outcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Outcome::Ok(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
            }
            Outcome::Err(error) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(res: std::result::Result<T, E>) -> Self {
        match res {
            Ok(v) => Outcome::Ok(v),
            Err(e) => Outcome::Err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(o: Outcome<T, E>) -> Self {
        match o {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

pub fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some { value }
}

pub fn none<T>() -> Maybe<T> {
    Maybe::None
}

pub fn unwrap_or<T>(opt: Maybe<T>, fallback: T) -> T {
    Option::<T>::from(opt).unwrap_or(fallback)
}

pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// The contained value, or the contained error handed back untouched.
pub fn unwrap_result<T, E>(res: Outcome<T, E>) -> std::result::Result<T, E> {
    res.into()
}

/// Fails with `msg` (or "Assertion failed") when `condition` is false.
pub fn assert_that(condition: bool, msg: Option<&str>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(UtilError::Assertion(msg.unwrap_or(DEFAULT_ASSERT_MESSAGE).to_string()))
    }
}

/// Passes `value` through when present, otherwise fails with `msg` (or
/// "Value is invalid!").
pub fn is_valid<T>(value: Option<T>, msg: Option<&str>) -> Result<T> {
    value.ok_or_else(|| UtilError::Assertion(msg.unwrap_or(DEFAULT_INVALID_MESSAGE).to_string()))
}

/// Unwraps `value` or fails with `msg` (or "Missing value").
pub fn require_value<T>(value: Option<T>, msg: Option<&str>) -> Result<T> {
    value.ok_or_else(|| UtilError::MissingValue(msg.unwrap_or(DEFAULT_MISSING_MESSAGE).to_string()))
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// JSON numbers are never NaN, so any number qualifies.
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

pub fn is_boolean(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_nullish(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

pub fn is_array_of(value: &Value, guard: impl Fn(&Value) -> bool) -> bool {
    value.as_array().is_some_and(|items| items.iter().all(guard))
}

pub fn is_record_of(value: &Value, guard: impl Fn(&Value) -> bool) -> bool {
    value.as_object().is_some_and(|map| map.values().all(guard))
}

pub fn is_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Outcome of a validation check; serialized as `{"valid": true}` or
/// `{"valid": false, "error": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(error.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

pub fn validate_email(value: &Value) -> ValidationResult {
    match value.as_str() {
        None => ValidationResult::invalid("Not a string"),
        Some(s) if !is_email(s) => ValidationResult::invalid("Invalid email format"),
        Some(_) => ValidationResult::valid(),
    }
}

pub fn is_uuid(s: &str) -> bool {
    UUID_V4_RE.is_match(s)
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
pub fn is_iso_date(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok() || chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    #[test]
    fn test_some_none_unwrap_or() {
        assert_eq!(unwrap_or(some("Bob"), "Anonymous"), "Bob");
        assert_eq!(unwrap_or(none(), "Anonymous"), "Anonymous");
    }

    #[test]
    fn test_maybe_json_shape() {
        assert_eq!(serde_json::to_value(some("Alice")).unwrap(), json!({"kind": "some", "value": "Alice"}));
        assert_eq!(serde_json::to_value(none::<i32>()).unwrap(), json!({"kind": "none"}));
        let parsed: Maybe<i32> = serde_json::from_value(json!({"kind": "some", "value": 3})).unwrap();
        assert_eq!(Option::<i32>::from(parsed), Some(3));
    }

    #[test]
    fn test_unwrap_result() {
        assert_eq!(unwrap_result(ok::<_, String>(42)), Ok(42));
        assert_eq!(unwrap_result(err::<i32, _>("boom".to_string())), Err("boom".to_string()));
    }

    #[test]
    fn test_unwrap_result_propagates_error_verbatim() {
        fn run() -> std::result::Result<i32, UtilError> {
            let value = unwrap_result(err(UtilError::MissingEnv("PORT".into())))?;
            Ok(value)
        }
        assert_matches!(run(), Err(UtilError::MissingEnv(key)) if key == "PORT");
    }

    #[test]
    fn test_outcome_json_shape() {
        let good: Outcome<i32, String> = ok(42);
        let bad: Outcome<i32, String> = err("nope".into());
        assert_eq!(serde_json::to_value(&good).unwrap(), json!({"ok": true, "value": 42}));
        assert_eq!(serde_json::to_value(&bad).unwrap(), json!({"ok": false, "error": "nope"}));

        let back: Outcome<i32, String> = serde_json::from_value(json!({"ok": false, "error": "x"})).unwrap();
        assert_eq!(back, err("x".into()));
        assert!(serde_json::from_value::<Outcome<i32, String>>(json!({"ok": true})).is_err());
    }

    #[test]
    fn test_assert_that() {
        assert!(assert_that(true, None).is_ok());
        assert_matches!(assert_that(false, None), Err(UtilError::Assertion(m)) if m == "Assertion failed");
        assert_matches!(assert_that(1 > 2, Some("User not found")), Err(UtilError::Assertion(m)) if m == "User not found");
    }

    #[test]
    fn test_is_valid() {
        assert_eq!(is_valid(Some(0), None).unwrap(), 0);
        assert_eq!(is_valid(Some("x"), Some("unused")).unwrap(), "x");
    }

    #[test]
    fn test_is_valid_absent_default_message() {
        assert_matches!(
            is_valid::<i32>(None, None),
            Err(UtilError::Assertion(m)) if m == "Value is invalid!"
        );
    }

    #[test]
    fn test_is_valid_absent_custom_message() {
        let err = is_valid::<&str>(None, Some("user id required")).unwrap_err();
        assert_eq!(err.to_string(), "user id required");
    }

    #[test]
    fn test_require_value() {
        assert_eq!(require_value(Some(5), None).unwrap(), 5);
        assert_matches!(require_value::<i32>(None, None), Err(UtilError::MissingValue(m)) if m == "Missing value");
        assert_matches!(require_value::<i32>(None, Some("no port")), Err(UtilError::MissingValue(m)) if m == "no port");
    }

    #[test]
    fn test_type_guards() {
        assert!(is_string(&json!("a")));
        assert!(!is_string(&json!(1)));
        assert!(is_number(&json!(1.5)));
        assert!(is_boolean(&json!(false)));
        assert!(is_nullish(None));
        assert!(is_nullish(Some(&Value::Null)));
        assert!(!is_nullish(Some(&json!(0))));
    }

    #[test]
    fn test_collection_guards() {
        assert!(is_array_of(&json!(["a", "b"]), is_string));
        assert!(!is_array_of(&json!(["a", 2]), is_string));
        assert!(!is_array_of(&json!({"a": "b"}), is_string));
        assert!(is_record_of(&json!({"a": 1, "b": 2}), is_number));
        assert!(!is_record_of(&json!([1, 2]), is_number));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email(&json!("a@b.co")).is_valid());
        assert_eq!(validate_email(&json!(7)), ValidationResult::invalid("Not a string"));
        assert_eq!(validate_email(&json!("nope")), ValidationResult::invalid("Invalid email format"));
        assert_eq!(
            serde_json::to_value(validate_email(&json!("nope"))).unwrap(),
            json!({"valid": false, "error": "Invalid email format"})
        );
    }

    #[test]
    fn test_is_uuid() {
        assert!(is_uuid("3F2504E0-4F89-41D3-9A0C-0305E82C3301"));
        assert!(!is_uuid("3f2504e0-4f89-11d3-9a0c-0305e82c3301"));
        assert!(!is_uuid("not-a-uuid"));
    }

    #[test]
    fn test_is_iso_date() {
        assert!(is_iso_date("2025-01-01"));
        assert!(is_iso_date("2025-01-01T12:00:00Z"));
        assert!(!is_iso_date("yesterday"));
    }
}
