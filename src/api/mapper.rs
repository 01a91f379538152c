//! Rule-table driven mapping between stored records and their JSON representation.
//!
//! Every entity declares a static table of [`FieldRule`]s. A rule names a
//! field of the representation, says whether it is read-only, required or
//! optional on write, and what JSON shape its value must have.
//!
//! # Read path
//!
//! [`to_representation`] projects a joined record into its flat
//! representation through the mapper's `From<Record>` impl.
//!
//! # Write path
//!
//! [`validate`] turns a submitted JSON object into the entity's validated
//! field set:
//!
//! 1. the payload must be a JSON object
//! 2. undeclared keys are rejected
//! 3. read-only keys are rejected or dropped, per [`ReadOnlyPolicy`]
//! 4. required fields must be present (except for [`WriteMode::Partial`])
//! 5. `null` is only accepted on nullable fields
//! 6. each value must match its [`FieldKind`]
//! 7. the accepted values are deserialized and run through `validator` rules
//!
//! All problems found in steps 2-7 are reported together, keyed by field.
//! Text values are trimmed, and non-nullable text may not be blank.
//! A submission either validates fully or is rejected.
//!
//! Reference existence needs the store and is checked separately, see
//! [`submitted_references`] and [`crate::application::services::RecordService`].

use chrono::{DateTime, NaiveDate};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

use crate::domain::entities::{Entity, Relation};
use crate::error::{FieldErrors, NON_FIELD_ERRORS};

pub const MSG_UNKNOWN: &str = "Unknown field.";
pub const MSG_READ_ONLY: &str = "This field is read-only.";
pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_NULL: &str = "This field may not be null.";
pub const MSG_BLANK: &str = "This field may not be blank.";
pub const MSG_INTEGER: &str = "A valid integer is required.";

/// How a field participates in writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Output only; never accepted from a submission.
    ReadOnly,
    /// Must be present when creating or replacing.
    Required,
    Optional,
}

/// Expected JSON shape of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    BigInteger,
    Text,
    Boolean,
    /// `YYYY-MM-DD`
    Date,
    /// RFC 3339
    DateTime,
    /// Primary key of a record of the given type.
    Reference(Relation),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Integer => f.write_str("integer"),
            FieldKind::BigInteger => f.write_str("big integer"),
            FieldKind::Text => f.write_str("text"),
            FieldKind::Boolean => f.write_str("boolean"),
            FieldKind::Date => f.write_str("date"),
            FieldKind::DateTime => f.write_str("datetime"),
            FieldKind::Reference(relation) => write!(f, "reference({relation})"),
        }
    }
}

/// Declaration of one representation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub access: Access,
    pub kind: FieldKind,
    /// Whether `null` is an acceptable submitted value.
    pub nullable: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            access: Access::Required,
            kind,
            nullable: false,
        }
    }

    /// Optional, but `null` is rejected (the column has a default instead).
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            access: Access::Optional,
            kind,
            nullable: false,
        }
    }

    /// Optional and may be cleared with `null`.
    pub const fn nullable(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            access: Access::Optional,
            kind,
            nullable: true,
        }
    }

    pub const fn read_only(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            access: Access::ReadOnly,
            kind,
            nullable: true,
        }
    }
}

/// What to do with submitted values for read-only fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadOnlyPolicy {
    /// Fail validation with a field error.
    #[default]
    Reject,
    /// Drop the value silently (logged at debug).
    Ignore,
}

impl FromStr for ReadOnlyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(ReadOnlyPolicy::Reject),
            "ignore" => Ok(ReadOnlyPolicy::Ignore),
            other => Err(format!("expected 'reject' or 'ignore', got '{other}'")),
        }
    }
}

impl fmt::Display for ReadOnlyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadOnlyPolicy::Reject => f.write_str("reject"),
            ReadOnlyPolicy::Ignore => f.write_str("ignore"),
        }
    }
}

/// Kind of write a submission is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// New record; required fields must be present.
    Create,
    /// Full update of an existing record; required fields must be present.
    Replace,
    /// Update touching only the submitted fields.
    Partial,
}

impl WriteMode {
    fn enforces_required(self) -> bool {
        !matches!(self, WriteMode::Partial)
    }
}

/// A record mapper: the representation, submission shape and rule table of an entity.
pub trait RecordMapper: Entity {
    /// Flat output shape, including derived fields.
    type Representation: Serialize + From<Self::Record> + Send;

    /// Typed input shape. Contains writable fields only.
    type Submission: DeserializeOwned + Validate + Into<<Self as Entity>::Fields>;

    /// Declared fields, in representation order.
    const FIELDS: &'static [FieldRule];
}

/// Looks up the rule for a field.
pub fn rule<M: RecordMapper>(name: &str) -> Option<&'static FieldRule> {
    M::FIELDS.iter().find(|rule| rule.name == name)
}

/// Projects a joined record into its representation.
pub fn to_representation<M: RecordMapper>(record: M::Record) -> M::Representation {
    record.into()
}

/// Validates a submission and produces the validated field set.
///
/// # Errors
///
/// Returns every field-keyed problem found. `validator` rules run on the
/// values that passed their type and presence checks, so one pass reports
/// both kinds of problem.
pub fn validate<M: RecordMapper>(
    payload: &Value,
    mode: WriteMode,
    policy: ReadOnlyPolicy,
) -> Result<M::Fields, FieldErrors> {
    let Some(object) = payload.as_object() else {
        return Err(FieldErrors::single(
            NON_FIELD_ERRORS,
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_kind(payload)
            ),
        ));
    };

    let mut errors = FieldErrors::new();
    let mut accepted = Map::new();

    for (key, value) in object {
        let Some(rule) = rule::<M>(key) else {
            errors.add(key.as_str(), MSG_UNKNOWN);
            continue;
        };

        if rule.access == Access::ReadOnly {
            match policy {
                ReadOnlyPolicy::Reject => errors.add(key.as_str(), MSG_READ_ONLY),
                ReadOnlyPolicy::Ignore => {
                    tracing::debug!(entity = M::NAME, field = %key, "Ignoring read-only field");
                }
            }
            continue;
        }

        match check_value(rule, value) {
            Ok(value) => {
                accepted.insert(key.clone(), value);
            }
            Err(message) => errors.add(key.as_str(), message),
        }
    }

    if mode.enforces_required() {
        for rule in M::FIELDS.iter().filter(|r| r.access == Access::Required) {
            if !object.contains_key(rule.name) {
                errors.add(rule.name, MSG_REQUIRED);
            }
        }
    }

    let submission: M::Submission = match serde_json::from_value(Value::Object(accepted)) {
        Ok(submission) => submission,
        Err(e) => {
            errors.add(NON_FIELD_ERRORS, e.to_string());
            return Err(errors);
        }
    };

    if let Err(e) = submission.validate() {
        errors.merge(field_errors(&e));
    }

    errors.into_result(submission.into())
}

/// Non-null references present in a submission, as `(field, relation, id)`.
///
/// Values that are not integers are skipped; [`validate`] reports those.
pub fn submitted_references<M: RecordMapper>(payload: &Value) -> Vec<(&'static str, Relation, i64)> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };

    M::FIELDS
        .iter()
        .filter(|rule| rule.access != Access::ReadOnly)
        .filter_map(|rule| match rule.kind {
            FieldKind::Reference(relation) => object
                .get(rule.name)
                .and_then(Value::as_i64)
                .map(|id| (rule.name, relation, id)),
            _ => None,
        })
        .collect()
}

/// Converts `validator` output into field-keyed messages.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            let message = failure
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value ({}).", failure.code));
            out.add(field.to_string(), message);
        }
    }
    out
}

/// Checks one submitted value against its rule and returns the value to accept.
///
/// Integers must fit the column width. Text is trimmed.
fn check_value(rule: &FieldRule, value: &Value) -> Result<Value, String> {
    if value.is_null() {
        return if rule.nullable {
            Ok(Value::Null)
        } else {
            Err(MSG_NULL.to_string())
        };
    }

    if let (FieldKind::Text, Some(text)) = (rule.kind, value.as_str()) {
        let trimmed = text.trim();
        if trimmed.is_empty() && !rule.nullable {
            return Err(MSG_BLANK.to_string());
        }
        return Ok(Value::String(trimmed.to_string()));
    }

    let ok = match rule.kind {
        FieldKind::Integer => value.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
        FieldKind::BigInteger => value.is_i64(),
        FieldKind::Text => value.is_string(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Date => value
            .as_str()
            .is_some_and(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()),
        FieldKind::DateTime => value
            .as_str()
            .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok()),
        FieldKind::Reference(_) => value.is_i64(),
    };

    if ok {
        return Ok(value.clone());
    }

    Err(match rule.kind {
        FieldKind::Integer | FieldKind::BigInteger => MSG_INTEGER.to_string(),
        FieldKind::Text => "Not a valid string.".to_string(),
        FieldKind::Boolean => "Must be a valid boolean.".to_string(),
        FieldKind::Date => {
            "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.".to_string()
        }
        FieldKind::DateTime => "Datetime has wrong format. Use one of these formats instead: \
                                YYYY-MM-DDThh:mm[:ss[.uuuuuu]][+HH:MM|-HH:MM|Z]."
            .to_string(),
        FieldKind::Reference(_) => format!(
            "Incorrect type. Expected pk value, received {}.",
            json_kind(value)
        ),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Article, Comment, Video};
    use serde_json::json;

    #[test]
    fn test_non_object_payload_is_rejected() {
        let err = validate::<Article>(&json!(["title"]), WriteMode::Create, ReadOnlyPolicy::Reject)
            .unwrap_err();

        assert_eq!(
            err.get(NON_FIELD_ERRORS),
            Some(&["Invalid data. Expected a dictionary, but got list.".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = validate::<Article>(
            &json!({ "title": "Hello", "slug": "hello" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("slug"), Some(&[MSG_UNKNOWN.to_string()][..]));
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected_even_when_ignoring_read_only() {
        let err = validate::<Article>(
            &json!({ "title": "Hello", "slug": "hello" }),
            WriteMode::Create,
            ReadOnlyPolicy::Ignore,
        )
        .unwrap_err();

        assert!(err.contains("slug"));
    }

    #[test]
    fn test_read_only_rejected_by_default() {
        let err = validate::<Article>(
            &json!({ "title": "Hello", "category_name": "news", "id": 7 }),
            WriteMode::Create,
            ReadOnlyPolicy::default(),
        )
        .unwrap_err();

        assert_eq!(err.get("category_name"), Some(&[MSG_READ_ONLY.to_string()][..]));
        assert_eq!(err.get("id"), Some(&[MSG_READ_ONLY.to_string()][..]));
    }

    #[test]
    fn test_read_only_ignored_under_ignore_policy() {
        let fields = validate::<Article>(
            &json!({ "title": "Hello", "category_display_name": "Bogus" }),
            WriteMode::Create,
            ReadOnlyPolicy::Ignore,
        )
        .unwrap();

        assert_eq!(fields.title.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_required_missing_on_create_and_replace() {
        for mode in [WriteMode::Create, WriteMode::Replace] {
            let err = validate::<Article>(&json!({}), mode, ReadOnlyPolicy::Reject).unwrap_err();
            assert_eq!(err.get("title"), Some(&[MSG_REQUIRED.to_string()][..]));
        }
    }

    #[test]
    fn test_required_not_enforced_on_partial() {
        let fields =
            validate::<Article>(&json!({ "visits": 3 }), WriteMode::Partial, ReadOnlyPolicy::Reject)
                .unwrap();

        assert_eq!(fields.visits, Some(3));
        assert!(fields.title.is_none());
    }

    #[test]
    fn test_null_on_non_nullable_field() {
        let err = validate::<Article>(
            &json!({ "title": null, "issue_new": null }),
            WriteMode::Partial,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("title"), Some(&[MSG_NULL.to_string()][..]));
        assert_eq!(err.get("issue_new"), Some(&[MSG_NULL.to_string()][..]));
    }

    #[test]
    fn test_type_mismatches_are_collected() {
        let err = validate::<Article>(
            &json!({
                "title": 42,
                "visits": "many",
                "issue_new": "yes",
                "publish_date": "01/04/2025",
                "category": "news",
            }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("title"), Some(&["Not a valid string.".to_string()][..]));
        assert_eq!(
            err.get("visits"),
            Some(&["A valid integer is required.".to_string()][..])
        );
        assert_eq!(
            err.get("issue_new"),
            Some(&["Must be a valid boolean.".to_string()][..])
        );
        assert!(err.contains("publish_date"));
        assert_eq!(
            err.get("category"),
            Some(&["Incorrect type. Expected pk value, received str.".to_string()][..])
        );
        assert_eq!(err.len(), 5);
    }

    #[test]
    fn test_integer_out_of_column_range_is_keyed_by_field() {
        let err = validate::<Article>(
            &json!({ "title": "x", "publish_date_year": 3_000_000_000_i64, "visits": u64::MAX }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("publish_date_year"), Some(&[MSG_INTEGER.to_string()][..]));
        assert_eq!(err.get("visits"), Some(&[MSG_INTEGER.to_string()][..]));
        assert!(!err.contains(NON_FIELD_ERRORS));
    }

    #[test]
    fn test_big_integer_accepts_values_past_32_bits() {
        let fields = validate::<Article>(
            &json!({ "title": "x", "visits": 3_000_000_000_i64 }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.visits, Some(3_000_000_000));
    }

    #[test]
    fn test_integer_width_bounds() {
        let small = FieldRule::optional("order", FieldKind::Integer);
        let big = FieldRule::optional("visits", FieldKind::BigInteger);

        assert!(check_value(&small, &json!(i32::MAX)).is_ok());
        assert!(check_value(&small, &json!(i64::from(i32::MAX) + 1)).is_err());
        assert!(check_value(&small, &json!(i64::from(i32::MIN) - 1)).is_err());
        assert!(check_value(&big, &json!(i64::MIN)).is_ok());
        assert!(check_value(&big, &json!(i64::MAX as u64 + 1)).is_err());
        assert!(check_value(&big, &json!(1.5)).is_err());
    }

    #[test]
    fn test_rule_errors_reported_with_type_errors() {
        let err = validate::<Article>(
            &json!({ "title": "x", "publish_date_month": 13, "visits": "many" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("visits"), Some(&[MSG_INTEGER.to_string()][..]));
        assert!(err.contains("publish_date_month"));
        assert_eq!(err.len(), 2);
    }

    #[test]
    fn test_rule_errors_reported_with_missing_required() {
        let err = validate::<Comment>(
            &json!({ "comment": "Nice", "user": 1, "rating": 9 }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("article"), Some(&[MSG_REQUIRED.to_string()][..]));
        assert!(err.contains("rating"));
    }

    #[test]
    fn test_blank_text_is_rejected() {
        let err = validate::<Article>(
            &json!({ "title": "   ", "visits": "many" }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert_eq!(err.get("title"), Some(&[MSG_BLANK.to_string()][..]));
        assert!(err.contains("visits"));

        let err = validate::<Comment>(
            &json!({ "comment": "\t\n", "user": 1, "article": 2 }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();
        assert_eq!(err.get("comment"), Some(&[MSG_BLANK.to_string()][..]));
    }

    #[test]
    fn test_text_is_trimmed() {
        let fields = validate::<Article>(
            &json!({ "title": "  Hello  ", "status": "  " }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap();

        assert_eq!(fields.title.as_deref(), Some("Hello"));
        assert_eq!(fields.status, Some(Some(String::new())));
    }

    #[test]
    fn test_datetime_kind() {
        let rule = FieldRule::optional("created", FieldKind::DateTime);

        assert!(check_value(&rule, &json!("2025-04-01T10:00:00Z")).is_ok());
        assert!(check_value(&rule, &json!("2025-04-01T10:00:00+05:00")).is_ok());
        assert!(check_value(&rule, &json!("2025-04-01")).is_err());
    }

    #[test]
    fn test_validator_rules_are_keyed_by_field() {
        let err = validate::<Article>(
            &json!({ "title": "Hello", "publish_date_month": 13 }),
            WriteMode::Create,
            ReadOnlyPolicy::Reject,
        )
        .unwrap_err();

        assert!(err.contains("publish_date_month"));
        assert!(!err.contains(NON_FIELD_ERRORS));
    }

    #[test]
    fn test_submitted_references() {
        let refs = submitted_references::<Comment>(&json!({
            "comment": "Nice read",
            "user": 4,
            "article": 9,
        }));

        assert_eq!(
            refs,
            vec![("user", Relation::User, 4), ("article", Relation::Article, 9)]
        );
    }

    #[test]
    fn test_submitted_references_skip_null_and_garbage() {
        let refs = submitted_references::<Article>(&json!({
            "title": "x",
            "category": null,
            "author": "seven",
            "magazine": 2,
        }));

        assert_eq!(refs, vec![("magazine", Relation::Magazine, 2)]);
    }

    #[test]
    fn test_rule_lookup() {
        let rule = rule::<Video>("video_id").unwrap();
        assert_eq!(rule.access, Access::ReadOnly);
        assert!(super::rule::<Video>("nope").is_none());
    }

    #[test]
    fn test_read_only_policy_parse() {
        assert_eq!("reject".parse::<ReadOnlyPolicy>(), Ok(ReadOnlyPolicy::Reject));
        assert_eq!("IGNORE".parse::<ReadOnlyPolicy>(), Ok(ReadOnlyPolicy::Ignore));
        assert!("drop".parse::<ReadOnlyPolicy>().is_err());
        assert_eq!(ReadOnlyPolicy::Ignore.to_string(), "ignore");
    }

    #[test]
    fn test_field_kind_display() {
        assert_eq!(FieldKind::Reference(Relation::User).to_string(), "reference(user)");
        assert_eq!(FieldKind::Date.to_string(), "date");
        assert_eq!(FieldKind::BigInteger.to_string(), "big integer");
    }
}
