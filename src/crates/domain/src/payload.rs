use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Declared constraint for one payload field. Resources describe their
/// creation payload as a list of these; the validator itself carries no
/// per-resource code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    /// ISO-8601 calendar date, e.g. "2014-10-27".
    Date,
    IdList,
    /// Array of objects, each element checked against its own field
    /// list.
    ObjectList(&'static [FieldSpec]),
}

impl FieldKind {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            FieldKind::Text => value.is_string(),
            FieldKind::Integer => value.is_i64(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Date => value
                .as_str()
                .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok())
                .unwrap_or(false),
            FieldKind::IdList => value
                .as_array()
                .map(|items| items.iter().all(Value::is_i64))
                .unwrap_or(false),
            FieldKind::ObjectList(_) => value
                .as_array()
                .map(|items| items.iter().all(Value::is_object))
                .unwrap_or(false),
        }
    }

    fn constraint(&self) -> &'static str {
        match self {
            FieldKind::Text => "must_be_text",
            FieldKind::Integer => "must_be_integer",
            FieldKind::Boolean => "must_be_boolean",
            FieldKind::Date => "must_be_date",
            FieldKind::IdList => "must_be_id_list",
            FieldKind::ObjectList(_) => "must_be_object_list",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("request body is not a json object")]
    Malformed,
    #[error("payload failed field validation")]
    Invalid(BTreeMap<&'static str, &'static str>),
}

/// Decodes a raw request body against the declared field constraints.
///
/// Unknown extra fields are ignored. All field violations are collected
/// before failing so the caller can report every offending field at
/// once.
pub fn decode<T: DeserializeOwned>(
    body: &[u8],
    fields: &[FieldSpec],
) -> Result<T, PayloadError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| PayloadError::Malformed)?;
    let object = value.as_object().ok_or(PayloadError::Malformed)?;

    let mut errors: BTreeMap<&'static str, &'static str> = BTreeMap::new();
    check_fields(object, fields, &mut errors);
    if !errors.is_empty() {
        return Err(PayloadError::Invalid(errors));
    }

    match serde_json::from_value(value.clone()) {
        Ok(draft) => Ok(draft),
        Err(_) => Err(blame_decode_failure::<T>(&value, fields)),
    }
}

fn check_fields(
    object: &serde_json::Map<String, Value>,
    fields: &[FieldSpec],
    errors: &mut BTreeMap<&'static str, &'static str>,
) {
    for spec in fields {
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    errors.insert(spec.name, "required");
                }
            }
            Some(found) if !spec.kind.accepts(found) => {
                errors.insert(spec.name, spec.kind.constraint());
            }
            Some(found) => {
                // required display names must carry actual content
                if spec.required
                    && spec.kind == FieldKind::Text
                    && found.as_str().map(str::trim).unwrap_or("").is_empty()
                {
                    errors.insert(spec.name, "must_not_be_empty");
                } else if let FieldKind::ObjectList(inner) = spec.kind {
                    for item in found.as_array().into_iter().flatten() {
                        if let Some(item) = item.as_object() {
                            check_fields(item, inner, errors);
                        }
                    }
                }
            }
        }
    }
}

/// A body can satisfy every declared constraint and still not decode
/// into the draft type. Re-decoding with each optional field dropped
/// pins the violation on one field so the caller answers with a
/// `details` entry rather than a bare parse error.
fn blame_decode_failure<T: DeserializeOwned>(value: &Value, fields: &[FieldSpec]) -> PayloadError {
    let object = match value.as_object() {
        Some(object) => object,
        None => return PayloadError::Malformed,
    };
    for spec in fields.iter().filter(|spec| !spec.required) {
        if !object.contains_key(spec.name) {
            continue;
        }
        let mut trimmed = object.clone();
        trimmed.remove(spec.name);
        if serde_json::from_value::<T>(Value::Object(trimmed)).is_ok() {
            return PayloadError::Invalid(BTreeMap::from([(spec.name, spec.kind.constraint())]));
        }
    }
    PayloadError::Malformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Draft {
        name: String,
        #[serde(default)]
        year: Option<i64>,
    }

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("year", FieldKind::Integer),
    ];

    #[test]
    fn test_valid_payload_decodes() {
        let draft: Draft = decode(br#"{"name":"Pop","year":2014}"#, FIELDS).unwrap();
        assert_eq!(draft.name, "Pop");
        assert_eq!(draft.year, Some(2014));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let draft: Draft = decode(br#"{"name":"Pop","spurious":true}"#, FIELDS).unwrap();
        assert_eq!(draft.name, "Pop");
    }

    #[test]
    fn test_malformed_json() {
        let err = decode::<Draft>(b"{not json", FIELDS).unwrap_err();
        assert_eq!(err, PayloadError::Malformed);
    }

    #[test]
    fn test_non_object_body() {
        let err = decode::<Draft>(b"[1,2,3]", FIELDS).unwrap_err();
        assert_eq!(err, PayloadError::Malformed);
    }

    #[test]
    fn test_missing_required_field_named() {
        let err = decode::<Draft>(br#"{"year":2014}"#, FIELDS).unwrap_err();
        match err {
            PayloadError::Invalid(details) => {
                assert_eq!(details.get("name"), Some(&"required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_type_violations_collected_per_field() {
        let err = decode::<Draft>(br#"{"name":7,"year":"nineteen"}"#, FIELDS).unwrap_err();
        match err {
            PayloadError::Invalid(details) => {
                assert_eq!(details.get("name"), Some(&"must_be_text"));
                assert_eq!(details.get("year"), Some(&"must_be_integer"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_required_text_rejected() {
        let err = decode::<Draft>(br#"{"name":"   "}"#, FIELDS).unwrap_err();
        match err {
            PayloadError::Invalid(details) => {
                assert_eq!(details.get("name"), Some(&"must_not_be_empty"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_object_list_elements_checked() {
        const VERSED: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::optional(
                "verses",
                FieldKind::ObjectList(&[FieldSpec::required("text", FieldKind::Text)]),
            ),
        ];

        #[derive(Debug, Deserialize)]
        struct Verse {
            text: String,
        }

        #[derive(Debug, Deserialize)]
        struct Versed {
            name: String,
            #[serde(default)]
            verses: Vec<Verse>,
        }

        let ok: Versed =
            decode(br#"{"name":"Halo","verses":[{"text":"Remember"}]}"#, VERSED).unwrap();
        assert_eq!(ok.name, "Halo");
        assert_eq!(ok.verses[0].text, "Remember");

        let err = decode::<Versed>(br#"{"name":"Halo","verses":[{}]}"#, VERSED).unwrap_err();
        match err {
            PayloadError::Invalid(details) => {
                assert_eq!(details.get("text"), Some(&"required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err =
            decode::<Versed>(br#"{"name":"Halo","verses":[{"text":7}]}"#, VERSED).unwrap_err();
        match err {
            PayloadError::Invalid(details) => {
                assert_eq!(details.get("text"), Some(&"must_be_text"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_undecodable_optional_field_blamed() {
        const RATED: &[FieldSpec] = &[
            FieldSpec::required("name", FieldKind::Text),
            FieldSpec::optional("rating", FieldKind::Integer),
        ];

        #[derive(Debug, Deserialize)]
        struct Rated {
            name: String,
            #[serde(default)]
            rating: Option<u8>,
        }

        // 999 passes the declared integer check but does not fit the
        // draft's narrower type; the answer still names the field
        let err = decode::<Rated>(br#"{"name":"Pop","rating":999}"#, RATED).unwrap_err();
        match err {
            PayloadError::Invalid(details) => {
                assert_eq!(details.get("rating"), Some(&"must_be_integer"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let ok: Rated = decode(br#"{"name":"Pop","rating":5}"#, RATED).unwrap();
        assert_eq!(ok.name, "Pop");
        assert_eq!(ok.rating, Some(5));
    }

    #[test]
    fn test_date_kind() {
        const DATED: &[FieldSpec] = &[FieldSpec::optional("released_at", FieldKind::Date)];

        #[derive(Debug, Deserialize)]
        struct Dated {
            released_at: Option<NaiveDate>,
        }

        let ok: Dated = decode(br#"{"released_at":"2014-10-27"}"#, DATED).unwrap();
        assert!(ok.released_at.is_some());

        let err = decode::<Dated>(br#"{"released_at":"soon"}"#, DATED).unwrap_err();
        assert!(matches!(err, PayloadError::Invalid(_)));
    }
}
