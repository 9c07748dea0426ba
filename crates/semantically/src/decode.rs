//! Typing of raw API payloads.
//!
//! Decoding is explicit per record kind: a payload must be a JSON object,
//! known fields are read with their declared types, missing optional fields
//! become `None` and unknown keys are ignored.

use std::collections::HashMap;

use serde::de::{Error as _, Unexpected};
use serde_json::Value;

use crate::config::ResultPolicy;
use crate::error::DecodeError;
use crate::models::Record;

/// Decode one payload into `T`.
///
/// # Errors
///
/// Returns [`DecodeError`] if the payload is not an object or a present
/// field has the wrong type.
pub fn decode_one<T: Record>(raw: &Value) -> Result<T, DecodeError> {
    if !raw.is_object() {
        let source = serde_json::Error::invalid_type(unexpected(raw), &"a JSON object");
        return Err(DecodeError::new(T::KIND, source));
    }
    T::deserialize(raw).map_err(|e| DecodeError::new(T::KIND, e))
}

/// Decode every payload of a list, failing on the first bad one.
///
/// # Errors
///
/// Returns the first [`DecodeError`].
pub fn decode_list<T: Record>(raws: &[Value]) -> Result<Vec<T>, DecodeError> {
    raws.iter().map(decode_one).collect()
}

/// Decode every list of a batch mapping.
///
/// Under [`ResultPolicy::Strict`] the first failing key aborts the whole
/// decode. Under [`ResultPolicy::Lenient`] failing keys are dropped from the
/// result and every other key is kept.
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying the failing key (strict policy only).
pub fn decode_batch<T: Record>(
    batch: &HashMap<String, Vec<Value>>,
    policy: ResultPolicy,
) -> Result<HashMap<String, Vec<T>>, DecodeError> {
    let mut typed = HashMap::with_capacity(batch.len());

    for (key, raws) in batch {
        match decode_list::<T>(raws) {
            Ok(records) => {
                typed.insert(key.clone(), records);
            }
            Err(e) if policy.is_strict() => return Err(e.with_key(key.clone())),
            Err(e) => {
                tracing::warn!(key = %key, kind = %T::KIND, error = %e.source, "Dropping undecodable batch entry");
            }
        }
    }

    Ok(typed)
}

fn unexpected(raw: &Value) -> Unexpected<'_> {
    match raw {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(Unexpected::Other("number"), Unexpected::Float),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{DetailedAuthor, Paper, RecordKind};

    #[test]
    fn test_only_id_leaves_everything_else_unset() {
        let paper: Paper = decode_one(&json!({"paperId": "X"})).unwrap();
        assert_eq!(paper, Paper { paper_id: Some("X".into()), ..Default::default() });
        assert!(paper.year.is_none());
        assert!(paper.citation_count.is_none());
        assert!(paper.fields_of_study.is_none());
    }

    #[test]
    fn test_missing_id_is_not_fatal() {
        let paper: Paper = decode_one(&json!({"title": "Orphan"})).unwrap();
        assert!(paper.paper_id.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let paper: Paper = decode_one(&json!({"paperId": "X", "tldr": {"text": "t"}})).unwrap();
        assert_eq!(paper.paper_id.as_deref(), Some("X"));
    }

    #[test]
    fn test_non_object_rejected() {
        let err = decode_one::<Paper>(&json!(["X", "title"])).unwrap_err();
        assert_eq!(err.kind, RecordKind::Paper);
        assert!(decode_one::<Paper>(&json!("paperId")).is_err());
        assert!(decode_one::<Paper>(&Value::Null).is_err());
    }

    #[test]
    fn test_wrong_field_type_rejected() {
        let err = decode_one::<Paper>(&json!({"paperId": "X", "year": "nineteen"})).unwrap_err();
        assert!(err.to_string().contains("Paper"));
    }

    fn mixed_batch() -> HashMap<String, Vec<Value>> {
        HashMap::from([
            ("good".to_string(), vec![json!({"authorId": "1", "name": "Ada"})]),
            ("bad".to_string(), vec![json!({"authorId": "2"}), json!("oops")]),
            ("empty".to_string(), vec![]),
        ])
    }

    #[test]
    fn test_decode_batch_strict_names_key() {
        let err = decode_batch::<DetailedAuthor>(&mixed_batch(), ResultPolicy::Strict).unwrap_err();
        assert_eq!(err.key.as_deref(), Some("bad"));
        assert_eq!(err.kind, RecordKind::DetailedAuthor);
    }

    #[test]
    fn test_decode_batch_lenient_drops_key() {
        let typed = decode_batch::<DetailedAuthor>(&mixed_batch(), ResultPolicy::Lenient).unwrap();
        assert_eq!(typed.len(), 2);
        assert!(!typed.contains_key("bad"));
        assert_eq!(typed["good"][0].name.as_deref(), Some("Ada"));
        assert!(typed["empty"].is_empty());
    }
}
