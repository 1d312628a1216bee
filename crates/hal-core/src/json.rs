//! # JSON Bridge
//!
//! Thin wrappers over `serde_json` for HAL resources.
//!
//! Flattening a base record beside the envelope cannot stop the record from
//! declaring its own `_embedded` or `_links` member. On encode,
//! [`check_reserved_fields`] rejects such a record instead of letting two
//! same-named keys reach the output. On decode, a top-level value that is
//! not a JSON object is rejected before any typed deserialization runs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::document::{Resource, EMBEDDED_FIELD, LINKS_FIELD};
use crate::error::HalError;

/// Members a base record must not define.
pub const RESERVED_FIELDS: [&str; 2] = [EMBEDDED_FIELD, LINKS_FIELD];

/// Verify that `base` serializes as a JSON object free of reserved members.
pub fn check_reserved_fields<R: Serialize>(base: &R) -> Result<(), HalError> {
    let value = serde_json::to_value(base)?;
    let object = value.as_object().ok_or(HalError::NotAnObject {
        found: json_kind(&value),
    })?;
    if let Some(field) = RESERVED_FIELDS.iter().find(|f| object.contains_key(**f)) {
        tracing::debug!(field, "base record defines a reserved HAL member");
        return Err(HalError::ReservedField {
            field: (*field).to_string(),
        });
    }
    Ok(())
}

/// Encode a resource as a JSON value.
pub fn to_value<R, E, L>(resource: &Resource<R, E, L>) -> Result<Value, HalError>
where
    R: Serialize,
    E: Serialize,
    L: Serialize,
{
    check_reserved_fields(&resource.base)?;
    let value = serde_json::to_value(resource).map_err(|e| {
        tracing::debug!(error = %e, "failed to encode HAL resource");
        HalError::from(e)
    })?;
    tracing::trace!(
        members = value.as_object().map_or(0, |o| o.len()),
        "encoded HAL resource"
    );
    Ok(value)
}

/// Encode a resource as compact JSON text.
pub fn to_string<R, E, L>(resource: &Resource<R, E, L>) -> Result<String, HalError>
where
    R: Serialize,
    E: Serialize,
    L: Serialize,
{
    check_reserved_fields(&resource.base)?;
    Ok(serde_json::to_string(resource)?)
}

/// Encode a resource as indented JSON text.
pub fn to_string_pretty<R, E, L>(resource: &Resource<R, E, L>) -> Result<String, HalError>
where
    R: Serialize,
    E: Serialize,
    L: Serialize,
{
    check_reserved_fields(&resource.base)?;
    Ok(serde_json::to_string_pretty(resource)?)
}

/// Decode a HAL document from a JSON value.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, HalError> {
    if !value.is_object() {
        let found = json_kind(&value);
        tracing::debug!(found, "rejected non-object HAL document");
        return Err(HalError::NotAnObject { found });
    }
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(error = %e, "failed to decode HAL document");
        HalError::from(e)
    })
}

/// Decode a HAL document from JSON text.
pub fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, HalError> {
    let value: Value = serde_json::from_str(s).map_err(|e| {
        tracing::debug!(error = %e, "HAL document is not valid JSON");
        HalError::from(e)
    })?;
    from_value(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::create_resource;
    use crate::links::{LinkMap, Links};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct User {
        username: String,
    }

    #[derive(Debug, Serialize)]
    struct Clashing {
        username: String,
        #[serde(rename = "_links")]
        links: Vec<String>,
    }

    #[test]
    fn test_to_value_accepts_plain_base() {
        let res: Resource<User, ()> = create_resource(
            User {
                username: "admin".into(),
            },
            None,
            Some(Links::self_only("/users/admin")),
        );
        let value = to_value(&res).unwrap();
        assert_eq!(
            value,
            json!({"username": "admin", "_links": {"self": {"href": "/users/admin"}}})
        );
    }

    #[test]
    fn test_reserved_field_in_base_rejected() {
        let res: Resource<Clashing, (), LinkMap> = create_resource(
            Clashing {
                username: "admin".into(),
                links: vec![],
            },
            None,
            None,
        );
        let err = to_value(&res).unwrap_err();
        assert!(matches!(err, HalError::ReservedField { ref field } if field == "_links"));
        assert!(to_string(&res).is_err());
        assert!(to_string_pretty(&res).is_err());
    }

    #[test]
    fn test_check_reserved_fields_requires_object() {
        let err = check_reserved_fields(&vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, HalError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_to_string_omits_absent_members() {
        let res: Resource<User, ()> = create_resource(
            User {
                username: "admin".into(),
            },
            None,
            None,
        );
        assert_eq!(to_string(&res).unwrap(), r#"{"username":"admin"}"#);
    }

    #[test]
    fn test_from_str_roundtrip() {
        let res: Resource<User, ()> =
            from_str(r#"{"username":"admin","_links":{"self":{"href":"/users/admin"}}}"#).unwrap();
        assert_eq!(res.username, "admin");
        assert!(res.document.links.is_some());
    }

    #[test]
    fn test_from_str_rejects_non_object() {
        let err = from_str::<Resource<User, ()>>("[1,2]").unwrap_err();
        assert!(matches!(err, HalError::NotAnObject { found: "array" }));
    }

    #[test]
    fn test_from_str_rejects_invalid_json() {
        let err = from_str::<Resource<User, ()>>("{").unwrap_err();
        assert!(matches!(err, HalError::Serialization(_)));
    }

    #[test]
    fn test_from_value_reports_shape_mismatch() {
        let err = from_value::<Resource<User, ()>>(json!({"name": "x"})).unwrap_err();
        assert!(matches!(err, HalError::Serialization(_)));
        assert!(err.to_string().starts_with("serialization error"));
    }
}
