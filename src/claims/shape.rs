//! Shape validation for decoded header and payload segments
//!
//! Validation here is structural only: well-known fields are optional, but
//! when present they must carry a plausible type. All violations in a
//! segment are collected and reported in a single error rather than
//! stopping at the first one.

use crate::claims::{HEADER_STRING_FIELDS, PAYLOAD_NUMBER_FIELDS, PAYLOAD_STRING_FIELDS};
use crate::error::{InvalidTokenError, Result};
use serde_json::{Map, Value};

/// Validate the shape of a decoded header
///
/// The header must be a JSON object. `typ`, `alg` and `kid` may each be
/// absent; any that is present with a non-string value is collected into
/// one [`InvalidTokenError::InvalidFields`].
pub(crate) fn validate_header_shape(value: &Value, part: usize) -> Result<()> {
    let object = as_object(value, part)?;

    let invalid: Vec<String> = HEADER_STRING_FIELDS
        .iter()
        .filter(|name| !is_absent_or_string(object, name))
        .map(|name| name.to_string())
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(InvalidTokenError::InvalidFields {
            part,
            fields: invalid,
        })
    }
}

/// Validate the shape of a decoded payload
///
/// The payload must be a JSON object. Violations are collected across
/// three groups, in order: string-or-absent fields (`iss`, `sub`, `jti`),
/// number-or-absent fields (`exp`, `nbf`, `iat`), and `aud`, which may be
/// absent, a string, or an array of strings. All violating field names are
/// reported together.
pub(crate) fn validate_payload_shape(value: &Value, part: usize) -> Result<()> {
    let object = as_object(value, part)?;

    let mut invalid: Vec<String> = PAYLOAD_STRING_FIELDS
        .iter()
        .filter(|name| !is_absent_or_string(object, name))
        .map(|name| name.to_string())
        .collect();

    invalid.extend(
        PAYLOAD_NUMBER_FIELDS
            .iter()
            .filter(|name| !is_absent_or_number(object, name))
            .map(|name| name.to_string()),
    );

    if !is_absent_or_string(object, "aud") && !is_string_array(object, "aud") {
        invalid.push("aud".to_string());
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(InvalidTokenError::InvalidFields {
            part,
            fields: invalid,
        })
    }
}

fn as_object(value: &Value, part: usize) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or(InvalidTokenError::NotAnObject { part })
}

fn is_absent_or_string(object: &Map<String, Value>, name: &str) -> bool {
    matches!(object.get(name), None | Some(Value::String(_)))
}

fn is_absent_or_number(object: &Map<String, Value>, name: &str) -> bool {
    matches!(object.get(name), None | Some(Value::Number(_)))
}

fn is_string_array(object: &Map<String, Value>, name: &str) -> bool {
    match object.get(name) {
        Some(Value::Array(items)) => items.iter().all(|item| matches!(item, Value::String(_))),
        _ => false,
    }
}
