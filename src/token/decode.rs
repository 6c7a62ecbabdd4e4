use crate::claims::{validate_header_shape, validate_payload_shape};
use crate::error::{InvalidTokenError, Result};
use crate::token::DecodeOptions;
use crate::utils::base64url;
use serde_json::Value;

/// Decode one segment of a JWT without verifying its signature
///
/// Splits the token on `.`, selects the payload segment (or the header
/// segment with [`DecodeOptions::header`]), base64url-decodes it, and
/// parses the result as JSON. With [`DecodeOptions::validate`] the
/// well-known fields of the selected segment are also shape-checked.
///
/// The signature segment is never touched. Nothing about the returned
/// value should be trusted for authorization decisions; this is a decode,
/// not a verification.
///
/// # Arguments
/// * `token` - The JWT string in format "header.payload.signature"
/// * `options` - Segment selection and validation flags
///
/// # Example
/// ```
/// use jwtpeek::{decode, DecodeOptions};
///
/// let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
///              eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
///              SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
///
/// let payload = decode(token, &DecodeOptions::new()).unwrap();
/// assert_eq!(payload["sub"], "1234567890");
///
/// let header = decode(token, &DecodeOptions::new().header()).unwrap();
/// assert_eq!(header["alg"], "HS256");
/// ```
///
/// # Errors
/// Returns [`InvalidTokenError`] when the selected segment is missing, is
/// not valid base64url, is not valid JSON, or (with validation enabled)
/// carries well-known fields with implausible types. Every error names the
/// 1-based part number (1 = header, 2 = payload).
pub fn decode(token: &str, options: &DecodeOptions) -> Result<Value> {
    let pos = if options.header { 0 } else { 1 };
    let part = pos + 1;

    let segment = token
        .split('.')
        .nth(pos)
        .ok_or(InvalidTokenError::MissingPart(part))?;

    let decoded = base64url::decode(segment)
        .map_err(|source| InvalidTokenError::InvalidBase64 { part, source })?;

    let parsed: Value = serde_json::from_str(&decoded).map_err(|err| {
        InvalidTokenError::InvalidJson {
            part,
            message: err.to_string(),
        }
    })?;

    if options.validate {
        if options.header {
            validate_header_shape(&parsed, part)?;
        } else {
            validate_payload_shape(&parsed, part)?;
        }
    }

    Ok(parsed)
}
