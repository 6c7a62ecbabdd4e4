mod shape;

pub(crate) use shape::{validate_header_shape, validate_payload_shape};

/// Header fields validated when present: each must be a string
///
/// `typ` (token type), `alg` (signing algorithm), `kid` (key ID for JWKS
/// key selection) per RFC 7515.
pub const HEADER_STRING_FIELDS: [&str; 3] = ["typ", "alg", "kid"];

/// Payload fields that must be a string when present
///
/// `iss` (issuer), `sub` (subject), `jti` (JWT ID) per
/// [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1).
pub const PAYLOAD_STRING_FIELDS: [&str; 3] = ["iss", "sub", "jti"];

/// Payload fields that must be a number when present
///
/// `exp` (expiration), `nbf` (not before), `iat` (issued at), all seconds
/// since the Unix epoch. This crate checks the type only; comparing them
/// against the clock is the caller's job.
pub const PAYLOAD_NUMBER_FIELDS: [&str; 3] = ["exp", "nbf", "iat"];
