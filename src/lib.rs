//! # jwtpeek - Minimal, Unverified JWT Decoding
//!
//! > Decode and shape-check JSON Web Token (JWT) segments without verifying
//! > the signature.
//!
//! **jwtpeek** extracts the header or payload of a three-part JWT,
//! base64url-decodes it, parses the JSON, and can check that well-known
//! fields carry plausible types. It deliberately does *not* verify
//! signatures: it is a decoder for the many places (request logging, token
//! introspection tooling, middleware that routes on claims before a
//! verifier runs) where you need to look inside a token you have not, or
//! cannot, verify.
//!
//! ## Overview
//!
//! A JWT is three base64url segments joined by dots: header, payload,
//! signature. Decoding one is mostly bookkeeping, but the bookkeeping has
//! sharp edges: padding is usually omitted and must be tolerated, a
//! segment of length 4k+1 can never be valid, both the URL-safe and the
//! standard base64 alphabets show up in the wild, and payloads may carry
//! multi-byte UTF-8 or even raw binary. This crate handles those edges
//! precisely and surfaces everything else as a typed error naming the
//! offending part.
//!
//! ## Quick Start
//!
//! ```
//! use jwtpeek::{decode, DecodeOptions};
//!
//! let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
//!              eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
//!              SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
//!
//! // Payload (the default)
//! let payload = decode(token, &DecodeOptions::new()).unwrap();
//! assert_eq!(payload["name"], "John Doe");
//!
//! // Header, with shape validation
//! let header = decode(token, &DecodeOptions::new().header().validate()).unwrap();
//! assert_eq!(header["alg"], "HS256");
//! ```
//!
//! ## Decode Flow
//!
//! Each call is a single linear pipeline with early-exit failure:
//!
//! ```text
//! token string
//!     │ split on '.' and select part #1 (header) or #2 (payload)
//!     ▼
//! base64url segment
//!     │ decode (padding optional; '+'/'/' accepted alongside '-'/'_')
//!     ▼
//! decoded text (UTF-8, degrading to byte-per-char for raw binary)
//!     │ serde_json parse
//!     ▼
//! serde_json::Value
//!     │ optional shape validation for the selected segment
//!     ▼
//! returned to the caller
//! ```
//!
//! ## Shape Validation
//!
//! With [`DecodeOptions::validate`] enabled, the selected segment must be a
//! JSON object and its well-known fields, all optional, must have plausible
//! types:
//!
//! - header: `typ`, `alg`, `kid` — string
//! - payload: `iss`, `sub`, `jti` — string; `exp`, `nbf`, `iat` — number;
//!   `aud` — string or array of strings
//!
//! Every violating field in the segment is reported in one error.
//!
//! ## What This Crate Does Not Do
//!
//! No signature or HMAC verification, no expiry enforcement (compare `exp`
//! and `nbf` yourself against your clock policy), no JWE, no token
//! generation. A decoded token is untrusted data; never make an
//! authorization decision from it without a real verifier.
//!
//! ## References
//!
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 4648](https://datatracker.ietf.org/doc/html/rfc4648) — Base64url encoding

// Core modules
pub mod error;
pub mod utils;

// Shape validation for well-known fields
pub mod claims;

// Token decoding (main public API)
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use error::{DecodeError, InvalidTokenError, Result};
pub use token::{decode, DecodeOptions};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_flow_payload_with_validation() {
        let header = r#"{"alg":"HS256","typ":"JWT"}"#;
        let payload = r#"{"iss":"https://example.com","sub":"user123","exp":9999999999,"aud":["api","web"]}"#;
        let token = format!(
            "{}.{}.{}",
            utils::base64url::encode(header),
            utils::base64url::encode(payload),
            utils::base64url::encode("sig")
        );

        let decoded = decode(&token, &DecodeOptions::new().validate()).unwrap();
        assert_eq!(decoded["iss"], "https://example.com");
        assert_eq!(decoded["sub"], "user123");
        assert_eq!(decoded["aud"], json!(["api", "web"]));
    }

    #[test]
    fn test_full_flow_header_with_validation() {
        let header = r#"{"alg":"RS256","typ":"JWT","kid":"key-2024"}"#;
        let token = format!(
            "{}.{}.{}",
            utils::base64url::encode(header),
            utils::base64url::encode(r#"{"sub":"user"}"#),
            utils::base64url::encode("sig")
        );

        let decoded = decode(&token, &DecodeOptions::new().header().validate()).unwrap();
        assert_eq!(decoded["kid"], "key-2024");
    }

    #[test]
    fn test_error_surfaces_to_caller_as_typed_value() {
        let err = decode("not-a-jwt", &DecodeOptions::new()).unwrap_err();
        assert_eq!(err, InvalidTokenError::MissingPart(2));

        // And it is a std error with a readable message
        let err: Box<dyn std::error::Error> = Box::new(err);
        assert!(err.to_string().contains("part #2"));
    }
}
