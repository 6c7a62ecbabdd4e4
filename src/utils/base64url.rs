/// Base64URL encoding/decoding per RFC 4648
/// Padding optional on decode; `+`/`/` accepted alongside `-`/`_`
use crate::error::DecodeError;

const BASE64URL_CHARSET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const BASE64_STANDARD_CHARSET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Encode bytes to Base64URL string (no padding)
pub fn encode_bytes(input: &[u8]) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut result = Vec::new();
    let mut i = 0;

    // Process 3 bytes at a time
    while i + 2 < input.len() {
        let b1 = input[i];
        let b2 = input[i + 1];
        let b3 = input[i + 2];

        result.push(BASE64URL_CHARSET[(b1 >> 2) as usize]);
        result.push(BASE64URL_CHARSET[(((b1 & 0x03) << 4) | (b2 >> 4)) as usize]);
        result.push(BASE64URL_CHARSET[(((b2 & 0x0f) << 2) | (b3 >> 6)) as usize]);
        result.push(BASE64URL_CHARSET[(b3 & 0x3f) as usize]);

        i += 3;
    }

    // Handle remaining bytes
    if i < input.len() {
        let b1 = input[i];
        result.push(BASE64URL_CHARSET[(b1 >> 2) as usize]);

        if i + 1 < input.len() {
            let b2 = input[i + 1];
            result.push(BASE64URL_CHARSET[(((b1 & 0x03) << 4) | (b2 >> 4)) as usize]);
            result.push(BASE64URL_CHARSET[((b2 & 0x0f) << 2) as usize]);
        } else {
            result.push(BASE64URL_CHARSET[((b1 & 0x03) << 4) as usize]);
        }
    }

    // Base64URL charset contains only ASCII characters, so UTF-8 conversion is always safe
    String::from_utf8(result).expect("Base64URL encoding should produce valid UTF-8")
}

/// Encode string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode Base64URL string to bytes
///
/// Trailing `=` padding is accepted but not required. The length check runs
/// twice: once on the input as given (a padded string of length 4k+1 can
/// never be valid) and once after padding is stripped.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, DecodeError> {
    if input.len() % 4 == 1 {
        return Err(DecodeError::IncorrectLength);
    }

    let stripped = input.trim_end_matches('=');
    if stripped.len() % 4 == 1 {
        return Err(DecodeError::IncorrectLength);
    }
    if stripped.is_empty() {
        return Ok(Vec::new());
    }

    // Build reverse lookup table over the standard alphabet, with the
    // URL-safe aliases mapped to the same values
    let mut lookup = [0xffu8; 256];
    for (i, &c) in BASE64_STANDARD_CHARSET.iter().enumerate() {
        lookup[c as usize] = i as u8;
    }
    lookup[b'-' as usize] = 62;
    lookup[b'_' as usize] = 63;

    let mut result = Vec::with_capacity(stripped.len() / 4 * 3 + 2);

    // Groups of 4 symbols; the final group may hold 2 or 3 (never 1, per
    // the length checks above)
    for group in stripped.as_bytes().chunks(4) {
        let mut values = [0u8; 4];
        for (i, &c) in group.iter().enumerate() {
            let v = lookup[c as usize];
            if v == 0xff {
                return Err(DecodeError::InvalidCharacter(c as char));
            }
            values[i] = v;
        }

        result.push((values[0] << 2) | (values[1] >> 4));
        if group.len() > 2 {
            result.push((values[1] & 0x0f) << 4 | values[2] >> 2);
        }
        if group.len() > 3 {
            result.push((values[2] & 0x03) << 6 | values[3]);
        }
    }

    Ok(result)
}

/// Decode Base64URL string to text
///
/// The decoded bytes are reinterpreted as UTF-8 so that multi-byte
/// sequences come back as proper characters. Invalid UTF-8 degrades to a
/// byte-per-char string instead of failing; a segment that decodes to raw
/// binary is still returned to the caller.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    let bytes = decode_bytes(input)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let tests = vec![
            "",
            "f",
            "fo",
            "foo",
            "foob",
            "fooba",
            "foobar",
            "Hello, World!",
            "The quick brown fox jumps over the lazy dog",
            "üñïçödé ♥ テスト",
        ];

        for test in tests {
            let encoded = encode(test);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(test, decoded, "Roundtrip failed for: {}", test);
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_decode_with_and_without_padding() {
        assert_eq!(decode_bytes("Zg").unwrap(), b"f");
        assert_eq!(decode_bytes("Zg==").unwrap(), b"f");
        assert_eq!(decode_bytes("Zm8").unwrap(), b"fo");
        assert_eq!(decode_bytes("Zm8=").unwrap(), b"fo");
        assert_eq!(decode_bytes("Zm9v").unwrap(), b"foo");
    }

    #[test]
    fn test_decode_incorrect_length() {
        assert_eq!(decode_bytes("A"), Err(DecodeError::IncorrectLength));
        assert_eq!(decode_bytes("Zm9vY"), Err(DecodeError::IncorrectLength));
        // Padded to a plausible length but 4k+1 once stripped
        assert_eq!(decode_bytes("Zm9vY==="), Err(DecodeError::IncorrectLength));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(decode_bytes("!!!!"), Err(DecodeError::InvalidCharacter('!')));
        // '=' is only padding when trailing
        assert_eq!(decode_bytes("Z=9v"), Err(DecodeError::InvalidCharacter('=')));
    }

    #[test]
    fn test_decode_accepts_both_alphabets() {
        // 0xfb 0xff encodes to "-_8" url-safe, "+/8" standard
        assert_eq!(decode_bytes("-_8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_bytes("+/8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), "");
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_invalid_utf8_degrades() {
        // 0xff 0xfe is not valid UTF-8; each byte comes back as a char
        let encoded = encode_bytes(&[0xff, 0xfe]);
        let decoded = decode(&encoded).unwrap();
        let chars: Vec<char> = decoded.chars().collect();
        assert_eq!(chars, vec!['\u{ff}', '\u{fe}']);
    }

    #[test]
    fn test_url_safe_characters() {
        let bytes = vec![0xfb, 0xff];
        let encoded = encode_bytes(&bytes);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn test_multibyte_utf8() {
        let text = "José González 日本語";
        let decoded = decode(&encode(text)).unwrap();
        assert_eq!(decoded, text);
    }
}
