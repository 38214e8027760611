//! Bearer Token Decoding
//!
//! The API issues JWTs; the client only reads the payload for display and to
//! know which user id to query with. Signatures are not verified here, the
//! server remains the authority on every call.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Claims carried in the token payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (the account e-mail)
    pub sub: String,
    /// Numeric user id
    pub id: u64,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
}

/// Decode the claims of a JWT without verifying its signature.
///
/// Any malformed token is an error; callers treat that the same as having no
/// session at all.
pub fn decode_claims(token: &str) -> Result<Claims, String> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err("token is not a three-part JWT".to_string()),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| e.to_string())?;
    serde_json::from_slice(&bytes).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload);
        format!("{}.{}.signature", header, body)
    }

    #[test]
    fn decodes_valid_claims() {
        let token =
            make_token(r#"{"sub":"ana@example.com","id":7,"iat":1700000000,"exp":1700086400}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "ana@example.com");
        assert_eq!(claims.id, 7);
        assert_eq!(claims.iat, 1700000000);
        assert_eq!(claims.exp, 1700086400);
    }

    #[test]
    fn rejects_token_without_three_parts() {
        assert!(decode_claims("only-one-part").is_err());
        assert!(decode_claims("two.parts").is_err());
        assert!(decode_claims("a.b.c.d").is_err());
    }

    #[test]
    fn rejects_payload_that_is_not_base64() {
        assert!(decode_claims("header.@@not-base64@@.sig").is_err());
    }

    #[test]
    fn rejects_payload_with_missing_fields() {
        let token = make_token(r#"{"sub":"ana@example.com"}"#);
        assert!(decode_claims(&token).is_err());
    }
}
