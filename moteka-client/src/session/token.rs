//! Token freshness
//!
//! The backend issues JWTs; the client never verifies signatures, it
//! only reads the expiry claim. Anything that does not decode is
//! treated as expired (fail closed).

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Session validity, as judged from the stored token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionValidity {
    /// No token stored
    Missing,
    /// Token stored but past its expiry claim, or undecodable
    Expired,
    /// Token stored and fresh
    Valid,
}

/// Extract the `exp` claim (Unix seconds) from a JWT.
///
/// JWT format: header.payload.signature, payload base64url without
/// padding. Returns `None` on any structural failure.
pub fn token_expires_at(token: &str) -> Option<i64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_i64()
}

/// Whether `token` is expired at `now` (Unix seconds).
///
/// Fail-closed: a token whose expiry cannot be read counts as expired.
pub fn is_token_expired(token: &str, now: i64) -> bool {
    match token_expires_at(token) {
        Some(exp) => now >= exp,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assemble an unsigned JWT around the given payload JSON.
    fn make_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.sig")
    }

    #[test]
    fn reads_exp_claim() {
        let token = make_token(r#"{"sub":"1","exp":1700000000}"#);
        assert_eq!(token_expires_at(&token), Some(1_700_000_000));
    }

    #[test]
    fn past_exp_is_expired_future_is_not() {
        let now = 1_700_000_000;
        let past = make_token(&format!(r#"{{"exp":{}}}"#, now - 1));
        let future = make_token(&format!(r#"{{"exp":{}}}"#, now + 3600));
        assert!(is_token_expired(&past, now));
        assert!(!is_token_expired(&future, now));
    }

    #[test]
    fn exp_equal_to_now_is_expired() {
        let now = 1_700_000_000;
        let token = make_token(&format!(r#"{{"exp":{now}}}"#));
        assert!(is_token_expired(&token, now));
    }

    #[test]
    fn structurally_invalid_tokens_fail_closed() {
        let now = 0;
        assert!(is_token_expired("", now));
        assert!(is_token_expired("not-a-jwt", now));
        assert!(is_token_expired("only.two", now));
        assert!(is_token_expired("a.%%%.c", now));

        let no_exp = make_token(r#"{"sub":"1"}"#);
        assert!(is_token_expired(&no_exp, now));

        let non_numeric = make_token(r#"{"exp":"soon"}"#);
        assert!(is_token_expired(&non_numeric, now));

        let not_json = format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(b"{}"),
            URL_SAFE_NO_PAD.encode(b"plain text")
        );
        assert!(is_token_expired(&not_json, now));
    }
}
