//! Bearer token expiry checks
//!
//! Tokens are three dot-separated segments; the middle one is base64 JSON
//! carrying an `exp` claim in seconds since the epoch. Anything that cannot
//! be read that way is treated as expired.

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;

/// Standard alphabet, padding optional
const CLAIMS_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Why a token could not be read
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("expected 3 segments, found {0}")]
    SegmentCount(usize),

    #[error("claims segment is not valid base64")]
    Encoding,

    #[error("claims segment is not JSON")]
    NotJson,

    #[error("claims are not a JSON object")]
    NotAMapping,

    #[error("no numeric exp claim")]
    MissingExpiry,
}

/// Result of inspecting a token at a point in time
#[derive(Debug, Clone, PartialEq)]
pub enum TokenStatus {
    /// `exp` (seconds) is not before the check time
    Valid { expires_at: f64 },
    /// `exp` (seconds) is before the check time
    Expired { expires_at: f64 },
    /// The token could not be decoded
    Malformed(MalformedReason),
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Read the `exp` claim without checking it against any clock
pub fn expiry(token: &str) -> Result<f64, MalformedReason> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(MalformedReason::SegmentCount(segments.len()));
    }

    let raw = CLAIMS_ENGINE
        .decode(segments[1])
        .map_err(|_| MalformedReason::Encoding)?;
    let claims: Value = serde_json::from_slice(&raw).map_err(|_| MalformedReason::NotJson)?;
    let claims = claims.as_object().ok_or(MalformedReason::NotAMapping)?;

    claims
        .get("exp")
        .and_then(Value::as_f64)
        .ok_or(MalformedReason::MissingExpiry)
}

/// Inspect a token against `now_millis`
#[allow(clippy::cast_precision_loss)]
pub fn inspect(token: &str, now_millis: i64) -> TokenStatus {
    match expiry(token) {
        Ok(expires_at) if expires_at * 1000.0 < now_millis as f64 => {
            TokenStatus::Expired { expires_at }
        }
        Ok(expires_at) => TokenStatus::Valid { expires_at },
        Err(reason) => TokenStatus::Malformed(reason),
    }
}

/// Whether the token is unusable at `now_millis`; fails closed
pub fn is_expired_at(token: &str, now_millis: i64) -> bool {
    !inspect(token, now_millis).is_valid()
}

/// Whether the token is unusable right now; fails closed
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_millis())
}

/// Wall clock in milliseconds since the epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const NOW_MS: i64 = 1_700_000_000_000;
    const NOW_S: i64 = NOW_MS / 1000;

    fn forge(claims: &Value) -> String {
        let header = CLAIMS_ENGINE.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = CLAIMS_ENGINE.encode(claims.to_string());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn test_future_token_is_valid() {
        let token = forge(&json!({"sub": 7, "exp": NOW_S + 3600}));
        assert!(!is_expired_at(&token, NOW_MS));
        assert_eq!(
            inspect(&token, NOW_MS),
            TokenStatus::Valid {
                expires_at: (NOW_S + 3600) as f64
            }
        );
    }

    #[test]
    fn test_token_ten_seconds_old_is_expired() {
        let token = forge(&json!({"exp": NOW_S - 10}));
        assert!(is_expired_at(&token, NOW_MS));
    }

    #[test]
    fn test_exp_exactly_now_is_still_valid() {
        let token = forge(&json!({"exp": NOW_S}));
        assert!(!is_expired_at(&token, NOW_MS));
        assert!(is_expired_at(&token, NOW_MS + 1));
    }

    #[test]
    fn test_fractional_exp_is_read() {
        let token = forge(&json!({"exp": 1.5}));
        assert!(!is_expired_at(&token, 1_499));
        assert!(is_expired_at(&token, 1_501));
    }

    #[test]
    fn test_unpadded_segment_decodes() {
        let payload = CLAIMS_ENGINE.encode(json!({"exp": NOW_S + 60, "sub": "ab"}).to_string());
        assert!(payload.ends_with('='));
        let token = format!("h.{}.s", payload.trim_end_matches('='));
        assert!(!is_expired_at(&token, NOW_MS));
    }

    #[test]
    fn test_missing_exp_fails_closed() {
        let token = forge(&json!({"sub": "user"}));
        assert!(is_expired_at(&token, NOW_MS));
        assert_eq!(
            inspect(&token, NOW_MS),
            TokenStatus::Malformed(MalformedReason::MissingExpiry)
        );
    }

    #[test]
    fn test_non_numeric_exp_fails_closed() {
        let token = forge(&json!({"exp": "tomorrow"}));
        assert!(is_expired_at(&token, NOW_MS));
    }

    #[test]
    fn test_malformed_tokens_fail_closed() {
        let array_claims = format!("h.{}.s", CLAIMS_ENGINE.encode("[1,2,3]"));
        let not_json = format!("h.{}.s", CLAIMS_ENGINE.encode("exp=5"));
        let cases = [
            ("", MalformedReason::SegmentCount(1)),
            ("abc", MalformedReason::SegmentCount(1)),
            ("a.b", MalformedReason::SegmentCount(2)),
            ("a.b.c.d", MalformedReason::SegmentCount(4)),
            ("h.!!!.s", MalformedReason::Encoding),
            (not_json.as_str(), MalformedReason::NotJson),
            (array_claims.as_str(), MalformedReason::NotAMapping),
        ];

        for (token, reason) in cases {
            assert!(is_expired_at(token, NOW_MS), "{token:?} should be expired");
            assert_eq!(inspect(token, NOW_MS), TokenStatus::Malformed(reason));
        }
    }

    #[test]
    fn test_url_safe_characters_are_rejected() {
        // '-' and '_' are outside the standard alphabet
        assert!(is_expired_at("h.eyJleHAiOjk5OTk5OTk5OTl9-_.s", NOW_MS));
    }

    #[test]
    fn test_wall_clock_check() {
        let token = forge(&json!({"exp": now_millis() / 1000 + 600}));
        assert!(!is_expired(&token));
        let token = forge(&json!({"exp": now_millis() / 1000 - 600}));
        assert!(is_expired(&token));
    }

    proptest! {
        #[test]
        fn prop_past_exp_is_expired(exp in 0i64..NOW_S) {
            let token = forge(&json!({"exp": exp}));
            prop_assert!(is_expired_at(&token, NOW_MS));
        }

        #[test]
        fn prop_future_exp_is_valid(exp in (NOW_S + 1)..(NOW_S + 10 * 365 * 24 * 3600)) {
            let token = forge(&json!({"exp": exp}));
            prop_assert!(!is_expired_at(&token, NOW_MS));
        }

        #[test]
        fn prop_arbitrary_strings_never_panic(token in "\\PC*") {
            // Whatever the input, the answer is a plain bool
            let _ = is_expired_at(&token, NOW_MS);
        }

        #[test]
        fn prop_non_three_segment_strings_are_expired(token in "[A-Za-z0-9+/=]{0,40}(\\.[A-Za-z0-9+/=]{0,40}){0,1}") {
            prop_assert!(is_expired_at(&token, NOW_MS));
        }
    }
}
