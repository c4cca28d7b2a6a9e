use serde_json::Value;

/// Exponential backoff delay in milliseconds for a zero-based attempt count.
/// No jitter and no cap; callers bound the attempt count themselves.
pub fn calculate_backoff_delay(attempt: u32, base_delay_ms: u64) -> u64 {
    base_delay_ms.saturating_mul(2u64.saturating_pow(attempt))
}

/// True when the host-supplied response object reports a 2xx status. A missing
/// response or a non-integer `statusCode` counts as failure.
pub fn is_http_success(response: Option<&Value>) -> bool {
    response
        .and_then(|r| r.get("statusCode"))
        .and_then(Value::as_i64)
        .map(|status| (200..300).contains(&status))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_BASE_DELAY_MS;
    use serde_json::json;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        assert_eq!(calculate_backoff_delay(0, DEFAULT_BASE_DELAY_MS), 1000);
        assert_eq!(calculate_backoff_delay(1, DEFAULT_BASE_DELAY_MS), 2000);
        assert_eq!(calculate_backoff_delay(3, DEFAULT_BASE_DELAY_MS), 8000);
        assert_eq!(calculate_backoff_delay(2, 250), 1000);
    }

    #[test]
    fn test_backoff_saturates_instead_of_overflowing() {
        assert_eq!(calculate_backoff_delay(200, DEFAULT_BASE_DELAY_MS), u64::MAX);
    }

    #[test]
    fn test_is_http_success() {
        assert!(is_http_success(Some(&json!({"statusCode": 200}))));
        assert!(is_http_success(Some(&json!({"statusCode": 204}))));
        assert!(!is_http_success(Some(&json!({"statusCode": 300}))));
        assert!(!is_http_success(Some(&json!({"statusCode": 404}))));
        assert!(!is_http_success(Some(&json!({"body": "ok"}))));
        assert!(!is_http_success(None));
    }
}
