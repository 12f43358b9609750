use chrono::{DateTime, Utc};
use url::Url;

/// Best-effort URL parse: `None` on failure instead of an error, so one
/// junk `image`/`audio` string never sinks its whole record.
pub(crate) fn lenient_url(raw: &str) -> Option<Url> {
    Url::parse(raw).ok()
}

/// Millisecond epoch to UTC timestamp, truncated to whole seconds.
pub(crate) fn datetime_from_ms(ms: i64) -> DateTime<Utc> {
    // Out of range only beyond +/- ~262000 years; epoch is a safe fallback.
    DateTime::from_timestamp(ms / 1000, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_url_accepts_absolute_urls() {
        let url = lenient_url("http://x/cover.png").unwrap();
        assert_eq!(url.as_str(), "http://x/cover.png");
    }

    #[test]
    fn lenient_url_rejects_junk() {
        assert!(lenient_url("").is_none());
        assert!(lenient_url("not a url").is_none());
    }

    #[test]
    fn datetime_from_ms_truncates_to_seconds() {
        assert_eq!(datetime_from_ms(1_000_000).timestamp(), 1_000);
        assert_eq!(datetime_from_ms(1_999).timestamp(), 1);
        assert_eq!(datetime_from_ms(0).timestamp(), 0);
    }
}
