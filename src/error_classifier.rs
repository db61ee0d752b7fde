use crate::catalog::error::CatalogError;
use crate::logging::LogLevel;

/// Picks the activity-log level for a failed catalog call.
#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &CatalogError) -> LogLevel {
        match error {
            // Non-critical: Temporary server issues
            CatalogError::Http { status, .. } if *status == 429 => LogLevel::Debug,
            CatalogError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Critical: the request itself is wrong, or the payload is not what we expect
            CatalogError::Http { status, .. } if (400..=499).contains(status) => LogLevel::Error,
            CatalogError::Decode(_) => LogLevel::Error,

            // Network issues - usually temporary
            _ => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> CatalogError {
        CatalogError::Http {
            status,
            message: String::new(),
        }
    }

    #[test]
    fn test_classify_fetch_error() {
        let classifier = ErrorClassifier::new();
        assert_eq!(classifier.classify_fetch_error(&http(429)), LogLevel::Debug);
        assert_eq!(classifier.classify_fetch_error(&http(502)), LogLevel::Warn);
        assert_eq!(classifier.classify_fetch_error(&http(403)), LogLevel::Error);
        assert_eq!(classifier.classify_fetch_error(&http(304)), LogLevel::Warn);

        let decode = serde_json::from_str::<u32>("nope").unwrap_err();
        assert_eq!(
            classifier.classify_fetch_error(&CatalogError::Decode(decode)),
            LogLevel::Error
        );
    }
}
