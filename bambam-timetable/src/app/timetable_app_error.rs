use crate::{feed::FeedError, import::ImportError};

#[derive(thiserror::Error, Debug)]
pub enum TimetableAppError {
    #[error("{0}")]
    ConfigurationError(String),
    #[error("failure reading transit feed: {0}")]
    FeedError(#[from] FeedError),
    #[error("failure importing timetable: {0}")]
    ImportError(#[from] ImportError),
    #[error("failure writing import summary: {0}")]
    SummaryError(#[from] serde_json::Error),
}

#[cfg(test)]
mod test {
    use super::TimetableAppError;

    #[test]
    fn test_serialization_failure_is_a_summary_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{")
            .expect_err("test invariant failed: truncated json should not parse");
        let error = TimetableAppError::from(json_error);
        assert!(matches!(error, TimetableAppError::SummaryError(_)));
        assert!(error
            .to_string()
            .starts_with("failure writing import summary: "));
    }
}
