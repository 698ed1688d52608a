use reqwest::StatusCode;
use thiserror::Error;

/// Failures while fetching weather data or delivering a report.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure on an outbound call.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The weather endpoint answered with something other than 200 OK.
    #[error("weather endpoint returned HTTP {0}")]
    Status(StatusCode),

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configuration value could not be used, e.g. an unparsable proxy URL.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Process exit code for this failure kind. Each kind gets its own code
    /// so callers (cron jobs, shell wrappers) can tell them apart.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            Error::Network(_) => 3,
            Error::Status(_) => 4,
            Error::Decode(_) => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            Error::Config("bad proxy".into()),
            Error::Status(StatusCode::INTERNAL_SERVER_ERROR),
            Error::Decode(json_err),
        ];

        let codes: HashSet<u8> = errors.iter().map(Error::exit_code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }
}
