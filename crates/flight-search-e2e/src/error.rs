// Error types for the flight-search suite

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the flight-search page
#[derive(Debug, Error)]
pub enum Error {
    /// Airport code has no entry in the reference dataset
    ///
    /// Absence of a match is a named failure, never a silent default.
    #[error("airport code not found in reference data: {0}")]
    AirportNotFound(String),

    /// The reference dataset could not be read
    #[error("failed to read airport reference data at '{path}'")]
    AirportDataUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reference dataset is not the expected code → record mapping
    #[error("malformed airport reference data at '{path}'")]
    AirportDataMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Direction string outside the {departure, arrival} set
    #[error("invalid direction '{0}': expected 'departure' or 'arrival'")]
    InvalidDirection(String),

    /// Page URL never matched the expected pattern within the bound
    #[error("page url '{url}' did not match '{pattern}' within {timeout:?}")]
    UrlTimeout {
        pattern: String,
        url: String,
        timeout: std::time::Duration,
    },

    /// Error propagated from the browser-automation driver
    #[error(transparent)]
    Driver(#[from] playwright_rs::Error),
}

impl Error {
    /// True for the timeout family of driver errors.
    ///
    /// Used by the cookie-acceptance step, which tolerates a banner that
    /// never appears but must still propagate every other failure.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::UrlTimeout { .. }
                | Error::Driver(
                    playwright_rs::Error::Timeout(_)
                        | playwright_rs::Error::AssertionTimeout(_)
                        | playwright_rs::Error::NavigationTimeout { .. }
                )
        )
    }
}
