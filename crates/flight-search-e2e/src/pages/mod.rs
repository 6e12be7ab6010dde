//! Page objects for the flight-search site.

pub mod home;

pub use home::{Direction, HomePage};

use std::time::Duration;

use playwright_rs::Page;
use regex::Regex;

use crate::error::{Error, Result};

/// Polling interval for page-level waits, matching the driver's assertion
/// cadence.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Waits until the page URL matches `pattern`, polling up to `timeout`.
///
/// The driver's `expect` API covers element state only, so the
/// navigation-outcome assertion gets the same retry loop at page level.
pub async fn expect_url(page: &Page, pattern: &Regex, timeout: Duration) -> Result<()> {
    let start = std::time::Instant::now();

    loop {
        let url = page.url();
        if pattern.is_match(&url) {
            return Ok(());
        }

        if start.elapsed() >= timeout {
            return Err(Error::UrlTimeout {
                pattern: pattern.to_string(),
                url,
                timeout,
            });
        }

        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
