//! flight-search-e2e: browser-driven end-to-end suite for the flight-search
//! homepage.
//!
//! The crate is a thin page-object layer over `playwright-rs` plus the
//! supporting pieces a scenario harness needs: airport reference-data
//! lookup, run configuration, and browser-session bootstrap. The scenarios
//! themselves live in `tests/` as a cucumber suite.
//!
//! # Example
//!
//! ```ignore
//! use flight_search_e2e::{Direction, HomePage, RunConfig, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Session::launch(RunConfig::from_env()).await?;
//!     let (_context, page) = session.new_page().await?;
//!     let home = HomePage::attach(page).await;
//!
//!     home.open("https://www.kiwi.com/en/").await?;
//!     home.accept_cookies().await?;
//!     home.select_one_way_trip().await?;
//!     home.set_airport("JFK", Direction::Departure).await?;
//!     home.set_airport("LAX", Direction::Arrival).await?;
//!     home.set_departure_time(3).await?;
//!     home.uncheck_accommodation_addon().await?;
//!     home.click_search().await?;
//!
//!     session.close().await?;
//!     Ok(())
//! }
//! ```

pub mod airports;
pub mod config;
mod error;
pub mod pages;
pub mod session;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use pages::{Direction, HomePage, expect_url};
pub use session::Session;
