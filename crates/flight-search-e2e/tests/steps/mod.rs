//! Step bindings for the basic-search scenario.
//!
//! Each binding dispatches to exactly one page-object call; errors propagate
//! raw so the runner attributes the failure to the step that produced it.

use std::time::Duration;

use cucumber::{given, then, when};
use flight_search_e2e::{Direction, expect_url};
use regex::Regex;

use crate::world::FlightSearchWorld;

/// Bound on the navigation to the results page.
const RESULTS_TIMEOUT: Duration = Duration::from_secs(5);

#[given(expr = "As an not logged user I navigate to homepage {string}")]
async fn navigate_home(world: &mut FlightSearchWorld, url: String) -> anyhow::Result<()> {
    world.home.open(&url).await?;
    world.home.accept_cookies().await?;
    Ok(())
}

#[when(expr = "I select one-way trip type")]
async fn select_one_way_trip(world: &mut FlightSearchWorld) -> anyhow::Result<()> {
    world.home.select_one_way_trip().await?;
    Ok(())
}

#[when(expr = "Set as departure airport {string}")]
async fn set_departure_airport(world: &mut FlightSearchWorld, code: String) -> anyhow::Result<()> {
    world.home.set_airport(&code, Direction::Departure).await?;
    Ok(())
}

#[when(expr = "Set as arrival airport {string}")]
async fn set_arrival_airport(world: &mut FlightSearchWorld, code: String) -> anyhow::Result<()> {
    world.home.set_airport(&code, Direction::Arrival).await?;
    Ok(())
}

#[when(expr = "Set the departure time {int} weeks in the future starting current date")]
async fn set_departure_time(world: &mut FlightSearchWorld, weeks: i64) -> anyhow::Result<()> {
    world.home.set_departure_time(weeks).await?;
    Ok(())
}

#[when(expr = r#"Uncheck the "Check accommodation with booking.com" option"#)]
async fn uncheck_accommodation(world: &mut FlightSearchWorld) -> anyhow::Result<()> {
    world.home.uncheck_accommodation_addon().await?;
    Ok(())
}

#[when(expr = "Click the search button")]
async fn click_search_button(world: &mut FlightSearchWorld) -> anyhow::Result<()> {
    world.home.click_search().await?;
    Ok(())
}

#[then(expr = "I am redirected to search results page")]
async fn redirected_to_search_results(world: &mut FlightSearchWorld) -> anyhow::Result<()> {
    let pattern = Regex::new(r"(?i)/search/results")?;
    expect_url(&world.page, &pattern, RESULTS_TIMEOUT).await?;
    Ok(())
}
