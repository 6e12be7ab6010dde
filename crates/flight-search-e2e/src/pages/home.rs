// Homepage page object
//
// Wraps one Page in a set of lazy locator descriptors and exposes one
// operation per user-visible interaction on the search form. Each descriptor
// resolves against current DOM state at call time; the struct itself holds
// no UI state.
//
// Ordering is not enforced here. Calling operations out of the scenario's
// natural sequence simply risks a bounded wait failing against an element
// that is not yet in the expected state; sequencing is the step layer's job.

use std::str::FromStr;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use playwright_rs::{CheckOptions, ClickOptions, Locator, Page, expect};
use tracing::error;

use crate::airports;
use crate::error::{Error, Result};

/// Bounded wait for the cookie-consent banner. Its expiry is tolerated.
const COOKIE_BANNER_TIMEOUT: Duration = Duration::from_secs(5);
/// Bounded wait for the server-driven autocomplete suggestions.
const SUGGESTION_TIMEOUT: Duration = Duration::from_secs(10);
/// Bounded wait for the date-picker panel and its day cells.
const DATE_PICKER_TIMEOUT: Duration = Duration::from_secs(5);

/// Which side of the trip an airport belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Departure,
    Arrival,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "departure" => Ok(Direction::Departure),
            "arrival" => Ok(Direction::Arrival),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

/// Page object for the flight-search homepage.
pub struct HomePage {
    page: Page,
    cookies_accept: Locator,
    return_toggle: Locator,
    one_way_option: Locator,
    departure_input: Locator,
    arrival_input: Locator,
    suggestion_rows: Locator,
    departure_chip: Locator,
    arrival_chip: Locator,
    date_input: Locator,
    date_picker: Locator,
    set_dates: Locator,
    accommodation_checkbox: Locator,
    search_button: Locator,
}

impl HomePage {
    /// Binds the page object to a page session.
    ///
    /// Locators are lazy selector descriptors, not live element handles;
    /// building them here does not touch the DOM.
    pub async fn attach(page: Page) -> Self {
        let cookies_accept = page.locator(r#"role=button[name="Accept"]"#).await;
        let return_toggle = page.locator(r#"role=button[name="Return"]"#).await;
        let one_way_option = page.locator(r#"[data-test="ModePopupOption-oneWay"]"#).await;
        let departure_input = page
            .locator(r#"[data-test="PlacePickerInput-origin"] input"#)
            .await;
        let arrival_input = page
            .locator(r#"[data-test="PlacePickerInput-destination"] input"#)
            .await;
        let suggestion_rows = page.locator(r#"[data-test="PlacePickerRow-station"]"#).await;
        let departure_chip = page
            .locator(r#"[data-test="PlacePickerInput-origin"] [data-test="PlacePickerInputPlace"]"#)
            .await;
        let arrival_chip = page
            .locator(
                r#"[data-test="PlacePickerInput-destination"] [data-test="PlacePickerInputPlace"]"#,
            )
            .await;
        let date_input = page.locator(r#"[data-test="SearchDateInput"]"#).await;
        let date_picker = page.locator(r#"[data-test="NewDatePickerOpen"]"#).await;
        let set_dates = page.locator(r#"role=button[name="Set dates"]"#).await;
        let accommodation_checkbox = page
            .locator(r#"role=checkbox[name=/check accommodation with/i]"#)
            .await;
        let search_button = page.locator(r#"[data-test="LandingSearchButton"]"#).await;

        Self {
            page,
            cookies_accept,
            return_toggle,
            one_way_option,
            departure_input,
            arrival_input,
            suggestion_rows,
            departure_chip,
            arrival_chip,
            date_input,
            date_picker,
            set_dates,
            accommodation_checkbox,
            search_button,
        }
    }

    /// Navigates the page session to `url`.
    pub async fn open(&self, url: &str) -> Result<()> {
        self.page.goto(url, None).await?;
        Ok(())
    }

    /// Dismisses the cookie-consent banner if it shows up within the bound.
    ///
    /// A banner that never appears is not an error: the wait's timeout is
    /// logged and the test proceeds. Any other failure still propagates.
    pub async fn accept_cookies(&self) -> Result<()> {
        let appeared = expect(self.cookies_accept.clone())
            .with_timeout(COOKIE_BANNER_TIMEOUT)
            .to_be_visible()
            .await;

        match appeared {
            Ok(()) => {
                self.cookies_accept.click(None).await?;
                Ok(())
            }
            Err(err) => {
                let err = Error::from(err);
                if err.is_timeout() {
                    error!("cookie banner not found, continuing the test");
                    Ok(())
                } else {
                    Err(err)
                }
            }
        }
    }

    /// Switches the trip type to one-way.
    ///
    /// Two-step toggle: open the trip-type popup via the "Return" toggle,
    /// then pick the one-way option. The toggle sits under a fixed-position
    /// overlay, so the first click is forced past the hit-target check.
    pub async fn select_one_way_trip(&self) -> Result<()> {
        let forced = ClickOptions::builder().force(true).build();
        self.return_toggle.click(Some(forced)).await?;
        self.one_way_option.click(None).await?;
        Ok(())
    }

    /// Fills the departure or arrival field with the airport matching `code`.
    ///
    /// Resolves the code to a display name, types the name, waits for the
    /// autocomplete to render, picks the first suggestion row containing the
    /// name, then asserts the selection chip shows the uppercased code.
    pub async fn set_airport(&self, code: &str, direction: Direction) -> Result<()> {
        let airport_name = airports::airport_name(code)?;
        let code_text = code.to_uppercase();

        let (input, chip) = match direction {
            Direction::Departure => (&self.departure_input, &self.departure_chip),
            Direction::Arrival => (&self.arrival_input, &self.arrival_chip),
        };

        input.clear(None).await?;
        input.click(None).await?;
        input.fill(&airport_name, None).await?;

        expect(self.suggestion_rows.first())
            .with_timeout(SUGGESTION_TIMEOUT)
            .to_be_visible()
            .await?;

        // Case-sensitive substring match on the resolved name; the name may
        // contain characters the text engine treats as syntax, so it is
        // escaped into a regex.
        let target_row = self
            .suggestion_rows
            .locator(&format!("text=/{}/", regex::escape(&airport_name)))
            .first();
        expect(target_row.clone())
            .with_timeout(SUGGESTION_TIMEOUT)
            .to_be_visible()
            .await?;
        target_row.click(None).await?;

        expect(chip.clone()).to_be_visible().await?;
        expect(chip.clone()).to_contain_text(&code_text).await?;
        Ok(())
    }

    /// Picks the departure date `weeks` weeks from today.
    ///
    /// A day cell that never becomes visible means the requested date is
    /// outside the picker's rendered range: callers should read the timeout
    /// as "date not selectable", not as a transient failure.
    pub async fn set_departure_time(&self, weeks: i64) -> Result<()> {
        let target = departure_date(Local::now().date_naive(), weeks);
        let target_value = target.format("%Y-%m-%d").to_string();

        self.date_input.click(None).await?;

        expect(self.date_picker.clone())
            .with_timeout(DATE_PICKER_TIMEOUT)
            .to_be_visible()
            .await?;

        let day_cell = self
            .date_picker
            .locator(&format!(r#"[data-value="{target_value}"]"#));
        expect(day_cell.clone())
            .with_timeout(DATE_PICKER_TIMEOUT)
            .to_be_visible()
            .await?;
        day_cell.click(None).await?;

        self.set_dates.click(None).await?;
        Ok(())
    }

    /// Unchecks the accommodation add-on and verifies the resulting state.
    ///
    /// The checkbox is visually obscured by its styled label, so the uncheck
    /// is forced past the actionability checks.
    pub async fn uncheck_accommodation_addon(&self) -> Result<()> {
        let forced = CheckOptions::builder().force(true).build();
        self.accommodation_checkbox.uncheck(Some(forced)).await?;

        expect(self.accommodation_checkbox.clone())
            .to_be_unchecked()
            .await?;
        Ok(())
    }

    /// Triggers the search. Success is observed via the ensuing navigation.
    pub async fn click_search(&self) -> Result<()> {
        self.search_button.click(None).await?;
        Ok(())
    }

    /// Current page URL.
    pub fn url(&self) -> String {
        self.page.url()
    }
}

impl std::fmt::Debug for HomePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HomePage")
            .field("url", &self.page.url())
            .finish()
    }
}

/// Target departure date: `today` plus `weeks` whole weeks.
///
/// Computed from the caller-supplied "today" so consecutive-day runs shift
/// the target accordingly; nothing is cached.
pub fn departure_date(today: NaiveDate, weeks: i64) -> NaiveDate {
    today + chrono::Duration::weeks(weeks)
}
