//! Selection and loading state of a calendar view.
//!
//! Every change of year or language starts a new request and hands out a
//! [`Ticket`]. A request is never cancelled; instead its completion is
//! applied only if its ticket is still the latest one and the selection it
//! was issued for is still the current selection.

use serde::Serialize;
use tracing::debug;

use hc_core::Year;
use hc_engine::{AggregateError, Language, NameTable, PeriodRules, YearDataset};
use hc_time::Date;

use crate::fetch::fetch_dataset;
use crate::source::MonthSource;

/// Identifies one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    year: Year,
    language: Language,
}

impl Ticket {
    /// Year the request was issued for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Language the request was issued for.
    pub fn language(&self) -> Language {
        self.language
    }
}

/// What a calendar view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarState {
    /// Selected year.
    pub year: Year,
    /// Selected language.
    pub language: Language,
    /// A request for the selection is in flight.
    pub loading: bool,
    /// Message of the last failed request.
    pub error: Option<String>,
    /// Dataset of the last successful request.
    pub dataset: Option<YearDataset>,
}

/// Owner of a [`CalendarState`].
#[derive(Debug, Clone)]
pub struct CalendarController {
    state: CalendarState,
    generation: u64,
}

impl CalendarController {
    /// A controller with `year` and `language` selected and nothing loaded.
    pub fn new(year: Year, language: Language) -> Self {
        Self {
            state: CalendarState {
                year,
                language,
                loading: false,
                error: None,
                dataset: None,
            },
            generation: 0,
        }
    }

    /// The current state.
    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    /// Select `year` and `language` and start a request for them.
    pub fn begin(&mut self, year: Year, language: Language) -> Ticket {
        self.generation += 1;
        self.state.year = year;
        self.state.language = language;
        self.state.loading = true;
        self.state.error = None;
        Ticket {
            generation: self.generation,
            year,
            language,
        }
    }

    /// Apply the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when the ticket has
    /// been superseded.
    pub fn finish(&mut self, ticket: Ticket, outcome: Result<YearDataset, AggregateError>) -> bool {
        let current = ticket.generation == self.generation
            && ticket.year == self.state.year
            && ticket.language == self.state.language;
        if !current {
            debug!(year = ticket.year, latest = self.generation, "discarding stale holiday load");
            return false;
        }
        self.state.loading = false;
        match outcome {
            Ok(dataset) => {
                self.state.dataset = Some(dataset);
                self.state.error = None;
            }
            Err(e) => {
                self.state.dataset = None;
                self.state.error = Some(e.to_string());
            }
        }
        true
    }

    /// Select `year` and `language`, fetch and aggregate, then apply.
    pub async fn load<S: MonthSource>(
        &mut self,
        source: &S,
        year: Year,
        language: Language,
        names: &NameTable,
        rules: &PeriodRules,
    ) -> &CalendarState {
        let ticket = self.begin(year, language);
        let outcome = fetch_dataset(source, year, language, names, rules).await;
        self.finish(ticket, outcome);
        &self.state
    }
}

/// Years offered for selection: the year before `today`'s, its own and the
/// next one.
pub fn year_options(today: Date) -> [Year; 3] {
    let year = today.year();
    [year.saturating_sub(1), year, year.saturating_add(1)]
}
