//! Plain-text rendering of a year.

use std::fmt;

use hc_engine::messages::{month_name, weekday_name};
use hc_engine::{HolidayCategory, HolidayEntry, Language, MajorEvent, Message, YearDataset};
use hc_time::{Date, Month};

/// A year of holidays and events, ready to print.
#[derive(Debug, Clone, Copy)]
pub struct CalendarView<'a> {
    /// The aggregated year.
    pub dataset: &'a YearDataset,
    /// Events of the year, sorted.
    pub events: &'a [MajorEvent],
    /// Date marked as today, if it is shown.
    pub today: Option<Date>,
}

impl<'a> CalendarView<'a> {
    /// A view of `dataset` with `events`, marking `today`.
    pub fn new(dataset: &'a YearDataset, events: &'a [MajorEvent], today: Option<Date>) -> Self {
        Self {
            dataset,
            events,
            today,
        }
    }

    fn language(&self) -> Language {
        self.dataset.language
    }

    fn category_label(&self, entry: &HolidayEntry) -> String {
        let language = self.language();
        match (entry.category, entry.record.date_kind_name.as_deref()) {
            (HolidayCategory::Substitute, _) => Message::DateKindSubstitute.render(language),
            (_, Some(label)) => label.to_string(),
            (_, None) => Message::DateKindNational.render(language),
        }
    }

    fn write_entry(&self, f: &mut fmt::Formatter<'_>, entry: &HolidayEntry) -> fmt::Result {
        let language = self.language();
        let Ok(day) = entry.day() else {
            return writeln!(f, "  {} {}", entry.record.date, entry.record.name);
        };
        write!(
            f,
            "  {:02}.{:02} ({}) {} [{}]",
            day.month(),
            day.day_of_month(),
            weekday_name(language, day.weekday()),
            entry.record.name,
            self.category_label(entry),
        )?;
        if let Some(period) = &entry.period {
            write!(f, "  {}", period.describe(language))?;
        }
        if self.today.is_some_and(|t| entry.is_on(t)) {
            write!(f, "  * {}", Message::Today.render(language))?;
        }
        writeln!(f)
    }

    fn write_events(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.language();
        writeln!(f)?;
        writeln!(f, "{}", Message::EventsTitle { year: self.dataset.year }.render(language))?;
        for event in self.events {
            writeln!(
                f,
                "  {}  {} [{}] {}",
                event.display_dates(),
                event.name,
                event.type_label(language),
                event.location,
            )?;
            if !event.description.is_empty() {
                writeln!(f, "      {}", event.description)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CalendarView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = self.language();
        let ds = self.dataset;

        writeln!(f, "{}", Message::CalendarTitle { year: ds.year }.render(language))?;
        writeln!(f, "{}", Message::CalendarDescription.render(language))?;
        writeln!(
            f,
            "{} · {}",
            Message::TotalHolidays { count: ds.total_holidays }.render(language),
            Message::TotalDaysOff { count: ds.total_days_off }.render(language),
        )?;

        for group in &ds.months {
            writeln!(f)?;
            let title = Month::from_number(group.month)
                .map(|m| month_name(language, m))
                .unwrap_or_else(|| group.month.to_string());
            writeln!(f, "{title}")?;
            if group.holidays.is_empty() {
                writeln!(f, "  {}", Message::Empty.render(language))?;
            }
            for entry in &group.holidays {
                self.write_entry(f, entry)?;
            }
        }

        if !self.events.is_empty() {
            self.write_events(f)?;
        }

        writeln!(f)?;
        writeln!(f, "{}", Message::ApiSource.render(language))
    }
}
