//! Typed UI messages.
//!
//! Each [`Message`] variant carries its own parameters; [`Message::render`]
//! picks the template for a [`Language`] and replaces every `{param}`
//! placeholder with the parameter value.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hc_core::errors::Error;
use hc_time::{Month, Weekday};

/// Display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Korean, the source language of the holiday data.
    #[default]
    Ko,
    /// English.
    En,
}

impl Language {
    /// Map a locale tag to a language. `en`, `en-US`, `EN_gb` map to
    /// English; everything else falls back to Korean.
    pub fn from_locale(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Language::En,
            _ => Language::Ko,
        }
    }

    /// Two-letter code (`"ko"` or `"en"`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// Return `true` for the language the holiday data is written in.
    pub fn is_source(&self) -> bool {
        matches!(self, Language::Ko)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Language::Ko),
            "en" => Ok(Language::En),
            _ => Err(Error::Parse {
                what: "language",
                input: s.to_string(),
            }),
        }
    }
}

/// A UI message together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Calendar section title.
    CalendarTitle {
        /// Selected year.
        year: u16,
    },
    /// Calendar section description.
    CalendarDescription,
    /// Number of listed holidays.
    TotalHolidays {
        /// Holiday count.
        count: usize,
    },
    /// Weekends plus weekday holidays.
    TotalDaysOff {
        /// Day count.
        count: usize,
    },
    /// A holiday run that includes a weekend.
    HolidayPeriod {
        /// Run length in days.
        days: u32,
    },
    /// A holiday run made of weekday holidays only.
    HolidayPeriodShort {
        /// Run length in days.
        days: u32,
    },
    /// A month without holidays.
    Empty,
    /// Marker for today's date.
    Today,
    /// Loading indicator.
    Loading,
    /// Error heading.
    Error,
    /// Generic fetch failure.
    ErrorMessage,
    /// Hint shown under an error.
    ErrorApiKey,
    /// World-events section title.
    EventsTitle {
        /// Selected year.
        year: u16,
    },
    /// Label of a national holiday.
    DateKindNational,
    /// Label of a substitute holiday.
    DateKindSubstitute,
    /// Data attribution.
    ApiSource,
}

impl Message {
    /// Dotted key identifying the message (e.g. `"holiday.holidayPeriod"`).
    pub fn key(&self) -> &'static str {
        match self {
            Message::CalendarTitle { .. } => "calendar.title",
            Message::CalendarDescription => "calendar.description",
            Message::TotalHolidays { .. } => "calendar.totalHolidays",
            Message::TotalDaysOff { .. } => "calendar.totalDaysOff",
            Message::HolidayPeriod { .. } => "holiday.holidayPeriod",
            Message::HolidayPeriodShort { .. } => "holiday.holidayPeriodShort",
            Message::Empty => "holiday.empty",
            Message::Today => "holiday.today",
            Message::Loading => "common.loading",
            Message::Error => "common.error",
            Message::ErrorMessage => "common.errorMessage",
            Message::ErrorApiKey => "common.errorApiKey",
            Message::EventsTitle { .. } => "events.title",
            Message::DateKindNational => "dateKind.national",
            Message::DateKindSubstitute => "dateKind.substitute",
            Message::ApiSource => "footer.apiSource",
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        match *self {
            Message::CalendarTitle { year } | Message::EventsTitle { year } => {
                vec![("year", year.to_string())]
            }
            Message::TotalHolidays { count } | Message::TotalDaysOff { count } => {
                vec![("count", count.to_string())]
            }
            Message::HolidayPeriod { days } | Message::HolidayPeriodShort { days } => {
                vec![("days", days.to_string())]
            }
            _ => Vec::new(),
        }
    }

    fn template(&self, language: Language) -> &'static str {
        use Language::{En, Ko};
        match (self, language) {
            (Message::CalendarTitle { .. }, Ko) => "{year}년 공휴일 달력",
            (Message::CalendarTitle { .. }, En) => "{year} Public Holiday Calendar",
            (Message::CalendarDescription, Ko) => "대한민국의 국경일과 대체공휴일을 한눈에 확인하세요.",
            (Message::CalendarDescription, En) => {
                "National and substitute holidays of South Korea at a glance."
            }
            (Message::TotalHolidays { .. }, Ko) => "총 {count}개의 공휴일",
            (Message::TotalHolidays { .. }, En) => "{count} public holidays in total",
            (Message::TotalDaysOff { .. }, Ko) => "주말 포함 총 {count}일 휴일",
            (Message::TotalDaysOff { .. }, En) => "{count} days off including weekends",
            (Message::HolidayPeriod { .. }, Ko) => "{days}일 연휴 (주말 포함)",
            (Message::HolidayPeriod { .. }, En) => "{days}-day break (incl. weekend)",
            (Message::HolidayPeriodShort { .. }, Ko) => "{days}일 연휴",
            (Message::HolidayPeriodShort { .. }, En) => "{days}-day break",
            (Message::Empty, Ko) => "이 달에는 공휴일이 없습니다.",
            (Message::Empty, En) => "No holidays this month.",
            (Message::Today, Ko) => "오늘",
            (Message::Today, En) => "Today",
            (Message::Loading, Ko) => "불러오는 중...",
            (Message::Loading, En) => "Loading...",
            (Message::Error, Ko) => "오류",
            (Message::Error, En) => "Error",
            (Message::ErrorMessage, Ko) => "공휴일 정보를 가져오는 중 오류가 발생했습니다.",
            (Message::ErrorMessage, En) => "An error occurred while fetching holiday information.",
            (Message::ErrorApiKey, Ko) => "API 키 설정 또는 백업 데이터를 확인해 주세요.",
            (Message::ErrorApiKey, En) => "Check the API key configuration or the backup data.",
            (Message::EventsTitle { .. }, Ko) => "{year}년 주요 세계 이벤트",
            (Message::EventsTitle { .. }, En) => "Major World Events in {year}",
            (Message::DateKindNational, Ko) => "국경일",
            (Message::DateKindNational, En) => "National Holiday",
            (Message::DateKindSubstitute, Ko) => "대체공휴일",
            (Message::DateKindSubstitute, En) => "Substitute Holiday",
            (Message::ApiSource, Ko) => "출처: 공공데이터포털 한국천문연구원 특일 정보",
            (Message::ApiSource, En) => {
                "Source: Korea Astronomy and Space Science Institute, data.go.kr"
            }
        }
    }

    /// Render the message in `language`.
    pub fn render(&self, language: Language) -> String {
        substitute(self.template(language), &self.params())
    }
}

/// Replace every `{name}` placeholder in `template` with its value.
///
/// Placeholders without a matching parameter are left as they are.
pub fn substitute(template: &str, params: &[(&str, String)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
}

/// Display name of a month.
pub fn month_name(language: Language, month: Month) -> String {
    match language {
        Language::Ko => format!("{}월", month.number()),
        Language::En => month.long_name().to_string(),
    }
}

const WEEKDAYS_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
const WEEKDAYS_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Short display name of a weekday.
pub fn weekday_name(language: Language, weekday: Weekday) -> &'static str {
    let i = usize::from(weekday.sunday_index());
    match language {
        Language::Ko => WEEKDAYS_KO[i],
        Language::En => WEEKDAYS_EN[i],
    }
}

/// Display label of a world-event type, or `None` for unknown types.
pub fn event_type_label(language: Language, kind: &str) -> Option<&'static str> {
    use Language::{En, Ko};
    let label = match (kind, language) {
        ("sports", Ko) => "스포츠",
        ("sports", En) => "Sports",
        ("politics", Ko) => "정치",
        ("politics", En) => "Politics",
        ("culture", Ko) => "문화",
        ("culture", En) => "Culture",
        ("economy", Ko) => "경제",
        ("economy", En) => "Economy",
        ("science", Ko) => "과학",
        ("science", En) => "Science",
        ("technology", Ko) => "기술",
        ("technology", En) => "Technology",
        ("environment", Ko) => "환경",
        ("environment", En) => "Environment",
        ("exhibition", Ko) => "박람회",
        ("exhibition", En) => "Exhibition",
        ("festival", Ko) => "축제",
        ("festival", En) => "Festival",
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_mapping() {
        assert_eq!(Language::from_locale("en"), Language::En);
        assert_eq!(Language::from_locale("EN-us"), Language::En);
        assert_eq!(Language::from_locale("ko_KR"), Language::Ko);
        assert_eq!(Language::from_locale("fr"), Language::Ko);
        assert_eq!(Language::from_locale(""), Language::Ko);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn render_with_parameters() {
        assert_eq!(
            Message::CalendarTitle { year: 2025 }.render(Language::Ko),
            "2025년 공휴일 달력"
        );
        assert_eq!(
            Message::HolidayPeriod { days: 5 }.render(Language::En),
            "5-day break (incl. weekend)"
        );
        assert_eq!(Message::HolidayPeriodShort { days: 3 }.render(Language::Ko), "3일 연휴");
    }

    #[test]
    fn substitute_replaces_every_occurrence() {
        let out = substitute("{n} and {n}, {missing}", &[("n", "7".into())]);
        assert_eq!(out, "7 and 7, {missing}");
    }

    #[test]
    fn month_and_weekday_names() {
        assert_eq!(month_name(Language::Ko, Month::October), "10월");
        assert_eq!(month_name(Language::En, Month::October), "October");
        assert_eq!(weekday_name(Language::Ko, Weekday::Sunday), "일");
        assert_eq!(weekday_name(Language::En, Weekday::Saturday), "Sat");
    }

    #[test]
    fn event_labels_fall_back_to_none() {
        assert_eq!(event_type_label(Language::En, "sports"), Some("Sports"));
        assert_eq!(event_type_label(Language::Ko, "unheard-of"), None);
    }
}
