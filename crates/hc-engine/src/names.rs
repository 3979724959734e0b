//! Holiday display-name resolution.
//!
//! Names arrive in Korean. A [`NameTable`] maps them to display names per
//! language. English has two extra fallbacks for substitute holidays whose
//! compound name is not in the table: the bracketed form
//! `대체공휴일(삼일절)` and the suffix form `어린이날 대체공휴일` are both
//! reduced to their base name, which is translated and suffixed with
//! `" (Substitute)"`. A name that cannot be resolved is shown as-is.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::category::{is_substitute_name, SUBSTITUTE_HOLIDAY};
use crate::error::EngineError;
use crate::messages::{Language, Message};

/// Suffix appended to a translated base name of a substitute holiday.
pub const SUBSTITUTE_SUFFIX: &str = " (Substitute)";

/// Per-language lookup from source names to display names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NameTable {
    #[serde(default)]
    ko: HashMap<String, String>,
    #[serde(default)]
    en: HashMap<String, String>,
}

impl NameTable {
    /// The built-in table covering the public holidays of South Korea.
    pub fn builtin() -> Self {
        let en = BUILTIN_EN
            .iter()
            .map(|&(ko, en)| (ko.to_string(), en.to_string()))
            .collect();
        Self {
            ko: HashMap::new(),
            en,
        }
    }

    /// Parse a table from JSON shaped as `{"ko": {..}, "en": {..}}`.
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, language: Language, source: impl Into<String>, display: impl Into<String>) {
        self.entries_mut(language).insert(source.into(), display.into());
    }

    /// Add every entry of `other`, replacing entries with the same source.
    pub fn merge(&mut self, other: NameTable) {
        self.ko.extend(other.ko);
        self.en.extend(other.en);
    }

    /// Direct lookup without any pattern handling.
    pub fn get(&self, language: Language, source: &str) -> Option<&str> {
        self.entries(language).get(source).map(String::as_str)
    }

    fn entries(&self, language: Language) -> &HashMap<String, String> {
        match language {
            Language::Ko => &self.ko,
            Language::En => &self.en,
        }
    }

    fn entries_mut(&mut self, language: Language) -> &mut HashMap<String, String> {
        match language {
            Language::Ko => &mut self.ko,
            Language::En => &mut self.en,
        }
    }
}

const BUILTIN_EN: &[(&str, &str)] = &[
    ("1월1일", "New Year's Day"),
    ("신정", "New Year's Day"),
    ("설날", "Seollal (Lunar New Year)"),
    ("삼일절", "Independence Movement Day"),
    ("어린이날", "Children's Day"),
    ("부처님오신날", "Buddha's Birthday"),
    ("석가탄신일", "Buddha's Birthday"),
    ("현충일", "Memorial Day"),
    ("광복절", "Liberation Day"),
    ("추석", "Chuseok (Korean Thanksgiving)"),
    ("개천절", "National Foundation Day"),
    ("한글날", "Hangul Day"),
    ("기독탄신일", "Christmas Day"),
    ("성탄절", "Christmas Day"),
    ("대체공휴일", "Substitute Holiday"),
    ("임시공휴일", "Temporary Holiday"),
    ("대통령선거일", "Presidential Election Day"),
    ("제21대 대통령 선거", "21st Presidential Election Day"),
    ("국회의원선거일", "National Assembly Election Day"),
    ("제22대 국회의원선거", "22nd National Assembly Election Day"),
    ("전국동시지방선거", "Local Elections Day"),
    ("국군의 날", "Armed Forces Day"),
];

fn bracketed_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"대체공휴일\(([^)]+)\)").expect("valid pattern"))
}

fn compound_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*대체공휴일\s*").expect("valid pattern"))
}

fn short_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*대체\s*").expect("valid pattern"))
}

/// Resolve a source-language holiday name to its display name.
pub fn resolve_name(name: &str, language: Language, table: &NameTable) -> String {
    if let Some(display) = table.get(language, name) {
        return display.to_string();
    }
    if language.is_source() {
        return name.to_string();
    }

    // 대체공휴일(삼일절)
    if let Some(base) = bracketed_pattern()
        .captures(name)
        .and_then(|caps| caps.get(1))
    {
        if let Some(display) = table.get(language, base.as_str().trim()) {
            return format!("{display}{SUBSTITUTE_SUFFIX}");
        }
    }

    // 어린이날 대체공휴일, 대체 어린이날
    if is_substitute_name(name) {
        let base = compound_token_pattern().replace_all(name, "");
        let base = short_token_pattern().replace_all(&base, "");
        let base = base.trim();
        if !base.is_empty() {
            if let Some(display) = table.get(language, base) {
                return format!("{display}{SUBSTITUTE_SUFFIX}");
            }
        }
    }

    name.to_string()
}

/// Resolve the source label of a holiday kind (`dateKindName`).
///
/// Only the national-day and substitute-holiday labels are translated;
/// every other label passes through unchanged.
pub fn resolve_date_kind_name(label: &str, language: Language) -> String {
    match label {
        "국경일" => Message::DateKindNational.render(language),
        SUBSTITUTE_HOLIDAY => Message::DateKindSubstitute.render(language),
        other => other.to_string(),
    }
}
