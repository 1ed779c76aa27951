//! Date parsing, calendar validation and ISO normalization.
//!
//! Four textual formats are accepted, tried in this order:
//!
//! | Tag          | Example      |
//! |--------------|--------------|
//! | `dd-mm-yyyy` | `15-03-1990` |
//! | `dd/mm/yyyy` | `15/03/1990` |
//! | `yyyy-mm-dd` | `1990-03-15` |
//! | `dd.mm.yyyy` | `15.03.1990` |
//!
//! Parsing is purely structural: `31-04-2020` parses, and the separate
//! calendar check rejects it. Every parse of a ten-byte input (misses too) is
//! memoized in a bounded, strictly FIFO [`DateCache`] owned by a
//! [`DateEngine`]. The cache sits behind a mutex so lookup-then-insert is
//! one atomic step; it never changes the result of a parse.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use regex::Regex;
use somalid_core::{Result, ValidationError};
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Default number of entries a date cache holds.
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Byte length of every accepted date layout.
pub const DATE_TEXT_LEN: usize = 10;

/// Earliest year accepted by the calendar check.
pub const MIN_YEAR: i32 = 1900;

/// Latest year accepted by the calendar check.
pub const MAX_YEAR: i32 = 2100;

static PATTERNS: LazyLock<Vec<(DateFormat, Regex)>> = LazyLock::new(|| {
    DateFormat::PRIORITY
        .into_iter()
        .map(|format| {
            let regex = Regex::new(format.pattern()).expect("Invalid date format regex");
            (format, regex)
        })
        .collect()
});

static SHARED_ENGINE: LazyLock<Arc<DateEngine>> = LazyLock::new(|| Arc::new(DateEngine::new()));

/// Textual date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `dd-mm-yyyy`
    DayMonthYearDash,
    /// `dd/mm/yyyy`
    DayMonthYearSlash,
    /// `yyyy-mm-dd`
    YearMonthDay,
    /// `dd.mm.yyyy`
    DayMonthYearDot,
}

impl DateFormat {
    /// Formats in matching priority order.
    pub const PRIORITY: [DateFormat; 4] = [
        DateFormat::DayMonthYearDash,
        DateFormat::DayMonthYearSlash,
        DateFormat::YearMonthDay,
        DateFormat::DayMonthYearDot,
    ];

    /// The format tag, e.g. `"dd-mm-yyyy"`.
    pub fn tag(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYearDash => "dd-mm-yyyy",
            DateFormat::DayMonthYearSlash => "dd/mm/yyyy",
            DateFormat::YearMonthDay => "yyyy-mm-dd",
            DateFormat::DayMonthYearDot => "dd.mm.yyyy",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYearDash => r"^(?<day>[0-9]{2})-(?<month>[0-9]{2})-(?<year>[0-9]{4})$",
            DateFormat::DayMonthYearSlash => r"^(?<day>[0-9]{2})/(?<month>[0-9]{2})/(?<year>[0-9]{4})$",
            DateFormat::YearMonthDay => r"^(?<year>[0-9]{4})-(?<month>[0-9]{2})-(?<day>[0-9]{2})$",
            DateFormat::DayMonthYearDot => r"^(?<day>[0-9]{2})\.(?<month>[0-9]{2})\.(?<year>[0-9]{4})$",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Day, month and year extracted from a date string, plus the format that
/// matched. Not necessarily a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub format: DateFormat,
}

impl ParsedDate {
    /// Checks the year range, month and day bounds, and that the date exists
    /// in the proleptic Gregorian calendar (no 31 April, no 29 February
    /// outside leap years).
    pub fn is_calendar_valid(&self) -> bool {
        self.to_naive_date().is_some()
    }

    /// Returns the calendar date, or `None` if it fails the calendar check.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year)
            || !(1..=12).contains(&self.month)
            || !(1..=31).contains(&self.day)
        {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// The instant at UTC midnight of this date.
    pub fn to_utc_midnight(&self) -> Option<DateTime<Utc>> {
        self.to_naive_date()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    /// ISO-8601 rendering at UTC midnight, e.g. `1990-03-15T00:00:00.000Z`.
    pub fn to_iso_string(&self) -> Option<String> {
        self.to_utc_midnight().map(|instant| format_iso(&instant))
    }
}

/// Renders an instant the way normalized records carry it.
pub fn format_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses `raw` against the accepted formats without consulting any cache.
///
/// Returns `None` when no format matches structurally.
pub fn parse_uncached(raw: &str) -> Option<ParsedDate> {
    PATTERNS.iter().find_map(|(format, regex)| {
        let caps = regex.captures(raw)?;
        Some(ParsedDate {
            day: caps["day"].parse().ok()?,
            month: caps["month"].parse().ok()?,
            year: caps["year"].parse().ok()?,
            format: *format,
        })
    })
}

/// Bounded memo of parse results keyed by the exact input string.
///
/// When full, inserting a new key evicts the single oldest-inserted entry.
/// Lookups do not refresh an entry's position. A capacity of zero disables
/// caching.
#[derive(Debug, Clone)]
pub struct DateCache {
    capacity: usize,
    entries: HashMap<String, Option<ParsedDate>>,
    order: VecDeque<String>,
}

impl DateCache {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
            order: VecDeque::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
        }
    }

    /// Returns the memoized parse for `raw`: `Some(None)` is a cached miss.
    pub fn get(&self, raw: &str) -> Option<Option<ParsedDate>> {
        self.entries.get(raw).copied()
    }

    /// Returns true if `raw` has a cached result.
    pub fn contains(&self, raw: &str) -> bool {
        self.entries.contains_key(raw)
    }

    /// Stores a parse result, evicting the oldest entry if the cache is full.
    pub fn insert(&mut self, raw: String, parsed: Option<ParsedDate>) {
        if self.capacity == 0 {
            return;
        }
        if let Some(slot) = self.entries.get_mut(&raw) {
            *slot = parsed;
            return;
        }
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                trace!("Date cache full ({} entries), evicted oldest entry", self.capacity);
            }
        }
        self.order.push_back(raw.clone());
        self.entries.insert(raw, parsed);
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

impl Default for DateCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Date parser with a memoization cache.
///
/// Safe to share between threads. Most callers use the process-wide engine
/// from [`DateEngine::shared`]; tests and callers that need isolation build
/// their own.
///
/// # Example
///
/// ```rust
/// use somalid_validator::{DateEngine, DateFormat};
///
/// let engine = DateEngine::new();
/// let parsed = engine.parse("15.03.1990").unwrap();
/// assert_eq!((parsed.day, parsed.month, parsed.year), (15, 3, 1990));
/// assert_eq!(parsed.format, DateFormat::DayMonthYearDot);
///
/// assert!(engine.is_valid("29-02-2020"));
/// assert!(!engine.is_valid("29-02-2021"));
/// assert_eq!(engine.to_iso("1990-03-15").unwrap(), "1990-03-15T00:00:00.000Z");
/// ```
#[derive(Debug)]
pub struct DateEngine {
    cache: Mutex<DateCache>,
}

impl DateEngine {
    /// Creates an engine with the default cache capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates an engine whose cache holds at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(DateCache::new(capacity)),
        }
    }

    /// Creates an engine that never caches.
    pub fn uncached() -> Self {
        Self::with_capacity(0)
    }

    /// The process-wide engine.
    pub fn shared() -> Arc<DateEngine> {
        Arc::clone(&SHARED_ENGINE)
    }

    fn cache(&self) -> MutexGuard<'_, DateCache> {
        // A panic while holding the lock cannot leave the cache inconsistent
        // with fresh parses, so a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parses `raw`, returning `None` if no accepted format matches.
    ///
    /// Inputs that are not [`DATE_TEXT_LEN`] bytes long can never match and
    /// are not cached.
    pub fn parse(&self, raw: &str) -> Option<ParsedDate> {
        if raw.len() != DATE_TEXT_LEN {
            return None;
        }

        let mut cache = self.cache();
        if let Some(hit) = cache.get(raw) {
            trace!("Date cache hit");
            return hit;
        }
        let parsed = parse_uncached(raw);
        cache.insert(raw.to_string(), parsed);
        parsed
    }

    /// Returns true if `raw` parses and is a real calendar date in range.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw)
            .is_some_and(|parsed| parsed.is_calendar_valid())
    }

    /// Converts `raw` to an ISO-8601 string at UTC midnight.
    ///
    /// Fails with `INVALID_DATE` if it does not parse or is not a calendar
    /// date.
    pub fn to_iso(&self, raw: &str) -> Result<String> {
        self.parse(raw)
            .and_then(|parsed| parsed.to_iso_string())
            .ok_or_else(|| {
                ValidationError::invalid_date(format!(
                    "'{raw}' is not a valid date (expected dd-mm-yyyy, dd/mm/yyyy, yyyy-mm-dd or dd.mm.yyyy)"
                ))
            })
    }

    /// Returns true if `raw` has a cached parse result.
    pub fn is_cached(&self, raw: &str) -> bool {
        self.cache().contains(raw)
    }

    /// Number of cached parse results.
    pub fn cache_len(&self) -> usize {
        self.cache().len()
    }

    /// Maximum number of cached parse results.
    pub fn cache_capacity(&self) -> usize {
        self.cache().capacity()
    }

    /// Drops every cached parse result.
    pub fn clear_cache(&self) {
        self.cache().clear();
    }
}

impl Default for DateEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `raw` with the process-wide engine.
pub fn parse_date(raw: &str) -> Option<ParsedDate> {
    SHARED_ENGINE.parse(raw)
}

/// Checks `raw` with the process-wide engine.
pub fn is_valid_date(raw: &str) -> bool {
    SHARED_ENGINE.is_valid(raw)
}

/// Normalizes `raw` to ISO-8601 with the process-wide engine.
pub fn to_iso(raw: &str) -> Result<String> {
    SHARED_ENGINE.to_iso(raw)
}
