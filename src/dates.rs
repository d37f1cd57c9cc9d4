//! Date parsing and relative-time helpers.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::error::{Result, UtilError};

pub const DEFAULT_LOCALE: &str = "en-US";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Source of the current time, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Parses an `MMDDYYYY` string positionally and renders it for `locale`.
///
/// Segments are not range-checked: month 13 or day 32 roll forward into the
/// following month/year the way a calendar constructor would. Years 0 to 99
/// are read as 1900 to 1999.
pub fn date_from_string(input: &str, locale: &str) -> Result<String> {
    let segment = |range: std::ops::Range<usize>| -> Result<i64> {
        input
            .get(range)
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| UtilError::InvalidDate(input.to_string()))
    };
    let month = segment(0..2)?;
    let day = segment(2..4)?;
    let year = match segment(4..8)? {
        y @ 0..=99 => 1900 + y,
        y => y,
    };

    let date = roll_date(year, month, day).ok_or_else(|| UtilError::InvalidDate(input.to_string()))?;
    Ok(format_date(date, locale))
}

/// Builds a date from possibly out-of-range month/day values by rolling over.
fn roll_date(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let first_of_year = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let months = month - 1;
    let first_of_month = if months >= 0 {
        first_of_year.checked_add_months(Months::new(u32::try_from(months).ok()?))?
    } else {
        first_of_year.checked_sub_months(Months::new(u32::try_from(-months).ok()?))?
    };
    first_of_month.checked_add_signed(TimeDelta::try_days(day - 1)?)
}

/// Short numeric date in the conventions of `locale`; unknown locales get ISO.
pub fn format_date(date: NaiveDate, locale: &str) -> String {
    let (y, m, d) = (date.year(), date.month(), date.day());
    match locale {
        "en-US" => format!("{m}/{d}/{y}"),
        "en-GB" | "en-AU" | "fr-FR" | "es-ES" | "it-IT" | "pt-BR" => format!("{d:02}/{m:02}/{y}"),
        "de-DE" => format!("{d}.{m}.{y}"),
        "ja-JP" | "zh-CN" => format!("{y}/{m}/{d}"),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// True when both instants fall on the same calendar day in their own zones.
pub fn is_same_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Relative description of a millisecond epoch timestamp against the wall clock.
pub fn get_time_ago(timestamp_ms: i64) -> String {
    get_time_ago_with(&SystemClock, timestamp_ms)
}

pub fn get_time_ago_with(clock: &dyn Clock, timestamp_ms: i64) -> String {
    time_ago_at(clock.now().timestamp_millis(), timestamp_ms)
}

/// Buckets `now_ms - timestamp_ms` into "just now", seconds, minutes, hours,
/// days, or an absolute date past one week.
///
/// Units turn plural once the difference reaches twice the unit, so 119s is
/// still "1 minute ago" and 120s is "2 minutes ago".
pub fn time_ago_at(now_ms: i64, timestamp_ms: i64) -> String {
    let diff = (now_ms - timestamp_ms).div_euclid(1000);
    let plural = |threshold: i64| if diff >= threshold { "s" } else { "" };

    match diff {
        d if d < 5 => "just now".to_string(),
        d if d < MINUTE => format!("{d} seconds ago"),
        d if d < HOUR => format!("{} minute{} ago", d / MINUTE, plural(2 * MINUTE)),
        d if d < DAY => format!("{} hour{} ago", d / HOUR, plural(2 * HOUR)),
        d if d < WEEK => format!("{} day{} ago", d / DAY, plural(2 * DAY)),
        _ => match Local.timestamp_millis_opt(timestamp_ms).single() {
            Some(then) => format_date(then.date_naive(), DEFAULT_LOCALE),
            None => "Invalid Date".to_string(),
        },
    }
}
