//! Type coercion for untyped query input.
//!
//! Every function here returns `None` when the raw value does not fit the
//! target type; callers drop the predicate instead of failing the request.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use regex::Regex;
use serde_json::{Number, Value};
use uuid::Uuid;

use super::value_objects::Scalar;

// Version nibble 1-8 and RFC 4122 variant; v7 ids generated by this service must pass.
static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-8][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("UUID pattern compiles")
});

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a calendar date or timestamp into a UTC instant.
///
/// Dates without a time of day land on midnight UTC.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
}

/// First and last millisecond of the UTC calendar day containing `instant`.
pub fn day_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = instant.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}

pub fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        parse_float(raw)
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

pub fn parse_float(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Coerces a value for a numeric column; `integer` selects the column's
/// integer or floating-point flavour.
pub fn parse_number(raw: &str, integer: bool) -> Option<Scalar> {
    if integer {
        parse_integer(raw).map(Scalar::Int)
    } else {
        parse_float(raw).map(Scalar::Float)
    }
}

/// Coerces a JSON number for a numeric column without going through its
/// text form, which may use exponent notation.
pub fn json_number(number: &Number, integer: bool) -> Option<Scalar> {
    if integer {
        number.as_i64().map(Scalar::Int).or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| Scalar::Int(f as i64))
        })
    } else {
        number.as_f64().filter(|f| f.is_finite()).map(Scalar::Float)
    }
}

/// Splits an inclusive `min-max` range.
///
/// A leading minus sign belongs to `min`, so `-5-10` is `[-5, 10]`.
pub fn split_range(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.trim();
    let separator = raw.get(1..)?.find('-')? + 1;
    let (min, max) = (&raw[..separator], &raw[separator + 1..]);
    Some((min.trim(), max.trim()))
}

/// Case-insensitive `"true"`/`"false"`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Canonical hyphenated UUID with version and variant bits checked.
pub fn parse_uuid(raw: &str) -> Option<Uuid> {
    let raw = raw.trim();
    if !UUID_PATTERN.is_match(raw) {
        return None;
    }
    Uuid::parse_str(raw).ok()
}

/// Text form of a scalar JSON filter value. Arrays, objects and `null`
/// carry no usable operand.
pub fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A search term after one-shot normalization: number first, then date.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchTerm {
    Number(f64),
    Date(DateTime<Utc>),
    Text,
}

impl SearchTerm {
    pub fn normalize(raw: &str) -> Self {
        if let Some(number) = parse_float(raw) {
            SearchTerm::Number(number)
        } else if let Some(date) = parse_datetime(raw) {
            SearchTerm::Date(date)
        } else {
            SearchTerm::Text
        }
    }
}
