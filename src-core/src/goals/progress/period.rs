//! Period boundaries for a cadence, always aligned to UTC days.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;

use crate::goals::goals_model::Cadence;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBounds {
    pub start: DateTime<Utc>,
    /// Last millisecond of the period
    pub end: DateTime<Utc>,
    pub days_total: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
}

impl PeriodBounds {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Computes the active period for `cadence` around `now`.
///
/// Elapsed days are counted with floor rounding: a period that started
/// 23 hours ago has zero elapsed days.
pub fn compute_period_bounds(cadence: Cadence, now: DateTime<Utc>) -> PeriodBounds {
    let today = now.date_naive();

    // Both ends saturate at the edges of the representable calendar
    let (first_day, last_day) = match cadence {
        Cadence::Daily => (today, today),
        Cadence::Weekly => {
            let days_from_monday = i64::from(today.weekday().num_days_from_monday());
            let monday = today
                .checked_sub_signed(Duration::days(days_from_monday))
                .unwrap_or(NaiveDate::MIN);
            (monday, add_days(monday, 6))
        }
        Cadence::Monthly => {
            let first = today.with_day(1).unwrap_or(today);
            // 32 days past the 1st always lands in the following month
            let last = first
                .checked_add_signed(Duration::days(32))
                .and_then(|next| next.with_day(1))
                .and_then(|next_first| next_first.pred_opt())
                .unwrap_or(NaiveDate::MAX);
            (first, last)
        }
    };

    let start = midnight_utc(first_day);
    let end = midnight_utc(last_day)
        .checked_add_signed(Duration::milliseconds(MILLIS_PER_DAY - 1))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    let span_ms = (end - start).num_milliseconds();
    let days_total = ceil_div(span_ms, MILLIS_PER_DAY).max(1);

    let elapsed_ms = (now - start).num_milliseconds();
    let days_elapsed = elapsed_ms.div_euclid(MILLIS_PER_DAY).clamp(0, days_total);
    let days_remaining = (days_total - days_elapsed).max(0);

    PeriodBounds {
        start,
        end,
        days_total,
        days_elapsed,
        days_remaining,
    }
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MAX)
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}
