//! Time classification: upcoming / past / today / due-soon relative to an
//! explicit reference instant.
//!
//! Appointments carry a wall-clock date and time with no offset. They are
//! interpreted in the user's IANA timezone and compared as UTC instants.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, Result};
use crate::records::Appointment;

/// Appointments within this many hours of `now` are due soon.
pub const DUE_SOON_HORIZON_HOURS: i64 = 24;

/// Reference point for every classification: the current instant and the
/// timezone wall-clock values are read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContext {
    pub now: DateTime<Utc>,
    pub tz: Tz,
}

impl TimeContext {
    pub fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        Self { now, tz }
    }

    pub fn utc(now: DateTime<Utc>) -> Self {
        Self { now, tz: Tz::UTC }
    }

    /// Calendar date of `now` in the context timezone.
    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.tz).date_naive()
    }

    pub fn due_soon_cutoff(&self) -> DateTime<Utc> {
        self.now + Duration::hours(DUE_SOON_HORIZON_HOURS)
    }
}

/// A record that has a wall-clock date and time-of-day.
pub trait Scheduled {
    fn record_id(&self) -> &str;
    fn date(&self) -> &str;
    fn time(&self) -> &str;
}

impl Scheduled for Appointment {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn time(&self) -> &str {
        &self.time
    }
}

pub fn parse_date(record_id: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| CoreError::invalid_timestamp(record_id, raw, format!("date: {e}")))
}

pub fn parse_time(record_id: &str, raw: &str) -> Result<NaiveTime> {
    let t = raw.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .map_err(|e| CoreError::invalid_timestamp(record_id, raw, format!("time: {e}")))
}

/// Merge a date and time-of-day in `tz` into a UTC instant.
///
/// A local time repeated by a DST fall-back resolves to its first occurrence.
/// A local time skipped by a spring-forward gap does not exist and is rejected.
pub fn combine(record_id: &str, date: &str, time: &str, tz: Tz) -> Result<DateTime<Utc>> {
    let ndt = NaiveDateTime::new(parse_date(record_id, date)?, parse_time(record_id, time)?);
    let local = tz.from_local_datetime(&ndt).earliest().ok_or_else(|| {
        CoreError::invalid_timestamp(
            record_id,
            format!("{date} {time}"),
            format!("local time does not exist in {tz}"),
        )
    })?;
    Ok(local.with_timezone(&Utc))
}

/// Combined instant of a scheduled record.
pub fn instant_of<R: Scheduled>(record: &R, tz: Tz) -> Result<DateTime<Utc>> {
    combine(record.record_id(), record.date(), record.time(), tz)
}

/// True iff the record's instant is strictly after `now`.
pub fn is_upcoming<R: Scheduled>(record: &R, ctx: &TimeContext) -> Result<bool> {
    Ok(instant_of(record, ctx.tz)? > ctx.now)
}

/// Exact negation of [`is_upcoming`]; an instant equal to `now` is past.
pub fn is_past<R: Scheduled>(record: &R, ctx: &TimeContext) -> Result<bool> {
    is_upcoming(record, ctx).map(|up| !up)
}

/// True iff the record falls on today's calendar date in the context timezone.
pub fn is_today<R: Scheduled>(record: &R, ctx: &TimeContext) -> Result<bool> {
    Ok(parse_date(record.record_id(), record.date())? == ctx.today())
}

/// True iff `now < instant <= now + 24h`.
pub fn is_due_soon<R: Scheduled>(record: &R, ctx: &TimeContext) -> Result<bool> {
    let at = instant_of(record, ctx.tz)?;
    Ok(at > ctx.now && at <= ctx.due_soon_cutoff())
}

/// Keep the records for which `pred` holds, failing on the first record
/// whose timestamp cannot be parsed.
pub fn filter_by<R, F>(records: &[R], ctx: &TimeContext, pred: F) -> Result<Vec<R>>
where
    R: Scheduled + Clone,
    F: Fn(&R, &TimeContext) -> Result<bool>,
{
    let mut out = Vec::new();
    for r in records {
        if pred(r, ctx)? {
            out.push(r.clone());
        }
    }
    Ok(out)
}
