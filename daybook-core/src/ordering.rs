//! Display orders for appointments, tasks and stocks.
//!
//! Every order is built from one primitive: a stable sort over a sequence of
//! `(extractor, direction)` keys. Later keys are consulted only when all
//! earlier keys compare equal, and elements equal on every key keep their
//! input order.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::error::Result;
use crate::portfolio::gain_loss_percentage;
use crate::records::Appointment;
use crate::stock::Stock;
use crate::task::Task;
use crate::time::{instant_of, TimeContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One step in a sort key sequence.
pub struct SortKey<'a, T> {
    cmp: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
}

impl<'a, T> SortKey<'a, T> {
    pub fn new<K, F>(extract: F, direction: Direction) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        Self {
            cmp: Box::new(move |a, b| {
                let ord = extract(a).cmp(&extract(b));
                match direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            }),
        }
    }

    pub fn asc<K: Ord, F: Fn(&T) -> K + 'a>(extract: F) -> Self {
        Self::new(extract, Direction::Ascending)
    }

    pub fn desc<K: Ord, F: Fn(&T) -> K + 'a>(extract: F) -> Self {
        Self::new(extract, Direction::Descending)
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }
}

/// Total order over `f64` for use as a sort key (`f64::total_cmp`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalF64(pub f64);

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Compare two elements by the key sequence.
pub fn compare_by_keys<T>(a: &T, b: &T, keys: &[SortKey<'_, T>]) -> Ordering {
    keys.iter()
        .fold(Ordering::Equal, |acc, k| acc.then_with(|| k.compare(a, b)))
}

/// Sort in place by the key sequence. `slice::sort_by` is stable.
pub fn sort_in_place_by_keys<T>(items: &mut [T], keys: &[SortKey<'_, T>]) {
    items.sort_by(|a, b| compare_by_keys(a, b, keys));
}

/// Return a new, stably sorted copy; the input is left untouched.
pub fn sort_by_keys<T: Clone>(items: &[T], keys: &[SortKey<'_, T>]) -> Vec<T> {
    let mut out = items.to_vec();
    sort_in_place_by_keys(&mut out, keys);
    out
}

/// Upcoming appointments first (soonest first), then past ones (most recent
/// first).
pub fn sort_appointments(appointments: &[Appointment], ctx: &TimeContext) -> Result<Vec<Appointment>> {
    // Parse every instant once up front so a malformed record fails the whole
    // call before any comparison runs.
    let mut decorated: Vec<(DateTime<Utc>, &Appointment)> = appointments
        .iter()
        .map(|a| instant_of(a, ctx.tz).map(|at| (at, a)))
        .collect::<Result<_>>()?;

    let now = ctx.now;
    let keys: [SortKey<'_, (DateTime<Utc>, &Appointment)>; 3] = [
        SortKey::desc(move |(at, _): &(DateTime<Utc>, &Appointment)| *at > now),
        SortKey::asc(move |(at, _): &(DateTime<Utc>, &Appointment)| {
            (*at > now).then_some(*at)
        }),
        SortKey::desc(move |(at, _): &(DateTime<Utc>, &Appointment)| {
            (*at <= now).then_some(*at)
        }),
    ];
    sort_in_place_by_keys(&mut decorated, &keys);

    Ok(decorated.into_iter().map(|(_, a)| a.clone()).collect())
}

/// The task key sequence:
/// 1. incomplete before completed
/// 2. priority rank, highest first
/// 3. tasks with a due date before tasks without one
/// 4. earlier due date first
/// 5. among undated tasks only, newest creation stamp first
pub fn task_keys<'a>() -> Vec<SortKey<'a, Task>> {
    vec![
        SortKey::asc(|t: &Task| t.completed),
        SortKey::desc(|t: &Task| t.priority.rank()),
        SortKey::asc(|t: &Task| t.due_date.is_none()),
        SortKey::asc(|t: &Task| t.due_date),
        SortKey::desc(|t: &Task| match t.due_date {
            Some(_) => None,
            None => t.created_at,
        }),
    ]
}

pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    sort_by_keys(tasks, &task_keys())
}

/// Best performers first by gain/loss percentage.
pub fn sort_stocks(stocks: &[Stock]) -> Vec<Stock> {
    sort_by_keys(stocks, &[SortKey::desc(|s: &Stock| TotalF64(gain_loss_percentage(s)))])
}
