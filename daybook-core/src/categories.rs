//! Distinct category values for selection lists.

use std::collections::BTreeSet;

use crate::records::{Appointment, Contact, Website};
use crate::stock::Stock;

/// The field a record is grouped by: category, or sector for stocks.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for Contact {
    fn category(&self) -> &str {
        self.category.as_str()
    }
}

impl Categorized for Appointment {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Website {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for Stock {
    fn category(&self) -> &str {
        &self.sector
    }
}

/// Distinct values present in `records`, sorted by byte order
/// (locale-independent, `"Zeta" < "alpha"`).
pub fn categories<R: Categorized>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.category())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
