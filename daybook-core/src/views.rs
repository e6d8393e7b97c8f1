//! Appointment list view: search, then time/category filters, then order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::ordering::sort_appointments;
use crate::records::Appointment;
use crate::search::search;
use crate::time::{is_past, is_upcoming, TimeContext};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl FromStr for AppointmentFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(AppointmentFilter::All),
            "upcoming" => Ok(AppointmentFilter::Upcoming),
            "past" => Ok(AppointmentFilter::Past),
            other => Err(format!("unknown appointment filter: {other}")),
        }
    }
}

impl fmt::Display for AppointmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AppointmentFilter::All => "all",
            AppointmentFilter::Upcoming => "upcoming",
            AppointmentFilter::Past => "past",
        })
    }
}

/// Ordered appointments plus partition counts over the same filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentView {
    pub appointments: Vec<Appointment>,
    pub upcoming_count: usize,
    pub past_count: usize,
}

impl AppointmentView {
    /// `category` is an exact match; `None` or `""` keeps every category.
    pub fn build(
        records: &[Appointment],
        query: &str,
        filter: AppointmentFilter,
        category: Option<&str>,
        ctx: &TimeContext,
    ) -> Result<Self> {
        let mut kept = Vec::new();
        for a in search(records, query) {
            let keep = match filter {
                AppointmentFilter::All => true,
                AppointmentFilter::Upcoming => is_upcoming(&a, ctx)?,
                AppointmentFilter::Past => is_past(&a, ctx)?,
            };
            let in_category = match category {
                Some(c) if !c.is_empty() => a.category == c,
                _ => true,
            };
            if keep && in_category {
                kept.push(a);
            }
        }

        let appointments = sort_appointments(&kept, ctx)?;
        let mut upcoming_count = 0;
        for a in &appointments {
            if is_upcoming(a, ctx)? {
                upcoming_count += 1;
            }
        }

        Ok(Self {
            past_count: appointments.len() - upcoming_count,
            upcoming_count,
            appointments,
        })
    }
}
