//! Terminal formatting helpers.

use chrono::{NaiveDate, NaiveTime};
use daybook_core::{Appointment, Contact, Stock, StockMetrics, Task, Website};

/// Host part of a bookmark URL, or the URL itself when it does not parse.
pub fn hostname(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// `2026-02-20` -> `Feb 20, 2026`. Unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// `14:05` -> `2:05 PM`. Unparseable input is shown as-is.
pub fn format_time(raw: &str) -> String {
    let t = raw.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn money(v: f64) -> String {
    if v < 0.0 {
        format!("-${:.2}", v.abs())
    } else {
        format!("${v:.2}")
    }
}

pub fn signed_pct(v: f64) -> String {
    format!("{v:+.2}%")
}

pub fn contact_line(c: &Contact) -> String {
    format!(
        "{} | {} | {} | {} | {}",
        c.id,
        c.name,
        c.phone,
        c.email.as_deref().unwrap_or("-"),
        c.category
    )
}

pub fn appointment_line(a: &Appointment, upcoming: bool) -> String {
    let mut s = format!(
        "[{}] {} {} | {}",
        if upcoming { "upcoming" } else { "past" },
        format_date(&a.date),
        format_time(&a.time),
        a.title
    );
    if !a.location.is_empty() {
        s.push_str(&format!(" @ {}", a.location));
    }
    if !a.category.is_empty() {
        s.push_str(&format!(" ({})", a.category));
    }
    if a.reminder_sent {
        s.push_str(" [reminded]");
    }
    format!("{s} | {}", a.id)
}

pub fn task_line(t: &Task) -> String {
    let due = t
        .due_date
        .map(|d| format!(" due {}", d.format("%b %-d, %Y")))
        .unwrap_or_default();
    format!(
        "[{}] ({}) {}{} | {}",
        if t.completed { "x" } else { " " },
        t.priority,
        t.title,
        due,
        t.id
    )
}

pub fn stock_line(s: &Stock) -> String {
    let m = StockMetrics::of(s);
    let trend = if m.is_gainer {
        "+"
    } else if m.is_loser {
        "-"
    } else {
        "="
    };
    format!(
        "{trend} {} {} x{} | cost {} | value {} | {} ({}) | {}",
        s.symbol,
        s.name,
        s.quantity,
        money(m.total_cost),
        money(m.total_value),
        money(m.gain_loss),
        signed_pct(m.gain_loss_percentage),
        s.id
    )
}

pub fn website_line(w: &Website) -> String {
    format!("{} ({}) [{}] | {}", w.name, hostname(&w.url), w.category, w.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hostname() {
        assert_eq!(hostname("https://docs.rs/chrono/latest"), "docs.rs");
        assert_eq!(hostname("not a url"), "not a url");
    }

    #[test]
    fn test_date_time_formatting() {
        assert_eq!(format_date("2026-02-05"), "Feb 5, 2026");
        assert_eq!(format_time("14:05"), "2:05 PM");
        assert_eq!(format_time("09:00"), "9:00 AM");
        assert_eq!(format_time("later"), "later");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(1234.5), "$1234.50");
        assert_eq!(money(-3.0), "-$3.00");
        assert_eq!(signed_pct(20.0), "+20.00%");
    }
}
