//! Free-text search: case-insensitive substring match, OR-combined over a
//! fixed set of fields per record kind.

use crate::records::{Appointment, Contact, Website};
use crate::stock::Stock;
use crate::task::Task;

/// Fields a record exposes to free-text search. Absent optional fields are
/// reported as `""`.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Contact {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_deref().unwrap_or(""),
        ]
    }
}

impl Searchable for Appointment {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
            self.category.as_str(),
        ]
    }
}

impl Searchable for Task {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Stock {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.symbol.as_str(),
            self.name.as_str(),
            self.sector.as_str(),
            self.notes.as_deref().unwrap_or(""),
        ]
    }
}

impl Searchable for Website {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.url.as_str(),
            self.description.as_deref().unwrap_or(""),
            self.category.as_str(),
        ]
    }
}

/// True if any search field contains `query`, ignoring case.
pub fn matches<R: Searchable>(record: &R, query: &str) -> bool {
    matches_lowered(record, &query.to_lowercase())
}

fn matches_lowered<R: Searchable>(record: &R, q: &str) -> bool {
    record
        .search_fields()
        .into_iter()
        .any(|f| f.to_lowercase().contains(q))
}

/// Keep the records matching `query`. No trimming and no blank-query
/// shortcut: an empty query matches everything, whitespace matches only
/// fields that contain it.
pub fn filter_records<R: Searchable + Clone>(records: &[R], query: &str) -> Vec<R> {
    let q = query.to_lowercase();
    records
        .iter()
        .filter(|r| matches_lowered(*r, &q))
        .cloned()
        .collect()
}

/// Search box behaviour: a blank query means "no filter" and returns the
/// collection unchanged.
pub fn search<R: Searchable + Clone>(records: &[R], query: &str) -> Vec<R> {
    if query.trim().is_empty() {
        return records.to_vec();
    }
    filter_records(records, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> Vec<Contact> {
        vec![
            Contact::new("c1", "John Smith", "+1 (555) 123-4567").with_email("john@example.com"),
            Contact::new("c2", "Jane Doe", "+1 (555) 987-6543"),
        ]
    }

    #[test]
    fn test_blank_query_returns_input() {
        let all = contacts();
        assert_eq!(search(&all, ""), all);
        assert_eq!(search(&all, "   "), all);
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let found = search(&contacts(), "JANE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Jane Doe");
    }

    #[test]
    fn test_missing_email_is_not_a_failure() {
        // c2 has no email; phone still matches
        let found = search(&contacts(), "987");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c2");
    }

    #[test]
    fn test_filter_contract_has_no_blank_shortcut() {
        let all = contacts();
        assert_eq!(filter_records(&all, "").len(), 2);
        // both names contain a space, so whitespace still matches them
        assert_eq!(filter_records(&all, " ").len(), 2);
        assert!(filter_records(&all, "  ").is_empty());
    }

    #[test]
    fn test_stock_notes_and_sector() {
        let stocks = vec![
            Stock::new("s1", "AAPL", "Apple", "Technology", 1.0, 1.0, 1.0).with_notes("long hold"),
            Stock::new("s2", "XOM", "Exxon", "Energy", 1.0, 1.0, 1.0),
        ];
        assert_eq!(search(&stocks, "HOLD")[0].id, "s1");
        assert_eq!(search(&stocks, "energy")[0].id, "s2");
    }

    #[test]
    fn test_task_fields_only() {
        let tasks = vec![Task::new("t1", "Buy milk").with_description("2 litres")];
        assert_eq!(search(&tasks, "litres").len(), 1);
        assert!(search(&tasks, "medium").is_empty());
    }

    #[test]
    fn test_appointment_fields() {
        let appts = vec![
            Appointment::new("a1", "Dentist", "2026-02-20", "09:00")
                .with_description("cleaning")
                .with_location("Main St Clinic")
                .with_category("Health"),
            Appointment::new("a2", "Standup", "2026-02-20", "10:00").with_category("Work"),
        ];
        assert_eq!(search(&appts, "clinic")[0].id, "a1");
        assert_eq!(search(&appts, "CLEAN")[0].id, "a1");
        assert_eq!(search(&appts, "work")[0].id, "a2");
        // date and time are not searched
        assert!(search(&appts, "2026").is_empty());
        assert!(search(&appts, "09:00").is_empty());
    }

    #[test]
    fn test_website_fields() {
        let sites = vec![
            Website::new("w1", "Rust docs", "https://docs.rs")
                .with_description("crate documentation")
                .with_category("Dev"),
            Website::new("w2", "News", "https://example.com/news").with_category("Reading"),
        ];
        assert_eq!(search(&sites, "DOCS.RS")[0].id, "w1");
        assert_eq!(search(&sites, "documentation")[0].id, "w1");
        assert_eq!(search(&sites, "reading")[0].id, "w2");
        // w2 has no description
        assert_eq!(search(&sites, "example.com").len(), 1);
    }
}
