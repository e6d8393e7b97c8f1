use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::App;
use crate::state::ensure_parent;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Contacts,
    Appointments,
    Tasks,
    Stocks,
    Websites,
}

pub const CONTACT_HEADER: &[&str] = &["id", "name", "phone", "email", "category"];
pub const APPOINTMENT_HEADER: &[&str] = &[
    "id",
    "title",
    "description",
    "date",
    "time",
    "location",
    "category",
    "reminderSent",
    "createdAt",
];
pub const TASK_HEADER: &[&str] = &[
    "id",
    "title",
    "description",
    "priority",
    "dueDate",
    "completed",
    "createdAt",
];
pub const STOCK_HEADER: &[&str] = &[
    "id",
    "symbol",
    "name",
    "sector",
    "quantity",
    "purchasePrice",
    "currentPrice",
    "notes",
    "createdAt",
];
pub const WEBSITE_HEADER: &[&str] = &["id", "name", "url", "description", "category", "createdAt"];

/// Serialize `records` as CSV under `header`. The header row is written even
/// when there are no records. Absent optional fields are empty cells.
pub fn write_records<W: Write, R: Serialize>(
    out: W,
    header: &[&str],
    records: &[R],
) -> Result<usize> {
    let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    w.write_record(header).context("write csv header")?;
    for r in records {
        w.serialize(r).context("serialize csv row")?;
    }
    w.flush().context("flush csv")?;
    Ok(records.len())
}

fn write_file<R: Serialize>(path: &Path, header: &[&str], records: &[R]) -> Result<usize> {
    ensure_parent(path)?;
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_records(f, header, records)
}

pub async fn run(app: &App, entity: Entity, out: &Path) -> Result<()> {
    let n = match entity {
        Entity::Contacts => write_file(out, CONTACT_HEADER, &app.contacts.get_all().await)?,
        Entity::Appointments => {
            write_file(out, APPOINTMENT_HEADER, &app.appointments.get_all().await)?
        }
        Entity::Tasks => write_file(out, TASK_HEADER, &app.tasks.get_all().await)?,
        Entity::Stocks => write_file(out, STOCK_HEADER, &app.stocks.get_all().await)?,
        Entity::Websites => write_file(out, WEBSITE_HEADER, &app.websites.get_all().await)?,
    };
    println!("Wrote {n} {entity:?} to {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use daybook_core::{Appointment, Contact, ContactCategory, Priority, Stock, Task, Website};

    fn to_text<R: Serialize>(header: &[&str], rows: &[R]) -> String {
        let mut buf = Vec::new();
        write_records(&mut buf, header, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    /// Header row csv derives from the record's own field names.
    fn derived_header<R: Serialize>(row: &R) -> String {
        let mut w = csv::Writer::from_writer(Vec::new());
        w.serialize(row).unwrap();
        let text = String::from_utf8(w.into_inner().unwrap()).unwrap();
        text.lines().next().unwrap().to_string()
    }

    #[test]
    fn contacts_export_with_header_and_empty_email() {
        let rows = vec![
            Contact::new("c1", "John Smith", "555-0101")
                .with_email("john@example.com")
                .with_category(ContactCategory::Work),
            Contact::new("c2", "Jane Doe", "555-0102"),
        ];
        let text = to_text(CONTACT_HEADER, &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,name,phone,email,category");
        assert_eq!(lines[1], "c1,John Smith,555-0101,john@example.com,Work");
        assert_eq!(lines[2], "c2,Jane Doe,555-0102,,General");
    }

    #[test]
    fn empty_collection_still_has_header() {
        let text = to_text::<Task>(TASK_HEADER, &[]);
        assert_eq!(text, "id,title,description,priority,dueDate,completed,createdAt\n");

        let text = to_text::<Contact>(CONTACT_HEADER, &[]);
        assert!(text.starts_with("id,name,phone,email,category"));
    }

    #[test]
    fn headers_match_record_fields() {
        let appt = Appointment::new("a1", "x", "2026-02-20", "09:00");
        let stock = Stock::new("s1", "A", "A", "Tech", 1.0, 1.0, 1.0);
        let site = Website::new("w1", "Docs", "https://docs.rs");
        let contact = Contact::new("c1", "a", "1");
        let task = Task::new("t1", "x");

        assert_eq!(derived_header(&contact), CONTACT_HEADER.join(","));
        assert_eq!(derived_header(&appt), APPOINTMENT_HEADER.join(","));
        assert_eq!(derived_header(&task), TASK_HEADER.join(","));
        assert_eq!(derived_header(&stock), STOCK_HEADER.join(","));
        assert_eq!(derived_header(&site), WEBSITE_HEADER.join(","));
    }

    #[test]
    fn task_export_uses_wire_names() {
        let rows = vec![Task::new("t1", "File taxes")
            .with_priority(Priority::High)
            .with_due_date(NaiveDate::from_ymd_opt(2026, 4, 15).unwrap())];
        let text = to_text(TASK_HEADER, &rows);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().contains("dueDate"));
        assert_eq!(lines.next().unwrap(), "t1,File taxes,,high,2026-04-15,false,");
    }
}
