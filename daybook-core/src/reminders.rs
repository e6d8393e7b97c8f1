//! Reminder board: which appointments need a nudge right now.

use tracing::debug;

use crate::error::Result;
use crate::records::Appointment;
use crate::time::{is_due_soon, is_today, TimeContext};

/// Appointments due within the next 24 hours and appointments on today's
/// date. The two lists overlap; each keeps input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderBoard {
    pub due_soon: Vec<Appointment>,
    pub today: Vec<Appointment>,
}

impl ReminderBoard {
    pub fn build(records: &[Appointment], ctx: &TimeContext) -> Result<Self> {
        let mut board = ReminderBoard::default();
        for a in records {
            if is_due_soon(a, ctx)? {
                board.due_soon.push(a.clone());
            }
            if is_today(a, ctx)? {
                board.today.push(a.clone());
            }
        }
        debug!(
            due_soon = board.due_soon.len(),
            today = board.today.len(),
            "built reminder board"
        );
        Ok(board)
    }

    pub fn is_empty(&self) -> bool {
        self.due_soon.is_empty() && self.today.is_empty()
    }

    /// Due-soon appointments whose reminder has not been sent yet.
    pub fn pending(&self) -> impl Iterator<Item = &Appointment> {
        self.due_soon.iter().filter(|a| !a.reminder_sent)
    }

    /// Flag `id` as reminded on every list it appears in.
    ///
    /// Returns true if any copy changed.
    pub fn mark_reminder_sent(&mut self, id: &str) -> bool {
        let mut changed = false;
        for a in self.due_soon.iter_mut().chain(self.today.iter_mut()) {
            if a.id == id {
                changed |= a.mark_reminder_sent();
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ctx() -> TimeContext {
        TimeContext::utc(Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_board_lists_overlap() {
        let list = vec![
            Appointment::new("morning", "x", "2026-02-19", "08:00"),
            Appointment::new("evening", "x", "2026-02-19", "18:00"),
            Appointment::new("tomorrow", "x", "2026-02-20", "09:00"),
            Appointment::new("next-week", "x", "2026-02-26", "09:00"),
        ];
        let board = ReminderBoard::build(&list, &ctx()).unwrap();
        let due: Vec<_> = board.due_soon.iter().map(|a| a.id.as_str()).collect();
        let today: Vec<_> = board.today.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(due, vec!["evening", "tomorrow"]);
        assert_eq!(today, vec!["morning", "evening"]);
    }

    #[test]
    fn test_pending_and_mark() {
        let list = vec![Appointment::new("evening", "x", "2026-02-19", "18:00")];
        let mut board = ReminderBoard::build(&list, &ctx()).unwrap();
        assert_eq!(board.pending().count(), 1);

        assert!(board.mark_reminder_sent("evening"));
        assert!(!board.mark_reminder_sent("evening"));
        assert_eq!(board.pending().count(), 0);
        assert!(board.today[0].reminder_sent);
    }

    #[test]
    fn test_empty_board() {
        let board = ReminderBoard::build(&[], &ctx()).unwrap();
        assert!(board.is_empty());
    }
}
