//! daybook-core: record types and the pure computations Daybook runs over them
//! (time classification, display orders, portfolio figures, search, categories).

pub mod categories;
pub mod error;
pub mod ordering;
pub mod portfolio;
pub mod records;
pub mod reminders;
pub mod search;
pub mod stock;
pub mod task;
pub mod time;
pub mod timestamp;
pub mod views;

pub use categories::{categories, Categorized};
pub use error::{CoreError, Result};
pub use ordering::{
    sort_appointments, sort_by_keys, sort_stocks, sort_tasks, Direction, SortKey, TotalF64,
};
pub use portfolio::{
    gain_loss, gain_loss_percentage, is_gainer, is_loser, portfolio_summary, total_cost,
    total_value, PortfolioSummary, StockMetrics,
};
pub use records::{Appointment, Contact, ContactCategory, Website};
pub use reminders::ReminderBoard;
pub use search::{filter_records, matches, search, Searchable};
pub use stock::Stock;
pub use task::{Priority, Task};
pub use time::{is_due_soon, is_past, is_today, is_upcoming, Scheduled, TimeContext};
pub use views::{AppointmentFilter, AppointmentView};
