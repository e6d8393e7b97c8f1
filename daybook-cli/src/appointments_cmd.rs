use anyhow::{bail, Context, Result};
use chrono_tz::Tz;
use clap::Subcommand;
use daybook_core::time::{combine, is_upcoming};
use daybook_core::{categories, Appointment, AppointmentFilter, AppointmentView, ReminderBoard};
use tracing::info;

use crate::app::App;
use crate::display::{appointment_line, format_date, format_time};
use crate::input::{required, trimmed};

#[derive(Subcommand, Debug)]
pub enum AppointmentsCommand {
    /// Upcoming appointments soonest first, then past ones most recent first
    List {
        #[arg(long)]
        search: Option<String>,

        /// all, upcoming or past
        #[arg(long, default_value_t = AppointmentFilter::All)]
        filter: AppointmentFilter,

        /// Exact category to keep
        #[arg(long)]
        category: Option<String>,
    },

    /// Add an appointment
    Add {
        #[arg(long)]
        title: String,

        /// YYYY-MM-DD, in the configured timezone
        #[arg(long)]
        date: String,

        /// HH:MM, in the configured timezone
        #[arg(long)]
        time: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        category: String,
    },

    /// Delete an appointment by id
    Delete { id: String },

    /// Appointments due within 24 hours and appointments on today's date
    Reminders {
        /// Mark every pending due-soon appointment as reminded
        #[arg(long, default_value_t = false)]
        mark: bool,
    },

    /// Mark one appointment as reminded
    Remind { id: String },

    /// Distinct categories in use
    Categories,
}

pub async fn run(app: &App, cmd: AppointmentsCommand) -> Result<()> {
    match cmd {
        AppointmentsCommand::List {
            search,
            filter,
            category,
        } => list(app, search.as_deref().unwrap_or(""), filter, category.as_deref()).await,
        AppointmentsCommand::Add {
            title,
            date,
            time,
            description,
            location,
            category,
        } => {
            let appt = new_appointment(
                &title,
                &date,
                &time,
                &description,
                &location,
                &category,
                app.tz,
            )?;
            let created = app.appointments.create(appt).await;
            let upcoming = is_upcoming(&created, &app.time_context())?;
            println!("Added {}", appointment_line(&created, upcoming));
            Ok(())
        }
        AppointmentsCommand::Delete { id } => {
            app.appointments.delete(&id).await;
            println!("Deleted {id}");
            Ok(())
        }
        AppointmentsCommand::Reminders { mark } => reminders(app, mark).await,
        AppointmentsCommand::Remind { id } => {
            let Some(a) = app.appointments.mark_reminder_sent(&id).await else {
                bail!("no appointment with id {id}");
            };
            println!("Reminder marked: {} ({})", a.title, a.id);
            Ok(())
        }
        AppointmentsCommand::Categories => {
            for c in categories(&app.appointments.get_all().await) {
                println!("{c}");
            }
            Ok(())
        }
    }
}

fn new_appointment(
    title: &str,
    date: &str,
    time: &str,
    description: &str,
    location: &str,
    category: &str,
    tz: Tz,
) -> Result<Appointment> {
    let title = required("title", title)?;
    let (date, time) = (trimmed(date), trimmed(time));
    // reject what the classifier would later refuse
    combine("new", &date, &time, tz).context("invalid appointment date/time")?;
    Ok(Appointment::new("", title, date, time)
        .with_description(trimmed(description))
        .with_location(trimmed(location))
        .with_category(trimmed(category)))
}

async fn list(
    app: &App,
    query: &str,
    filter: AppointmentFilter,
    category: Option<&str>,
) -> Result<()> {
    let ctx = app.time_context();
    let all = app.appointments.get_all().await;
    let view = AppointmentView::build(&all, query, filter, category, &ctx)?;

    for a in &view.appointments {
        println!("{}", appointment_line(a, is_upcoming(a, &ctx)?));
    }
    println!(
        "\n{} shown ({} upcoming, {} past) | filter={}",
        view.appointments.len(),
        view.upcoming_count,
        view.past_count,
        filter
    );
    Ok(())
}

async fn reminders(app: &App, mark: bool) -> Result<()> {
    let ctx = app.time_context();
    let all = app.appointments.get_all().await;
    let board = ReminderBoard::build(&all, &ctx)?;

    if board.is_empty() {
        println!("Nothing due.");
        return Ok(());
    }

    println!("## Due within 24 hours\n");
    for a in &board.due_soon {
        let flag = if a.reminder_sent { "sent" } else { "pending" };
        println!(
            "- [{flag}] {} at {} {} | {}",
            a.title,
            format_date(&a.date),
            format_time(&a.time),
            a.id
        );
    }

    println!("\n## Today ({})\n", ctx.today().format("%b %-d, %Y"));
    for a in &board.today {
        println!("- {} at {} | {}", a.title, format_time(&a.time), a.id);
    }

    if mark {
        let ids: Vec<String> = board.pending().map(|a| a.id.clone()).collect();
        for id in &ids {
            if app.appointments.mark_reminder_sent(id).await.is_some() {
                info!(id = %id, "reminder marked");
            }
        }
        println!("\nMarked {} reminder(s) as sent.", ids.len());
    }

    Ok(())
}
