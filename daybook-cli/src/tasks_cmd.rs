use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;
use daybook_core::{search, sort_tasks, Priority, Task};

use crate::app::App;
use crate::display::task_line;
use crate::input::{optional, required, trimmed};

#[derive(Subcommand, Debug)]
pub enum TasksCommand {
    /// Open tasks first, by priority, then due date
    List {
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a task
    Add {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long, default_value = "medium", value_parser = ["low", "medium", "high"])]
        priority: String,

        /// YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
    },

    /// Flip a task between open and completed
    Toggle { id: String },

    /// Delete a task by id
    Delete { id: String },
}

pub async fn run(app: &App, cmd: TasksCommand) -> Result<()> {
    match cmd {
        TasksCommand::List { search: query } => {
            let all = app.tasks.get_all().await;
            let shown = sort_tasks(&search(&all, query.as_deref().unwrap_or("")));
            for t in &shown {
                println!("{}", task_line(t));
            }
            let open = shown.iter().filter(|t| !t.completed).count();
            println!("\n{} tasks ({} open)", shown.len(), open);
        }

        TasksCommand::Add {
            title,
            description,
            priority,
            due,
        } => {
            let task = new_task(&title, &description, Priority::from(priority), due)?;
            let created = app.tasks.create(task).await;
            println!("Added {}", task_line(&created));
        }

        TasksCommand::Toggle { id } => {
            let Some(t) = app.tasks.toggle_complete(&id).await else {
                bail!("no task with id {id}");
            };
            println!("{}", task_line(&t));
        }

        TasksCommand::Delete { id } => {
            app.tasks.delete(&id).await;
            println!("Deleted {id}");
        }
    }

    Ok(())
}

fn new_task(title: &str, description: &str, priority: Priority, due: Option<String>) -> Result<Task> {
    let mut task = Task::new("", required("title", title)?)
        .with_description(trimmed(description))
        .with_priority(priority);
    if let Some(due) = optional(due) {
        let date = NaiveDate::parse_from_str(&due, "%Y-%m-%d")
            .with_context(|| format!("invalid due date: {due}"))?;
        task = task.with_due_date(date);
    }
    Ok(task)
}
