use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod app;
mod appointments_cmd;
mod config;
mod contacts_cmd;
mod display;
mod export;
mod input;
mod logging;
mod state;
mod stocks_cmd;
mod tasks_cmd;
mod websites_cmd;

use crate::app::App;
use crate::appointments_cmd::AppointmentsCommand;
use crate::contacts_cmd::ContactsCommand;
use crate::stocks_cmd::StocksCommand;
use crate::tasks_cmd::TasksCommand;
use crate::websites_cmd::WebsitesCommand;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("DAYBOOK_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(name = "daybook", version = VERSION, about = "Contacts, appointments, tasks, stocks and bookmarks")]
struct Cli {
    /// Never contact the backend; work on the local collection only
    #[arg(long, global = true, default_value_t = false)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Phonebook
    Contacts {
        #[command(subcommand)]
        command: ContactsCommand,
    },

    /// Appointments and reminders
    Appointments {
        #[command(subcommand)]
        command: AppointmentsCommand,
    },

    /// To-do list
    Tasks {
        #[command(subcommand)]
        command: TasksCommand,
    },

    /// Stock portfolio
    Stocks {
        #[command(subcommand)]
        command: StocksCommand,
    },

    /// Bookmarked websites
    Websites {
        #[command(subcommand)]
        command: WebsitesCommand,
    },

    /// Write one record collection to a CSV file
    Export {
        #[arg(value_enum)]
        entity: export::Entity,

        #[arg(long)]
        out: PathBuf,
    },

    /// Manage ~/.daybook/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,

    /// Print the effective config
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // config commands must still work when config.toml does not parse
    if let Command::Config { command } = &cli.command {
        logging::init(&config::Config::default().display.log_level);
        return match command {
            ConfigCommand::Init => config::init_config(),
            ConfigCommand::Show => config::show_config(),
        };
    }

    let cfg = config::load_config()?;
    logging::init(&cfg.display.log_level);

    let app = App::new(&cfg, cli.offline)?;

    match cli.command {
        Command::Contacts { command } => contacts_cmd::run(&app, command).await?,
        Command::Appointments { command } => appointments_cmd::run(&app, command).await?,
        Command::Tasks { command } => tasks_cmd::run(&app, command).await?,
        Command::Stocks { command } => stocks_cmd::run(&app, command).await?,
        Command::Websites { command } => websites_cmd::run(&app, command).await?,
        Command::Export { entity, out } => export::run(&app, entity, &out).await?,
        Command::Config { .. } => {}
    }

    Ok(())
}
