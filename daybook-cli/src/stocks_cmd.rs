use anyhow::Result;
use clap::Subcommand;
use daybook_core::{categories, portfolio_summary, search, sort_stocks, Stock};

use crate::app::App;
use crate::display::{money, signed_pct, stock_line};
use crate::input::{optional, required, trimmed};

#[derive(Subcommand, Debug)]
pub enum StocksCommand {
    /// Holdings, best performers first
    List {
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a holding
    Add {
        #[arg(long)]
        symbol: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        sector: String,

        #[arg(long)]
        quantity: f64,

        /// Price paid per share
        #[arg(long)]
        purchase_price: f64,

        /// Latest price per share (defaults to the purchase price)
        #[arg(long)]
        current_price: Option<f64>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a holding by id
    Delete { id: String },

    /// Portfolio totals
    Summary {
        /// Print the totals as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Distinct sectors held
    Sectors,
}

pub async fn run(app: &App, cmd: StocksCommand) -> Result<()> {
    match cmd {
        StocksCommand::List { search: query } => {
            let all = app.stocks.get_all().await;
            for s in &sort_stocks(&search(&all, query.as_deref().unwrap_or(""))) {
                println!("{}", stock_line(s));
            }
        }

        StocksCommand::Add {
            symbol,
            name,
            sector,
            quantity,
            purchase_price,
            current_price,
            notes,
        } => {
            let mut stock = Stock::new(
                "",
                required("symbol", &symbol)?.to_uppercase(),
                required("name", &name)?,
                trimmed(&sector),
                quantity,
                purchase_price,
                current_price.unwrap_or(purchase_price),
            );
            if let Some(notes) = optional(notes) {
                stock = stock.with_notes(notes);
            }
            let created = app.stocks.create(stock).await;
            println!("Added {}", stock_line(&created));
        }

        StocksCommand::Delete { id } => {
            app.stocks.delete(&id).await;
            println!("Deleted {id}");
        }

        StocksCommand::Summary { json } => {
            let s = portfolio_summary(&app.stocks.get_all().await);
            if json {
                println!("{}", serde_json::to_string_pretty(&s)?);
                return Ok(());
            }
            println!("Holdings:   {}", s.holdings);
            println!("Value:      {}", money(s.portfolio_value));
            println!("Cost:       {}", money(s.portfolio_cost));
            println!(
                "Gain/Loss:  {} ({})",
                money(s.portfolio_gain_loss),
                signed_pct(s.portfolio_gain_loss_percentage)
            );
            println!("Gainers:    {}", s.gainers);
            println!("Losers:     {}", s.losers);
        }

        StocksCommand::Sectors => {
            for c in categories(&app.stocks.get_all().await) {
                println!("{c}");
            }
        }
    }

    Ok(())
}
