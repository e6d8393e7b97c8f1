//! Derived stock figures and the portfolio-level fold.

use serde::{Deserialize, Serialize};

use crate::stock::Stock;

/// `quantity * current - quantity * purchase`
pub fn gain_loss(stock: &Stock) -> f64 {
    stock.quantity * stock.current_price - stock.quantity * stock.purchase_price
}

/// Percentage change per share. A zero purchase price yields 0, never
/// NaN or infinity.
pub fn gain_loss_percentage(stock: &Stock) -> f64 {
    if stock.purchase_price == 0.0 {
        return 0.0;
    }
    (stock.current_price - stock.purchase_price) / stock.purchase_price * 100.0
}

pub fn total_value(stock: &Stock) -> f64 {
    stock.quantity * stock.current_price
}

pub fn total_cost(stock: &Stock) -> f64 {
    stock.quantity * stock.purchase_price
}

pub fn is_gainer(stock: &Stock) -> bool {
    gain_loss(stock) > 0.0
}

pub fn is_loser(stock: &Stock) -> bool {
    gain_loss(stock) < 0.0
}

/// Per-holding figures, computed together for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMetrics {
    pub gain_loss: f64,
    pub gain_loss_percentage: f64,
    pub total_value: f64,
    pub total_cost: f64,
    pub is_gainer: bool,
    pub is_loser: bool,
}

impl StockMetrics {
    pub fn of(stock: &Stock) -> Self {
        let gl = gain_loss(stock);
        Self {
            gain_loss: gl,
            gain_loss_percentage: gain_loss_percentage(stock),
            total_value: total_value(stock),
            total_cost: total_cost(stock),
            is_gainer: gl > 0.0,
            is_loser: gl < 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub portfolio_value: f64,
    pub portfolio_cost: f64,
    pub portfolio_gain_loss: f64,
    pub portfolio_gain_loss_percentage: f64,
    pub holdings: usize,
    pub gainers: usize,
    pub losers: usize,
}

/// Fold a collection of holdings into portfolio totals.
pub fn portfolio_summary(stocks: &[Stock]) -> PortfolioSummary {
    let portfolio_value: f64 = stocks.iter().map(total_value).sum();
    let portfolio_cost: f64 = stocks.iter().map(total_cost).sum();
    let portfolio_gain_loss = portfolio_value - portfolio_cost;
    let portfolio_gain_loss_percentage = if portfolio_cost > 0.0 {
        (portfolio_value - portfolio_cost) / portfolio_cost * 100.0
    } else {
        0.0
    };

    PortfolioSummary {
        portfolio_value,
        portfolio_cost,
        portfolio_gain_loss,
        portfolio_gain_loss_percentage,
        holdings: stocks.len(),
        gainers: stocks.iter().filter(|s| is_gainer(s)).count(),
        losers: stocks.iter().filter(|s| is_loser(s)).count(),
    }
}
