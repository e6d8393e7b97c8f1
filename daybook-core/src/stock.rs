//! Stock holding record. Gain/loss figures are derived in [`crate::portfolio`]
//! and never stored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A position in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(default)]
    pub id: String,
    /// Ticker symbol (AAPL, MSFT, ...)
    pub symbol: String,
    /// Company name
    pub name: String,
    pub sector: String,
    /// Number of shares held
    pub quantity: f64,
    /// Price per share at purchase
    pub purchase_price: f64,
    /// Latest known price per share
    pub current_price: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, with = "crate::timestamp::created_at")]
    pub created_at: Option<NaiveDateTime>,
}

impl Stock {
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        quantity: f64,
        purchase_price: f64,
        current_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            sector: sector.into(),
            quantity,
            purchase_price,
            current_price,
            notes: None,
            created_at: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_wire_names() {
        let s = Stock::new("s_1", "AAPL", "Apple", "Technology", 10.0, 150.0, 180.0);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["purchasePrice"], 150.0);
        assert_eq!(json["currentPrice"], 180.0);
        assert!(json["notes"].is_null());
    }
}
