use serde::{Deserialize, Serialize};

use super::{Asset, Direction};

/// Share count of the stock lot that one option contract covers.
pub const SHARES_PER_CONTRACT: u32 = 100;

/// A stock position. The sign of `price` carries the direction; `shares` is a magnitude.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stock {
    pub ticker: String,
    pub price: f64,
    pub shares: u32,
}

impl Stock {
    pub fn new(ticker: impl Into<String>, price: f64, shares: u32) -> Self {
        Self {
            ticker: ticker.into(),
            price,
            shares,
        }
    }

    /// Zero-priced 100-share lot, used as the underlying reference of an option.
    pub fn lot(ticker: impl Into<String>) -> Self {
        Self::new(ticker, 0.0, SHARES_PER_CONTRACT)
    }

    pub fn is_contract_lot(&self) -> bool {
        self.shares == SHARES_PER_CONTRACT
    }
}

impl Asset for Stock {
    fn is_empty(&self) -> bool {
        self.ticker.is_empty()
    }

    fn direction(&self) -> Direction {
        Direction::from_price(self.price)
    }
}
