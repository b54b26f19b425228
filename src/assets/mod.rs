pub mod collections;
pub mod option;
pub mod stock;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use collections::{Calls, Legs, Puts, Stocks};
pub use option::{Call, OptionContract, OptionLeg, Put};
pub use stock::{Stock, SHARES_PER_CONTRACT};

/// Long/short orientation of a position or of a whole strategy.
///
/// `None` marks an undetermined orientation, which only happens for an empty basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
    #[default]
    None,
}

impl Direction {
    /// Direction implied by a signed price: negative is short, anything else long.
    pub fn from_price(price: f64) -> Self {
        if price < 0.0 {
            Direction::Short
        } else {
            Direction::Long
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Long => "Long",
            Direction::Short => "Short",
            Direction::None => "None",
        };
        f.write_str(name)
    }
}

/// Queries shared by every position primitive.
pub trait Asset {
    /// True when the asset does not reference any ticker.
    fn is_empty(&self) -> bool;

    fn direction(&self) -> Direction;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Stock,
    Put,
    Call,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Stock => "stock",
            AssetKind::Put => "put",
            AssetKind::Call => "call",
        };
        f.write_str(name)
    }
}

/// Closed set of position primitives a basket can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnyAsset {
    Stock(Stock),
    Put(Put),
    Call(Call),
}

impl AnyAsset {
    pub fn asset_kind(&self) -> AssetKind {
        match self {
            AnyAsset::Stock(_) => AssetKind::Stock,
            AnyAsset::Put(_) => AssetKind::Put,
            AnyAsset::Call(_) => AssetKind::Call,
        }
    }

    /// Ticker of the stock itself, or of the option's underlying.
    pub fn ticker(&self) -> &str {
        match self {
            AnyAsset::Stock(s) => &s.ticker,
            AnyAsset::Put(p) => p.ticker(),
            AnyAsset::Call(c) => c.ticker(),
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            AnyAsset::Stock(s) => s.price,
            AnyAsset::Put(p) => p.price(),
            AnyAsset::Call(c) => c.price(),
        }
    }
}

impl Asset for AnyAsset {
    fn is_empty(&self) -> bool {
        match self {
            AnyAsset::Stock(s) => s.is_empty(),
            AnyAsset::Put(p) => p.is_empty(),
            AnyAsset::Call(c) => c.is_empty(),
        }
    }

    fn direction(&self) -> Direction {
        match self {
            AnyAsset::Stock(s) => s.direction(),
            AnyAsset::Put(p) => p.direction(),
            AnyAsset::Call(c) => c.direction(),
        }
    }
}

impl From<Stock> for AnyAsset {
    fn from(stock: Stock) -> Self {
        AnyAsset::Stock(stock)
    }
}

impl From<Put> for AnyAsset {
    fn from(put: Put) -> Self {
        AnyAsset::Put(put)
    }
}

impl From<Call> for AnyAsset {
    fn from(call: Call) -> Self {
        AnyAsset::Call(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_price_sign() {
        assert_eq!(Direction::from_price(-0.01), Direction::Short);
        assert_eq!(Direction::from_price(0.0), Direction::Long);
        assert_eq!(Direction::from_price(12.5), Direction::Long);
    }

    #[test]
    fn direction_defaults_to_none() {
        assert_eq!(Direction::default(), Direction::None);
        assert_eq!(Direction::None.to_string(), "None");
    }

    #[test]
    fn any_asset_delegates_to_primitive() {
        let put = Put::on("AAA", -2.0, 140.0);
        let asset = AnyAsset::from(put);
        assert_eq!(asset.asset_kind(), AssetKind::Put);
        assert_eq!(asset.ticker(), "AAA");
        assert_eq!(asset.direction(), Direction::Short);
        assert!(!asset.is_empty());

        let blank = AnyAsset::from(Stock::new("", 10.0, 1));
        assert!(blank.is_empty());
        assert_eq!(blank.direction(), Direction::Long);
    }
}
