use serde::{Deserialize, Serialize};

use super::{Asset, AssetKind, Direction, Stock};

/// Fields shared by puts and calls. `price` is the signed premium: negative means written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionLeg {
    pub underlying: Stock,
    pub price: f64,
    pub strike: f64,
}

impl OptionLeg {
    pub fn new(underlying: Stock, price: f64, strike: f64) -> Self {
        Self {
            underlying,
            price,
            strike,
        }
    }
}

impl Asset for OptionLeg {
    fn is_empty(&self) -> bool {
        self.underlying.is_empty()
    }

    fn direction(&self) -> Direction {
        Direction::from_price(self.price)
    }
}

/// Common access for the two option flavours, so collections and rules can be generic.
pub trait OptionContract: Clone {
    const KIND: AssetKind;

    fn leg(&self) -> &OptionLeg;

    fn leg_mut(&mut self) -> &mut OptionLeg;

    fn from_leg(leg: OptionLeg) -> Self;

    fn ticker(&self) -> &str {
        &self.leg().underlying.ticker
    }

    fn price(&self) -> f64 {
        self.leg().price
    }

    fn strike(&self) -> f64 {
        self.leg().strike
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Put(pub OptionLeg);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Call(pub OptionLeg);

impl Put {
    pub fn new(underlying: Stock, price: f64, strike: f64) -> Self {
        Self(OptionLeg::new(underlying, price, strike))
    }

    /// Put on a standard contract lot of `ticker`.
    pub fn on(ticker: impl Into<String>, price: f64, strike: f64) -> Self {
        Self::new(Stock::lot(ticker), price, strike)
    }
}

impl Call {
    pub fn new(underlying: Stock, price: f64, strike: f64) -> Self {
        Self(OptionLeg::new(underlying, price, strike))
    }

    /// Call on a standard contract lot of `ticker`.
    pub fn on(ticker: impl Into<String>, price: f64, strike: f64) -> Self {
        Self::new(Stock::lot(ticker), price, strike)
    }
}

impl OptionContract for Put {
    const KIND: AssetKind = AssetKind::Put;

    fn leg(&self) -> &OptionLeg {
        &self.0
    }

    fn leg_mut(&mut self) -> &mut OptionLeg {
        &mut self.0
    }

    fn from_leg(leg: OptionLeg) -> Self {
        Self(leg)
    }
}

impl OptionContract for Call {
    const KIND: AssetKind = AssetKind::Call;

    fn leg(&self) -> &OptionLeg {
        &self.0
    }

    fn leg_mut(&mut self) -> &mut OptionLeg {
        &mut self.0
    }

    fn from_leg(leg: OptionLeg) -> Self {
        Self(leg)
    }
}

impl Asset for Put {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn direction(&self) -> Direction {
        self.0.direction()
    }
}

impl Asset for Call {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn direction(&self) -> Direction {
        self.0.direction()
    }
}
