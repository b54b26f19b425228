//! Ordered position containers.
//!
//! Canonical order is the normal form every structural rule relies on:
//! stocks ascend by price, option legs ascend by `(underlying ticker, strike)`.
//! Both sorts are stable and total (`OrderedFloat` handles the `f64` keys).

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::option::{Call, OptionContract, Put};
use super::{Asset, Direction, Stock};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stocks(Vec<Stock>);

impl Stocks {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, stock: Stock) {
        self.0.push(stock);
    }

    pub fn sort(&mut self) {
        self.0.sort_by_key(|s| OrderedFloat(s.price));
    }

    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// Sum of signed stock prices.
    pub fn price(&self) -> f64 {
        self.0.iter().map(|s| s.price).sum()
    }

    /// Sum of share magnitudes.
    pub fn shares(&self) -> u64 {
        self.0.iter().map(|s| u64::from(s.shares)).sum()
    }

    pub fn into_inner(self) -> Vec<Stock> {
        self.0
    }
}

impl Deref for Stocks {
    type Target = [Stock];

    fn deref(&self) -> &[Stock] {
        &self.0
    }
}

impl From<Vec<Stock>> for Stocks {
    fn from(stocks: Vec<Stock>) -> Self {
        Self(stocks)
    }
}

impl FromIterator<Stock> for Stocks {
    fn from_iter<I: IntoIterator<Item = Stock>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Stocks {
    type Item = Stock;
    type IntoIter = std::vec::IntoIter<Stock>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stocks {
    type Item = &'a Stock;
    type IntoIter = std::slice::Iter<'a, Stock>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ordered option legs of a single flavour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Legs<T>(Vec<T>);

pub type Puts = Legs<Put>;
pub type Calls = Legs<Call>;

impl<T: OptionContract> Legs<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, leg: T) {
        self.0.push(leg);
    }

    /// Sort by underlying ticker, then by strike.
    pub fn sort(&mut self) {
        self.0.sort_by(|a, b| {
            a.ticker()
                .cmp(b.ticker())
                .then_with(|| OrderedFloat(a.strike()).cmp(&OrderedFloat(b.strike())))
        });
    }

    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    /// Sum of signed premiums.
    pub fn price(&self) -> f64 {
        self.0.iter().map(|leg| leg.price()).sum()
    }

    /// Strike of the `i`-th leg in current order.
    pub fn strike(&self, i: usize) -> Option<f64> {
        self.0.get(i).map(|leg| leg.strike())
    }

    /// Split into `(long, short)` by premium sign, keeping relative order.
    pub fn partition_by_direction(self) -> (Self, Self)
    where
        T: Asset,
    {
        let (long, short): (Vec<T>, Vec<T>) = self
            .0
            .into_iter()
            .partition(|leg| leg.direction() == Direction::Long);
        (Self(long), Self(short))
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for Legs<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Legs<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<Vec<T>> for Legs<T> {
    fn from(legs: Vec<T>) -> Self {
        Self(legs)
    }
}

impl<T> FromIterator<T> for Legs<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Legs<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Legs<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
