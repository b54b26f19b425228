//! Seeded generator of positions and strategy-shaped baskets.
//!
//! Every named kind can be produced in each of its directions, so tests can check
//! that classification recovers exactly the shape that was generated. Strikes are
//! whole dollars; a share of draws uses consecutive strikes to hit the tightest
//! orderings each rule accepts.

pub mod config;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::assets::{AnyAsset, Asset, Call, Direction, Put, Stock, SHARES_PER_CONTRACT};
use crate::strategy::{Buckets, Strategy, StrategyKind, ValidationError};

pub use config::FixtureConfig;

/// Chance that a multi-strike draw uses consecutive strikes.
const ADJACENT_STRIKE_ODDS: f64 = 0.2;

/// Raw inputs for one strategy plus the classification they are built to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    pub stocks: Vec<Stock>,
    pub puts: Vec<Put>,
    pub calls: Vec<Call>,
    pub kind: StrategyKind,
    pub direction: Direction,
}

impl Basket {
    fn new(kind: StrategyKind, direction: Direction) -> Self {
        Self {
            stocks: Vec::new(),
            puts: Vec::new(),
            calls: Vec::new(),
            kind,
            direction,
        }
    }

    pub fn build(&self) -> Result<Strategy, ValidationError> {
        Strategy::new(self.stocks.clone(), self.puts.clone(), self.calls.clone())
    }

    /// The same positions pre-split into direction buckets.
    pub fn buckets(&self) -> Buckets {
        let ticker = self
            .stocks
            .first()
            .map(|s| s.ticker.clone())
            .or_else(|| self.calls.first().map(|c| c.0.underlying.ticker.clone()))
            .or_else(|| self.puts.first().map(|p| p.0.underlying.ticker.clone()))
            .unwrap_or_default();

        let mut buckets = Buckets {
            ticker,
            stocks: self.stocks.clone().into(),
            ..Buckets::default()
        };
        for put in &self.puts {
            match put.direction() {
                Direction::Short => buckets.short_puts.push(put.clone()),
                _ => buckets.long_puts.push(put.clone()),
            }
        }
        for call in &self.calls {
            match call.direction() {
                Direction::Short => buckets.short_calls.push(call.clone()),
                _ => buckets.long_calls.push(call.clone()),
            }
        }
        buckets
    }

    pub fn assets(&self) -> Vec<AnyAsset> {
        let stocks = self.stocks.iter().cloned().map(AnyAsset::Stock);
        let puts = self.puts.iter().cloned().map(AnyAsset::Put);
        let calls = self.calls.iter().cloned().map(AnyAsset::Call);
        stocks.chain(puts).chain(calls).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty() && self.puts.is_empty() && self.calls.is_empty()
    }
}

/// Every `(kind, direction)` pair a basket can be classified as.
pub fn variants() -> Vec<(StrategyKind, Direction)> {
    StrategyKind::ALL
        .iter()
        .flat_map(|&kind| kind.directions().iter().map(move |&dir| (kind, dir)))
        .collect()
}

pub struct Fixtures {
    rng: StdRng,
    config: FixtureConfig,
}

impl Fixtures {
    /// Validate `config` and seed the generator from it.
    pub fn new(config: FixtureConfig) -> Result<Self> {
        Ok(Self::with_config(config.checked()?))
    }

    /// Default bounds with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_config(FixtureConfig {
            seed: Some(seed),
            ..FixtureConfig::default()
        })
    }

    fn with_config(config: FixtureConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "seeding fixture generator");
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Three upper-case letters.
    pub fn ticker(&mut self) -> String {
        (0..3)
            .map(|_| char::from(self.rng.random_range(b'A'..=b'Z')))
            .collect()
    }

    /// A ticker guaranteed to differ from `other`.
    pub fn other_ticker(&mut self, other: &str) -> String {
        loop {
            let ticker = self.ticker();
            if ticker != other {
                return ticker;
            }
        }
    }

    /// Stock of either direction with a random share count.
    pub fn stock(&mut self, ticker: &str) -> Stock {
        let shares = self.rng.random_range(1..=self.config.max_shares);
        if self.rng.random_bool(0.5) {
            self.long_stock(ticker, shares)
        } else {
            self.short_stock(ticker, shares)
        }
    }

    pub fn long_stock(&mut self, ticker: &str, shares: u32) -> Stock {
        let price = cents(self.rng.random_range(0.0..=self.config.max_stock_price));
        Stock::new(ticker, price, shares)
    }

    pub fn short_stock(&mut self, ticker: &str, shares: u32) -> Stock {
        let price = cents(self.rng.random_range(0.01..=self.config.max_stock_price));
        Stock::new(ticker, -price, shares)
    }

    /// Put of either direction at a random strike.
    pub fn put(&mut self, ticker: &str) -> Put {
        let strike = self.strike();
        let premium = self.signed_premium();
        Put::on(ticker, premium, strike)
    }

    pub fn long_put(&mut self, ticker: &str, strike: f64) -> Put {
        let premium = self.premium();
        Put::on(ticker, premium, strike)
    }

    pub fn short_put(&mut self, ticker: &str, strike: f64) -> Put {
        let premium = self.premium();
        Put::on(ticker, -premium, strike)
    }

    /// Call of either direction at a random strike.
    pub fn call(&mut self, ticker: &str) -> Call {
        let strike = self.strike();
        let premium = self.signed_premium();
        Call::on(ticker, premium, strike)
    }

    pub fn long_call(&mut self, ticker: &str, strike: f64) -> Call {
        let premium = self.premium();
        Call::on(ticker, premium, strike)
    }

    pub fn short_call(&mut self, ticker: &str, strike: f64) -> Call {
        let premium = self.premium();
        Call::on(ticker, -premium, strike)
    }

    /// Basket shaped as `kind` in `direction`, or `None` when the pair is impossible.
    pub fn basket(&mut self, kind: StrategyKind, direction: Direction) -> Option<Basket> {
        if !kind.directions().contains(&direction) {
            return None;
        }
        let ticker = self.ticker();
        let long = direction == Direction::Long;
        let t = ticker.as_str();
        let mut b = Basket::new(kind, direction);

        match kind {
            StrategyKind::Empty => {}
            StrategyKind::NakedStock => {
                let shares = self.rng.random_range(1..=self.config.max_shares);
                let stock = if long {
                    self.long_stock(t, shares)
                } else {
                    self.short_stock(t, shares)
                };
                b.stocks.push(stock);
            }
            StrategyKind::NakedCall => {
                let k = self.strike();
                let call = self.sided_call(t, k, long);
                b.calls.push(call);
            }
            StrategyKind::NakedPut => {
                let k = self.strike();
                let put = self.sided_put(t, k, long);
                b.puts.push(put);
            }
            StrategyKind::CoveredCall => {
                let k = self.strike();
                if long {
                    b.stocks.push(self.short_stock(t, SHARES_PER_CONTRACT));
                    b.calls.push(self.long_call(t, k));
                } else {
                    b.stocks.push(self.long_stock(t, SHARES_PER_CONTRACT));
                    b.calls.push(self.short_call(t, k));
                }
            }
            StrategyKind::CoveredPut => {
                let k = self.strike();
                if long {
                    b.stocks.push(self.long_stock(t, SHARES_PER_CONTRACT));
                    b.puts.push(self.long_put(t, k));
                } else {
                    b.stocks.push(self.short_stock(t, SHARES_PER_CONTRACT));
                    b.puts.push(self.short_put(t, k));
                }
            }
            StrategyKind::Spread => {
                let (lo, hi) = self.strike_pair();
                if self.rng.random_bool(0.5) {
                    // Long put spread buys the higher strike.
                    let (l, s) = if long { (hi, lo) } else { (lo, hi) };
                    b.puts.push(self.long_put(t, l));
                    b.puts.push(self.short_put(t, s));
                } else {
                    let (l, s) = if long { (lo, hi) } else { (hi, lo) };
                    b.calls.push(self.long_call(t, l));
                    b.calls.push(self.short_call(t, s));
                }
            }
            StrategyKind::Strangle => {
                let (lo, hi) = self.strike_pair();
                self.same_side_pair(&mut b, t, lo, hi, long);
            }
            StrategyKind::Straddle => {
                let k = self.strike();
                self.same_side_pair(&mut b, t, k, k, long);
            }
            StrategyKind::IronCondor => {
                let k = self.strikes(4);
                self.iron(&mut b, t, [k[0], k[1], k[2], k[3]], long);
            }
            StrategyKind::IronButterfly => {
                let k = self.strikes(3);
                self.iron(&mut b, t, [k[0], k[1], k[1], k[2]], long);
            }
            StrategyKind::CallButterfly => {
                // Long buys the wings and sells the body twice.
                let k = self.strikes(3);
                for strike in [k[0], k[2]] {
                    let call = self.sided_call(t, strike, long);
                    b.calls.push(call);
                }
                for _ in 0..2 {
                    let call = self.sided_call(t, k[1], !long);
                    b.calls.push(call);
                }
            }
            StrategyKind::PutButterfly => {
                let k = self.strikes(3);
                for strike in [k[0], k[2]] {
                    let put = self.sided_put(t, strike, long);
                    b.puts.push(put);
                }
                for _ in 0..2 {
                    let put = self.sided_put(t, k[1], !long);
                    b.puts.push(put);
                }
            }
            StrategyKind::JadeLizard => {
                let (lo, hi) = self.strike_pair();
                let floor = self.min_strike();
                let put_strike = f64::from(self.rng.random_range(floor..=lo as u32));
                if long {
                    b.puts.push(self.long_put(t, put_strike));
                    b.calls.push(self.long_call(t, lo));
                    b.calls.push(self.short_call(t, hi));
                } else {
                    b.puts.push(self.short_put(t, put_strike));
                    b.calls.push(self.short_call(t, lo));
                    b.calls.push(self.long_call(t, hi));
                }
            }
            StrategyKind::Custom => {
                // A stock next to all four option buckets fits no named shape; its price
                // is pushed past the largest possible premium total to fix the sign.
                let floor = 2.0 * self.config.max_option_price + 1.0;
                let shares = self.rng.random_range(1..=self.config.max_shares);
                let magnitude = cents(self.rng.random_range(floor..=self.config.max_stock_price));
                let price = if long { magnitude } else { -magnitude };
                b.stocks.push(Stock::new(t, price, shares));

                let (lp, sp, sc, lc) = (self.strike(), self.strike(), self.strike(), self.strike());
                b.puts.push(self.long_put(t, lp));
                b.puts.push(self.short_put(t, sp));
                b.calls.push(self.short_call(t, sc));
                b.calls.push(self.long_call(t, lc));
            }
        }

        b.puts.shuffle(&mut self.rng);
        b.calls.shuffle(&mut self.rng);
        Some(b)
    }

    /// Uniformly one of [`variants`].
    pub fn any_basket(&mut self) -> Basket {
        let all = variants();
        loop {
            let (kind, direction) = all[self.rng.random_range(0..all.len())];
            if let Some(basket) = self.basket(kind, direction) {
                return basket;
            }
        }
    }

    /// A non-empty basket with one extra asset on a different ticker.
    pub fn mixed_ticker_basket(&mut self) -> Basket {
        let mut basket = loop {
            let b = self.any_basket();
            if !b.is_empty() {
                break b;
            }
        };
        let home = basket
            .assets()
            .first()
            .map(|a| a.ticker().to_string())
            .unwrap_or_default();
        let foreign = self.other_ticker(&home);

        match self.rng.random_range(0..3) {
            0 => {
                let stock = self.stock(&foreign);
                basket.stocks.push(stock);
            }
            1 => {
                let put = self.put(&foreign);
                basket.puts.push(put);
            }
            _ => {
                let call = self.call(&foreign);
                basket.calls.push(call);
            }
        }
        basket
    }

    fn sided_put(&mut self, t: &str, strike: f64, long: bool) -> Put {
        if long {
            self.long_put(t, strike)
        } else {
            self.short_put(t, strike)
        }
    }

    fn sided_call(&mut self, t: &str, strike: f64, long: bool) -> Call {
        if long {
            self.long_call(t, strike)
        } else {
            self.short_call(t, strike)
        }
    }

    fn same_side_pair(&mut self, b: &mut Basket, t: &str, put_k: f64, call_k: f64, long: bool) {
        if long {
            b.puts.push(self.long_put(t, put_k));
            b.calls.push(self.long_call(t, call_k));
        } else {
            b.puts.push(self.short_put(t, put_k));
            b.calls.push(self.short_call(t, call_k));
        }
    }

    /// Iron shapes from ascending strikes `[outer_lo, inner_lo, inner_hi, outer_hi]`.
    /// Short sells the inner pair; long sells the outer pair.
    fn iron(&mut self, b: &mut Basket, t: &str, k: [f64; 4], long: bool) {
        if long {
            b.puts.push(self.short_put(t, k[0]));
            b.puts.push(self.long_put(t, k[1]));
            b.calls.push(self.long_call(t, k[2]));
            b.calls.push(self.short_call(t, k[3]));
        } else {
            b.puts.push(self.long_put(t, k[0]));
            b.puts.push(self.short_put(t, k[1]));
            b.calls.push(self.short_call(t, k[2]));
            b.calls.push(self.long_call(t, k[3]));
        }
    }

    fn min_strike(&self) -> u32 {
        self.config.min_strike.ceil() as u32
    }

    fn max_strike(&self) -> u32 {
        self.config.max_strike.floor() as u32
    }

    fn strike(&mut self) -> f64 {
        let (lo, hi) = (self.min_strike(), self.max_strike());
        f64::from(self.rng.random_range(lo..=hi))
    }

    fn strike_pair(&mut self) -> (f64, f64) {
        let k = self.strikes(2);
        (k[0], k[1])
    }

    /// `n` distinct ascending whole-dollar strikes.
    fn strikes(&mut self, n: usize) -> Vec<f64> {
        let (lo, hi) = (self.min_strike(), self.max_strike());
        let span = (hi - lo + 1) as usize;

        if self.rng.random_bool(ADJACENT_STRIKE_ODDS) {
            let start = self.rng.random_range(lo..=hi - (n as u32 - 1));
            return (0..n as u32).map(|i| f64::from(start + i)).collect();
        }

        let mut picked: Vec<u32> = rand::seq::index::sample(&mut self.rng, span, n)
            .into_iter()
            .map(|i| lo + i as u32)
            .collect();
        picked.sort_unstable();
        picked.into_iter().map(f64::from).collect()
    }

    /// Premium magnitude, at least one cent.
    fn premium(&mut self) -> f64 {
        cents(self.rng.random_range(0.01..=self.config.max_option_price)).max(0.01)
    }

    fn signed_premium(&mut self) -> f64 {
        let premium = self.premium();
        if self.rng.random_bool(0.5) {
            premium
        } else {
            -premium
        }
    }
}

fn cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::OptionContract;

    #[test]
    fn same_seed_same_baskets() {
        let mut a = Fixtures::seeded(42);
        let mut b = Fixtures::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.any_basket(), b.any_basket());
        }
    }

    #[test]
    fn tickers_are_three_upper_case_letters() {
        let mut fx = Fixtures::seeded(1);
        for _ in 0..50 {
            let t = fx.ticker();
            assert_eq!(t.len(), 3);
            assert!(t.chars().all(|c| c.is_ascii_uppercase()), "{t}");
        }
    }

    #[test]
    fn directed_primitives_carry_their_sign() {
        let mut fx = Fixtures::seeded(3);
        for _ in 0..100 {
            assert_eq!(fx.long_stock("AAA", 10).direction(), Direction::Long);
            assert_eq!(fx.short_stock("AAA", 10).direction(), Direction::Short);
            assert_eq!(fx.long_put("AAA", 120.0).direction(), Direction::Long);
            assert_eq!(fx.short_put("AAA", 120.0).direction(), Direction::Short);
            assert_eq!(fx.long_call("AAA", 120.0).direction(), Direction::Long);
            assert_eq!(fx.short_call("AAA", 120.0).direction(), Direction::Short);
        }
    }

    #[test]
    fn random_primitives_stay_within_bounds() {
        let mut fx = Fixtures::seeded(5);
        let config = fx.config().clone();
        for _ in 0..200 {
            let s = fx.stock("AAA");
            assert!(s.price.abs() <= config.max_stock_price);
            assert!((1..=config.max_shares).contains(&s.shares));

            let p = fx.put("AAA");
            assert!(p.strike() >= config.min_strike && p.strike() <= config.max_strike);
            assert!(p.price().abs() <= config.max_option_price && p.price() != 0.0);

            let c = fx.call("AAA");
            assert!(c.strike() >= config.min_strike && c.strike() <= config.max_strike);
        }
    }

    #[test]
    fn strikes_are_distinct_and_ascending() {
        let mut fx = Fixtures::seeded(9);
        for _ in 0..200 {
            let k = fx.strikes(4);
            assert!(k.windows(2).all(|w| w[0] < w[1]), "{k:?}");
        }
    }

    #[test]
    fn unchecked_bounds_are_rejected_up_front() {
        let narrow = FixtureConfig {
            min_strike: 100.0,
            max_strike: 101.0,
            ..FixtureConfig::default()
        };
        let err = Fixtures::new(narrow).err().expect("narrow strike span");
        assert!(err.to_string().contains("Invalid fixture bounds"), "{err}");

        let cheap_stock = FixtureConfig {
            max_option_price: 10.0,
            max_stock_price: 5.0,
            ..FixtureConfig::default()
        };
        assert!(Fixtures::new(cheap_stock).is_err());
    }

    #[test]
    fn tightest_valid_span_builds_every_shape() {
        let config = FixtureConfig {
            seed: Some(17),
            min_strike: 100.0,
            max_strike: 103.0,
            ..FixtureConfig::default()
        };
        let mut fx = Fixtures::new(config).unwrap();
        for (kind, direction) in variants() {
            let basket = fx.basket(kind, direction).unwrap();
            let strategy = basket.build().unwrap();
            assert_eq!((strategy.kind(), strategy.direction()), (kind, direction));
        }
    }

    #[test]
    fn impossible_pairs_yield_none() {
        let mut fx = Fixtures::seeded(11);
        assert!(fx.basket(StrategyKind::Empty, Direction::Long).is_none());
        assert!(fx.basket(StrategyKind::Spread, Direction::None).is_none());
        assert!(fx.basket(StrategyKind::Empty, Direction::None).is_some());
    }

    #[test]
    fn variants_cover_every_kind() {
        let all = variants();
        assert_eq!(all.len(), 29);
        for kind in StrategyKind::ALL {
            assert!(all.iter().any(|(k, _)| *k == kind), "{kind} missing");
        }
    }

    #[test]
    fn buckets_split_by_premium_sign() {
        let mut fx = Fixtures::seeded(13);
        let basket = fx.basket(StrategyKind::IronCondor, Direction::Short).unwrap();
        let buckets = basket.buckets();
        assert_eq!(buckets.long_puts.len(), 1);
        assert_eq!(buckets.short_puts.len(), 1);
        assert_eq!(buckets.short_calls.len(), 1);
        assert_eq!(buckets.long_calls.len(), 1);
        assert_eq!(buckets.ticker.len(), 3);
    }
}
