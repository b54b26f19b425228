pub mod error;
pub mod kind;

use serde::Serialize;

use crate::assets::{AnyAsset, AssetKind, Calls, Direction, OptionContract, Puts, Stock, Stocks};
use crate::classify;

pub use error::ValidationError;
pub use kind::StrategyKind;

/// Option legs and stocks of one underlying, split into direction buckets.
///
/// Used to hand-assemble a strategy. [`Strategy::from_buckets`] re-sorts every leg into
/// the bucket its premium sign implies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Buckets {
    pub ticker: String,
    pub stocks: Stocks,
    pub long_puts: Puts,
    pub short_puts: Puts,
    pub short_calls: Calls,
    pub long_calls: Calls,
}

/// A classified basket of positions on a single underlying.
///
/// Built with [`Strategy::new`], [`Strategy::from_assets`] or [`Strategy::from_buckets`];
/// kind and direction are derived at construction and the value is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Strategy {
    ticker: String,
    stocks: Stocks,
    long_puts: Puts,
    short_puts: Puts,
    short_calls: Calls,
    long_calls: Calls,
    kind: StrategyKind,
    direction: Direction,
}

impl Strategy {
    /// Validate, normalise and classify a basket.
    ///
    /// The basket ticker comes from the first stock, else the first call, else the first put.
    /// All-empty input is an `Empty` strategy, not an error. Any asset on another
    /// ticker rejects the whole basket.
    pub fn new(
        stocks: impl Into<Stocks>,
        puts: impl Into<Puts>,
        calls: impl Into<Calls>,
    ) -> Result<Self, ValidationError> {
        let (stocks, puts, calls) = (stocks.into(), puts.into(), calls.into());

        let Some(ticker) = select_ticker(&stocks, &puts, &calls) else {
            tracing::debug!("empty basket, nothing to classify");
            return Ok(Self::default());
        };
        let ticker = ticker.to_string();

        let calls = calls.sorted();
        ensure_legs(&ticker, &calls)?;
        let (long_calls, short_calls) = calls.partition_by_direction();

        let puts = puts.sorted();
        ensure_legs(&ticker, &puts)?;
        let (long_puts, short_puts) = puts.partition_by_direction();

        let stocks = stocks.sorted();
        ensure_stocks(&ticker, &stocks)?;

        Ok(Self::classified(Buckets {
            ticker,
            stocks,
            long_puts,
            short_puts,
            short_calls,
            long_calls,
        }))
    }

    /// Split a mixed asset list by type, keeping relative order, then [`Strategy::new`].
    pub fn from_assets(
        assets: impl IntoIterator<Item = AnyAsset>,
    ) -> Result<Self, ValidationError> {
        let mut stocks = Stocks::new();
        let mut puts = Puts::new();
        let mut calls = Calls::new();
        for asset in assets {
            match asset {
                AnyAsset::Stock(s) => stocks.push(s),
                AnyAsset::Put(p) => puts.push(p),
                AnyAsset::Call(c) => calls.push(c),
            }
        }
        Self::new(stocks, puts, calls)
    }

    /// Classify hand-assembled buckets against their declared ticker.
    ///
    /// Each flavour's two buckets are merged and re-split by premium sign, so a leg filed
    /// under the wrong side lands where [`Strategy::new`] would put it.
    pub fn from_buckets(buckets: Buckets) -> Result<Self, ValidationError> {
        let Buckets {
            ticker,
            stocks,
            long_puts,
            short_puts,
            short_calls,
            long_calls,
        } = buckets;

        let calls: Calls = long_calls.into_iter().chain(short_calls).collect();
        let calls = calls.sorted();
        ensure_legs(&ticker, &calls)?;
        let (long_calls, short_calls) = calls.partition_by_direction();

        let puts: Puts = long_puts.into_iter().chain(short_puts).collect();
        let puts = puts.sorted();
        ensure_legs(&ticker, &puts)?;
        let (long_puts, short_puts) = puts.partition_by_direction();

        let stocks = stocks.sorted();
        ensure_stocks(&ticker, &stocks)?;

        Ok(Self::classified(Buckets {
            ticker,
            stocks,
            long_puts,
            short_puts,
            short_calls,
            long_calls,
        }))
    }

    fn classified(buckets: Buckets) -> Self {
        let mut strategy = Self {
            ticker: buckets.ticker,
            stocks: buckets.stocks,
            long_puts: buckets.long_puts,
            short_puts: buckets.short_puts,
            short_calls: buckets.short_calls,
            long_calls: buckets.long_calls,
            kind: StrategyKind::Empty,
            direction: Direction::None,
        };
        let (kind, direction) = classify::check_kind(&strategy);
        strategy.kind = kind;
        strategy.direction = direction;

        tracing::debug!(
            ticker = %strategy.ticker,
            stocks = strategy.stocks.len(),
            options = strategy.count_options(),
            %kind,
            %direction,
            "classified strategy"
        );
        strategy
    }

    /// Re-run classification on the held buckets.
    pub fn check_kind(&self) -> (StrategyKind, Direction) {
        classify::check_kind(self)
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn stocks(&self) -> &Stocks {
        &self.stocks
    }

    pub fn long_puts(&self) -> &Puts {
        &self.long_puts
    }

    pub fn short_puts(&self) -> &Puts {
        &self.short_puts
    }

    pub fn short_calls(&self) -> &Calls {
        &self.short_calls
    }

    pub fn long_calls(&self) -> &Calls {
        &self.long_calls
    }

    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Net signed price of every stock and option leg.
    pub fn price(&self) -> f64 {
        self.price_stocks() + self.price_options()
    }

    pub fn price_stocks(&self) -> f64 {
        self.stocks.price()
    }

    pub fn price_options(&self) -> f64 {
        self.long_puts.price()
            + self.short_puts.price()
            + self.short_calls.price()
            + self.long_calls.price()
    }

    pub fn shares(&self) -> u64 {
        self.stocks.shares()
    }

    pub fn count_stocks(&self) -> usize {
        self.stocks.len()
    }

    pub fn count_options(&self) -> usize {
        self.long_puts.len()
            + self.short_puts.len()
            + self.short_calls.len()
            + self.long_calls.len()
    }

    pub fn has_any_options(&self) -> bool {
        self.count_options() > 0
    }

    /// True when no bucket holds anything.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty() && !self.has_any_options()
    }

    /// All puts, both buckets, in canonical order.
    pub fn puts(&self) -> Puts {
        self.long_puts
            .iter()
            .chain(self.short_puts.iter())
            .cloned()
            .collect::<Puts>()
            .sorted()
    }

    /// All calls, both buckets, in canonical order.
    pub fn calls(&self) -> Calls {
        self.long_calls
            .iter()
            .chain(self.short_calls.iter())
            .cloned()
            .collect::<Calls>()
            .sorted()
    }

    /// Every held asset, in bucket order: stocks, Lp, Sp, Sc, Lc.
    pub fn assets(&self) -> Vec<AnyAsset> {
        let stocks = self.stocks.iter().cloned().map(AnyAsset::Stock);
        let puts = self
            .long_puts
            .iter()
            .chain(self.short_puts.iter())
            .cloned()
            .map(AnyAsset::Put);
        let calls = self
            .short_calls
            .iter()
            .chain(self.long_calls.iter())
            .cloned()
            .map(AnyAsset::Call);
        stocks.chain(puts).chain(calls).collect()
    }

    pub(crate) fn has_n_stocks(&self, n: usize) -> bool {
        self.stocks.len() == n
    }

    pub(crate) fn has_n_puts(&self, long: usize, short: usize) -> bool {
        self.long_puts.len() == long && self.short_puts.len() == short
    }

    pub(crate) fn has_n_calls(&self, long: usize, short: usize) -> bool {
        self.long_calls.len() == long && self.short_calls.len() == short
    }

    /// The single stock, when the basket holds exactly one.
    pub(crate) fn sole_stock(&self) -> Option<&Stock> {
        match &self.stocks[..] {
            [stock] => Some(stock),
            _ => None,
        }
    }
}

/// First ticker found in priority order: stocks, then calls, then puts.
fn select_ticker<'a>(stocks: &'a Stocks, puts: &'a Puts, calls: &'a Calls) -> Option<&'a str> {
    if let Some(stock) = stocks.first() {
        return Some(&stock.ticker);
    }
    if let Some(call) = calls.first() {
        return Some(call.ticker());
    }
    puts.first().map(OptionContract::ticker)
}

fn ensure_legs<T: OptionContract>(expected: &str, legs: &[T]) -> Result<(), ValidationError> {
    match legs.iter().find(|leg| leg.ticker() != expected) {
        Some(leg) => Err(mismatch(expected, leg.ticker(), T::KIND)),
        None => Ok(()),
    }
}

fn ensure_stocks(expected: &str, stocks: &[Stock]) -> Result<(), ValidationError> {
    match stocks.iter().find(|s| s.ticker != expected) {
        Some(stock) => Err(mismatch(expected, &stock.ticker, AssetKind::Stock)),
        None => Ok(()),
    }
}

fn mismatch(expected: &str, found: &str, asset: AssetKind) -> ValidationError {
    tracing::debug!(%expected, %found, %asset, "rejecting basket with mixed tickers");
    ValidationError::TickerMismatch {
        expected: expected.to_string(),
        found: found.to_string(),
        asset,
    }
}
