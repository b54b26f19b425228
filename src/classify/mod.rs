//! Strategy classification.
//!
//! Each named kind owns a matcher that inspects leg counts and strike order of a
//! [`Strategy`] and reports a direction when the shape fits. Matchers run strictly in
//! [`RULES`] order and the first hit wins. Baskets no matcher accepts are `Custom`.
//!
//! The leg-count guards keep the named rules disjoint.

pub mod butterflies;
pub mod covered;
pub mod helpers;
pub mod iron;
pub mod lizards;
pub mod singles;
pub mod spreads;

use crate::assets::Direction;
use crate::strategy::{Strategy, StrategyKind};

/// Structural test for one kind. `Some(direction)` means the basket has this shape.
pub type Matcher = fn(&Strategy) -> Option<Direction>;

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: StrategyKind,
    pub matcher: Matcher,
}

const fn rule(kind: StrategyKind, matcher: Matcher) -> Rule {
    Rule { kind, matcher }
}

/// Named rules in evaluation order. `Custom` is not listed: it is the fallback.
pub static RULES: [Rule; 14] = [
    rule(StrategyKind::Empty, singles::empty),
    rule(StrategyKind::NakedStock, singles::naked_stock),
    rule(StrategyKind::NakedCall, singles::naked_call),
    rule(StrategyKind::NakedPut, singles::naked_put),
    rule(StrategyKind::CoveredCall, covered::covered_call),
    rule(StrategyKind::CoveredPut, covered::covered_put),
    rule(StrategyKind::Spread, spreads::spread),
    rule(StrategyKind::Straddle, spreads::straddle),
    rule(StrategyKind::Strangle, spreads::strangle),
    rule(StrategyKind::IronButterfly, iron::iron_butterfly),
    rule(StrategyKind::IronCondor, iron::iron_condor),
    rule(StrategyKind::CallButterfly, butterflies::call_butterfly),
    rule(StrategyKind::PutButterfly, butterflies::put_butterfly),
    rule(StrategyKind::JadeLizard, lizards::jade_lizard),
];

/// Resolve the kind and direction of a strategy.
pub fn check_kind(strategy: &Strategy) -> (StrategyKind, Direction) {
    for rule in &RULES {
        if let Some(direction) = (rule.matcher)(strategy) {
            tracing::trace!(kind = %rule.kind, %direction, "matched rule");
            return (rule.kind, direction);
        }
    }

    let direction = custom_direction(strategy);
    tracing::trace!(
        %direction,
        price = strategy.price(),
        "no named rule matched, falling back to custom"
    );
    (StrategyKind::Custom, direction)
}

/// Test a single kind in isolation.
///
/// For `Custom` this holds only when no named rule accepts the basket.
pub fn matches(kind: StrategyKind, strategy: &Strategy) -> Option<Direction> {
    if kind == StrategyKind::Custom {
        let unmatched = RULES.iter().all(|r| (r.matcher)(strategy).is_none());
        return unmatched.then(|| custom_direction(strategy));
    }
    RULES
        .iter()
        .find(|r| r.kind == kind)
        .and_then(|r| (r.matcher)(strategy))
}

/// Net debit is long, anything else short.
fn custom_direction(strategy: &Strategy) -> Direction {
    if strategy.price() > 0.0 {
        Direction::Long
    } else {
        Direction::Short
    }
}
