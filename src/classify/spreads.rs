use std::cmp::Ordering;

use super::helpers::{strike, Direction, Strategy};

/// Vertical spread: one long and one short leg of the same flavour at different strikes.
///
/// Put spreads are short when the long strike sits below the short strike; call spreads
/// are long in that case. Equal strikes cancel out and do not match.
pub fn spread(s: &Strategy) -> Option<Direction> {
    if !s.has_n_stocks(0) {
        return None;
    }

    if s.has_n_puts(1, 1) && s.has_n_calls(0, 0) {
        let long = strike(s.long_puts(), 0);
        let short = strike(s.short_puts(), 0);
        return match long.partial_cmp(&short)? {
            Ordering::Less => Some(Direction::Short),
            Ordering::Greater => Some(Direction::Long),
            Ordering::Equal => None,
        };
    }

    if s.has_n_puts(0, 0) && s.has_n_calls(1, 1) {
        let long = strike(s.long_calls(), 0);
        let short = strike(s.short_calls(), 0);
        return match long.partial_cmp(&short)? {
            Ordering::Less => Some(Direction::Long),
            Ordering::Greater => Some(Direction::Short),
            Ordering::Equal => None,
        };
    }

    None
}

/// Put and call on the same side, put strike strictly below call strike.
pub fn strangle(s: &Strategy) -> Option<Direction> {
    same_side_pair(s, |put, call| put < call)
}

/// Put and call on the same side at one strike.
#[allow(clippy::float_cmp)]
pub fn straddle(s: &Strategy) -> Option<Direction> {
    same_side_pair(s, |put, call| put == call)
}

fn same_side_pair(s: &Strategy, strikes_fit: impl Fn(f64, f64) -> bool) -> Option<Direction> {
    if !s.has_n_stocks(0) {
        return None;
    }
    if s.has_n_puts(0, 1) && s.has_n_calls(0, 1) {
        return strikes_fit(strike(s.short_puts(), 0), strike(s.short_calls(), 0))
            .then_some(Direction::Short);
    }
    if s.has_n_puts(1, 0) && s.has_n_calls(1, 0) {
        return strikes_fit(strike(s.long_puts(), 0), strike(s.long_calls(), 0))
            .then_some(Direction::Long);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::helpers::test_support::*;

    #[test]
    fn long_put_spread() {
        // Long 150 put, short 140 put.
        let s = basket(vec![], vec![lp(150.0), sp(140.0)], vec![]);
        assert_eq!(spread(&s), Some(Direction::Long));
    }

    #[test]
    fn short_put_spread() {
        let s = basket(vec![], vec![lp(140.0), sp(150.0)], vec![]);
        assert_eq!(spread(&s), Some(Direction::Short));
    }

    #[test]
    fn call_spreads() {
        let bull = basket(vec![], vec![], vec![lc(150.0), sc(160.0)]);
        assert_eq!(spread(&bull), Some(Direction::Long));
        let bear = basket(vec![], vec![], vec![lc(161.0), sc(160.0)]);
        assert_eq!(spread(&bear), Some(Direction::Short));
    }

    #[test]
    fn spread_needs_distinct_strikes_and_one_flavour() {
        assert_eq!(spread(&basket(vec![], vec![lp(150.0), sp(150.0)], vec![])), None);
        assert_eq!(
            spread(&basket(vec![], vec![lp(150.0), sp(140.0)], vec![lc(160.0), sc(170.0)])),
            None
        );
        assert_eq!(spread(&basket(vec![], vec![lp(150.0), lp(140.0)], vec![])), None);
    }

    #[test]
    fn strangles_by_side() {
        let long = basket(vec![], vec![lp(140.0)], vec![lc(160.0)]);
        assert_eq!(strangle(&long), Some(Direction::Long));
        let short = basket(vec![], vec![sp(140.0)], vec![sc(141.0)]);
        assert_eq!(strangle(&short), Some(Direction::Short));
    }

    #[test]
    fn inverted_or_mixed_side_pair_is_not_a_strangle() {
        assert_eq!(strangle(&basket(vec![], vec![lp(160.0)], vec![lc(140.0)])), None);
        assert_eq!(strangle(&basket(vec![], vec![lp(140.0)], vec![sc(160.0)])), None);
        assert_eq!(strangle(&basket(vec![], vec![lp(150.0)], vec![lc(150.0)])), None);
    }

    #[test]
    fn straddles_share_a_strike() {
        let long = basket(vec![], vec![lp(150.0)], vec![lc(150.0)]);
        assert_eq!(straddle(&long), Some(Direction::Long));
        let short = basket(vec![], vec![sp(150.0)], vec![sc(150.0)]);
        assert_eq!(straddle(&short), Some(Direction::Short));
        assert_eq!(straddle(&basket(vec![], vec![sp(149.0)], vec![sc(150.0)])), None);
    }
}
