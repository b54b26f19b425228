use super::helpers::{Direction, Strategy};
use crate::assets::Asset;

pub fn empty(s: &Strategy) -> Option<Direction> {
    s.is_empty().then_some(Direction::None)
}

/// One stock and nothing else; takes the stock's own direction.
pub fn naked_stock(s: &Strategy) -> Option<Direction> {
    if s.has_any_options() {
        return None;
    }
    s.sole_stock().map(Asset::direction)
}

/// Exactly one call, no puts, no stock.
pub fn naked_call(s: &Strategy) -> Option<Direction> {
    if !s.has_n_stocks(0) || !s.has_n_puts(0, 0) {
        return None;
    }
    match (s.long_calls().len(), s.short_calls().len()) {
        (1, 0) => Some(Direction::Long),
        (0, 1) => Some(Direction::Short),
        _ => None,
    }
}

/// Exactly one put, no calls, no stock.
pub fn naked_put(s: &Strategy) -> Option<Direction> {
    if !s.has_n_stocks(0) || !s.has_n_calls(0, 0) {
        return None;
    }
    match (s.long_puts().len(), s.short_puts().len()) {
        (1, 0) => Some(Direction::Long),
        (0, 1) => Some(Direction::Short),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::helpers::test_support::*;
    use crate::assets::Stock;

    #[test]
    fn empty_only_for_no_assets() {
        assert_eq!(empty(&Strategy::default()), Some(Direction::None));
        assert_eq!(empty(&basket(vec![], vec![lp(100.0)], vec![])), None);
    }

    #[test]
    fn naked_stock_follows_stock_sign() {
        let long = basket(vec![Stock::new("AAA", 250.0, 37)], vec![], vec![]);
        assert_eq!(naked_stock(&long), Some(Direction::Long));
        let short = basket(vec![Stock::new("AAA", -250.0, 100)], vec![], vec![]);
        assert_eq!(naked_stock(&short), Some(Direction::Short));
    }

    #[test]
    fn naked_stock_rejects_any_option_or_second_stock() {
        let hedged = basket(vec![Stock::new("AAA", 250.0, 37)], vec![lp(100.0)], vec![]);
        assert_eq!(naked_stock(&hedged), None);
        let pair = basket(
            vec![Stock::new("AAA", 250.0, 37), Stock::new("AAA", 20.0, 3)],
            vec![],
            vec![],
        );
        assert_eq!(naked_stock(&pair), None);
    }

    #[test]
    fn naked_call_by_bucket() {
        assert_eq!(naked_call(&basket(vec![], vec![], vec![lc(150.0)])), Some(Direction::Long));
        assert_eq!(naked_call(&basket(vec![], vec![], vec![sc(150.0)])), Some(Direction::Short));
    }

    #[test]
    fn naked_call_needs_exactly_one_call() {
        let spread = basket(vec![], vec![], vec![lc(150.0), sc(160.0)]);
        assert_eq!(naked_call(&spread), None);
        let with_put = basket(vec![], vec![sp(140.0)], vec![sc(160.0)]);
        assert_eq!(naked_call(&with_put), None);
    }

    #[test]
    fn naked_put_by_bucket() {
        assert_eq!(naked_put(&basket(vec![], vec![lp(90.0)], vec![])), Some(Direction::Long));
        assert_eq!(naked_put(&basket(vec![], vec![sp(90.0)], vec![])), Some(Direction::Short));
        assert_eq!(naked_put(&basket(vec![], vec![sp(90.0), sp(95.0)], vec![])), None);
    }
}
