use super::helpers::{strike, Direction, Strategy};

/// A call spread plus one put on the side of the spread's lower leg.
///
/// Long: `lp <= lc < sc`. Short: `sp <= sc < lc`.
pub fn jade_lizard(s: &Strategy) -> Option<Direction> {
    if !s.has_n_stocks(0) || !s.has_n_calls(1, 1) {
        return None;
    }
    let lc = strike(s.long_calls(), 0);
    let sc = strike(s.short_calls(), 0);

    if s.has_n_puts(1, 0) && lc < sc && strike(s.long_puts(), 0) <= lc {
        Some(Direction::Long)
    } else if s.has_n_puts(0, 1) && sc < lc && strike(s.short_puts(), 0) <= sc {
        Some(Direction::Short)
    } else {
        None
    }
}
