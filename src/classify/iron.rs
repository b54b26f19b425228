use super::helpers::{strike, Direction, Strategy};

/// The four strikes of a one-of-each basket, as `(lp, sp, sc, lc)`.
fn four_legs(s: &Strategy) -> Option<(f64, f64, f64, f64)> {
    if !s.has_n_stocks(0) || !s.has_n_puts(1, 1) || !s.has_n_calls(1, 1) {
        return None;
    }
    Some((
        strike(s.long_puts(), 0),
        strike(s.short_puts(), 0),
        strike(s.short_calls(), 0),
        strike(s.long_calls(), 0),
    ))
}

/// Short: `lp < sp < sc < lc`. Long: `sp < lp < lc < sc`.
pub fn iron_condor(s: &Strategy) -> Option<Direction> {
    let (lp, sp, sc, lc) = four_legs(s)?;
    if lp < sp && sp < sc && sc < lc {
        Some(Direction::Short)
    } else if sp < lp && lp < lc && lc < sc {
        Some(Direction::Long)
    } else {
        None
    }
}

/// Short: `lp < sp == sc < lc`. Long: `sp < lp == lc < sc`.
#[allow(clippy::float_cmp)]
pub fn iron_butterfly(s: &Strategy) -> Option<Direction> {
    let (lp, sp, sc, lc) = four_legs(s)?;
    if lp < sp && sp == sc && sc < lc {
        Some(Direction::Short)
    } else if sp < lp && lp == lc && lc < sc {
        Some(Direction::Long)
    } else {
        None
    }
}
