use super::helpers::{strike, Direction, Legs, OptionContract, Strategy};

/// Two legs at one body strike, bracketed by two wing legs of the other side.
///
/// Long when the two short legs form the body and the long legs bracket it; short when
/// the roles are swapped. Calls and puts share the rule.
#[allow(clippy::float_cmp)]
fn butterfly<T: OptionContract>(long: &Legs<T>, short: &Legs<T>) -> Option<Direction> {
    let (l0, l1) = (strike(long, 0), strike(long, 1));
    let (s0, s1) = (strike(short, 0), strike(short, 1));

    if s0 == s1 && l0 < s0 && s1 < l1 {
        Some(Direction::Long)
    } else if l0 == l1 && s0 < l0 && l1 < s1 {
        Some(Direction::Short)
    } else {
        None
    }
}

pub fn call_butterfly(s: &Strategy) -> Option<Direction> {
    if !s.has_n_stocks(0) || !s.has_n_puts(0, 0) || !s.has_n_calls(2, 2) {
        return None;
    }
    butterfly(s.long_calls(), s.short_calls())
}

pub fn put_butterfly(s: &Strategy) -> Option<Direction> {
    if !s.has_n_stocks(0) || !s.has_n_calls(0, 0) || !s.has_n_puts(2, 2) {
        return None;
    }
    butterfly(s.long_puts(), s.short_puts())
}
