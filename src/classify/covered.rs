use super::helpers::{Direction, Strategy};
use crate::assets::Asset;

// Covered shapes need exactly one contract-sized stock lot.

/// Stock lot plus one call written against it (or bought against a short lot).
pub fn covered_call(s: &Strategy) -> Option<Direction> {
    let stock = s.sole_stock().filter(|st| st.is_contract_lot())?;
    if !s.has_n_puts(0, 0) {
        return None;
    }
    match stock.direction() {
        Direction::Long if s.has_n_calls(0, 1) => Some(Direction::Short),
        Direction::Short if s.has_n_calls(1, 0) => Some(Direction::Long),
        _ => None,
    }
}

/// Stock lot plus a protective put on the same side.
pub fn covered_put(s: &Strategy) -> Option<Direction> {
    let stock = s.sole_stock().filter(|st| st.is_contract_lot())?;
    if !s.has_n_calls(0, 0) {
        return None;
    }
    match stock.direction() {
        Direction::Long if s.has_n_puts(1, 0) => Some(Direction::Long),
        Direction::Short if s.has_n_puts(0, 1) => Some(Direction::Short),
        _ => None,
    }
}
