pub use crate::assets::{Direction, Legs, OptionContract};
pub use crate::strategy::Strategy;

/// Strike of the `i`-th leg of a sorted bucket. Callers check the bucket size first.
pub(crate) fn strike<T: OptionContract>(legs: &Legs<T>, i: usize) -> f64 {
    legs[i].strike()
}
