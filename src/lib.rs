// float_cmp: only in tests where assert_eq! on f64 is intentional.
#![cfg_attr(test, allow(clippy::float_cmp))]
// Cast lints: controlled numeric casts in fixture generation (whole-dollar strikes).
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

pub mod assets;
pub mod classify;
pub mod fixtures;
pub mod strategy;

pub use assets::{AnyAsset, Asset, AssetKind, Call, Calls, Direction, Put, Puts, Stock, Stocks};
pub use classify::check_kind;
pub use strategy::{Buckets, Strategy, StrategyKind, ValidationError};
