pub mod decans;
pub mod sign;

pub use decans::{decan_for, decan_index, decan_ruler, Decan};
pub use sign::{tropical_sign, TropicalPlacement};
