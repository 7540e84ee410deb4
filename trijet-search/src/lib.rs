pub mod combinations;
pub mod strategies;

pub use combinations::{binomial, combinations_combo_major, combinations_group_major};
pub use strategies::{find_best_trijet, Strategy};
