pub mod types;
pub mod normalize;
pub mod parse;
pub mod align;
pub mod classify;
pub mod toppings;
pub mod check;
