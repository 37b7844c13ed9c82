//! Position domain
//!
//! Validated parameter objects describing option and underlying-asset
//! positions. Every value object checks its invariants on construction, so
//! the payoff engine only ever sees well-formed input.

pub mod value_objects;

pub use value_objects::{AssetParam, Commission, OptionParam, OptionRight, PositionSide, Quantity};
