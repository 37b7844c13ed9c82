//! Position Value Objects

mod asset_param;
mod commission;
mod option_param;
mod quantity;
mod side;

pub use asset_param::AssetParam;
pub use commission::Commission;
pub use option_param::OptionParam;
pub use quantity::Quantity;
pub use side::{OptionRight, PositionSide};
