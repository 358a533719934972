pub mod catalog;
pub mod lang;
pub mod payload;

pub use catalog::{Country, COUNTRIES, PRICE_PER_STAR, TOPUP_PRESETS};
pub use lang::Lang;
pub use payload::AdminAction;
