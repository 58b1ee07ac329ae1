mod builder;
mod types;

mod contract;
mod token;

pub(crate) mod nep171;

pub use contract::*;
pub use token::*;

pub(crate) const STANDARD: &str = "icebears";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
pub(crate) const TOKEN: &str = "TOKEN_UPDATE";
