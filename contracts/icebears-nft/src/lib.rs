use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;
mod storage;

mod token;

mod admin;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use errors::CollectionError;
pub use storage::StorageKey;
pub use token::types::{CollectionMetadata, TokenInfo, TokenRecord};

#[near(
    contract_state,
    contract_metadata(
        version = "1.0.0",
        link = "https://github.com/icebear-society/icebears-contracts",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    // `None` after renouncement; every owner-gated call then fails.
    pub owner_id: Option<AccountId>,
    // Fixed at construction; the only account `withdraw` pays out to.
    pub payout_id: AccountId,

    pub name: String,
    pub symbol: String,
    pub base_uri: String,

    pub cost: u128,
    pub max_mint_amount: u32,
    pub sale_start: u64,
    pub max_supply: u64,
    pub paused: bool,

    // Id of the last minted token. Ids are 1-based, contiguous, never reused
    // and never destroyed, so this doubles as the total supply.
    pub minted_count: u64,
    pub tokens_by_id: IterableMap<u64, TokenRecord>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<u64>>,

    // Mint proceeds not yet withdrawn, in yoctoNEAR.
    pub sales_balance: u128,
}
