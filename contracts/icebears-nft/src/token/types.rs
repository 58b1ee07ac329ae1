use near_sdk::AccountId;
use near_sdk::near;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenRecord {
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub minted_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct TokenInfo {
    pub token_id: u64,
    pub owner_id: AccountId,
    pub minter_id: AccountId,
    pub minted_at: u64,
    pub token_uri: String,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
    pub base_uri: String,
    pub max_supply: u64,
}
