use near_sdk::AccountId;

use super::TOKEN;
use super::builder::EventBuilder;

pub fn emit_tokens_minted(
    minter_id: &AccountId,
    receiver_id: &AccountId,
    token_ids: &[u64],
    paid: u128,
) {
    EventBuilder::new(TOKEN, "tokens_minted", minter_id)
        .field("receiver_id", receiver_id)
        .field("token_ids", token_ids)
        .field("paid", paid)
        .emit();
}

pub fn emit_giveaway_reserved(owner_id: &AccountId, receiver_id: &AccountId, token_ids: &[u64]) {
    EventBuilder::new(TOKEN, "giveaway_reserved", owner_id)
        .field("receiver_id", receiver_id)
        .field("token_ids", token_ids)
        .emit();
}
