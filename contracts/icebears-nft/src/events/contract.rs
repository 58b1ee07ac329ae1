use near_sdk::AccountId;
use near_sdk::json_types::U128;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_sale_time_set(owner_id: &AccountId, sale_start: u64) {
    EventBuilder::new(CONTRACT, "sale_time_set", owner_id)
        .field("sale_start", sale_start)
        .emit();
}

pub fn emit_cost_set(owner_id: &AccountId, cost: U128) {
    EventBuilder::new(CONTRACT, "cost_set", owner_id)
        .field("cost", cost)
        .emit();
}

pub fn emit_max_mint_amount_set(owner_id: &AccountId, max_mint_amount: u32) {
    EventBuilder::new(CONTRACT, "max_mint_amount_set", owner_id)
        .field("max_mint_amount", max_mint_amount)
        .emit();
}

pub fn emit_base_uri_set(owner_id: &AccountId, base_uri: &str) {
    EventBuilder::new(CONTRACT, "base_uri_set", owner_id)
        .field("base_uri", base_uri)
        .emit();
}

pub fn emit_pause_toggled(owner_id: &AccountId, paused: bool) {
    EventBuilder::new(CONTRACT, "pause_toggled", owner_id)
        .field("paused", paused)
        .emit();
}

pub fn emit_withdrawn(owner_id: &AccountId, payout_id: &AccountId, amount: u128) {
    EventBuilder::new(CONTRACT, "withdrawn", owner_id)
        .field("payout_id", payout_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_ownership_renounced(old_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "ownership_renounced", old_owner)
        .field("old_owner", old_owner)
        .emit();
}
