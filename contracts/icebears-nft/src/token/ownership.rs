//! Per-owner token index maintenance shared by mint and transfer paths.

use crate::*;

impl Contract {
    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if !self.tokens_per_owner.contains_key(owner_id) {
            self.tokens_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::TokensPerOwnerInner {
                    account_id_hash: env::sha256(owner_id.as_bytes()),
                }),
            );
        }
        self.tokens_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(token_id);
    }

    pub(crate) fn remove_token_from_owner(&mut self, owner_id: &AccountId, token_id: u64) {
        if let Some(owner_tokens) = self.tokens_per_owner.get_mut(owner_id) {
            owner_tokens.remove(&token_id);
            if owner_tokens.is_empty() {
                self.tokens_per_owner.remove(owner_id);
            }
        }
    }
}
