use crate::*;

#[near]
impl Contract {
    pub fn total_supply(&self) -> u64 {
        self.minted_count
    }

    /// Ids owned by `account_id`, ascending. Transfers perturb the insertion
    /// order of the underlying set, so the view sorts.
    pub fn wallet_of_owner(&self, account_id: AccountId) -> Vec<u64> {
        let Some(tokens) = self.tokens_per_owner.get(&account_id) else {
            return vec![];
        };
        let mut ids: Vec<u64> = tokens.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn token_info(&self, token_id: u64) -> Option<TokenInfo> {
        self.tokens_by_id.get(&token_id).map(|record| TokenInfo {
            token_id,
            owner_id: record.owner_id.clone(),
            minter_id: record.minter_id.clone(),
            minted_at: record.minted_at,
            token_uri: self.resolve_token_uri(token_id),
        })
    }
}
