//! Owner-initiated token transfers. No approval system: only the current
//! token owner can move a token.

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn transfer(
        &mut self,
        receiver_id: AccountId,
        token_id: u64,
        memo: Option<String>,
    ) -> Result<(), CollectionError> {
        let sender_id = env::predecessor_account_id();

        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .ok_or(CollectionError::NonexistentToken(token_id))?
            .clone();

        if token.owner_id != sender_id {
            return Err(CollectionError::NotTokenOwner);
        }
        if token.owner_id == receiver_id {
            return Err(CollectionError::SelfTransfer);
        }

        self.remove_token_from_owner(&token.owner_id, token_id);
        token.owner_id = receiver_id.clone();
        self.add_token_to_owner(&receiver_id, token_id);
        self.tokens_by_id.insert(token_id, token);

        events::nep171::emit_transfer(&sender_id, &receiver_id, &[token_id], memo.as_deref());
        Ok(())
    }
}
