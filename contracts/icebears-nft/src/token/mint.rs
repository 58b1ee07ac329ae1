use crate::*;

#[near]
impl Contract {
    /// Public paid mint. Preconditions are checked in a fixed order and the
    /// first failure wins; a rejected call leaves no partial state.
    /// The contract owner skips the sale gate and the payment check.
    #[payable]
    #[handle_result]
    pub fn mint(
        &mut self,
        receiver_id: AccountId,
        amount: u32,
    ) -> Result<Vec<u64>, CollectionError> {
        let minter_id = env::predecessor_account_id();
        let is_owner = self.is_contract_owner(&minter_id);

        if self.paused {
            return Err(CollectionError::MintingPaused);
        }
        if amount == 0 {
            return Err(CollectionError::InvalidAmount);
        }
        if amount > self.max_mint_amount {
            return Err(CollectionError::ExceedsMaxMintAmount(self.max_mint_amount));
        }
        if !is_owner && env::block_timestamp() < self.sale_start {
            return Err(CollectionError::SaleNotLive);
        }
        if self.minted_count + amount as u64 > self.max_supply {
            return Err(CollectionError::SupplyExhausted);
        }

        let deposit = env::attached_deposit().as_yoctonear();
        if !is_owner {
            // A cost near u128::MAX saturates; the deposit check then rejects.
            let required = self.cost.saturating_mul(amount as u128);
            if deposit < required {
                return Err(CollectionError::InsufficientPayment);
            }
        }

        // Full deposit is retained, no change-making.
        self.sales_balance += deposit;

        let token_ids = self.mint_batch(&receiver_id, &minter_id, amount)?;
        events::nep171::emit_mint(&receiver_id, &token_ids, None);
        events::emit_tokens_minted(&minter_id, &receiver_id, &token_ids, deposit);
        Ok(token_ids)
    }

    /// Owner-only free mint that skips the pause, sale-time, payment and
    /// supply-cap checks. Reserving past `max_supply` is tolerated; public
    /// mints enforce the cap afterwards. Zero `amount` is a no-op.
    #[handle_result]
    pub fn reserve_for_giveaway(
        &mut self,
        receiver_id: AccountId,
        amount: u32,
    ) -> Result<Vec<u64>, CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        if amount == 0 {
            return Ok(Vec::new());
        }

        let token_ids = self.mint_batch(&receiver_id, &caller, amount)?;
        events::nep171::emit_mint(&receiver_id, &token_ids, Some("giveaway"));
        events::emit_giveaway_reserved(&caller, &receiver_id, &token_ids);
        Ok(token_ids)
    }
}

impl Contract {
    // Assigns the next `amount` sequential ids to `receiver_id`.
    pub(crate) fn mint_batch(
        &mut self,
        receiver_id: &AccountId,
        minter_id: &AccountId,
        amount: u32,
    ) -> Result<Vec<u64>, CollectionError> {
        let minted_at = env::block_timestamp();
        let mut token_ids = Vec::with_capacity(amount as usize);
        for _ in 0..amount {
            let token_id = self
                .minted_count
                .checked_add(1)
                .ok_or(CollectionError::SupplyExhausted)?;
            self.minted_count = token_id;
            self.tokens_by_id.insert(
                token_id,
                TokenRecord {
                    owner_id: receiver_id.clone(),
                    minter_id: minter_id.clone(),
                    minted_at,
                },
            );
            self.add_token_to_owner(receiver_id, token_id);
            token_ids.push(token_id);
        }
        Ok(token_ids)
    }
}
