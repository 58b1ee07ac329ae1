use crate::*;

#[near]
impl Contract {
    /// Deployer becomes the owner. Price, per-call cap, sale start and the
    /// supply cap come from the embedded defaults; the payout account is
    /// fixed here for the lifetime of the contract.
    #[init]
    pub fn new(name: String, symbol: String, base_uri: String, payout_id: AccountId) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id: Some(env::predecessor_account_id()),
            payout_id,
            name,
            symbol,
            base_uri,
            cost: DEFAULT_COST,
            max_mint_amount: DEFAULT_MAX_MINT_AMOUNT,
            sale_start: DEFAULT_SALE_START_NS,
            max_supply: MAX_SUPPLY,
            paused: false,
            minted_count: 0,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            sales_balance: 0,
        }
    }

    // --- Owner-gated configuration ---
    // Setters take effect immediately; no range or format validation.

    #[handle_result]
    pub fn set_sale_time(&mut self, sale_start: u64) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.sale_start = sale_start;
        events::emit_sale_time_set(&caller, sale_start);
        Ok(())
    }

    #[handle_result]
    pub fn set_cost(&mut self, cost: U128) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.cost = cost.0;
        events::emit_cost_set(&caller, cost);
        Ok(())
    }

    /// The lowercase `m` mirrors the collection's published interface, which
    /// named the setter inconsistently with the `max_mint_amount` accessor.
    #[handle_result]
    pub fn setmax_mint_amount(&mut self, max_mint_amount: u32) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.max_mint_amount = max_mint_amount;
        events::emit_max_mint_amount_set(&caller, max_mint_amount);
        Ok(())
    }

    #[handle_result]
    pub fn set_base_uri(&mut self, base_uri: String) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.base_uri = base_uri;
        events::emit_base_uri_set(&caller, &self.base_uri);
        Ok(())
    }

    #[handle_result]
    pub fn pause(&mut self, state: bool) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.paused = state;
        events::emit_pause_toggled(&caller, state);
        Ok(())
    }

    /// Transfers the entire accumulated mint proceeds to the payout account
    /// and zeroes the tracked balance. Succeeds vacuously at zero balance.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<Promise, CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        let amount = self.sales_balance;
        self.sales_balance = 0;
        events::emit_withdrawn(&caller, &self.payout_id, amount);
        Ok(Promise::new(self.payout_id.clone()).transfer(NearToken::from_yoctonear(amount)))
    }

    // --- Ownership ---

    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        if new_owner.as_str() == NULL_OWNER_ACCOUNT {
            return Err(CollectionError::ZeroAddress);
        }
        self.owner_id = Some(new_owner.clone());
        events::emit_owner_transferred(&caller, &new_owner);
        Ok(())
    }

    /// Irreversible: clears the owner; every owner-gated call fails from
    /// then on, for every caller including the former owner.
    #[handle_result]
    pub fn renounce_ownership(&mut self) -> Result<(), CollectionError> {
        let caller = env::predecessor_account_id();
        self.check_contract_owner(&caller)?;
        self.owner_id = None;
        events::emit_ownership_renounced(&caller);
        Ok(())
    }

    // --- Views ---

    pub fn owner(&self) -> Option<&AccountId> {
        self.owner_id.as_ref()
    }

    pub fn payout_account(&self) -> &AccountId {
        &self.payout_id
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn cost(&self) -> U128 {
        U128(self.cost)
    }

    pub fn max_mint_amount(&self) -> u32 {
        self.max_mint_amount
    }

    pub fn sale_start(&self) -> u64 {
        self.sale_start
    }

    pub fn max_supply(&self) -> u64 {
        self.max_supply
    }

    pub fn sales_balance(&self) -> U128 {
        U128(self.sales_balance)
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
