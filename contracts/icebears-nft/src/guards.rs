use crate::*;

impl Contract {
    /// Fails for every caller once ownership has been renounced.
    pub(crate) fn check_contract_owner(&self, actor_id: &AccountId) -> Result<(), CollectionError> {
        if !self.is_contract_owner(actor_id) {
            return Err(CollectionError::NotOwner);
        }
        Ok(())
    }

    pub(crate) fn is_contract_owner(&self, actor_id: &AccountId) -> bool {
        self.owner_id.as_ref() == Some(actor_id)
    }
}
