use crate::*;

#[near]
impl Contract {
    /// Metadata location for a minted token. An empty base URI resolves to
    /// an empty string; a base ending in `/` yields `base + id` with no
    /// extension; any other base yields `base + id + ".json"`.
    #[handle_result]
    pub fn token_uri(&self, token_id: u64) -> Result<String, CollectionError> {
        if token_id == 0 || token_id > self.minted_count {
            return Err(CollectionError::NonexistentToken(token_id));
        }
        Ok(self.resolve_token_uri(token_id))
    }

    pub fn collection_metadata(&self) -> CollectionMetadata {
        CollectionMetadata {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            base_uri: self.base_uri.clone(),
            max_supply: self.max_supply,
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

impl Contract {
    pub(crate) fn resolve_token_uri(&self, token_id: u64) -> String {
        if self.base_uri.is_empty() {
            return String::new();
        }
        if self.base_uri.ends_with('/') {
            format!("{}{}", self.base_uri, token_id)
        } else {
            format!("{}{}.json", self.base_uri, token_id)
        }
    }
}
