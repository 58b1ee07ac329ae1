use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum CollectionError {
    NotOwner,
    ZeroAddress,
    MintingPaused,
    InvalidAmount,
    ExceedsMaxMintAmount(u32),
    SaleNotLive,
    SupplyExhausted,
    /// Attached deposit below the required total. Surfaces with an empty
    /// message; callers distinguish it by kind, not text.
    InsufficientPayment,
    NonexistentToken(u64),
    NotTokenOwner,
    SelfTransfer,
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner => write!(f, "Only the contract owner can perform this action"),
            Self::ZeroAddress => write!(f, "New owner cannot be the system account"),
            Self::MintingPaused => write!(f, "Minting is paused"),
            Self::InvalidAmount => write!(f, "Mint amount must be greater than 0"),
            Self::ExceedsMaxMintAmount(max) => write!(f, "You can mint a max of {}", max),
            Self::SaleNotLive => write!(f, "Sale isn't live yet"),
            Self::SupplyExhausted => write!(f, "All pieces have been minted!"),
            Self::InsufficientPayment => Ok(()),
            Self::NonexistentToken(id) => write!(f, "Token {} does not exist", id),
            Self::NotTokenOwner => write!(f, "Only the token owner can transfer it"),
            Self::SelfTransfer => write!(f, "Receiver already owns this token"),
        }
    }
}
