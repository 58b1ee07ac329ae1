pub const MAX_SUPPLY: u64 = 3_333;

pub const DEFAULT_COST: u128 = 33_000_000_000_000_000_000_000_000; // 33 NEAR
pub const DEFAULT_MAX_MINT_AMOUNT: u32 = 5;
// 2022-04-05T15:33:00Z in nanoseconds.
pub const DEFAULT_SALE_START_NS: u64 = 1_649_172_780_000_000_000;

// NEAR's reserved system account stands in for the null owner address.
pub const NULL_OWNER_ACCOUNT: &str = "system";
