//! Reference parameters of the Calero token sale.
//!
//! All token amounts are in smallest units (`10^DECIMALS` per token); prices
//! are native-currency smallest units per whole token.

pub const DECIMALS: u8 = 18;

/// One whole token.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// 0.001 of the native currency per token.
pub const BUY_PRICE: u128 = UNIT / 1_000;

pub const TOTAL_SUPPLY: u128 = 100_000_000 * UNIT;

/// Kept by the sale owner at genesis and handed to the sale reserve.
pub const GENESIS_OWNER_BALANCE: u128 = 50_000_000 * UNIT;

/// Sent to the team lock account at genesis.
pub const TEAM_LOCK_BALANCE: u128 = 20_000_000 * UNIT;

pub const SOFTCAP: u128 = 1_600_000 * UNIT;

pub const HARDCAP: u128 = 50_000_000 * UNIT;

/// 28 September 2018, 00:00:00 (UTC+3).
pub const ICO_DEADLINE: u64 = 1_538_082_000;
