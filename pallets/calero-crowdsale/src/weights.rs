//! Weights for pallet-calero-crowdsale.
//!
//! Hand-estimated from the storage accesses of each call until a benchmark
//! run on reference hardware replaces them. `contribute` includes the
//! currency transfer and the ledger transfer it performs.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn start_crowd() -> Weight;
    fn contribute() -> Weight;
    fn set_buy_price() -> Weight;
    fn transfer_ownership() -> Weight;
    fn burn_unsold() -> Weight;
    fn withdraw_funds() -> Weight;
}

/// Hand-estimated weights for pallet-calero-crowdsale, priced with the runtime's `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Storage: Owner (r:1), IcoDeadline (r:1), StageCount (r:1 w:1), Stages (r:1 w:1),
    // Token Balances (r:1)
    fn start_crowd() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Storage: StageCount (r:1), Stages (r:1 w:1), IcoDeadline (r:1), BuyPrice (r:1),
    // Decimals (r:1), TokensSold (r:1 w:1), Hardcap (r:1), System Account (r:2 w:2),
    // Token TeamLockAccount (r:1), Token Balances (r:2 w:2)
    fn contribute() -> Weight {
        Weight::from_parts(70_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(13_u64))
            .saturating_add(T::DbWeight::get().writes(6_u64))
    }
    // Storage: Owner (r:1), BuyPrice (r:1 w:1)
    fn set_buy_price() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Storage: Owner (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Storage: Owner (r:1), IcoDeadline (r:1), Token TeamLockAccount (r:1),
    // Token Balances (r:2 w:1), TotalSupply (r:1 w:1)
    fn burn_unsold() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Storage: Owner (r:1), System Account (r:2 w:2)
    fn withdraw_funds() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn start_crowd() -> Weight {
        Weight::from_parts(25_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn contribute() -> Weight {
        Weight::from_parts(70_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(13_u64))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
    }
    fn set_buy_price() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(12_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn burn_unsold() -> Weight {
        Weight::from_parts(30_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn withdraw_funds() -> Weight {
        Weight::from_parts(45_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
