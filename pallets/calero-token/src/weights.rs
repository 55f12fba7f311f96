//! Weights for pallet-calero-token.
//!
//! Hand-estimated from the storage accesses of each call until a benchmark
//! run on reference hardware replaces them.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn mint() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn increase_approval() -> Weight;
    fn decrease_approval() -> Weight;
    fn transfer_from() -> Weight;
    fn burn() -> Weight;
}

/// Hand-estimated weights for pallet-calero-token, priced with the runtime's `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Storage: Initialized (r:1 w:1), Balances (r:0 w:1), TotalSupply (r:0 w:1)
    fn mint() -> Weight {
        Weight::from_parts(14_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    // Storage: TeamLockAccount (r:1), Balances (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(22_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    // Storage: Allowances (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Storage: Allowances (r:1 w:1)
    fn increase_approval() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Storage: Allowances (r:1 w:1)
    fn decrease_approval() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    // Storage: Allowances (r:1 w:1), TeamLockAccount (r:1), Balances (r:2 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(30_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    // Storage: TeamLockAccount (r:1), Balances (r:1 w:1), TotalSupply (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(14_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(22_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn increase_approval() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn decrease_approval() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(30_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(18_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
