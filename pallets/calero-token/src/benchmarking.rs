//! Benchmarking setup for pallet-calero-token

use super::*;

#[allow(unused)]
use crate::Pallet as CaleroToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

fn funded_caller<T: Config>(amount: u128) -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    Balances::<T>::insert(&caller, amount);
    TotalSupply::<T>::put(amount);
    caller
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        Initialized::<T>::kill();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert!(Initialized::<T>::get());
    }

    #[benchmark]
    fn transfer() {
        let caller = funded_caller::<T>(10_000_000);
        let recipient: T::AccountId = account("recipient", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn increase_approval() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&caller, &spender, 1_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 2_000);
    }

    #[benchmark]
    fn decrease_approval() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        Allowances::<T>::insert(&caller, &spender, 1_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 400);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 600);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 1, SEED);
        Balances::<T>::insert(&owner, 10_000_000u128);
        Allowances::<T>::insert(&owner, &spender, 2_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), 1_000_000);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000_000);
    }

    #[benchmark]
    fn burn() {
        let caller = funded_caller::<T>(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
        assert_eq!(TotalSupply::<T>::get(), 9_000_000);
    }

    impl_benchmark_test_suite!(CaleroToken, crate::mock::unminted_test_ext(), crate::mock::Test);
}
