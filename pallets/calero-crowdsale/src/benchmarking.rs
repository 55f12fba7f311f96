//! Benchmarking setup for pallet-calero-crowdsale

use super::*;

#[allow(unused)]
use crate::Pallet as Crowdsale;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;
const ALLOCATION: u128 = 1_000_000_000_000_000_000_000_000;

/// Sale with an owner, a funded reserve and a window that never closes.
fn setup_sale<T: Config>() -> T::AccountId {
    let owner: T::AccountId = account("owner", 0, SEED);
    Owner::<T>::put(&owner);
    BuyPrice::<T>::put(1_000u128);
    Hardcap::<T>::put(u128::MAX);
    IcoDeadline::<T>::put(u64::MAX);
    T::BenchmarkHelper::fund_tokens(&Crowdsale::<T>::reserve_account(), ALLOCATION);
    owner
}

fn open_stage<T: Config>(index: u32, tokens_sold_in_stage: u128) {
    Stages::<T>::insert(
        index,
        StageInfo {
            tokens_allocated: ALLOCATION,
            start_time: 0,
            end_time: u64::MAX,
            bonus_percent: 40,
            tokens_sold_in_stage,
        },
    );
    StageCount::<T>::put(index + 1);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn start_crowd() {
        let owner = setup_sale::<T>();
        // A previous, sold-out stage has to be inspected first
        open_stage::<T>(0, ALLOCATION);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), ALLOCATION / 2, 0, u64::MAX, 40);

        assert_eq!(StageCount::<T>::get(), 2);
    }

    #[benchmark]
    fn contribute() {
        setup_sale::<T>();
        open_stage::<T>(0, 0);
        // Enough to open the empty reserve account; buys one token plus bonus
        let value = T::Currency::minimum_balance().max(1_000);
        BuyPrice::<T>::put(value);
        let caller: T::AccountId = whitelisted_caller();
        T::Currency::set_balance(&caller, value.saturating_mul(10));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), value);

        assert!(T::Token::balance_of(&caller) > 0);
        assert!(TokensSold::<T>::get() > 0);
    }

    #[benchmark]
    fn set_buy_price() {
        let owner = setup_sale::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), 2_000);

        assert_eq!(BuyPrice::<T>::get(), 2_000);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = setup_sale::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn burn_unsold() {
        let owner = setup_sale::<T>();
        IcoDeadline::<T>::put(1_000u64);
        T::BenchmarkHelper::set_time(1_001);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Crowdsale::<T>::reserve_balance(), 0);
    }

    #[benchmark]
    fn withdraw_funds() {
        let owner = setup_sale::<T>();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount = T::Currency::minimum_balance().max(1_000).saturating_mul(2);
        T::Currency::set_balance(&Crowdsale::<T>::reserve_account(), amount.saturating_mul(2));

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(T::Currency::balance(&recipient), amount);
    }

    impl_benchmark_test_suite!(Crowdsale, crate::mock::new_test_ext(), crate::mock::Test);
}
