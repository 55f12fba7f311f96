//! Calero crowdsale controller.
//!
//! Sells ledger tokens held by the sale reserve account in owner-started,
//! time-boxed stages. Each contribution pays native currency into the reserve
//! and receives `value / buy_price` tokens plus the stage bonus, as long as
//! neither the stage allocation nor the global hardcap would be exceeded.
//! Contributions are all-or-nothing: nothing is partially filled.
//!
//! The stage state is never stored. It is recomputed from the latest stage
//! record and the clock on every call (see [`StageInfo::stage_at`]).

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    storage::with_storage_layer,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::Preservation,
        UnixTime,
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_calero_token::TokenLedger;
use sp_runtime::{
    helpers_128bit::multiply_by_rational_with_rounding, traits::AccountIdConversion, Rounding,
};

pub use pallet::*;
pub use types::{SaleStage, StageInfo};
pub use weights::WeightInfo;

pub mod constants;
mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::calero-crowdsale";

/// Benchmark setup the pallet cannot do through its own interfaces.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
    /// Credit `who` with ledger tokens.
    fn fund_tokens(who: &AccountId, amount: u128);
    /// Move the clock to `secs` Unix seconds.
    fn set_time(secs: u64);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Ledger the sold tokens live in.
        type Token: TokenLedger<Self::AccountId>;
        /// Currency contributions are paid in.
        type Currency: Mutate<Self::AccountId, Balance = u128>;
        /// Source of the current time for stage gating.
        type Clock: UnixTime;
        /// Derives the reserve account holding unsold tokens and raised funds.
        #[pallet::constant]
        type PalletId: Get<PalletId>;
        type WeightInfo: WeightInfo;
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Account allowed to start stages and manage the sale.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Price of one whole token in smallest currency units.
    #[pallet::storage]
    #[pallet::getter(fn buy_price)]
    pub type BuyPrice<T> = StorageValue<_, u128, ValueQuery>;

    /// Informational funding target; does not gate contributions.
    #[pallet::storage]
    #[pallet::getter(fn softcap)]
    pub type Softcap<T> = StorageValue<_, u128, ValueQuery>;

    /// Ceiling on `TokensSold` across all stages.
    #[pallet::storage]
    #[pallet::getter(fn hardcap)]
    pub type Hardcap<T> = StorageValue<_, u128, ValueQuery>;

    /// Unix seconds after which no stage may run and unsold tokens can be burned.
    #[pallet::storage]
    #[pallet::getter(fn ico_deadline)]
    pub type IcoDeadline<T> = StorageValue<_, u64, ValueQuery>;

    /// Tokens sold across all stages.
    #[pallet::storage]
    #[pallet::getter(fn tokens_sold)]
    pub type TokensSold<T> = StorageValue<_, u128, ValueQuery>;

    /// Number of stages started so far. The latest is `stage_count - 1`.
    #[pallet::storage]
    #[pallet::getter(fn stage_count)]
    pub type StageCount<T> = StorageValue<_, u32, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn stages)]
    pub type Stages<T> = StorageMap<_, Twox64Concat, u32, StageInfo, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new sale stage was opened
        CrowdsaleStarted {
            stage: u32,
            tokens: u128,
            start_time: u64,
            end_time: u64,
            bonus_percent: u32,
        },
        /// `contributor` paid `value` and received `tokens`
        TokensPurchased { contributor: T::AccountId, value: u128, tokens: u128 },
        BuyPriceChanged { old_price: u128, new_price: u128 },
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: T::AccountId },
        /// Tokens left in the reserve after the deadline were burned
        UnsoldBurned { amount: u128 },
        /// Raised funds paid out of the reserve
        FundsWithdrawn { to: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the sale owner.
        Unauthorized,
        /// Stage window is empty or ends after the deadline.
        InvalidWindow,
        /// The reserve does not hold enough tokens.
        InsufficientReserve,
        /// The purchase would exceed the hardcap or the stage allocation.
        CapExceeded,
        /// No stage is accepting contributions right now.
        SaleNotActive,
        /// The current stage has not ended yet.
        StageStillActive,
        /// The contribution buys less than one smallest token unit.
        ContributionTooSmall,
        /// Buy price must be non-zero.
        InvalidPrice,
        /// The deadline has not passed yet.
        SaleNotFinished,
        /// Token arithmetic overflowed.
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Open a new stage selling `token_amount` from the reserve between
        /// `start_time` and `end_time` (inclusive) with `bonus_percent` extra.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::start_crowd())]
        pub fn start_crowd(
            origin: OriginFor<T>,
            token_amount: u128,
            start_time: u64,
            end_time: u64,
            bonus_percent: u32,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(start_time < end_time, Error::<T>::InvalidWindow);
            ensure!(end_time <= IcoDeadline::<T>::get(), Error::<T>::InvalidWindow);

            if let Some(current) = Self::current_stage_info() {
                ensure!(
                    current.stage_at(Self::now()) == SaleStage::Ended,
                    Error::<T>::StageStillActive
                );
            }
            ensure!(Self::reserve_balance() >= token_amount, Error::<T>::InsufficientReserve);

            let stage = StageCount::<T>::get();
            let next = stage.checked_add(1).ok_or(Error::<T>::Overflow)?;
            Stages::<T>::insert(
                stage,
                StageInfo {
                    tokens_allocated: token_amount,
                    start_time,
                    end_time,
                    bonus_percent,
                    tokens_sold_in_stage: 0,
                },
            );
            StageCount::<T>::put(next);

            log::info!(
                target: LOG_TARGET,
                "stage {stage} opened: {token_amount} tokens, [{start_time}, {end_time}], \
                 bonus {bonus_percent}%"
            );
            Self::deposit_event(Event::CrowdsaleStarted {
                stage,
                tokens: token_amount,
                start_time,
                end_time,
                bonus_percent,
            });
            Ok(())
        }

        /// Pay `value` into the reserve and receive the bonus-adjusted token
        /// amount. Rejected whole if any cap would be exceeded.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::contribute())]
        pub fn contribute(origin: OriginFor<T>, value: u128) -> DispatchResult {
            let contributor = ensure_signed(origin)?;
            let now = Self::now();

            let stage = StageCount::<T>::get().checked_sub(1).ok_or(Error::<T>::SaleNotActive)?;
            let mut info = Stages::<T>::get(stage).ok_or(Error::<T>::SaleNotActive)?;
            ensure!(
                info.is_open_at(now) && now <= IcoDeadline::<T>::get(),
                Error::<T>::SaleNotActive
            );

            let tokens = Self::tokens_for(value, info.bonus_percent)?;
            ensure!(tokens > 0, Error::<T>::ContributionTooSmall);

            let sold = TokensSold::<T>::get().checked_add(tokens).ok_or(Error::<T>::Overflow)?;
            ensure!(sold <= Hardcap::<T>::get(), Error::<T>::CapExceeded);
            ensure!(tokens <= info.remaining(), Error::<T>::CapExceeded);
            info.tokens_sold_in_stage =
                info.tokens_sold_in_stage.checked_add(tokens).ok_or(Error::<T>::Overflow)?;

            let reserve = Self::reserve_account();
            with_storage_layer(|| -> DispatchResult {
                T::Currency::transfer(&contributor, &reserve, value, Preservation::Expendable)?;
                T::Token::transfer(&reserve, &contributor, tokens)?;
                Stages::<T>::insert(stage, info);
                TokensSold::<T>::put(sold);
                Ok(())
            })?;

            log::debug!(target: LOG_TARGET, "{contributor:?} bought {tokens} for {value}");
            Self::deposit_event(Event::TokensPurchased { contributor, value, tokens });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_buy_price())]
        pub fn set_buy_price(origin: OriginFor<T>, new_price: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(new_price > 0, Error::<T>::InvalidPrice);

            let old_price = BuyPrice::<T>::get();
            BuyPrice::<T>::put(new_price);

            log::info!(target: LOG_TARGET, "buy price changed from {old_price} to {new_price}");
            Self::deposit_event(Event::BuyPriceChanged { old_price, new_price });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let previous_owner = Self::ensure_owner(origin)?;
            Owner::<T>::put(&new_owner);

            log::info!(
                target: LOG_TARGET,
                "ownership moved from {previous_owner:?} to {new_owner:?}"
            );
            Self::deposit_event(Event::OwnershipTransferred { previous_owner, new_owner });
            Ok(())
        }

        /// Burn every token still held by the reserve once the deadline has
        /// passed.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::burn_unsold())]
        pub fn burn_unsold(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(Self::now() > IcoDeadline::<T>::get(), Error::<T>::SaleNotFinished);

            let amount = Self::reserve_balance();
            T::Token::burn(&Self::reserve_account(), amount)?;

            log::info!(target: LOG_TARGET, "burned {amount} unsold tokens");
            Self::deposit_event(Event::UnsoldBurned { amount });
            Ok(())
        }

        /// Pay `amount` of the raised currency out of the reserve to `to`.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::withdraw_funds())]
        pub fn withdraw_funds(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            T::Currency::transfer(&Self::reserve_account(), &to, amount, Preservation::Expendable)?;

            log::info!(target: LOG_TARGET, "withdrew {amount} raised funds to {to:?}");
            Self::deposit_event(Event::FundsWithdrawn { to, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Sale owner
        pub owner: Option<T::AccountId>,
        /// Currency per whole token
        pub buy_price: u128,
        pub softcap: u128,
        pub hardcap: u128,
        /// Unix seconds
        pub ico_deadline: u64,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            assert!(self.softcap <= self.hardcap, "Softcap must not exceed hardcap");

            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
            BuyPrice::<T>::put(self.buy_price);
            Softcap::<T>::put(self.softcap);
            Hardcap::<T>::put(self.hardcap);
            IcoDeadline::<T>::put(self.ico_deadline);
        }
    }
}

impl<T: Config> Pallet<T> {
    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    /// Current time in Unix seconds.
    pub fn now() -> u64 {
        T::Clock::now().as_secs()
    }

    /// Account holding the tokens for sale and the raised funds.
    pub fn reserve_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    /// Tokens in the reserve, sold or not yet allocated.
    pub fn reserve_balance() -> u128 {
        T::Token::balance_of(&Self::reserve_account())
    }

    /// Currency collected so far and not yet withdrawn.
    pub fn funds_raised() -> u128 {
        T::Currency::balance(&Self::reserve_account())
    }

    /// The latest stage, if any was started.
    pub fn current_stage_info() -> Option<StageInfo> {
        StageCount::<T>::get().checked_sub(1).and_then(|index| Stages::<T>::get(index))
    }

    /// Sale state at the current time.
    pub fn stage() -> SaleStage {
        match Self::current_stage_info() {
            Some(info) => info.stage_at(Self::now()),
            None => SaleStage::Uninitialized,
        }
    }

    pub fn softcap_reached() -> bool {
        TokensSold::<T>::get() >= Softcap::<T>::get()
    }

    /// Tokens bought by `value` at the current price, with `bonus_percent`
    /// added on top. Rounds down at each step.
    pub fn tokens_for(value: u128, bonus_percent: u32) -> Result<u128, DispatchError> {
        let price = BuyPrice::<T>::get();
        ensure!(price > 0, Error::<T>::InvalidPrice);

        let unit = 10u128.checked_pow(T::Token::decimals().into()).ok_or(Error::<T>::Overflow)?;
        let base = multiply_by_rational_with_rounding(value, unit, price, Rounding::Down)
            .ok_or(Error::<T>::Overflow)?;
        let bonus =
            multiply_by_rational_with_rounding(base, bonus_percent.into(), 100, Rounding::Down)
                .ok_or(Error::<T>::Overflow)?;

        base.checked_add(bonus).ok_or_else(|| Error::<T>::Overflow.into())
    }
}
