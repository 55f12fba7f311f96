//! Calero token ledger.
//!
//! Owns account balances, spending allowances and the total supply. Supply is
//! minted exactly once (normally at genesis) and afterwards only shrinks
//! through burns. Every dispatchable validates before it writes, so a failed
//! call leaves no trace in storage and deposits no event.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but keeps the query surface terse.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::ArithmeticError;
use sp_std::prelude::*;

pub use pallet::*;
pub use traits::TokenLedger;
pub use weights::WeightInfo;

pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::calero-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Origin allowed to perform the one-time mint when genesis did not.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Calero")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "CLR")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Number of decimals in the smallest unit (18 for the Calero token)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Fixed by the mint, reduced only by burns.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Set once the supply has been minted.
    #[pallet::storage]
    #[pallet::getter(fn is_initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    /// Holds the team allocation. Its tokens cannot be moved or burned; no
    /// release path exists.
    #[pallet::storage]
    #[pallet::getter(fn locked_team_tokens_address)]
    pub type TeamLockAccount<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account balances. Missing entries read as zero.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance, keyed
    /// `(owner, spender)`. Missing entries read as zero; a zero allowance is
    /// never stored.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// The whole supply was minted to the initial holder
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens moved from one account to another
        Transfer { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Allowance of `spender` over `owner`'s tokens is now `amount`
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Tokens removed from circulation
        Burned { burner: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The supply has already been minted.
        AlreadyInitialized,
        /// Balance too low for the requested amount.
        InsufficientBalance,
        /// Allowance too low for the requested amount.
        InsufficientAllowance,
        /// Recipient is the null account.
        InvalidRecipient,
        /// A balance or allowance would exceed `u128::MAX`.
        Overflow,
        /// The tokens belong to the team lock account.
        TeamTokensLocked,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Mint the entire supply to `to`. Succeeds at most once over the
        /// lifetime of the ledger, genesis mint included.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin)?;
            Self::do_mint(&to, amount)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Overwrite the caller's allowance for `spender`. No prior reset to
        /// zero is required.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::increase_approval())]
        pub fn increase_approval(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(delta)
                .ok_or(Error::<T>::Overflow)?;
            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Lower the caller's allowance for `spender`. Decreasing by more than
        /// the current allowance leaves it at zero.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::decrease_approval())]
        pub fn decrease_approval(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Allowances::<T>::get(&owner, &spender).saturating_sub(delta);
            Self::set_allowance(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Spend `amount` of `owner`'s tokens on their behalf, sending them to
        /// `to`. The caller is the spender.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T>::get(&owner, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            Self::do_transfer(&owner, &to, amount)?;
            Self::set_allowance(&owner, &spender, remaining);
            Ok(())
        }

        /// Irreversibly destroy `amount` of the caller's tokens.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let burner = ensure_signed(origin)?;
            Self::do_burn(&burner, amount)
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Receives the whole supply. `None` leaves the ledger unminted.
        pub initial_holder: Option<T::AccountId>,
        /// Supply minted to `initial_holder`, in smallest units
        pub initial_supply: u128,
        /// Receives `team_lock_balance` right after the mint and keeps it
        pub team_lock: Option<T::AccountId>,
        pub team_lock_balance: u128,
        /// Further amounts moved out of the initial holder after the team lock
        /// is funded (advisors, reserves, ...)
        pub allocations: Vec<(T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            match self.initial_holder {
                Some(ref holder) => {
                    Pallet::<T>::do_mint(holder, self.initial_supply)
                        .expect("Initial holder must be a valid recipient");
                    if let Some(ref lock) = self.team_lock {
                        assert!(lock != holder, "Team lock must differ from the initial holder");
                        Pallet::<T>::do_transfer(holder, lock, self.team_lock_balance)
                            .expect("Team lock balance exceeds the initial supply");
                        TeamLockAccount::<T>::put(lock);
                    }
                    for (account, amount) in &self.allocations {
                        Pallet::<T>::do_transfer(holder, account, *amount)
                            .expect("Genesis allocations exceed the initial supply");
                    }
                }
                None => {
                    assert!(self.initial_supply == 0, "Initial supply requires an initial holder");
                    assert!(self.team_lock.is_none(), "Team lock requires an initial holder");
                    assert!(
                        self.allocations.is_empty(),
                        "Genesis allocations require an initial holder"
                    );
                }
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether `who` is the null account, i.e. encodes to all zero bytes.
    pub fn is_null_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    pub(crate) fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);

        Balances::<T>::insert(to, amount);
        TotalSupply::<T>::put(amount);
        Initialized::<T>::put(true);

        log::info!(target: LOG_TARGET, "minted total supply of {amount} to {to:?}");
        Self::deposit_event(Event::Minted { to: to.clone(), amount });
        Ok(())
    }

    /// Move `amount` from `from` to `to`. Both sides are computed before
    /// either is written.
    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(!Self::is_null_account(to), Error::<T>::InvalidRecipient);
        Self::ensure_unlocked(from)?;

        let from_balance = Balances::<T>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let to_balance =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, from_balance);
            Balances::<T>::insert(to, to_balance);
        }

        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    pub(crate) fn do_burn(burner: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_unlocked(burner)?;
        let balance = Balances::<T>::get(burner)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(ArithmeticError::Underflow)?;

        Balances::<T>::insert(burner, balance);
        TotalSupply::<T>::put(supply);

        log::debug!(target: LOG_TARGET, "{burner:?} burned {amount}, supply now {supply}");
        Self::deposit_event(Event::Burned { burner: burner.clone(), amount });
        Ok(())
    }

    fn ensure_unlocked(who: &T::AccountId) -> DispatchResult {
        ensure!(
            TeamLockAccount::<T>::get().as_ref() != Some(who),
            Error::<T>::TeamTokensLocked
        );
        Ok(())
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: u128) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }
}

impl<T: Config> TokenLedger<T::AccountId> for Pallet<T> {
    fn decimals() -> u8 {
        Decimals::<T>::get()
    }

    fn total_supply() -> u128 {
        TotalSupply::<T>::get()
    }

    fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::do_transfer(from, to, amount)
    }

    fn burn(holder: &T::AccountId, amount: u128) -> DispatchResult {
        Self::do_burn(holder, amount)
    }
}
