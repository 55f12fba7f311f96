//! Ledger interface consumed by other pallets.

use sp_runtime::DispatchResult;

/// Balance-moving surface of the token ledger for trusted pallets.
///
/// Callers are responsible for authorising the move: the ledger only enforces
/// its own invariants (sufficient balance, non-null recipient, supply
/// conservation). Amounts are in the token's smallest unit.
pub trait TokenLedger<AccountId> {
    /// Decimals of the smallest unit.
    fn decimals() -> u8;

    fn total_supply() -> u128;

    fn balance_of(who: &AccountId) -> u128;

    /// Move `amount` from `from` to `to`, emitting the ledger's transfer event.
    fn transfer(from: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;

    /// Destroy `amount` held by `holder`, shrinking the total supply.
    fn burn(holder: &AccountId, amount: u128) -> DispatchResult;
}
