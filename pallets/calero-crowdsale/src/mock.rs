use crate::{self as pallet_calero_crowdsale, constants::*};
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU128, ConstU64},
    PalletId,
};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime with the ledger, a native currency and a clock.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        Timestamp: pallet_timestamp,
        CaleroToken: pallet_calero_token,
        Crowdsale: pallet_calero_crowdsale,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = pallet_balances::AccountData<u128>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type Balance = u128;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

impl pallet_calero_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = frame_system::EnsureRoot<u64>;
    type WeightInfo = ();
}

parameter_types! {
    pub const CrowdsalePalletId: PalletId = PalletId(*b"py/crwds");
}

impl pallet_calero_crowdsale::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Token = CaleroToken;
    type Currency = Balances;
    type Clock = Timestamp;
    type PalletId = CrowdsalePalletId;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = TokenFunder;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct TokenFunder;
#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<u64> for TokenFunder {
    fn fund_tokens(who: &u64, amount: u128) {
        pallet_calero_token::Balances::<Test>::mutate(who, |balance| *balance += amount);
        pallet_calero_token::TotalSupply::<Test>::mutate(|supply| *supply += amount);
    }

    fn set_time(secs: u64) {
        crate::mock::set_time(secs);
    }
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CAROL: u64 = 4;
pub const TEAM_LOCK: u64 = 9;
pub const ADVISORS: u64 = 10;

/// Native currency each contributor starts with.
pub const ENDOWMENT: u128 = 100_000 * UNIT;

/// 2018-04-20 00:00:00 UTC
pub const APRIL_20: u64 = 1_524_182_400;
/// 2018-04-25 00:00:00 UTC
pub const APRIL_25: u64 = 1_524_614_400;

/// Move the clock to `secs` Unix seconds.
pub fn set_time(secs: u64) {
    Timestamp::set_timestamp(secs * 1_000);
}

pub fn reserve() -> u64 {
    Crowdsale::reserve_account()
}

/// Launch state: full token distribution at genesis, the sale configured but
/// the reserve still empty, clock just past 2018-04-20.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(ALICE, ENDOWMENT), (BOB, ENDOWMENT), (CAROL, ENDOWMENT)],
        ..Default::default()
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_calero_token::GenesisConfig::<Test> {
        token_name: b"Calero".to_vec(),
        token_symbol: b"CLR".to_vec(),
        decimals: DECIMALS,
        initial_holder: Some(OWNER),
        initial_supply: TOTAL_SUPPLY,
        team_lock: Some(TEAM_LOCK),
        team_lock_balance: TEAM_LOCK_BALANCE,
        allocations: vec![(ADVISORS, TOTAL_SUPPLY - GENESIS_OWNER_BALANCE - TEAM_LOCK_BALANCE)],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_calero_crowdsale::GenesisConfig::<Test> {
        owner: Some(OWNER),
        buy_price: BUY_PRICE,
        softcap: SOFTCAP,
        hardcap: HARDCAP,
        ico_deadline: ICO_DEADLINE,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        set_time(APRIL_20 + 1);
    });
    ext
}

/// Launch state with the owner's whole balance handed to the sale reserve.
pub fn funded_test_ext() -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        assert_ok!(CaleroToken::transfer(
            RuntimeOrigin::signed(OWNER),
            reserve(),
            GENESIS_OWNER_BALANCE
        ));
    });
    ext
}
