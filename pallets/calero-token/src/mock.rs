use crate as pallet_calero_token;
use frame_support::{derive_impl, parameter_types};
use sp_runtime::{traits::IdentityLookup, BuildStorage};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        CaleroToken: pallet_calero_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
}

/// One whole token in smallest units.
pub const UNIT: u128 = 1_000_000_000_000_000_000;

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const TEAM_WALLET: u64 = 8;
pub const TEAM_LOCK: u64 = 9;
pub const NULL: u64 = 0;

parameter_types! {
    pub const AdminAccount: u64 = 100;
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

impl pallet_calero_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAdmin;
    type WeightInfo = ();
}

fn build(
    initial_holder: Option<u64>,
    initial_supply: u128,
    team_lock: Option<(u64, u128)>,
    allocations: Vec<(u64, u128)>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_calero_token::GenesisConfig::<Test> {
        token_name: b"Calero".to_vec(),
        token_symbol: b"CLR".to_vec(),
        decimals: 18,
        initial_holder,
        initial_supply,
        team_lock: team_lock.map(|(account, _)| account),
        team_lock_balance: team_lock.map_or(0, |(_, amount)| amount),
        allocations,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Whole supply of 100,000,000 tokens held by `OWNER`.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(Some(OWNER), 100_000_000 * UNIT, None, vec![])
}

/// Launch distribution: 20M locked for the team and 30M to `BOB`, leaving
/// the owner with 50M.
pub fn distributed_test_ext() -> sp_io::TestExternalities {
    build(
        Some(OWNER),
        100_000_000 * UNIT,
        Some((TEAM_LOCK, 20_000_000 * UNIT)),
        vec![(BOB, 30_000_000 * UNIT)],
    )
}

/// Ledger with metadata but nothing minted yet.
pub fn unminted_test_ext() -> sp_io::TestExternalities {
    build(None, 0, None, vec![])
}
