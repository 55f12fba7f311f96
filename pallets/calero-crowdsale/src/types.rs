use frame_support::pallet_prelude::*;

/// Lifecycle of the current sale stage, derived from the clock and the stage
/// record rather than stored.
#[derive(Clone, Copy, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum SaleStage {
    /// No stage has been started yet.
    Uninitialized,
    /// A stage was started and neither its window has elapsed nor its
    /// allocation sold out. Contributions are accepted once `start_time` is
    /// reached.
    Active,
    /// The latest stage is over. A new `start_crowd` may open the next one.
    Ended,
}

/// A time-boxed slice of the sale with its own allocation and bonus.
#[derive(Clone, Encode, Decode, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct StageInfo {
    /// Tokens released for sale in this stage, in smallest units.
    pub tokens_allocated: u128,
    /// Unix seconds, inclusive.
    pub start_time: u64,
    /// Unix seconds, inclusive.
    pub end_time: u64,
    /// Bonus on top of the base allocation, in percent.
    pub bonus_percent: u32,
    pub tokens_sold_in_stage: u128,
}

impl StageInfo {
    pub fn remaining(&self) -> u128 {
        self.tokens_allocated.saturating_sub(self.tokens_sold_in_stage)
    }

    /// Stage state at `now`. Once `Ended`, a stage never becomes `Active`
    /// again for a non-decreasing clock.
    pub fn stage_at(&self, now: u64) -> SaleStage {
        if now > self.end_time || self.remaining() == 0 {
            SaleStage::Ended
        } else {
            SaleStage::Active
        }
    }

    /// Whether contributions are accepted at `now`.
    pub fn is_open_at(&self, now: u64) -> bool {
        self.stage_at(now) == SaleStage::Active && now >= self.start_time
    }
}
