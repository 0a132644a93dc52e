//! The 16-bit probability interval shared by encoder and decoder.
//!
//! Both coder halves evolve an `[low, high]` pair through the same
//! narrowing and renormalization steps; only what happens *around* a
//! renormalization differs (the encoder emits bits, the decoder folds its
//! value window). The shared classification lives here as [`Renorm`].

/// One past the top of the 16-bit universe.
pub const FULL: u32 = 1 << 16;
/// Midpoint of the universe.
pub const HALF: u32 = FULL / 2;
/// First quartile boundary.
pub const QUARTER: u32 = FULL / 4;
/// Third quartile boundary.
pub const THREE_QUARTERS: u32 = 3 * QUARTER;

/// Renormalization case for the current interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Renorm {
    /// E1: the interval sits entirely in the lower half. Leading bit is 0.
    LowerHalf,
    /// E2: the interval sits entirely in the upper half. Leading bit is 1.
    UpperHalf,
    /// E3: the interval straddles the midpoint inside the middle half.
    /// No bit is settled yet; the decision is deferred (bit-plus-follow).
    Straddle,
    /// The interval is wide enough; renormalization stops.
    Settled,
}

impl Renorm {
    /// Offset subtracted from `low`, `high` (and the decoder's value)
    /// before doubling.
    pub fn offset(self) -> u32 {
        match self {
            Renorm::LowerHalf | Renorm::Settled => 0,
            Renorm::UpperHalf => HALF,
            Renorm::Straddle => QUARTER,
        }
    }
}

/// The current probability interval `[low, high]` within the universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    low: u32,
    high: u32,
}

impl Interval {
    /// The full universe, `[0, 65535]`. Starting state of every pass.
    pub fn full() -> Self {
        Self { low: 0, high: FULL - 1 }
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> u32 {
        self.low
    }

    /// Upper bound (inclusive).
    pub fn high(&self) -> u32 {
        self.high
    }

    /// Current width, `high - low + 1`.
    pub fn range(&self) -> u32 {
        self.high - self.low + 1
    }

    /// Narrow to the sub-range `[cum_lo, cum_hi)` of the total frequency
    /// mass. Integer division truncates exactly as on the encode side, so
    /// both halves stay in lockstep.
    pub fn narrow(&mut self, cum_lo: u32, cum_hi: u32, total: u32) {
        let range = self.range();
        self.high = self.low + range * cum_hi / total - 1;
        self.low += range * cum_lo / total;
    }

    /// Classify the pending renormalization case.
    pub fn classify(&self) -> Renorm {
        if self.high < HALF {
            Renorm::LowerHalf
        } else if self.low >= HALF {
            Renorm::UpperHalf
        } else if self.low >= QUARTER && self.high < THREE_QUARTERS {
            Renorm::Straddle
        } else {
            Renorm::Settled
        }
    }

    /// Shift the case's offset out and double back to full precision:
    /// `low = 2(low - offset)`, `high = 2(high - offset) + 1`.
    pub fn expand(&mut self, case: Renorm) {
        let offset = case.offset();
        self.low = (self.low - offset) * 2;
        self.high = (self.high - offset) * 2 + 1;
    }
}
