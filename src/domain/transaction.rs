//! Consolidated transaction observations and raw store records.

/// Consolidated (price, volume) for one ticker on one date. Prices are in
/// minor currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub price: i64,
    pub volume: i64,
}

impl Transaction {
    pub const fn new(price: i64, volume: i64) -> Self {
        Self { price, volume }
    }

    /// Fold another same-day record into this one: the price becomes the
    /// truncated pairwise average, the volume the running sum. With three
    /// or more colliding records the result depends on arrival order;
    /// that sequential behavior is intentional and must be kept.
    pub fn merge(&mut self, price: i64, volume: i64) {
        self.price = (self.price + price) / 2;
        self.volume += volume;
    }
}

/// One raw record as it comes off the store cursor. The date is the
/// store's encoded `YYYYMMDD` integer; any time-of-day column is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub ticker: String,
    pub date: i32,
    pub close: i64,
    pub volume: i64,
}
