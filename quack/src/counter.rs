use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, OnceLock,
};

static GLOBAL_TALLY: OnceLock<QuackTally> = OnceLock::new();

/// Shared quack count.
///
/// Clones share the same count. There is no way to decrease or reset it.
/// Outside this crate the only tally reachable is [`QuackTally::global`].
#[derive(Debug, Clone)]
pub struct QuackTally {
    count: Arc<AtomicU64>,
}

impl QuackTally {
    /// Creates a tally independent from every other one.
    pub(crate) fn new() -> Self {
        QuackTally {
            count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Process-wide tally, starting at zero.
    pub fn global() -> Self {
        GLOBAL_TALLY.get_or_init(QuackTally::new).clone()
    }

    /// Adds one quack and returns the new total.
    pub(crate) fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn snapshot(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    pub fn shares_count_with(&self, other: &QuackTally) -> bool {
        Arc::ptr_eq(&self.count, &other.count)
    }
}

/// Total quacks counted by the process-wide tally.
pub fn number_of_quacks() -> u64 {
    QuackTally::global().snapshot()
}
