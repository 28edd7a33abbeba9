use std::sync::atomic::{AtomicI64, Ordering};

/// Mints entity identifiers from the wall clock in milliseconds.
/// Two ids minted in the same millisecond still differ: each id is strictly
/// greater than the previous one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    pub fn next_id(&self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate.to_string(),
                Err(actual) => previous = actual,
            }
        }
    }
}

static IDS: IdGenerator = IdGenerator::new();

/// Process-wide id minting.
pub fn mint_id() -> String {
    IDS.next_id()
}
