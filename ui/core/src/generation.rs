use std::sync::atomic::{AtomicU64, Ordering};

use domain_model::Sequencing;

/// Request generations of a single handler.
pub struct Generations {
    sequencing: Sequencing,
    latest: AtomicU64,
}

impl Generations {
    pub fn new(sequencing: Sequencing) -> Self {
        Self {
            sequencing,
            latest: AtomicU64::new(0),
        }
    }

    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a settled request may still update the page.
    pub fn is_current(&self, generation: u64) -> bool {
        match self.sequencing {
            Sequencing::LastSettled => true,
            Sequencing::LatestIssued => self.latest.load(Ordering::SeqCst) == generation,
        }
    }
}
