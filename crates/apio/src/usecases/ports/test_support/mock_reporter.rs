use std::sync::atomic::{AtomicUsize, Ordering};

use crate::usecases::ports::GraphReporter;

#[derive(Default)]
pub struct MockReporter {
    skipped: AtomicUsize,
}

impl MockReporter {
    pub fn skipped_count(&self) -> usize {
        self.skipped.load(Ordering::SeqCst)
    }
}

impl GraphReporter for MockReporter {
    fn dot_check_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }
}
