use crate::{
    core::{
        ArcanaError,
        Card,
    },
    source::DeckLoad,
};

#[derive(Debug)]
pub enum TaskResult {
    DeckLoaded { seq: u64, result: Result<DeckLoad, ArcanaError> },
    RandomCard(Result<Card, ArcanaError>),
    SourceStatus(bool),
    LoadingMessage(String),
}

/// Bookkeeping for overlapping deck loads. Each load gets a sequence number
/// when it is initiated; only the result matching the newest sequence is
/// applied, so a slow first request can never overwrite a fresher response.
#[derive(Debug, Default)]
pub struct LoadTracker {
    latest: u64,
    in_flight: bool,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, seq: u64) {
        self.latest = seq;
        self.in_flight = true;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// True if this result is from the newest initiated request and should be
    /// applied; stale responses report false and must be discarded.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq != self.latest {
            return false;
        }

        self.in_flight = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_request_wins_regardless_of_arrival_order() {
        let mut tracker = LoadTracker::new();
        tracker.begin(1);
        tracker.begin(2);

        // Slow first response arrives after the second request started.
        assert!(!tracker.accept(1));
        assert!(tracker.is_loading());

        assert!(tracker.accept(2));
        assert!(!tracker.is_loading());
    }

    #[test]
    fn test_single_request_is_accepted() {
        let mut tracker = LoadTracker::new();
        assert!(!tracker.is_loading());

        tracker.begin(1);
        assert!(tracker.is_loading());
        assert!(tracker.accept(1));
    }

    #[test]
    fn test_stale_result_after_acceptance_is_still_rejected() {
        let mut tracker = LoadTracker::new();
        tracker.begin(1);
        tracker.begin(2);

        assert!(tracker.accept(2));
        assert!(!tracker.accept(1));
    }
}
