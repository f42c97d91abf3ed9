//! Generation counter for requests whose results may arrive out of order.

/// Marker handed out with each request. Results carry their token back.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Issues tokens and remembers the latest. Only a result holding the
/// latest token may be applied.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestTracker {
    next: u64,
    current: Option<RequestToken>,
}

impl RequestTracker {
    /// Start a new request, superseding any in flight.
    ///
    pub fn issue(&mut self) -> RequestToken {
        self.next += 1;
        let token = RequestToken(self.next);
        self.current = Some(token);
        token
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == Some(token)
    }

    /// Whether a request is in flight.
    ///
    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    /// Mark the request finished. Stale tokens are ignored.
    ///
    pub fn complete(&mut self, token: RequestToken) -> bool {
        if self.is_current(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Drop the in-flight request; its result will be discarded.
    ///
    pub fn cancel(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_token_supersedes_older() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(!tracker.complete(first));
        assert!(tracker.complete(second));
        assert!(!tracker.in_flight());
    }

    #[test]
    fn cancel_discards_in_flight() {
        let mut tracker = RequestTracker::default();
        let token = tracker.issue();
        tracker.cancel();
        assert!(!tracker.is_current(token));
        assert!(!tracker.complete(token));
    }

    #[test]
    fn tokens_never_repeat_after_cancel() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        tracker.cancel();
        let second = tracker.issue();
        assert_ne!(first, second);
        assert!(second.generation() > first.generation());
    }
}
