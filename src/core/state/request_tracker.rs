#[cfg(test)]
#[path = "request_tracker_test.rs"]
mod request_tracker_test;

/// Issued when a visit starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

/// Latest-wins bookkeeping for page visits. Superseded requests are not
/// cancelled; their responses are dropped when they land.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
