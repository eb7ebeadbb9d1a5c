//! Request sequencing for page loads.
//!
//! Pages may fire a new fetch before the previous one resolves (filters,
//! refresh timers, remounts). Each fetch takes a ticket; only the newest
//! ticket may write its response into state.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Start a request and return its ticket.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// Loading lifecycle shared by the data-backed pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Remote<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub seq: RequestSeq,
}

impl<T> Remote<T> {
    pub fn begin(&mut self) -> u64 {
        self.loading = true;
        self.error = None;
        self.seq.begin()
    }

    /// Store a response; stale tickets are dropped. Returns whether it applied.
    pub fn finish<E: std::fmt::Display>(&mut self, ticket: u64, result: Result<T, E>) -> bool {
        if !self.seq.is_current(ticket) {
            log::debug!("dropping stale response for ticket {ticket}");
            return false;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        true
    }
}
