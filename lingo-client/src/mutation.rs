/// Bookkeeping for the "send friend request" write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationState {
    in_flight: usize,
    successes: u64,
    last_error: Option<String>,
}

impl MutationState {
    /// True while any request is still waiting on the backend.
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Message of the most recent failure, cleared by the next attempt.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn begin(&mut self) {
        self.in_flight += 1;
        self.last_error = None;
    }

    pub(crate) fn succeed(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.successes += 1;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.last_error = Some(message);
    }
}
