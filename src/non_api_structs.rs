use std::collections::HashSet;
use crate::{FriendRequest, UserId};

/// Recipients of the current user's outgoing friend requests.
///
/// Page-local and never sent over the wire. `rebuild` replaces the whole set,
/// but only when handed a non-empty collection: an empty or missing one leaves
/// the previous contents in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutgoingRequestIndex {
    recipients: HashSet<UserId>,
}

impl OutgoingRequestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the set was replaced.
    pub fn rebuild(&mut self, requests: Option<&[FriendRequest]>) -> bool {
        let Some(requests) = requests.filter(|requests| !requests.is_empty()) else {
            return false;
        };
        self.recipients = requests
            .iter()
            .map(|request| request.recipient.id().clone())
            .collect();
        true
    }

    pub fn contains(&self, user: impl AsRef<UserId>) -> bool {
        self.recipients.contains(user.as_ref())
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.recipients.iter()
    }
}
