//! In-memory backend for exercising the query layer without a server.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use lingo_common::{FriendRequest, FriendRequestId, User, UserId, UserRef};
use crate::api::SocialApi;
use crate::error::{ApiError, Result};

/// Serves fixed collections. Successful `send_friend_request` calls append an
/// outgoing request the way the real backend would.
#[derive(Default)]
pub struct FakeApi {
    friends: Mutex<Vec<User>>,
    users: Mutex<Vec<User>>,
    outgoing: Mutex<Vec<FriendRequest>>,
    outgoing_fetches: AtomicUsize,
    sent: AtomicUsize,
    fail_queries: AtomicBool,
    fail_sends: AtomicBool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_friends(self, friends: Vec<User>) -> Self {
        *self.friends.lock().unwrap() = friends;
        self
    }

    pub fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().unwrap() = users;
        self
    }

    pub fn with_outgoing(self, outgoing: Vec<FriendRequest>) -> Self {
        *self.outgoing.lock().unwrap() = outgoing;
        self
    }

    pub fn fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn clear_outgoing(&self) {
        self.outgoing.lock().unwrap().clear();
    }

    /// How many times the outgoing requests were fetched.
    pub fn outgoing_fetches(&self) -> usize {
        self.outgoing_fetches.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }

    fn check_queries(&self) -> Result<()> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(ApiError::Status { status: 500, message: "Internal Server Error".into() });
        }
        Ok(())
    }
}

pub fn user(id: &str, name: &str, native: &str, learning: &str) -> User {
    User {
        id: UserId::new(id),
        full_name: name.to_string(),
        native_language: native.to_string(),
        learning_language: learning.to_string(),
        ..Default::default()
    }
}

pub fn outgoing_to(id: &str) -> FriendRequest {
    FriendRequest {
        id: FriendRequestId(format!("req-{id}")),
        sender: UserRef::Id(UserId::new("me")),
        recipient: UserRef::Id(UserId::new(id)),
        ..Default::default()
    }
}

#[async_trait]
impl SocialApi for FakeApi {
    async fn get_user_friends(&self) -> Result<Vec<User>> {
        self.check_queries()?;
        Ok(self.friends.lock().unwrap().clone())
    }
    async fn get_recommended_users(&self) -> Result<Vec<User>> {
        self.check_queries()?;
        Ok(self.users.lock().unwrap().clone())
    }
    async fn get_outgoing_friend_reqs(&self) -> Result<Vec<FriendRequest>> {
        self.outgoing_fetches.fetch_add(1, Ordering::SeqCst);
        self.check_queries()?;
        Ok(self.outgoing.lock().unwrap().clone())
    }
    async fn send_friend_request(&self, user: &UserId) -> Result<()> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(ApiError::Status { status: 400, message: "Friend request already exists".into() });
        }
        self.sent.fetch_add(1, Ordering::SeqCst);
        self.outgoing.lock().unwrap().push(outgoing_to(user.as_str()));
        Ok(())
    }
}
