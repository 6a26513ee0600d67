//! Keyed query cache for the home page's three reads, plus the friend request
//! write that invalidates one of them.
//!
//! Requests run as tasks on a tokio runtime and report back over a channel;
//! nothing in the cache changes until the owner calls [`QueryClient::poll`] or
//! [`QueryClient::settle`], so the cache is only ever touched from one thread.

use std::sync::Arc;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};
use lingo_common::{FriendRequest, User, UserId};
use crate::api::SocialApi;
use crate::error::ApiError;
use crate::mutation::MutationState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Friends,
    Users,
    OutgoingFriendReqs,
}

impl QueryKey {
    pub const ALL: [QueryKey; 3] = [QueryKey::Friends, QueryKey::Users, QueryKey::OutgoingFriendReqs];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryKey::Friends => "friends",
            QueryKey::Users => "users",
            QueryKey::OutgoingFriendReqs => "outgoingFriendReqs",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum QueryStatus {
    /// No response yet.
    #[default]
    Pending,
    Success,
    Error(String),
}

#[derive(Clone, Debug)]
pub struct Query<T> {
    data: Option<T>,
    status: QueryStatus,
    fetching: bool,
    issued: u64,
    version: u64,
    invalidations: u64,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: QueryStatus::Pending,
            fetching: false,
            issued: 0,
            version: 0,
            invalidations: 0,
        }
    }
}

impl<T> Query<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    /// In flight with nothing to show yet. Refetches of loaded data don't count.
    pub fn is_loading(&self) -> bool {
        self.fetching && self.data.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            QueryStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Bumped on every successful fetch.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn invalidations(&self) -> u64 {
        self.invalidations
    }

    fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.fetching = true;
        self.issued
    }

    /// Applies a response unless a newer fetch has been issued since.
    fn resolve(&mut self, seq: u64, result: Result<T, String>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.fetching = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = QueryStatus::Success;
                self.version += 1;
            }
            // previous data, if any, stays visible
            Err(message) => self.status = QueryStatus::Error(message),
        }
        true
    }
}

impl<T> Query<Vec<T>> {
    /// The data, or an empty slice until the first success.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    friends: Query<Vec<User>>,
    users: Query<Vec<User>>,
    outgoing_friend_reqs: Query<Vec<FriendRequest>>,
}

impl QueryCache {
    pub fn friends(&self) -> &Query<Vec<User>> {
        &self.friends
    }

    pub fn users(&self) -> &Query<Vec<User>> {
        &self.users
    }

    pub fn outgoing_friend_reqs(&self) -> &Query<Vec<FriendRequest>> {
        &self.outgoing_friend_reqs
    }

    pub fn invalidations(&self, key: QueryKey) -> u64 {
        match key {
            QueryKey::Friends => self.friends.invalidations,
            QueryKey::Users => self.users.invalidations,
            QueryKey::OutgoingFriendReqs => self.outgoing_friend_reqs.invalidations,
        }
    }

    fn begin(&mut self, key: QueryKey) -> u64 {
        match key {
            QueryKey::Friends => self.friends.begin(),
            QueryKey::Users => self.users.begin(),
            QueryKey::OutgoingFriendReqs => self.outgoing_friend_reqs.begin(),
        }
    }

    fn mark_invalidated(&mut self, key: QueryKey) {
        match key {
            QueryKey::Friends => self.friends.invalidations += 1,
            QueryKey::Users => self.users.invalidations += 1,
            QueryKey::OutgoingFriendReqs => self.outgoing_friend_reqs.invalidations += 1,
        }
    }
}

/// Something the page may want to tell the user about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    QueryFailed { key: QueryKey, message: String },
    RequestSent { user: UserId },
    RequestFailed { user: UserId, message: String },
}

enum Resolved {
    Friends { seq: u64, result: Result<Vec<User>, ApiError> },
    Users { seq: u64, result: Result<Vec<User>, ApiError> },
    OutgoingFriendReqs { seq: u64, result: Result<Vec<FriendRequest>, ApiError> },
    FriendRequestSent { user: UserId, result: Result<(), ApiError> },
}

pub type Notifier = Arc<dyn Fn() + Send + Sync>;

pub struct QueryClient<A> {
    api: Arc<A>,
    runtime: Handle,
    cache: QueryCache,
    mutation: MutationState,
    tx: UnboundedSender<Resolved>,
    rx: UnboundedReceiver<Resolved>,
    in_flight: usize,
    notifier: Option<Notifier>,
}

impl<A: SocialApi> QueryClient<A> {
    pub fn new(api: Arc<A>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            runtime,
            cache: QueryCache::default(),
            mutation: MutationState::default(),
            tx,
            rx,
            in_flight: 0,
            notifier: None,
        }
    }

    /// Called from the runtime after each response is queued, e.g. to wake a UI.
    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn mutation(&self) -> &MutationState {
        &self.mutation
    }

    /// Number of requests whose responses haven't been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Issues all three reads, in no particular order.
    pub fn mount(&mut self) {
        for key in QueryKey::ALL {
            self.fetch(key);
        }
    }

    pub fn fetch(&mut self, key: QueryKey) {
        let seq = self.cache.begin(key);
        debug!(key = key.as_str(), seq, "fetching");
        let future = request(self.api.clone(), key, seq);
        self.spawn(future);
    }

    /// Marks one key stale and refetches it. Other keys are untouched.
    pub fn invalidate(&mut self, key: QueryKey) {
        self.cache.mark_invalidated(key);
        debug!(key = key.as_str(), "invalidated");
        self.fetch(key);
    }

    pub fn send_friend_request(&mut self, user: UserId) {
        self.mutation.begin();
        info!(%user, "sending friend request");
        let api = self.api.clone();
        self.spawn(
            async move {
                let result = api.send_friend_request(&user).await;
                Resolved::FriendRequestSent { user, result }
            }
            .boxed(),
        );
    }

    /// Applies every response that has already arrived.
    pub fn poll(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while let Ok(resolved) = self.rx.try_recv() {
            notices.extend(self.apply(resolved));
        }
        notices
    }

    /// Waits until nothing is in flight, including refetches triggered on the way.
    pub async fn settle(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while self.in_flight > 0 {
            match self.rx.recv().await {
                Some(resolved) => notices.extend(self.apply(resolved)),
                None => break,
            }
        }
        notices
    }

    fn spawn(&mut self, future: BoxFuture<'static, Resolved>) {
        self.in_flight += 1;
        let tx = self.tx.clone();
        let notifier = self.notifier.clone();
        self.runtime.spawn(async move {
            // fails only once the client is gone
            let _ = tx.send(future.await);
            if let Some(notify) = notifier {
                notify();
            }
        });
    }

    fn apply(&mut self, resolved: Resolved) -> Option<Notice> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match resolved {
            Resolved::Friends { seq, result } => resolve(&mut self.cache.friends, QueryKey::Friends, seq, result),
            Resolved::Users { seq, result } => resolve(&mut self.cache.users, QueryKey::Users, seq, result),
            Resolved::OutgoingFriendReqs { seq, result } => {
                resolve(&mut self.cache.outgoing_friend_reqs, QueryKey::OutgoingFriendReqs, seq, result)
            }
            Resolved::FriendRequestSent { user, result } => match result {
                Ok(()) => {
                    info!(%user, "friend request sent");
                    self.mutation.succeed();
                    self.invalidate(QueryKey::OutgoingFriendReqs);
                    Some(Notice::RequestSent { user })
                }
                Err(err) => {
                    warn!(%user, error = %err, "friend request failed");
                    let message = err.to_string();
                    self.mutation.fail(message.clone());
                    Some(Notice::RequestFailed { user, message })
                }
            },
        }
    }
}

fn request<A: SocialApi>(api: Arc<A>, key: QueryKey, seq: u64) -> BoxFuture<'static, Resolved> {
    match key {
        QueryKey::Friends => async move {
            Resolved::Friends { seq, result: api.get_user_friends().await }
        }
        .boxed(),
        QueryKey::Users => async move {
            Resolved::Users { seq, result: api.get_recommended_users().await }
        }
        .boxed(),
        QueryKey::OutgoingFriendReqs => async move {
            Resolved::OutgoingFriendReqs { seq, result: api.get_outgoing_friend_reqs().await }
        }
        .boxed(),
    }
}

fn resolve<T>(query: &mut Query<T>, key: QueryKey, seq: u64, result: Result<T, ApiError>) -> Option<Notice> {
    match result {
        Ok(data) => {
            if !query.resolve(seq, Ok(data)) {
                debug!(key = key.as_str(), seq, "dropping superseded response");
            }
            None
        }
        Err(err) => {
            let message = err.to_string();
            if !query.resolve(seq, Err(message.clone())) {
                debug!(key = key.as_str(), seq, "dropping superseded failure");
                return None;
            }
            warn!(key = key.as_str(), error = %err, "query failed");
            Some(Notice::QueryFailed { key, message })
        }
    }
}
