//! The dashboard: the user's friends and recommended language partners.

use lingo_client::{MutationState, Query, QueryCache};
use lingo_common::non_api_structs::OutgoingRequestIndex;
use crate::cards::{FriendCard, RecommendedCard};

pub const FRIENDS_HEADING: &str = "Your Friends";
pub const RECOMMENDED_HEADING: &str = "Meet New Learners";
pub const RECOMMENDED_SUBTITLE: &str = "Discover perfect language exchange partners based on your profile";

pub const NO_FRIENDS_TITLE: &str = "No friends yet";
pub const NO_FRIENDS_TEXT: &str = "Connect with language partners below to start practicing together!";
pub const NO_RECOMMENDATIONS_TITLE: &str = "No recommendations available";
pub const NO_RECOMMENDATIONS_TEXT: &str = "Check back later for new language partners!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section<T> {
    Loading,
    Empty,
    Populated(Vec<T>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub friends: Section<FriendCard>,
    pub recommended: Section<RecommendedCard>,
}

/// Page-local state: who already has a pending request from us.
#[derive(Clone, Debug, Default)]
pub struct HomePage {
    outgoing: OutgoingRequestIndex,
    outgoing_version: u64,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outgoing(&self) -> &OutgoingRequestIndex {
        &self.outgoing
    }

    /// Rebuilds the outgoing index if the outgoing requests changed since the
    /// last call. Returns whether the index was replaced.
    pub fn sync(&mut self, cache: &QueryCache) -> bool {
        let query = cache.outgoing_friend_reqs();
        if query.version() == self.outgoing_version {
            return false;
        }
        self.outgoing_version = query.version();
        self.outgoing.rebuild(query.data().map(Vec::as_slice))
    }

    pub fn view(&self, cache: &QueryCache, mutation: &MutationState) -> HomeView {
        let pending = mutation.is_pending();
        HomeView {
            friends: section(cache.friends(), FriendCard::new),
            recommended: section(cache.users(), |user| RecommendedCard::new(user, &self.outgoing, pending)),
        }
    }
}

fn section<T, C>(query: &Query<Vec<T>>, card: impl Fn(&T) -> C) -> Section<C> {
    if query.is_loading() {
        return Section::Loading;
    }
    match query.items() {
        [] => Section::Empty,
        items => Section::Populated(items.iter().map(card).collect()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lingo_client::testing::{outgoing_to, user, FakeApi};
    use lingo_client::{QueryClient, QueryKey};
    use lingo_common::UserId;
    use tokio::runtime::Handle;
    use super::*;

    async fn mounted(api: FakeApi) -> (Arc<FakeApi>, QueryClient<FakeApi>, HomePage) {
        let api = Arc::new(api);
        let mut client = QueryClient::new(api.clone(), Handle::current());
        let mut page = HomePage::new();
        client.mount();
        client.settle().await;
        page.sync(client.cache());
        (api, client, page)
    }

    fn recommended(view: &HomeView) -> &[RecommendedCard] {
        match &view.recommended {
            Section::Populated(cards) => cards,
            other => panic!("expected recommended cards, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sections_show_loading_before_responses() {
        let api = Arc::new(FakeApi::new());
        let mut client = QueryClient::new(api, Handle::current());
        client.mount();
        let view = HomePage::new().view(client.cache(), client.mutation());
        assert_eq!(view.friends, Section::Loading);
        assert_eq!(view.recommended, Section::Loading);
    }

    #[tokio::test]
    async fn no_friends_and_one_fresh_recommendation() {
        let (_, client, page) = mounted(FakeApi::new().with_users(vec![user("u1", "Ana", "es", "en")])).await;
        let view = page.view(client.cache(), client.mutation());

        assert_eq!(view.friends, Section::Empty);
        let cards = recommended(&view);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, UserId::new("u1"));
        assert!(!cards[0].button.disabled);
        assert_eq!(cards[0].button.label(), "Send Friend Request");
    }

    #[tokio::test]
    async fn already_requested_user_is_disabled() {
        let api = FakeApi::new()
            .with_users(vec![user("u1", "Ana", "es", "en"), user("u2", "Bo", "en", "de")])
            .with_outgoing(vec![outgoing_to("u1")]);
        let (_, client, page) = mounted(api).await;
        assert_eq!(page.outgoing().len(), 1);
        assert!(page.outgoing().contains(UserId::new("u1")));

        let view = page.view(client.cache(), client.mutation());
        let cards = recommended(&view);
        assert!(cards[0].button.disabled);
        assert_eq!(cards[0].button.label(), "Request Sent");
        assert!(!cards[1].button.disabled);
    }

    #[tokio::test]
    async fn every_button_disabled_while_request_pending() {
        let api = FakeApi::new().with_users(vec![user("u1", "Ana", "es", "en"), user("u2", "Bo", "en", "de")]);
        let (_, mut client, mut page) = mounted(api).await;

        client.send_friend_request(UserId::new("u1"));
        let view = page.view(client.cache(), client.mutation());
        assert!(recommended(&view).iter().all(|card| card.button.disabled));
        assert!(recommended(&view).iter().all(|card| card.button.label() == "Send Friend Request"));

        client.settle().await;
        assert!(page.sync(client.cache()));
        let view = page.view(client.cache(), client.mutation());
        let cards = recommended(&view);
        assert_eq!(cards[0].button.label(), "Request Sent");
        assert!(cards[0].button.disabled);
        assert!(!cards[1].button.disabled);
    }

    #[tokio::test]
    async fn sync_runs_only_when_outgoing_changes() {
        let (_, mut client, mut page) = mounted(FakeApi::new().with_outgoing(vec![outgoing_to("u1")])).await;
        assert!(!page.sync(client.cache()));

        client.invalidate(QueryKey::Friends);
        client.settle().await;
        assert!(!page.sync(client.cache()));
    }

    #[tokio::test]
    async fn emptied_outgoing_requests_keep_stale_index() {
        let api = FakeApi::new()
            .with_users(vec![user("u1", "Ana", "es", "en")])
            .with_outgoing(vec![outgoing_to("u1")]);
        let (api, mut client, mut page) = mounted(api).await;

        api.clear_outgoing();
        client.invalidate(QueryKey::OutgoingFriendReqs);
        client.settle().await;
        assert!(client.cache().outgoing_friend_reqs().items().is_empty());

        assert!(!page.sync(client.cache()));
        assert!(page.outgoing().contains(UserId::new("u1")));
        let view = page.view(client.cache(), client.mutation());
        assert_eq!(recommended(&view)[0].button.label(), "Request Sent");
    }

    #[tokio::test]
    async fn failed_fetches_fall_back_to_empty_sections() {
        let api = FakeApi::new().with_users(vec![user("u1", "Ana", "es", "en")]);
        api.fail_queries(true);
        let (_, client, page) = mounted(api).await;
        let view = page.view(client.cache(), client.mutation());
        assert_eq!(view.friends, Section::Empty);
        assert_eq!(view.recommended, Section::Empty);
        assert!(page.outgoing().is_empty());
    }
}
