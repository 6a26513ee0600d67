//! Display models for the two kinds of user card.

use lingo_common::non_api_structs::OutgoingRequestIndex;
use lingo_common::{Url, User, UserId};
use crate::language::{capitalize, flag_for, Flag};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageBadge {
    pub flag: Option<Flag>,
    pub label: String,
}

impl LanguageBadge {
    pub fn native(language: &str) -> Self {
        Self::new("Native", language)
    }

    pub fn learning(language: &str) -> Self {
        Self::new("Learning", language)
    }

    fn new(kind: &str, language: &str) -> Self {
        Self {
            flag: flag_for(language),
            label: format!("{kind}: {}", capitalize(language)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonIcon {
    UserPlus,
    CheckCircle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestButton {
    pub already_sent: bool,
    pub disabled: bool,
}

impl RequestButton {
    pub const SEND_LABEL: &'static str = "Send Friend Request";
    pub const SENT_LABEL: &'static str = "Request Sent";

    pub fn new(already_sent: bool, mutation_pending: bool) -> Self {
        Self {
            already_sent,
            disabled: already_sent || mutation_pending,
        }
    }

    pub fn label(&self) -> &'static str {
        if self.already_sent {
            Self::SENT_LABEL
        } else {
            Self::SEND_LABEL
        }
    }

    pub fn icon(&self) -> ButtonIcon {
        if self.already_sent {
            ButtonIcon::CheckCircle
        } else {
            ButtonIcon::UserPlus
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendCard {
    pub id: UserId,
    pub name: String,
    pub avatar: Url,
    pub native: LanguageBadge,
    pub learning: LanguageBadge,
}

impl FriendCard {
    pub fn new(friend: &User) -> Self {
        Self {
            id: friend.id.clone(),
            name: friend.full_name.clone(),
            avatar: friend.avatar_url(),
            native: LanguageBadge::native(&friend.native_language),
            learning: LanguageBadge::learning(&friend.learning_language),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendedCard {
    pub id: UserId,
    pub name: String,
    pub avatar: Url,
    pub location: Option<String>,
    pub native: LanguageBadge,
    pub learning: LanguageBadge,
    pub bio: Option<String>,
    pub button: RequestButton,
}

impl RecommendedCard {
    pub fn new(user: &User, outgoing: &OutgoingRequestIndex, mutation_pending: bool) -> Self {
        Self {
            id: user.id.clone(),
            name: user.full_name.clone(),
            avatar: user.avatar_url(),
            location: user.location().map(str::to_string),
            native: LanguageBadge::native(&user.native_language),
            learning: LanguageBadge::learning(&user.learning_language),
            bio: user.bio().map(str::to_string),
            button: RequestButton::new(outgoing.contains(&user.id), mutation_pending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_common::{FriendRequest, UserRef};

    fn ana() -> User {
        User {
            id: UserId::new("u1"),
            full_name: "Ana".to_string(),
            native_language: "es".to_string(),
            learning_language: "en".to_string(),
            location: Some(String::new()),
            bio: Some("Hola!".to_string()),
            ..Default::default()
        }
    }

    fn requested(id: &str) -> OutgoingRequestIndex {
        let mut index = OutgoingRequestIndex::new();
        let request = FriendRequest {
            recipient: UserRef::Id(UserId::new(id)),
            ..Default::default()
        };
        index.rebuild(Some(std::slice::from_ref(&request)));
        index
    }

    #[test]
    fn button_follows_membership_and_pending() {
        let open = RequestButton::new(false, false);
        assert!(!open.disabled);
        assert_eq!(open.label(), "Send Friend Request");
        assert_eq!(open.icon(), ButtonIcon::UserPlus);

        let sent = RequestButton::new(true, false);
        assert!(sent.disabled);
        assert_eq!(sent.label(), "Request Sent");
        assert_eq!(sent.icon(), ButtonIcon::CheckCircle);

        let busy = RequestButton::new(false, true);
        assert!(busy.disabled);
        assert_eq!(busy.label(), "Send Friend Request");
    }

    #[test]
    fn recommended_card_fields() {
        let card = RecommendedCard::new(&ana(), &OutgoingRequestIndex::new(), false);
        assert_eq!(card.name, "Ana");
        assert_eq!(card.avatar.as_str(), "https://i.pravatar.cc/150?u=u1");
        assert_eq!(card.location, None);
        assert_eq!(card.bio.as_deref(), Some("Hola!"));
        assert_eq!(card.native.label, "Native: Es");
        assert_eq!(card.native.flag, Some(Flag { country: "es" }));
        assert_eq!(card.learning.label, "Learning: En");
        assert_eq!(card.learning.flag, Some(Flag { country: "gb" }));
        assert!(!card.button.disabled);
    }

    #[test]
    fn recommended_card_marks_requested_user() {
        let card = RecommendedCard::new(&ana(), &requested("u1"), false);
        assert!(card.button.disabled);
        assert_eq!(card.button.label(), "Request Sent");

        let other = RecommendedCard::new(&ana(), &requested("u9"), false);
        assert!(!other.button.disabled);
    }

    #[test]
    fn friend_card_uses_profile_picture() {
        let mut friend = ana();
        friend.profile_pic = Some("https://img/ana.png".to_string());
        friend.native_language = "japanese".to_string();
        let card = FriendCard::new(&friend);
        assert_eq!(card.avatar.as_str(), "https://img/ana.png");
        assert_eq!(card.native.label, "Native: Japanese");
        assert_eq!(card.native.flag, Some(Flag { country: "jp" }));
    }
}
