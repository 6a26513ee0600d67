use egui::{Align2, Color32, FontId, Margin, RichText, Sense, Ui};
use lingo_common::{Url, UserId};
use crate::cards::{ButtonIcon, FriendCard, LanguageBadge, RecommendedCard};
use crate::home::{self, HomeView, Section};

const CARD_WIDTH: f32 = 230.0;
const AVATAR_SIZE: f32 = 48.0;

/// Draws the whole page. Returns the user whose request button was clicked.
pub fn home_page(ui: &mut Ui, view: &HomeView) -> Option<UserId> {
    ui.heading(RichText::new(home::FRIENDS_HEADING).size(26.0).strong());
    ui.add_space(8.0);
    section(ui, &view.friends, (home::NO_FRIENDS_TITLE, home::NO_FRIENDS_TEXT), |ui, card| {
        friend_card(ui, card);
        None
    });

    ui.add_space(24.0);
    ui.heading(RichText::new(home::RECOMMENDED_HEADING).size(26.0).strong());
    ui.label(RichText::new(home::RECOMMENDED_SUBTITLE).weak());
    ui.add_space(8.0);
    section(
        ui,
        &view.recommended,
        (home::NO_RECOMMENDATIONS_TITLE, home::NO_RECOMMENDATIONS_TEXT),
        recommended_card,
    )
}

fn section<T>(
    ui: &mut Ui,
    section: &Section<T>,
    (title, text): (&str, &str),
    mut card: impl FnMut(&mut Ui, &T) -> Option<UserId>,
) -> Option<UserId> {
    match section {
        Section::Loading => {
            ui.vertical_centered(|ui| ui.add(egui::Spinner::new().size(32.0)));
            None
        }
        Section::Empty => {
            egui::Frame::group(ui.style()).inner_margin(16.0).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).strong().size(18.0));
                    ui.label(RichText::new(text).weak());
                });
            });
            None
        }
        Section::Populated(cards) => {
            let mut clicked = None;
            ui.horizontal_wrapped(|ui| {
                for item in cards {
                    if let Some(user) = card(ui, item) {
                        clicked = Some(user);
                    }
                }
            });
            clicked
        }
    }
}

fn card_frame<R>(ui: &mut Ui, contents: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .rounding(10.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(contents).inner
        })
        .inner
}

fn friend_card(ui: &mut Ui, card: &FriendCard) {
    ui.push_id(&card.id, |ui| card_frame(ui, |ui| {
        ui.horizontal(|ui| {
            avatar(ui, &card.name, &card.avatar);
            ui.label(RichText::new(&card.name).strong().size(16.0));
        });
        ui.horizontal_wrapped(|ui| {
            badge(ui, &card.native, true);
            badge(ui, &card.learning, false);
        });
    }));
}

fn recommended_card(ui: &mut Ui, card: &RecommendedCard) -> Option<UserId> {
    ui.push_id(&card.id, |ui| card_frame(ui, |ui| {
        ui.horizontal(|ui| {
            avatar(ui, &card.name, &card.avatar);
            ui.vertical(|ui| {
                ui.label(RichText::new(&card.name).strong().size(16.0));
                if let Some(location) = &card.location {
                    ui.label(RichText::new(format!("📍 {location}")).small().weak());
                }
            });
        });
        ui.horizontal_wrapped(|ui| {
            badge(ui, &card.native, true);
            badge(ui, &card.learning, false);
        });
        if let Some(bio) = &card.bio {
            ui.label(RichText::new(bio).weak());
        }

        let icon = match card.button.icon() {
            ButtonIcon::CheckCircle => "✔",
            ButtonIcon::UserPlus => "➕",
        };
        let button = egui::Button::new(format!("{icon} {}", card.button.label()))
            .min_size(egui::vec2(CARD_WIDTH, 28.0));
        ui.add_enabled(!card.button.disabled, button)
            .clicked()
            .then(|| card.id.clone())
    }))
    .inner
}

// No image loading here; a colored initial stands in and the url shows on hover.
fn avatar(ui: &mut Ui, name: &str, url: &Url) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), AVATAR_SIZE / 2.0, avatar_color(url));
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    painter.text(rect.center(), Align2::CENTER_CENTER, initial, FontId::proportional(20.0), Color32::WHITE);
    response.on_hover_text(url.as_str());
}

fn avatar_color(url: &Url) -> Color32 {
    let hash = url.as_str().bytes().fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(byte as u32));
    let [r, g, b, _] = hash.to_le_bytes();
    Color32::from_rgb(r / 2 + 64, g / 2 + 64, b / 2 + 64)
}

fn badge(ui: &mut Ui, badge: &LanguageBadge, filled: bool) {
    let visuals = ui.visuals();
    let mut frame = egui::Frame::none()
        .rounding(8.0)
        .inner_margin(Margin::symmetric(6.0, 2.0));
    frame = if filled {
        frame.fill(visuals.selection.bg_fill)
    } else {
        frame.stroke(visuals.widgets.noninteractive.bg_stroke)
    };
    frame.show(ui, |ui| {
        let flag = badge.flag.map(|flag| flag.emoji() + " ").unwrap_or_default();
        let label = ui.label(RichText::new(format!("{flag}{}", badge.label)).small());
        if let Some(flag) = badge.flag {
            label.on_hover_text(flag.image_url());
        }
    });
}
