mod cards;
mod config;
mod home;
mod language;
mod theme;
mod widgets;

use std::sync::Arc;
use anyhow::{anyhow, Result};
use eframe::{egui, Frame};
use eframe::emath::Align2;
use egui::{Context, WidgetText};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use lingo_client::{HttpApi, Notice, QueryClient};
use crate::config::Config;
use crate::home::HomePage;
use crate::theme::{Theme, THEMES};

const FALLBACK_THEME: &str = "dark";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load();
    let theme = theme::find(&config.theme).or_else(|err| {
        warn!(%err, "falling back to {FALLBACK_THEME}");
        theme::find(FALLBACK_THEME)
    })?;
    let api = Arc::new(HttpApi::new(config.api_url.clone())?);
    info!(api = %config.api_url, theme = theme.name(), "starting");

    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();
    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1100.0, 760.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Lingo Exchange",
        options,
        Box::new(move |cc| Box::new(LingoApp::new(&cc.egui_ctx, api, handle, theme))),
    )
    .map_err(|err| anyhow!("ui exited with an error: {err}"))?;
    Ok(())
}

struct LingoApp {
    queries: QueryClient<HttpApi>,
    home: HomePage,
    theme: Theme,
    toasts: Toasts,
}

impl LingoApp {
    pub fn new(ctx: &Context, api: Arc<HttpApi>, runtime: Handle, theme: Theme) -> Self {
        let mut toasts = Toasts::new()
            .anchor(Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);
        if let Err(err) = theme.apply(ctx) {
            add_toast(&mut toasts, ToastKind::Error, err.to_string());
        }
        let repaint = ctx.clone();
        let mut queries = QueryClient::new(api, runtime).with_notifier(move || repaint.request_repaint());
        queries.mount();
        Self {
            queries,
            home: HomePage::new(),
            theme,
            toasts,
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::QueryFailed { key, message } => {
                add_toast(&mut self.toasts, ToastKind::Error, format!("Could not load {}: {message}", key.as_str()));
            }
            Notice::RequestSent { .. } => {
                add_toast(&mut self.toasts, ToastKind::Success, String::from("Friend request sent"));
            }
            Notice::RequestFailed { message, .. } => {
                add_toast(&mut self.toasts, ToastKind::Error, message);
            }
        }
    }

    fn theme_picker(&mut self, ui: &mut egui::Ui) {
        let mut selected = self.theme;
        egui::ComboBox::from_label("Theme")
            .selected_text(selected.name())
            .show_ui(ui, |ui| {
                for theme in THEMES {
                    ui.selectable_value(&mut selected, *theme, theme.name());
                }
            });
        if selected != self.theme {
            match selected.apply(ui.ctx()) {
                Ok(()) => self.theme = selected,
                Err(err) => add_toast(&mut self.toasts, ToastKind::Error, err.to_string()),
            }
        }
    }
}

fn add_toast(toasts: &mut Toasts, kind: ToastKind, text: String) {
    toasts.add(Toast {
        kind,
        text: WidgetText::from(text),
        options: ToastOptions::default()
            .duration_in_seconds(3.0)
            .show_progress(true)
            .show_icon(true),
    });
}

impl eframe::App for LingoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        for notice in self.queries.poll() {
            self.notify(notice);
        }
        if self.home.sync(self.queries.cache()) {
            debug!(requested = self.home.outgoing().len(), "outgoing index rebuilt");
        }
        let view = self.home.view(self.queries.cache(), self.queries.mutation());

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Lingo Exchange");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| self.theme_picker(ui));
            });
        });
        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                clicked = widgets::home_page(ui, &view);
            });
        });
        if let Some(user) = clicked {
            self.queries.send_friend_request(user);
        }
        self.toasts.show(ctx);
    }
}
