// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the catalog lifecycle to the page view and
//! translates card pointer messages into per-card tilt updates. The one
//! catalog request is issued here, at construction time, and never
//! re-issued; its completion is paired with a request id so a stale result
//! can never mutate state that stopped expecting it.

use crate::catalog::{self, CatalogState, ServiceItem};
use crate::config;
use crate::error::FetchError;
use crate::ui::catalog::{self as page, card};
use crate::ui::tilt::TiltState;
use iced::{time, window, Element, Subscription, Task, Theme};

/// Root Iced application state.
pub struct App {
    catalog: CatalogState,
    /// One tilt per rendered card, same order as the loaded items.
    tilts: Vec<TiltState>,
    api_base: String,
    /// Spinner angle in radians, advanced by the tick subscription.
    spinner_rotation: f32,
}

/// Top-level messages consumed by [`App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    /// Completion of the startup fetch; `request_id` pairs it with the
    /// request that is still outstanding.
    ServicesLoaded {
        request_id: u64,
        result: Result<Vec<ServiceItem>, FetchError>,
    },
    Tick(std::time::Instant), // Spinner animation while loading
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional API base URL override (e.g. `http://localhost:5000`).
    pub api_base: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Spinner angular velocity in radians per tick.
const SPINNER_STEP: f32 = 0.25;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            catalog: CatalogState::default(),
            tilts: Vec::new(),
            api_base: config::DEFAULT_API_BASE_URL.to_string(),
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the one catalog fetch.
    ///
    /// The base URL resolves in priority order: CLI flag, `settings.toml`,
    /// built-in default.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let cfg = config::load().unwrap_or_default();

        let app = App {
            api_base: flags
                .api_base
                .unwrap_or_else(|| cfg.api_base().to_string()),
            ..Self::default()
        };

        let request_id = app.catalog.request_id;
        let base = app.api_base.clone();
        let task = Task::perform(
            async move { catalog::fetch::fetch_services(&base).await },
            move |result| Message::ServicesLoaded { request_id, result },
        );

        (app, task)
    }

    fn title(&self) -> String {
        "ServiceDeck".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        // The spinner only animates while the request is in flight.
        if self.catalog.fetch.is_loading() {
            time::every(std::time::Duration::from_millis(16)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ServicesLoaded { request_id, result } => {
                if self.catalog.apply(request_id, result) {
                    let count = self.catalog.fetch.items().map_or(0, <[_]>::len);
                    self.tilts = vec![TiltState::default(); count];
                }
                Task::none()
            }
            Message::Page(page::Message::Card(card::Message::PointerMoved {
                index,
                position,
            })) => {
                if let Some(tilt) = self.tilts.get_mut(index) {
                    tilt.track(position, card::SURFACE_SIZE);
                }
                Task::none()
            }
            Message::Page(page::Message::Card(card::Message::PointerExited { index })) => {
                if let Some(tilt) = self.tilts.get_mut(index) {
                    tilt.reset();
                }
                Task::none()
            }
            Message::Page(page::Message::CopyConsultationLink) => {
                iced::clipboard::write(page::CONSULTATION_URL.to_string())
            }
            Message::Tick(_instant) => {
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        page::view(page::ViewEnv {
            fetch: &self.catalog.fetch,
            tilts: &self.tilts,
            spinner_rotation: self.spinner_rotation,
        })
        .map(Message::Page)
    }
}
