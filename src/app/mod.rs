// SPDX-License-Identifier: MPL-2.0
//! Application root state and the main update loop.
//!
//! The `App` struct wires together the catalog, the navigation cursor, and
//! localization, and translates messages into cursor updates. Policy
//! decisions (window sizing, locale resolution, theme selection) are kept
//! close to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::navigation::NavigationState;
use crate::ui::controls;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    catalog: Catalog,
    navigation: NavigationState,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.navigation.current_index())
            .field("artwork_count", &self.catalog.count())
            .finish()
    }
}

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
        let catalog = Catalog::builtin().expect("embedded gallery manifest is valid");
        let navigation = NavigationState::new(catalog.count());
        Self {
            i18n: I18n::default(),
            catalog,
            navigation,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the persisted
    /// configuration. The cursor always starts on the first artwork;
    /// position is deliberately not remembered across runs.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("{warning}");
        }

        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.general.theme_mode;

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let artwork = self.catalog.get(self.navigation.current_index());
        format!("{} - {}", artwork.title(), app_name)
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(controls::Message::Previous) => {
                self.navigation.retreat();
            }
            Message::Controls(controls::Message::Next) => {
                self.navigation.advance();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            current_index: self.navigation.current_index(),
        })
    }
}
