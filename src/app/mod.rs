// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the single toast [`Manager`] and mounts it on the
//! process-wide bridge for as long as the application lives, so screens and
//! background tasks can raise toasts with [`notifications::notify`] without
//! holding a reference to it.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::demo;
use crate::ui::notifications::{self, Bridge, Category, Manager};
use crate::ui::theming::ThemeMode;
use config::ToastConfig;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

const APP_NAME: &str = "Toast Showcase";

/// Root Iced application state.
pub struct App {
    notifications: Manager,
    bridge: Bridge,
    theme_mode: ThemeMode,
    toast_config: ToastConfig,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_toasts", &self.notifications.len())
            .field("mounted", &self.notifications.is_mounted())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and mounts the toast manager on `bridge`.
    pub fn with_bridge(config: &config::Config, bridge: Bridge) -> Self {
        let mut notifications = Manager::with_timings(config.toast.timings());
        notifications.mount(&bridge);

        Self {
            notifications,
            bridge,
            theme_mode: config.general.theme_mode,
            toast_config: config.toast.clone(),
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = Self::with_bridge(&config, notifications::bridge::global().clone());
        tracing::info!(
            timings = ?app.notifications.timings(),
            theme = ?app.theme_mode,
            "application started"
        );

        if let Some(warning) = config_warning {
            app.notifications.enqueue(warning, Category::Error);
        }

        (app, Task::none())
    }

    /// Read access to the toast queue.
    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => APP_NAME.to_string(),
            count => format!("{APP_NAME} ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.toast_config.frame_interval(),
            self.toast_config.idle_poll_interval(),
        )
    }

    /// Applies one message, then drains toast requests raised since the last
    /// update.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Demo(demo_message) => demo::update(demo_message, &self.bridge),
            Message::Tick(now) => {
                self.notifications.tick(now);
            }
        }

        self.notifications.pump();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifications: &self.notifications,
            top_inset: self.toast_config.top_inset(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn app() -> App {
        App::with_bridge(&config::Config::default(), Bridge::new())
    }

    #[test]
    fn app_mounts_its_bridge() {
        let app = app();
        assert!(app.bridge.is_mounted());
        assert!(app.notifications().is_empty());
    }

    #[test]
    fn demo_message_shows_toast_in_same_update() {
        let mut app = app();
        let _ = app.update(Message::Demo(demo::Message::ShowError));

        let entry = app.notifications().active().next().expect("toast shown");
        assert_eq!(entry.notification().category(), Category::Error);
        assert_eq!(entry.notification().message(), demo::ERROR_MESSAGE);
    }

    #[test]
    fn ticks_run_toasts_to_completion() {
        let mut app = app();
        let _ = app.update(Message::Demo(demo::Message::ShowSuccess));

        let start = Instant::now();
        let _ = app.update(Message::Tick(start));
        let total = app.notifications().timings().total();
        let _ = app.update(Message::Tick(start + total + Duration::from_millis(1)));

        assert!(app.notifications().is_empty());
    }

    #[test]
    fn title_counts_active_toasts() {
        let mut app = app();
        assert_eq!(app.title(), APP_NAME);

        let _ = app.update(Message::Demo(demo::Message::ShowBurst));
        assert_eq!(app.title(), format!("{APP_NAME} ({})", demo::BURST_SIZE));
    }

    #[test]
    fn dropping_app_unmounts_bridge() {
        let bridge = Bridge::new();
        let app = App::with_bridge(&config::Config::default(), bridge.clone());
        drop(app);

        assert!(!bridge.is_mounted());
    }

    #[test]
    fn configured_timings_reach_manager() {
        let mut config = config::Config::default();
        config.toast.hold_ms = Some(10);
        let app = App::with_bridge(&config, Bridge::new());

        assert_eq!(
            app.notifications().timings().hold,
            Duration::from_millis(10)
        );
    }
}
