// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the upload and edit
//! screens.
//!
//! The `App` struct wires together the screens, localization, the thumbnail
//! backend and persisted state, and translates component events into side
//! effects such as backend calls, dialogs and toasts.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod submission;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::ThumbnailBackend;
use crate::domain::thumbnail::RequestId;
use crate::i18n::I18n;
use crate::ui::edit;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// The backend call of the submission currently in flight.
pub(crate) struct InFlight {
    request: RequestId,
    abort: AbortHandle,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    upload: upload::State,
    edit: edit::State,
    backend: Arc<dyn ThumbnailBackend>,
    in_flight: Option<InFlight>,
    theme_mode: ThemeMode,
    /// Delay between estimated progress steps.
    estimated_interval: Duration,
    /// Persisted application state (last open/save directories).
    app_state: persisted_state::AppState,
    state_dir: Option<PathBuf>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("state", self.upload.controller().state())
            .field("in_flight", &self.in_flight.as_ref().map(|f| f.request))
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
#[must_use]
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
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `flags` and pre-selects the CLI
    /// video if one was given.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            file_path,
            config,
            config_warning,
            state_dir,
            backend,
        } = flags;

        let (app_state, state_warning) = persisted_state::AppState::load_from(state_dir.clone());

        let mut app = App {
            i18n: I18n::new(lang, &config),
            screen: Screen::Upload,
            upload: upload::State::new(config.progress.policy()),
            edit: edit::State::default(),
            backend,
            in_flight: None,
            theme_mode: config.general.theme_mode,
            estimated_interval: config.progress.estimated_interval(),
            app_state,
            state_dir,
            notifications: notifications::Manager::new(),
        };

        for key in [config_warning, state_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        let task = match file_path {
            Some(path) => app.update(Message::Upload(upload::Message::FilesChosen(vec![path]))),
            None => Task::none(),
        };

        tracing::info!(locale = %app.i18n.current_locale(), "application started");
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match (self.screen, self.upload.controller().input()) {
            (Screen::Upload, Some(input)) => format!("{} - {app_name}", input.display_name()),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.screen),
            subscription::create_estimated_progress_subscription(
                self.upload.is_estimating(),
                self.estimated_interval,
            ),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            upload: &mut self.upload,
            edit: &mut self.edit,
            backend: &self.backend,
            in_flight: &mut self.in_flight,
            app_state: &mut self.app_state,
            state_dir: &self.state_dir,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Upload(upload_message) => update::handle_upload_message(&mut ctx, upload_message),
            Message::Edit(edit_message) => update::handle_edit_message(&mut ctx, edit_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FileDialogResult(paths) => update::handle_file_dialog_result(&mut ctx, paths),
            Message::DownloadDialogResult { path, image } => {
                update::handle_download_dialog_result(&mut ctx, path, image)
            }
            Message::DownloadCompleted(result) => update::handle_download_completed(&mut ctx, result),
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            upload: &self.upload,
            edit: &self.edit,
            notifications: &self.notifications,
        })
    }
}
