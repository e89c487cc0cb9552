// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page and its chrome.
//!
//! The `App` struct owns the motion broadcaster, the navigation location and
//! the page with its lazy sections, and translates messages into side effects
//! like scrolling, image loading, clipboard writes or config persistence.

pub mod config;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::content::Portfolio;
use crate::i18n::fluent::I18n;
use crate::motion::{MotionBroadcaster, SystemHost};
use crate::navigation::{Fragment, Location, SectionId};
use crate::ui::chat;
use crate::ui::design_tokens::sizing;
use crate::ui::image_loader::ImageLibrary;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::page::{Page, PageEnv};
use crate::ui::scroll_to_top;
use crate::ui::state::{ScrollAnimation, ViewportState};
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state that bridges the page, its overlays,
/// localization and persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    portfolio: Portfolio,
    theme_mode: ThemeMode,
    motion: MotionBroadcaster,
    host: SystemHost,
    location: Location,
    page: Page,
    viewport: ViewportState,
    /// Smooth scroll in progress, if any.
    scroll: Option<ScrollAnimation>,
    navbar: navbar::State,
    /// `None` when the chat widget is disabled.
    chat: Option<chat::State>,
    scroll_to_top: scroll_to_top::State,
    images: ImageLibrary,
    /// Source of the hero portrait, if one is configured.
    portrait: Option<String>,
    notifications: notifications::Manager,
    window_size: Size,
    /// Frame time the view samples transitions at.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.location)
            .field("motion", &self.motion.preference())
            .field("window_size", &self.window_size)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Duration of an eased navigation scroll.
pub const SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot function; the flags are consumed once.
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

/// Shared inputs of the page derived from the root state.
fn page_env<'a>(
    i18n: &'a I18n,
    portfolio: &'a Portfolio,
    motion: &MotionBroadcaster,
    now: Instant,
) -> PageEnv<'a> {
    PageEnv {
        i18n,
        portfolio,
        reduce_motion: motion.preference().should_reduce_motion(),
        now,
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let host = SystemHost::new(config.motion.reduced_motion);
        Self::with_environment(flags, config, config_warning, host)
    }

    /// Initializes application state from an already loaded config and a
    /// host probe.
    fn with_environment(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
        host: SystemHost,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let now = Instant::now();

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }
        if let Some(key) = flags.content_warning {
            notifications.push(Notification::warning(key));
        }

        let mut motion = MotionBroadcaster::with_threshold(config.low_power_threshold());
        motion.activate(&host);

        let window_size = Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let page_height = (window_size.height - sizing::HEADER_HEIGHT).max(0.0);
        let page = {
            let env = page_env(&i18n, &flags.portfolio, &motion, now);
            Page::new(&config, &env, window_size.width)
        };

        let portrait = config
            .profile
            .portrait
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned())
            .or_else(|| flags.portfolio.profile.portrait.clone());
        let chat = config
            .chat
            .enabled
            .unwrap_or(true)
            .then(|| chat::State::new(Duration::from_millis(config.chat_reply_delay_ms())));

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            portfolio: flags.portfolio,
            motion,
            host,
            location: Location::new(flags.anchor.as_deref().and_then(Fragment::parse)),
            page,
            viewport: ViewportState::with_height(window_size.width, page_height),
            scroll: None,
            navbar: navbar::State::default(),
            chat,
            scroll_to_top: scroll_to_top::State::default(),
            images: ImageLibrary::new(),
            portrait,
            notifications,
            window_size,
            now,
        };

        let task = update::boot(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            portfolio: &self.portfolio,
            theme_mode: &mut self.theme_mode,
            motion: &mut self.motion,
            host: &self.host,
            location: &mut self.location,
            page: &mut self.page,
            viewport: &mut self.viewport,
            scroll: &mut self.scroll,
            navbar: &mut self.navbar,
            chat: &mut self.chat,
            scroll_to_top: &mut self.scroll_to_top,
            images: &mut self.images,
            portrait: self.portrait.as_deref(),
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
            now: self.now,
        }
    }

    fn reduce_motion(&self) -> bool {
        self.motion.preference().should_reduce_motion()
    }

    /// Whether any frame-driven animation is still running.
    fn is_animating(&self) -> bool {
        let reduce = self.reduce_motion();
        self.scroll.is_some()
            || self.page.is_animating(self.now)
            || self.navbar.is_animating(reduce, self.now)
            || self.scroll_to_top.is_animating(reduce, self.now)
            || self
                .chat
                .as_ref()
                .is_some_and(|chat| chat.is_animating(reduce, self.now))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let owner = &self.portfolio.profile.name;
        match self.page.current_section() {
            Some(section) if section != SectionId::Home => {
                let label = self.i18n.tr(section.label_key());
                format!("{label} - {owner} - {app_name}")
            }
            _ => format!("{owner} - {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let motion_sub = subscription::create_motion_subscription(
            self.motion.listeners().any(),
            self.config.poll_interval_secs(),
        );
        let tick_sub = subscription::create_tick_subscription(
            self.is_animating(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, motion_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Tick(now) => *now,
            _ => Instant::now(),
        };
        let mut ctx = self.update_context();

        match message {
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Chat(chat_message) => update::handle_chat_message(&mut ctx, chat_message),
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Scrolled { bounds, offset } => update::handle_scrolled(&mut ctx, bounds, offset),
            Message::ScrollToTop => update::scroll_to(&mut ctx, 0.0),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::MotionPoll => update::handle_motion_poll(&mut ctx),
            Message::MotionSampled(snapshot) => update::handle_motion_sampled(&mut ctx, snapshot),
            Message::ImageLoaded { source, result } => {
                ctx.images.finish(&source, result);
                Task::none()
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            env: page_env(&self.i18n, &self.portfolio, &self.motion, self.now),
            page: &self.page,
            images: &self.images,
            portrait: self.portrait.as_deref(),
            navbar: &self.navbar,
            chat: self.chat.as_ref(),
            scroll_to_top: &self.scroll_to_top,
            notifications: &self.notifications,
            owner: &self.portfolio.profile.name,
            window_width: self.window_size.width,
            dark: self.theme_mode.is_dark(),
        })
    }
}
