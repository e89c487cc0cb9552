// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Handlers receive an [`UpdateContext`] of disjoint borrows so the page can
//! be mutated while the shared page inputs stay readable.

use super::config::Config;
use super::view::PAGE_SCROLLABLE_ID;
use super::{page_env, persistence, Message, SCROLL_DURATION};
use crate::content::Portfolio;
use crate::i18n::fluent::I18n;
use crate::motion::{HostSnapshot, MotionBroadcaster, SystemHost};
use crate::navigation::{Fragment, Location, SectionId};
use crate::ui::chat;
use crate::ui::design_tokens::sizing;
use crate::ui::image_loader::{self, ImageLibrary};
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::page::{self, section_images, Page, PageEnv};
use crate::ui::scroll_to_top;
use crate::ui::state::{ScrollAnimation, ViewportState};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Rectangle, Size, Task};
use std::time::Instant;

/// Mutable view of the root state handed to every handler.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub portfolio: &'a Portfolio,
    pub theme_mode: &'a mut ThemeMode,
    pub motion: &'a mut MotionBroadcaster,
    pub host: &'a SystemHost,
    pub location: &'a mut Location,
    pub page: &'a mut Page,
    pub viewport: &'a mut ViewportState,
    pub scroll: &'a mut Option<ScrollAnimation>,
    pub navbar: &'a mut navbar::State,
    pub chat: &'a mut Option<chat::State>,
    pub scroll_to_top: &'a mut scroll_to_top::State,
    pub images: &'a mut ImageLibrary,
    pub portrait: Option<&'a str>,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Size,
    pub now: Instant,
}

impl<'a> UpdateContext<'a> {
    /// Page inputs. The returned borrows outlive `self`, so the page can be
    /// mutated while they are held.
    fn env(&self) -> PageEnv<'a> {
        page_env(self.i18n, self.portfolio, self.motion, self.now)
    }

    fn reduce_motion(&self) -> bool {
        self.motion.preference().should_reduce_motion()
    }
}

/// Mounts the page, starts the image loads and jumps to the initial anchor.
pub fn boot(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let env = ctx.env();
    let built = ctx.page.mount(ctx.location, &env);
    if !built.is_empty() {
        tracing::debug!(?built, "sections built at mount");
    }

    let target = ctx
        .location
        .fragment()
        .and_then(SectionId::from_fragment)
        .filter(|section| *section != SectionId::Home);

    match target {
        Some(section) => {
            let y = ctx.page.layout().scroll_target(section);
            jump(ctx, y)
        }
        None => sync_viewport(ctx),
    }
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    let env = ctx.env();
    let task = match ctx.page.update(message, &env) {
        page::Event::None => Task::none(),
        page::Event::Navigate(section) => navigate(ctx, section),
        page::Event::CopyLink(link) => copy_link(ctx, link),
        page::Event::ContactSubmitted(submission) => {
            tracing::info!(
                name = %submission.name,
                email = %submission.email,
                length = submission.message.len(),
                "contact form submitted"
            );
            ctx.notifications
                .push(Notification::success("notification-contact-sent"));
            Task::none()
        }
        page::Event::ContactRejected => {
            ctx.notifications
                .push(Notification::warning("notification-contact-invalid"));
            Task::none()
        }
    };
    Task::batch([task, request_images(ctx)])
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(ctx.navbar, message, ctx.now) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(section) => navigate(ctx, section),
        navbar::Event::ToggleTheme => {
            let next = ctx.theme_mode.toggled();
            *ctx.theme_mode = next;
            tracing::debug!(?next, "theme toggled");
            persistence::persist_theme(ctx.config, next, ctx.notifications);
            Task::none()
        }
    }
}

pub fn handle_chat_message(ctx: &mut UpdateContext<'_>, message: chat::Message) -> Task<Message> {
    let Some(state) = ctx.chat.as_mut() else {
        return Task::none();
    };
    match chat::update(state, message, ctx.now) {
        chat::Event::None => Task::none(),
        chat::Event::ReplyScheduled(delay) => Task::perform(chat::reply_after(delay), |()| {
            Message::Chat(chat::Message::ReplyReady)
        }),
    }
}

pub fn handle_scrolled(
    ctx: &mut UpdateContext<'_>,
    bounds: Rectangle,
    offset: AbsoluteOffset,
) -> Task<Message> {
    if !ctx.viewport.update(bounds, offset) {
        return Task::none();
    }
    if (ctx.page.metrics().window_width - bounds.width).abs() > 0.5 {
        let env = ctx.env();
        ctx.page.resize(bounds.width, &env);
    }
    sync_viewport(ctx)
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    ctx.viewport
        .resize(size.width, (size.height - sizing::HEADER_HEIGHT).max(0.0));
    let env = ctx.env();
    ctx.page.resize(size.width, &env);
    sync_viewport(ctx)
}

/// Advances the smooth scroll and expires toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);

    let Some(mut animation) = *ctx.scroll else {
        return Task::none();
    };
    if let Some(section) = animation.anchor() {
        animation.retarget(section_offset(ctx, section), now);
    }
    let (y, finished) = animation.sample(now);
    let task = jump(ctx, y);

    // Sections built by the jump may have pushed the anchor further down.
    let settled = match animation.anchor() {
        Some(section) => (section_offset(ctx, section) - y).abs() < 0.5,
        None => true,
    };
    *ctx.scroll = (!finished || !settled).then_some(animation);
    task
}

/// Reads the host off the UI thread.
pub fn handle_motion_poll(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let host = ctx.host.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || host.snapshot())
                .await
                .ok()
        },
        Message::MotionSampled,
    )
}

pub fn handle_motion_sampled(
    ctx: &mut UpdateContext<'_>,
    snapshot: Option<HostSnapshot>,
) -> Task<Message> {
    let Some(snapshot) = snapshot else {
        tracing::debug!("motion probe did not complete");
        return Task::none();
    };

    let mut changed = false;
    for event in snapshot.events() {
        changed |= ctx.motion.handle(event);
    }
    if changed && ctx.reduce_motion() {
        // Motion got reduced mid-scroll: land right away.
        if let Some(animation) = ctx.scroll.take() {
            let target = match animation.anchor() {
                Some(section) => section_offset(ctx, section),
                None => animation.target(),
            };
            return jump(ctx, target);
        }
    }
    Task::none()
}

/// Releases every listener, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.motion.deactivate();
    ctx.page.unmount();
    *ctx.scroll = None;
    tracing::info!("window closing, listeners released");
    window::close(id)
}

/// Scrolls the page to absolute offset `y`, smoothly unless motion should be
/// reduced.
pub fn scroll_to(ctx: &mut UpdateContext<'_>, y: f32) -> Task<Message> {
    let max = ctx.viewport.max_offset(ctx.page.layout().total_height());
    start_scroll(ctx, y.clamp(0.0, max), None)
}

/// Scrolls the page until `section` reaches the top of the viewport.
///
/// A smooth scroll follows the section while the sections above it are
/// built and grow.
pub fn scroll_to_section(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    let target = section_offset(ctx, section);
    start_scroll(ctx, target, Some(section))
}

fn start_scroll(
    ctx: &mut UpdateContext<'_>,
    target: f32,
    anchor: Option<SectionId>,
) -> Task<Message> {
    if ctx.reduce_motion() {
        *ctx.scroll = None;
        return jump(ctx, target);
    }

    let from = ctx
        .scroll
        .map_or(ctx.viewport.offset.y, |running| running.sample(ctx.now).0);
    let animation = ScrollAnimation::new(from, target, ctx.now, SCROLL_DURATION);
    *ctx.scroll = Some(match anchor {
        Some(section) => animation.toward(section),
        None => animation,
    });
    Task::none()
}

/// Current reachable offset of `section` in the page layout.
fn section_offset(ctx: &UpdateContext<'_>, section: SectionId) -> f32 {
    let layout = ctx.page.layout();
    let max = ctx.viewport.max_offset(layout.total_height());
    layout.scroll_target(section).clamp(0.0, max)
}

/// Moves the location to `section`, then scrolls there.
fn navigate(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    let fragment = Fragment::from(section);
    if ctx.location.navigate(fragment.clone()) {
        let env = ctx.env();
        let built = ctx.page.fragment_changed(&fragment, &env);
        tracing::debug!(%fragment, ?built, "fragment changed");
    }
    Task::batch([scroll_to_section(ctx, section), request_images(ctx)])
}

fn copy_link(ctx: &mut UpdateContext<'_>, link: String) -> Task<Message> {
    ctx.notifications.push(
        Notification::info("notification-link-copied").with_arg("link", link.clone()),
    );
    iced::clipboard::write(link)
}

/// Puts the page at offset `y` immediately.
fn jump(ctx: &mut UpdateContext<'_>, y: f32) -> Task<Message> {
    let total = ctx.page.layout().total_height();
    let y = y.clamp(0.0, ctx.viewport.max_offset(total));
    ctx.viewport.offset = AbsoluteOffset { x: 0.0, y };
    let relative = ctx.viewport.relative_offset_for(y, total);

    Task::batch([
        operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), relative),
        sync_viewport(ctx),
    ])
}

/// Feeds the visible band to the page and the scroll-to-top button.
fn sync_viewport(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(span) = ctx.viewport.visible_span() {
        let env = ctx.env();
        let built = ctx.page.observe(span, &env);
        if !built.is_empty() {
            tracing::debug!(?built, top = span.top, "sections scrolled into view");
        }
    }
    ctx.scroll_to_top.scrolled(ctx.viewport.offset.y, ctx.now);
    request_images(ctx)
}

/// Starts loading the portrait and the images of every built section.
///
/// Sources already requested are skipped by the library.
fn request_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let portfolio = ctx.portfolio;
    let mut sources: Vec<&str> = ctx.portrait.into_iter().collect();
    for section in SectionId::LAZY {
        if ctx.page.is_built(section) {
            sources.extend(section_images(portfolio, section));
        }
    }

    Task::batch(sources.into_iter().filter_map(|source| {
        let path = ctx.images.request(source)?;
        let source = source.to_string();
        Some(Task::perform(image_loader::decode(path), move |result| {
            Message::ImageLoaded { source, result }
        }))
    }))
}
