// SPDX-License-Identifier: MPL-2.0
//! Floating chat widget with a local stand-in responder.
//!
//! The launcher sits in the bottom-right corner. While the window is closed
//! a welcome bubble is shown next to it on wide windows. Every visitor
//! message is answered with a canned reply after the configured delay.

use crate::i18n::fluent::I18n;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{breakpoint, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Vector};
use std::time::{Duration, Instant};

/// Slide distance kept inside the panel's reserve.
const PANEL_SLIDE: f32 = 24.0;

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatLine {
    Greeting,
    Visitor(String),
    Reply,
}

impl ChatLine {
    fn from_visitor(&self) -> bool {
        matches!(self, ChatLine::Visitor(_))
    }
}

#[derive(Debug, Clone)]
pub struct State {
    open: bool,
    reveal: Reveal,
    draft: String,
    lines: Vec<ChatLine>,
    pending_replies: usize,
    reply_delay: Duration,
}

impl State {
    #[must_use]
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            open: false,
            reveal: Reveal::default(),
            draft: String::new(),
            lines: vec![ChatLine::Greeting],
            pending_replies: 0,
            reply_delay,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn lines(&self) -> &[ChatLine] {
        &self.lines
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// A reply is on its way.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    #[must_use]
    pub fn is_animating(&self, reduce_motion: bool, now: Instant) -> bool {
        self.open
            && self
                .reveal
                .is_running(&Transition::chat_window(reduce_motion), now)
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// First name shown in the window title.
    pub owner: &'a str,
    pub window_width: f32,
    pub reduce_motion: bool,
    pub now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Close,
    DraftChanged(String),
    Send,
    ReplyReady,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// The parent must deliver [`Message::ReplyReady`] after the delay.
    ReplyScheduled(Duration),
}

pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::Toggle => {
            state.open = !state.open;
            if state.open {
                state.reveal.restart(now);
            }
            Event::None
        }
        Message::Close => {
            state.open = false;
            Event::None
        }
        Message::DraftChanged(draft) => {
            state.draft = draft;
            Event::None
        }
        Message::Send => {
            let text = state.draft.trim();
            if text.is_empty() {
                return Event::None;
            }
            state.lines.push(ChatLine::Visitor(text.to_string()));
            state.draft.clear();
            state.pending_replies += 1;
            Event::ReplyScheduled(state.reply_delay)
        }
        Message::ReplyReady => {
            if state.pending_replies > 0 {
                state.pending_replies -= 1;
                state.lines.push(ChatLine::Reply);
            }
            Event::None
        }
    }
}

/// Resolves after `delay`; the parent maps it to [`Message::ReplyReady`].
pub async fn reply_after(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Launcher, optional welcome bubble and the chat window, anchored
/// bottom-right over the page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let launcher = button(
        container(icons::themed(
            if ctx.state.open { icons::cross() } else { icons::bot() },
            sizing::ICON_LG,
            |c: &ColorScheme| c.on_accent,
            1.0,
        ))
        .center(Length::Fill),
    )
    .on_press(Message::Toggle)
    .width(Length::Fixed(sizing::FLOATING_BUTTON))
    .height(Length::Fixed(sizing::FLOATING_BUTTON))
    .style(styles::button::floating(1.0));

    let mut launcher_row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if !ctx.state.open && ctx.window_width >= breakpoint::MD {
        launcher_row = launcher_row.push(build_welcome(&ctx));
    }
    launcher_row = launcher_row.push(launcher);

    let mut stack = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Right);
    if ctx.state.open {
        stack = stack.push(build_window(&ctx));
    }
    stack = stack.push(launcher_row);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

fn build_welcome<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(ctx.i18n.tr("chat-welcome-title"))
                    .size(typography::BODY)
                    .style(styles::text::primary(1.0)),
            )
            .push(
                Text::new(ctx.i18n.tr("chat-welcome-body"))
                    .size(typography::CAPTION)
                    .style(styles::text::muted(1.0)),
            ),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::container::floating_panel(1.0))
    .into()
}

fn build_window<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pose = ctx
        .state
        .reveal
        .pose(&Transition::chat_window(ctx.reduce_motion), ctx.now);
    let alpha = pose.opacity;

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            container(icons::themed(
                icons::bot(),
                sizing::ICON_MD,
                |c: &ColorScheme| c.text_primary,
                alpha,
            ))
            .padding(spacing::XS)
            .style(styles::container::bubble(alpha)),
        )
        .push(
            Column::new()
                .width(Length::Fill)
                .push(
                    Text::new(ctx.i18n.tr_with_args("chat-title", &[("name", ctx.owner)]))
                        .size(typography::BODY)
                        .style(styles::text::primary(alpha)),
                )
                .push(
                    Text::new(ctx.i18n.tr("chat-subtitle"))
                        .size(typography::CAPTION)
                        .style(styles::text::muted(alpha)),
                ),
        )
        .push(
            button(icons::themed(
                icons::cross(),
                sizing::ICON_SM,
                |c: &ColorScheme| c.text_secondary,
                alpha,
            ))
            .on_press(Message::Close)
            .padding(spacing::XXS)
            .style(styles::button::ghost(alpha)),
        );

    let mut transcript = Column::new().spacing(spacing::XS).width(Length::Fill);
    for line in &ctx.state.lines {
        transcript = transcript.push(build_line(ctx.i18n, line));
    }
    if ctx.state.is_typing() {
        transcript = transcript.push(
            Text::new(ctx.i18n.tr("chat-typing"))
                .size(typography::CAPTION)
                .style(styles::text::muted(alpha)),
        );
    }

    let composer = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text_input(&ctx.i18n.tr("chat-input-placeholder"), &ctx.state.draft)
                .on_input(Message::DraftChanged)
                .on_submit(Message::Send)
                .padding(spacing::XS)
                .size(typography::BODY)
                .style(styles::text_input::field(false, alpha)),
        )
        .push(
            button(icons::themed(
                icons::send(),
                sizing::ICON_SM,
                |c: &ColorScheme| c.on_accent,
                alpha,
            ))
            .on_press(Message::Send)
            .padding(spacing::XS)
            .style(styles::button::primary(alpha)),
        );

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(
                scrollable(transcript)
                    .anchor_bottom()
                    .height(Length::Fill),
            )
            .push(composer),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::CHAT_WIDTH))
    .height(Length::Fixed(sizing::CHAT_HEIGHT))
    .style(styles::container::floating_panel(alpha));

    Container::new(posed(panel, pose, Vector::new(0.0, PANEL_SLIDE)))
        .width(Length::Fixed(sizing::CHAT_WIDTH))
        .into()
}

fn build_line<'a>(i18n: &I18n, line: &ChatLine) -> Element<'a, Message> {
    let body = match line {
        ChatLine::Greeting => i18n.tr("chat-greeting"),
        ChatLine::Visitor(text) => text.clone(),
        ChatLine::Reply => i18n.tr("chat-reply"),
    };
    let from_visitor = line.from_visitor();

    let bubble = Container::new(Text::new(body).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .max_width(sizing::CHAT_WIDTH * 0.75)
        .style(styles::container::chat_bubble(from_visitor));

    let row = if from_visitor {
        Row::new().push(Space::new().width(Length::Fill)).push(bubble)
    } else {
        Row::new().push(bubble).push(Space::new().width(Length::Fill))
    };
    row.width(Length::Fill).into()
}
