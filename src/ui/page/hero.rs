// SPDX-License-Identifier: MPL-2.0
//! Hero: name, title, tagline, call-to-action buttons and portrait.
//!
//! The hero is never gated; its transitions start when the window opens.

use super::frame::{band, Measure, SectionContext};
use super::layout::{text_height, Metrics, BLOCK_RESERVE, TEXT_RESERVE};
use super::Message;
use crate::navigation::SectionId;
use crate::ui::animation::{posed, Pose, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::image_loader;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Vector};
use std::time::Duration;

/// Text column narrower than this stacks its buttons.
const STACK_BUTTONS_BELOW: f32 = 480.0;

fn text_width(metrics: &Metrics) -> f32 {
    if metrics.split() {
        (metrics.content_width - sizing::PORTRAIT - spacing::XXL).max(1.0)
    } else {
        metrics.content_width
    }
}

fn buttons_height(text_width: f32) -> f32 {
    let buttons = if text_width < STACK_BUTTONS_BELOW {
        3.0 * sizing::BUTTON_HEIGHT + 2.0 * spacing::XS
    } else {
        sizing::BUTTON_HEIGHT
    };
    buttons + 2.0 * BLOCK_RESERVE
}

#[must_use]
pub fn height(m: &Measure) -> f32 {
    let metrics = m.metrics;
    let width = text_width(&metrics);
    let profile = &m.portfolio.profile;

    let text_block = text_height(&profile.name, typography::DISPLAY, width)
        + text_height(&profile.title, typography::TITLE_MD, width)
        + text_height(&profile.tagline, typography::BODY_LG, width)
        + 6.0 * TEXT_RESERVE
        + buttons_height(width)
        + 3.0 * spacing::MD;

    let body = if metrics.split() {
        text_block.max(sizing::PORTRAIT)
    } else {
        sizing::PORTRAIT + spacing::XL + text_block
    };
    2.0 * metrics.section_padding() + body
}

/// Time until every hero element rests.
#[must_use]
pub fn settle_span(reduce_motion: bool) -> Duration {
    portrait_transition(reduce_motion)
        .total()
        .max(button_transition(reduce_motion, 2).total())
}

fn portrait_transition(reduce_motion: bool) -> Transition {
    if reduce_motion {
        Transition::card(true, Duration::from_millis(200))
    } else {
        Transition::new(
            Pose::faded(0.0).with_scale(0.9),
            Duration::from_millis(600),
            Duration::from_millis(200),
        )
    }
}

fn button_transition(reduce_motion: bool, index: usize) -> Transition {
    Transition::section(
        reduce_motion,
        Duration::from_millis(300 + 100 * index as u64),
    )
}

pub fn view<'a>(
    ctx: &SectionContext<'a>,
    reveal: Reveal,
    portrait: Option<&'a str>,
    height: f32,
) -> Element<'a, Message> {
    let profile = &ctx.portfolio.profile;
    let width = text_width(&ctx.metrics);
    let text_pose = |delay_ms: u64| {
        ctx.pose(
            reveal,
            &Transition::text(ctx.reduce_motion, Duration::from_millis(delay_ms)),
        )
    };

    let name_pose = text_pose(0);
    let title_pose = text_pose(100);
    let tagline_pose = text_pose(200);
    let reserve = Vector::new(0.0, TEXT_RESERVE);

    let mut text_column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(posed(
            Text::new(profile.name.clone())
                .size(typography::DISPLAY)
                .style(styles::text::primary(name_pose.opacity)),
            name_pose,
            reserve,
        ))
        .push(posed(
            Text::new(profile.title.clone())
                .size(typography::TITLE_MD)
                .style(styles::text::secondary(title_pose.opacity)),
            title_pose,
            reserve,
        ))
        .push(posed(
            Text::new(profile.tagline.clone())
                .size(typography::BODY_LG)
                .style(styles::text::secondary(tagline_pose.opacity)),
            tagline_pose,
            reserve,
        ));

    let mut actions: Vec<Element<'a, Message>> = vec![
        call_to_action(
            ctx,
            reveal,
            0,
            ctx.i18n.tr("hero-contact"),
            true,
            Message::Navigate(SectionId::Contact),
        ),
        call_to_action(
            ctx,
            reveal,
            1,
            ctx.i18n.tr("hero-projects"),
            false,
            Message::Navigate(SectionId::Projects),
        ),
    ];
    if let Some(resume) = profile.resume_url.as_deref().filter(|url| !url.trim().is_empty()) {
        actions.push(call_to_action(
            ctx,
            reveal,
            2,
            ctx.i18n.tr("hero-resume"),
            false,
            Message::CopyLink(resume.to_string()),
        ));
    }

    let buttons: Element<'a, Message> = if width < STACK_BUTTONS_BELOW {
        Column::with_children(actions).spacing(spacing::XS).into()
    } else {
        Row::with_children(actions).spacing(spacing::SM).into()
    };
    text_column = text_column.push(buttons);

    let portrait_pose = ctx.pose(reveal, &portrait_transition(ctx.reduce_motion));
    let portrait = Container::new(posed(
        image_loader::view(
            ctx.images.state(portrait),
            Length::Fill,
            sizing::PORTRAIT,
            icons::user(),
            portrait_pose.opacity,
        ),
        portrait_pose,
        Vector::ZERO,
    ))
    .width(Length::Fixed(sizing::PORTRAIT))
    .height(Length::Fixed(sizing::PORTRAIT));

    let content: Element<'a, Message> = if ctx.metrics.split() {
        Row::new()
            .spacing(spacing::XXL)
            .align_y(alignment::Vertical::Center)
            .push(text_column)
            .push(portrait)
            .into()
    } else {
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(portrait)
            .push(text_column)
            .into()
    };

    band(content, &ctx.metrics, height, false)
}

fn call_to_action<'a>(
    ctx: &SectionContext<'a>,
    reveal: Reveal,
    index: usize,
    label: String,
    primary: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let pose = ctx.pose(reveal, &button_transition(ctx.reduce_motion, index));
    let alpha = pose.opacity;

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if index == 2 {
        content = content.push(icons::themed(
            icons::download(),
            sizing::ICON_SM,
            |c: &ColorScheme| c.text_primary,
            alpha,
        ));
    }
    content = content.push(Text::new(label).size(typography::BODY));

    let base = if primary {
        button(content).style(styles::button::primary(alpha))
    } else {
        button(content).style(styles::button::outline(alpha))
    };

    let widget = base
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(on_press);

    Container::new(posed(widget, pose, Vector::new(0.0, BLOCK_RESERVE)))
        .width(Length::Shrink)
        .into()
}
