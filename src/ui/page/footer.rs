// SPDX-License-Identifier: MPL-2.0
//! Page footer: copyright line and social icons.

use super::frame::SectionContext;
use super::layout::FOOTER_HEIGHT;
use super::Message;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use chrono::Datelike;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Vector};
use std::time::Duration;

/// Copyright line for `year`.
#[must_use]
pub fn copyright(ctx: &SectionContext<'_>, year: i32) -> String {
    let year = year.to_string();
    ctx.i18n.tr_with_args(
        "footer-copyright",
        &[
            ("year", year.as_str()),
            ("name", ctx.portfolio.profile.name.as_str()),
        ],
    )
}

#[must_use]
pub fn settle_span(reduce_motion: bool) -> Duration {
    Transition::section(reduce_motion, Duration::ZERO).total()
}

pub fn view<'a>(ctx: &SectionContext<'a>, reveal: Reveal) -> Element<'a, Message> {
    let pose = ctx.pose(reveal, &Transition::section(ctx.reduce_motion, Duration::ZERO));
    let alpha = pose.opacity;

    let icons_row = Row::with_children(ctx.portfolio.social.iter().map(|link| {
        button(icons::themed(
            icons::social(link.kind),
            sizing::ICON_SM,
            |c: &ColorScheme| c.text_secondary,
            alpha,
        ))
        .padding(spacing::XS)
        .style(styles::button::ghost(alpha))
        .on_press(Message::CopyLink(link.url.clone()))
        .into()
    }))
    .spacing(spacing::XS);

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons_row)
        .push(
            Text::new(copyright(ctx, chrono::Local::now().year()))
                .size(typography::CAPTION)
                .style(styles::text::muted(alpha)),
        );

    Container::new(posed(content, pose, Vector::ZERO))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(FOOTER_HEIGHT))
        .clip(true)
        .style(styles::container::band(false))
        .into()
}
