// SPDX-License-Identifier: MPL-2.0
//! Shared section chrome: the centered band, the title block and the
//! contexts section views receive.

use super::layout::{line_height, text_height, Metrics, BADGE_HEIGHT, CARD_LIFT, TEXT_RESERVE};
use super::CardRef;
use crate::content::Portfolio;
use crate::i18n::fluent::I18n;
use crate::ui::animation::{posed, Pose, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_loader::ImageLibrary;
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length, Vector};
use std::time::{Duration, Instant};

/// Gap between a section's title block and its body.
pub const HEADER_GAP: f32 = spacing::XL;

/// Inputs of the height functions.
#[derive(Clone, Copy)]
pub struct Measure<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub metrics: Metrics,
}

/// Inputs of the section views.
#[derive(Clone, Copy)]
pub struct SectionContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub images: &'a ImageLibrary,
    pub metrics: Metrics,
    pub reduce_motion: bool,
    pub now: Instant,
    pub hovered: Option<CardRef>,
}

impl<'a> SectionContext<'a> {
    #[must_use]
    pub fn measure(&self) -> Measure<'a> {
        Measure {
            i18n: self.i18n,
            portfolio: self.portfolio,
            metrics: self.metrics,
        }
    }

    /// Pose of `reveal` under `transition`.
    #[must_use]
    pub fn pose(&self, reveal: Reveal, transition: &Transition) -> Pose {
        reveal.pose(transition, self.now)
    }

    /// `pose` raised by the hover lift when `card` is under the cursor.
    /// Reduced motion keeps cards still.
    #[must_use]
    pub fn hover_pose(&self, card: CardRef, mut pose: Pose) -> Pose {
        if !self.reduce_motion && self.hovered == Some(card) {
            pose.offset.y -= CARD_LIFT;
        }
        pose
    }
}

/// Height of a title block whose text wraps within `width`.
#[must_use]
pub fn header_height(title: &str, subtitle: &str, width: f32) -> f32 {
    text_height(title, typography::TITLE_LG, width)
        + text_height(subtitle, typography::BODY_LG, width)
        + 4.0 * TEXT_RESERVE
        + spacing::XS
}

/// Full height of a section band holding a title block and `body`.
#[must_use]
pub fn section_height(metrics: &Metrics, header: f32, body: f32) -> f32 {
    2.0 * metrics.section_padding() + header + HEADER_GAP + body
}

/// Centered title and subtitle sliding in one after the other.
pub fn header<'a, Message: 'a>(
    ctx: &SectionContext<'a>,
    reveal: Reveal,
    title: String,
    subtitle: String,
) -> Element<'a, Message> {
    let title_pose = ctx.pose(reveal, &Transition::text(ctx.reduce_motion, Duration::ZERO));
    let subtitle_pose = ctx.pose(
        reveal,
        &Transition::text(ctx.reduce_motion, Duration::from_millis(100)),
    );

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(posed(
            Text::new(title)
                .size(typography::TITLE_LG)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .style(styles::text::primary(title_pose.opacity)),
            title_pose,
            Vector::new(0.0, TEXT_RESERVE),
        ))
        .push(posed(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .style(styles::text::secondary(subtitle_pose.opacity)),
            subtitle_pose,
            Vector::new(0.0, TEXT_RESERVE),
        ))
        .into()
}

/// Band of fixed `height` centering `content` within the content width.
pub fn band<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    metrics: &Metrics,
    height: f32,
    raised: bool,
) -> Element<'a, Message> {
    let inner = Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(inner)
        .center_x(Length::Fill)
        .height(Length::Fixed(height))
        .padding([metrics.section_padding(), metrics.gutter])
        .clip(true)
        .style(styles::container::band(raised))
        .into()
}

/// Pill with caption text.
pub fn badge<'a, Message: 'a>(label: String, outlined: bool, alpha: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::CAPTION)
            .style(styles::text::primary(alpha)),
    )
    .padding([spacing::XXS, spacing::XS])
    .height(Length::Fixed(BADGE_HEIGHT))
    .style(styles::container::badge(outlined, alpha))
    .into()
}

/// Height of a block of badges wrapped within `width`.
#[must_use]
pub fn badges_height<'a>(labels: impl IntoIterator<Item = &'a str>, width: f32) -> f32 {
    let rows = super::layout::chip_rows(labels, typography::CAPTION, spacing::XS, spacing::XS, width);
    if rows == 0 {
        0.0
    } else {
        rows as f32 * BADGE_HEIGHT + (rows - 1) as f32 * spacing::XS
    }
}

/// Heading line used inside sections.
#[must_use]
pub fn subheading_height() -> f32 {
    line_height(typography::TITLE_SM) + 2.0 * TEXT_RESERVE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn header_grows_when_subtitle_wraps() {
        let wide = header_height("About Me", "Short subtitle", 900.0);
        let narrow = header_height("About Me", &"long subtitle ".repeat(10), 300.0);
        assert!(narrow > wide);
    }

    #[test]
    fn section_height_adds_padding_and_gap() {
        let metrics = Metrics::new(1280.0);
        let height = section_height(&metrics, 100.0, 200.0);
        assert_abs_diff_eq!(height, 2.0 * spacing::SECTION + 100.0 + HEADER_GAP + 200.0);
    }

    #[test]
    fn hover_lifts_only_the_hovered_card_in_rich_motion() {
        let i18n = I18n::default();
        let portfolio = Portfolio::embedded().expect("embedded content");
        let images = ImageLibrary::new();
        let skill = CardRef {
            section: crate::navigation::SectionId::About,
            index: 1,
        };
        let mut ctx = SectionContext {
            i18n: &i18n,
            portfolio: &portfolio,
            images: &images,
            metrics: Metrics::new(1280.0),
            reduce_motion: false,
            now: Instant::now(),
            hovered: Some(skill),
        };

        assert_abs_diff_eq!(ctx.hover_pose(skill, Pose::REST).offset.y, -CARD_LIFT);
        let other = CardRef { index: 0, ..skill };
        assert_abs_diff_eq!(ctx.hover_pose(other, Pose::REST).offset.y, 0.0);

        ctx.reduce_motion = true;
        assert_abs_diff_eq!(ctx.hover_pose(skill, Pose::REST).offset.y, 0.0);
    }

    #[test]
    fn empty_badge_block_has_no_height() {
        assert_abs_diff_eq!(badges_height(std::iter::empty(), 300.0), 0.0);
        assert_abs_diff_eq!(badges_height(["Rust"], 300.0), BADGE_HEIGHT);
    }
}
