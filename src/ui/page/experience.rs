// SPDX-License-Identifier: MPL-2.0
//! Experience timeline: one card per job along a vertical rule.

use super::frame::{band, header, header_height, section_height, Measure, SectionContext, HEADER_GAP};
use super::layout::{line_height, text_height};
use super::Message;
use crate::content::Job;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length, Vector};
use std::time::Duration;

const MARKER_WIDTH: f32 = 12.0;

/// Horizontal room kept free for the slide-in offset.
const SLIDE_RESERVE: f32 = 10.0;

const BULLET: &str = "•";

fn card_width(m: &Measure) -> f32 {
    (m.metrics.content_width - MARKER_WIDTH - spacing::MD - 2.0 * SLIDE_RESERVE).max(1.0)
}

fn highlight_width(card_width: f32) -> f32 {
    (card_width - 2.0 * spacing::LG - typography::BODY - spacing::XS).max(1.0)
}

fn job_height(job: &Job, width: f32) -> f32 {
    let inner = (width - 2.0 * spacing::LG).max(1.0);
    let highlights: f32 = job
        .highlights
        .iter()
        .map(|line| text_height(line, typography::BODY, highlight_width(width)))
        .sum::<f32>()
        + job.highlights.len().saturating_sub(1) as f32 * spacing::XXS;

    2.0 * spacing::LG
        + text_height(&job.role, typography::TITLE_SM, inner)
        + spacing::XXS
        + line_height(typography::BODY)
        + spacing::XXS
        + line_height(typography::CAPTION)
        + if job.highlights.is_empty() {
            0.0
        } else {
            spacing::SM + highlights
        }
}

#[must_use]
pub fn height(m: &Measure) -> f32 {
    let header = header_height(
        &m.i18n.tr("experience-title"),
        &m.i18n.tr("experience-subtitle"),
        m.metrics.content_width,
    );
    let width = card_width(m);
    let jobs = &m.portfolio.experience;
    let body = if jobs.is_empty() {
        line_height(typography::BODY)
    } else {
        jobs.iter().map(|job| job_height(job, width)).sum::<f32>()
            + (jobs.len() - 1) as f32 * spacing::LG
    };
    section_height(&m.metrics, header, body)
}

#[must_use]
pub fn settle_span(count: usize, reduce_motion: bool) -> Duration {
    Transition::timeline_item(reduce_motion, count.saturating_sub(1))
        .total()
        .max(Transition::text(reduce_motion, Duration::from_millis(100)).total())
}

pub fn view<'a>(ctx: &SectionContext<'a>, reveal: Reveal, height: f32) -> Element<'a, Message> {
    let measure = ctx.measure();
    let width = card_width(&measure);

    let mut body = Column::new()
        .width(Length::Fill)
        .push(header(
            ctx,
            reveal,
            ctx.i18n.tr("experience-title"),
            ctx.i18n.tr("experience-subtitle"),
        ))
        .push(Space::new().height(Length::Fixed(HEADER_GAP)));

    if ctx.portfolio.experience.is_empty() {
        body = body.push(
            Text::new(ctx.i18n.tr("experience-empty"))
                .size(typography::BODY)
                .style(styles::text::muted(1.0)),
        );
        return band(body, &ctx.metrics, height, false);
    }

    let mut timeline = Column::new().spacing(spacing::LG);
    for (index, job) in ctx.portfolio.experience.iter().enumerate() {
        let pose = ctx.pose(reveal, &Transition::timeline_item(ctx.reduce_motion, index));
        let entry_height = job_height(job, width);

        let marker = Column::new()
            .width(Length::Fixed(MARKER_WIDTH))
            .push(
                Container::new(Space::new())
                    .width(Length::Fixed(MARKER_WIDTH))
                    .height(Length::Fixed(MARKER_WIDTH))
                    .style(styles::container::badge(false, pose.opacity)),
            )
            .push(
                Container::new(
                    Container::new(Space::new())
                        .width(Length::Fixed(2.0))
                        .height(Length::Fill)
                        .style(styles::container::timeline_rule(pose.opacity)),
                )
                .center_x(Length::Fill)
                .height(Length::Fill),
            );

        let row = Row::new()
            .spacing(spacing::MD)
            .height(Length::Fixed(entry_height))
            .push(marker)
            .push(job_card(job, pose.opacity));

        timeline = timeline.push(posed(row, pose, Vector::new(SLIDE_RESERVE, 0.0)));
    }

    band(body.push(timeline), &ctx.metrics, height, false)
}

fn job_card<'a>(job: &'a Job, alpha: f32) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(job.role.as_str())
                .size(typography::TITLE_SM)
                .style(styles::text::primary(alpha)),
        )
        .push(
            Text::new(job.company.as_str())
                .size(typography::BODY)
                .style(styles::text::secondary(alpha)),
        )
        .push(
            Text::new(job.period.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted(alpha)),
        );

    if !job.highlights.is_empty() {
        let highlights = job.highlights.iter().map(|line| {
            Row::new()
                .spacing(spacing::XS)
                .push(
                    Text::new(BULLET)
                        .size(typography::BODY)
                        .width(Length::Fixed(typography::BODY))
                        .style(styles::text::muted(alpha)),
                )
                .push(
                    Text::new(line.as_str())
                        .size(typography::BODY)
                        .style(styles::text::secondary(alpha)),
                )
                .into()
        });
        column = column
            .push(Space::new().height(Length::Fixed(spacing::SM - spacing::XXS)))
            .push(Column::with_children(highlights).spacing(spacing::XXS));
    }

    Container::new(column)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::card(alpha))
        .into()
}
