// SPDX-License-Identifier: MPL-2.0
//! About section: introduction, skills grid, technologies and education.

use super::frame::{
    badge, badges_height, band, header, header_height, section_height, subheading_height, Measure,
    SectionContext, HEADER_GAP,
};
use super::layout::{grid_height, line_height, text_height, Metrics, BLOCK_RESERVE, TEXT_RESERVE};
use super::{CardRef, Message};
use crate::content::{Portfolio, Skill};
use crate::navigation::SectionId;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Vector};
use std::time::Duration;

const LOWER_DELAY: Duration = Duration::from_millis(200);

fn intro(portfolio: &Portfolio) -> String {
    portfolio.profile.about.join("\n")
}

fn skill_card_height(m: &Measure) -> f32 {
    let columns = m.metrics.skill_columns();
    let inner = m.metrics.column_width(columns, spacing::LG) - 2.0 * spacing::LG;
    let tallest = m
        .portfolio
        .skills
        .iter()
        .map(|skill| {
            text_height(&skill.title, typography::TITLE_SM, inner)
                + spacing::XS
                + text_height(&skill.description, typography::BODY, inner)
        })
        .fold(0.0_f32, f32::max);

    2.0 * spacing::LG + sizing::ICON_LG + 2.0 * spacing::SM + spacing::SM + tallest
}

fn lower_column_width(metrics: &Metrics) -> f32 {
    if metrics.split() {
        metrics.column_width(2, spacing::XL)
    } else {
        metrics.content_width
    }
}

fn technologies_height(m: &Measure) -> f32 {
    let technologies = &m.portfolio.technologies;
    if technologies.is_empty() {
        return 0.0;
    }
    let width = lower_column_width(&m.metrics);
    subheading_height()
        + spacing::SM
        + badges_height(technologies.iter().map(String::as_str), width)
        + 2.0 * BLOCK_RESERVE
}

fn education_height(m: &Measure) -> f32 {
    let education = &m.portfolio.education;
    if education.is_empty() {
        return 0.0;
    }
    let width = lower_column_width(&m.metrics);
    let entries: f32 = education
        .iter()
        .map(|entry| {
            text_height(&entry.degree, typography::BODY_LG, width)
                + line_height(typography::BODY)
                + line_height(typography::CAPTION)
                + 2.0 * spacing::XXS
        })
        .sum();
    subheading_height()
        + spacing::SM
        + entries
        + (education.len() - 1) as f32 * spacing::MD
        + 2.0 * BLOCK_RESERVE
}

fn lower_height(m: &Measure) -> f32 {
    let technologies = technologies_height(m);
    let education = education_height(m);
    if m.metrics.split() {
        technologies.max(education)
    } else if technologies > 0.0 && education > 0.0 {
        technologies + spacing::XL + education
    } else {
        technologies + education
    }
}

fn skills_height(m: &Measure) -> f32 {
    grid_height(
        m.portfolio.skills.len(),
        m.metrics.skill_columns(),
        skill_card_height(m) + 2.0 * BLOCK_RESERVE,
        spacing::LG,
    )
}

#[must_use]
pub fn height(m: &Measure) -> f32 {
    let header = header_height(
        &m.i18n.tr("about-title"),
        &intro(m.portfolio),
        m.metrics.content_width,
    );
    let skills = skills_height(m);
    let lower = lower_height(m);
    let gap = if skills > 0.0 && lower > 0.0 {
        spacing::XXL
    } else {
        0.0
    };
    section_height(&m.metrics, header, skills + gap + lower)
}

/// Time until every element of the section rests.
#[must_use]
pub fn settle_span(portfolio: &Portfolio, reduce_motion: bool) -> Duration {
    let last_skill = portfolio.skills.len().saturating_sub(1);
    let last_badge = portfolio.technologies.len().saturating_sub(1);
    [
        Transition::text(reduce_motion, Duration::from_millis(100)).total(),
        Transition::skill(reduce_motion, last_skill).total(),
        LOWER_DELAY + Transition::badge(last_badge).total(),
        Transition::section(reduce_motion, LOWER_DELAY).total(),
    ]
    .into_iter()
    .max()
    .unwrap_or_default()
}

pub fn view<'a>(ctx: &SectionContext<'a>, reveal: Reveal, height: f32) -> Element<'a, Message> {
    let portfolio = ctx.portfolio;
    let measure = ctx.measure();

    let mut body = Column::new().width(Length::Fill).push(header(
        ctx,
        reveal,
        ctx.i18n.tr("about-title"),
        intro(portfolio),
    ));
    body = body.push(Space::new().height(Length::Fixed(HEADER_GAP)));

    if !portfolio.skills.is_empty() {
        body = body.push(skills_grid(ctx, reveal, &measure));
    }
    if skills_height(&measure) > 0.0 && lower_height(&measure) > 0.0 {
        body = body.push(Space::new().height(Length::Fixed(spacing::XXL)));
    }

    let lower_pose = ctx.pose(reveal, &Transition::section(ctx.reduce_motion, LOWER_DELAY));
    let mut blocks: Vec<Element<'a, Message>> = Vec::new();
    if !portfolio.technologies.is_empty() {
        blocks.push(posed(
            technologies(ctx, reveal, lower_pose.opacity),
            lower_pose,
            Vector::new(0.0, BLOCK_RESERVE),
        ));
    }
    if !portfolio.education.is_empty() {
        blocks.push(posed(
            education(ctx, lower_pose.opacity),
            lower_pose,
            Vector::new(0.0, BLOCK_RESERVE),
        ));
    }
    if !blocks.is_empty() {
        let lower: Element<'a, Message> = if ctx.metrics.split() {
            Row::with_children(blocks).spacing(spacing::XL).into()
        } else {
            Column::with_children(blocks).spacing(spacing::XL).into()
        };
        body = body.push(lower);
    }

    band(body, &ctx.metrics, height, true)
}

fn skills_grid<'a>(ctx: &SectionContext<'a>, reveal: Reveal, m: &Measure) -> Element<'a, Message> {
    let columns = ctx.metrics.skill_columns();
    let card_height = skill_card_height(m);

    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, chunk) in ctx.portfolio.skills.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (offset, skill) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            let card_ref = CardRef {
                section: SectionId::About,
                index,
            };
            let pose = ctx.hover_pose(
                card_ref,
                ctx.pose(reveal, &Transition::skill(ctx.reduce_motion, index)),
            );
            row = row.push(
                Container::new(
                    mouse_area(posed(
                        skill_card(skill, pose.opacity, card_height),
                        pose,
                        Vector::new(0.0, BLOCK_RESERVE),
                    ))
                    .on_enter(Message::CardHovered(Some(card_ref)))
                    .on_exit(Message::CardHovered(None)),
                )
                .width(Length::FillPortion(1)),
            );
        }
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn skill_card<'a>(skill: &'a Skill, alpha: f32, height: f32) -> Element<'a, Message> {
    let icon = Container::new(icons::themed(
        icons::skill(skill.icon),
        sizing::ICON_LG,
        |c: &ColorScheme| c.text_primary,
        alpha,
    ))
    .padding(spacing::SM)
    .style(styles::container::bubble(alpha));

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .push(
                        Text::new(skill.title.as_str())
                            .size(typography::TITLE_SM)
                            .align_x(alignment::Horizontal::Center)
                            .style(styles::text::primary(alpha)),
                    )
                    .push(
                        Text::new(skill.description.as_str())
                            .size(typography::BODY)
                            .align_x(alignment::Horizontal::Center)
                            .style(styles::text::secondary(alpha)),
                    ),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .height(Length::Fixed(height))
    .style(styles::container::card(alpha))
    .into()
}

fn technologies<'a>(ctx: &SectionContext<'a>, reveal: Reveal, alpha: f32) -> Element<'a, Message> {
    let badges = ctx
        .portfolio
        .technologies
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut transition = Transition::badge(index);
            transition.delay += LOWER_DELAY;
            badge(name.clone(), false, ctx.pose(reveal, &transition).opacity)
        });

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(subheading(ctx.i18n.tr("about-technologies"), alpha))
        .push(
            Row::with_children(badges)
                .spacing(spacing::XS)
                .wrap()
                .vertical_spacing(spacing::XS),
        )
        .into()
}

fn education<'a>(ctx: &SectionContext<'a>, alpha: f32) -> Element<'a, Message> {
    let mut entries = Column::new().spacing(spacing::MD);
    for entry in &ctx.portfolio.education {
        entries = entries.push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(entry.degree.as_str())
                        .size(typography::BODY_LG)
                        .style(styles::text::primary(alpha)),
                )
                .push(
                    Text::new(entry.school.as_str())
                        .size(typography::BODY)
                        .style(styles::text::secondary(alpha)),
                )
                .push(
                    Text::new(entry.years.as_str())
                        .size(typography::CAPTION)
                        .style(styles::text::muted(alpha)),
                ),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(subheading(ctx.i18n.tr("about-education"), alpha))
        .push(entries)
        .into()
}

fn subheading<'a>(label: String, alpha: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::TITLE_SM)
            .style(styles::text::primary(alpha)),
    )
    .padding([TEXT_RESERVE, 0.0])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn skill_grid_is_shorter_with_more_columns() {
        let i18n = I18n::default();
        let portfolio = Portfolio::embedded().expect("embedded content");
        let at = |width| {
            skills_height(&Measure {
                i18n: &i18n,
                portfolio: &portfolio,
                metrics: Metrics::new(width),
            })
        };
        assert!(at(375.0) > at(800.0));
        assert!(at(800.0) > at(1280.0));
    }

    #[test]
    fn empty_lower_blocks_take_no_room() {
        let i18n = I18n::default();
        let mut portfolio = Portfolio::embedded().expect("embedded content");
        portfolio.technologies.clear();
        portfolio.education.clear();
        let m = Measure {
            i18n: &i18n,
            portfolio: &portfolio,
            metrics: Metrics::new(1280.0),
        };
        assert_eq!(lower_height(&m), 0.0);
    }

    #[test]
    fn badges_extend_settle_time() {
        let mut portfolio = Portfolio::embedded().expect("embedded content");
        let base = settle_span(&portfolio, false);
        portfolio.technologies = (0..60).map(|i| format!("tech-{i}")).collect();
        assert!(settle_span(&portfolio, false) > base);
    }
}
