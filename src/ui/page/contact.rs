// SPDX-License-Identifier: MPL-2.0
//! Contact section: social links next to the message form.

use super::frame::{
    band, header, header_height, section_height, subheading_height, Measure, SectionContext,
    HEADER_GAP,
};
use super::layout::{text_height, Metrics, BLOCK_RESERVE};
use super::Message;
use crate::content::{SocialKind, SocialLink};
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Vector};
use std::time::{Duration, Instant};

const LINKS_DELAY: Duration = Duration::from_millis(200);

const LINK_ROW_HEIGHT: f32 = sizing::ICON_MD + 2.0 * spacing::SM;

/// State of the built contact section.
#[derive(Debug, Default)]
pub struct ContactState {
    pub reveal: Reveal,
    pub form: contact_form::State,
}

impl ContactState {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            reveal: Reveal::started(now),
            form: contact_form::State::new(),
        }
    }
}

fn kind_key(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::Github => "contact-github",
        SocialKind::Linkedin => "contact-linkedin",
        SocialKind::Email => "contact-email",
    }
}

fn column_width(metrics: &Metrics) -> f32 {
    if metrics.split() {
        metrics.column_width(2, spacing::XXL)
    } else {
        metrics.content_width
    }
}

fn links_height(m: &Measure) -> f32 {
    let links = m.portfolio.social.len() as f32;
    subheading_height()
        + spacing::SM
        + text_height(&m.i18n.tr("contact-intro"), typography::BODY, column_width(&m.metrics))
        + spacing::MD
        + links * LINK_ROW_HEIGHT
        + (links - 1.0).max(0.0) * spacing::SM
        + 2.0 * BLOCK_RESERVE
}

#[must_use]
pub fn height(m: &Measure) -> f32 {
    let header = header_height(
        &m.i18n.tr("contact-title"),
        &m.i18n.tr("contact-subtitle"),
        m.metrics.content_width,
    );
    let links = links_height(m);
    let form = contact_form::height();
    let body = if m.metrics.split() {
        links.max(form)
    } else {
        links + spacing::XL + form
    };
    section_height(&m.metrics, header, body)
}

#[must_use]
pub fn settle_span(reduce_motion: bool) -> Duration {
    Transition::section(reduce_motion, LINKS_DELAY)
        .total()
        .max(contact_form::transition_span(reduce_motion))
}

pub fn view<'a>(
    ctx: &SectionContext<'a>,
    state: &'a ContactState,
    height: f32,
) -> Element<'a, Message> {
    let links_pose = ctx.pose(
        state.reveal,
        &Transition::section(ctx.reduce_motion, LINKS_DELAY),
    );
    let links = posed(
        links_column(ctx, links_pose.opacity),
        links_pose,
        Vector::new(0.0, BLOCK_RESERVE),
    );

    let form = contact_form::view(contact_form::ViewContext {
        i18n: ctx.i18n,
        state: &state.form,
        reveal: state.reveal,
        reduce_motion: ctx.reduce_motion,
        now: ctx.now,
    })
    .map(Message::Contact);

    let columns: Element<'a, Message> = if ctx.metrics.split() {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(links).width(Length::FillPortion(1)))
            .push(Container::new(form).width(Length::FillPortion(1)))
            .into()
    } else {
        Column::new()
            .spacing(spacing::XL)
            .push(links)
            .push(form)
            .into()
    };

    let body = Column::new()
        .width(Length::Fill)
        .push(header(
            ctx,
            state.reveal,
            ctx.i18n.tr("contact-title"),
            ctx.i18n.tr("contact-subtitle"),
        ))
        .push(Space::new().height(Length::Fixed(HEADER_GAP)))
        .push(columns);

    band(body, &ctx.metrics, height, true)
}

fn links_column<'a>(ctx: &SectionContext<'a>, alpha: f32) -> Element<'a, Message> {
    let rows = ctx
        .portfolio
        .social
        .iter()
        .map(|link| link_row(ctx, link, alpha));

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("contact-connect"))
                .size(typography::TITLE_SM)
                .style(styles::text::primary(alpha)),
        )
        .push(
            Text::new(ctx.i18n.tr("contact-intro"))
                .size(typography::BODY)
                .style(styles::text::secondary(alpha)),
        )
        .push(Space::new().height(Length::Fixed(spacing::MD - spacing::SM)))
        .push(Column::with_children(rows).spacing(spacing::SM))
        .into()
}

fn link_row<'a>(ctx: &SectionContext<'a>, link: &'a SocialLink, alpha: f32) -> Element<'a, Message> {
    let icon = Container::new(icons::themed(
        icons::social(link.kind),
        sizing::ICON_MD,
        |c: &ColorScheme| c.text_primary,
        alpha,
    ))
    .padding(spacing::SM)
    .style(styles::container::bubble(alpha));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(
            Column::new()
                .push(
                    Text::new(ctx.i18n.tr(kind_key(link.kind)))
                        .size(typography::BODY)
                        .style(styles::text::primary(alpha)),
                )
                .push(
                    Text::new(link.label.as_str())
                        .size(typography::CAPTION)
                        .style(styles::text::muted(alpha)),
                ),
        );

    button(content)
        .padding(0)
        .height(Length::Fixed(LINK_ROW_HEIGHT))
        .style(styles::button::ghost(alpha))
        .on_press(Message::CopyLink(link.url.clone()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::i18n::fluent::I18n;

    #[test]
    fn split_layout_places_form_beside_links() {
        let i18n = I18n::default();
        let portfolio = Portfolio::embedded().expect("embedded content");
        let at = |width| {
            height(&Measure {
                i18n: &i18n,
                portfolio: &portfolio,
                metrics: Metrics::new(width),
            })
        };
        assert!(at(600.0) > at(1024.0));
    }

    #[test]
    fn every_link_adds_a_row() {
        let i18n = I18n::default();
        let mut portfolio = Portfolio::embedded().expect("embedded content");
        let before = links_height(&Measure {
            i18n: &i18n,
            portfolio: &portfolio,
            metrics: Metrics::new(1280.0),
        });
        portfolio.social.pop();
        let after = links_height(&Measure {
            i18n: &i18n,
            portfolio: &portfolio,
            metrics: Metrics::new(1280.0),
        });
        assert!(before - after >= LINK_ROW_HEIGHT);
    }

    #[test]
    fn new_state_reveals_immediately() {
        let state = ContactState::new(Instant::now());
        assert!(state.reveal.has_started());
        assert!(!state.form.has_errors());
    }
}
