// SPDX-License-Identifier: MPL-2.0
//! Tabbed card listings: projects and blog posts.
//!
//! The tab bar always starts with the implicit "all" tab. Switching tabs
//! restarts the card transitions of that listing.

use super::frame::{
    badge, badges_height, band, header, header_height, section_height, Measure, SectionContext,
    HEADER_GAP,
};
use super::layout::{
    chip_rows, grid_height, line_height, text_height, BADGE_HEIGHT, BLOCK_RESERVE,
    CARD_IMAGE_HEIGHT, CARD_LIFT,
};
use super::{CardRef, Message};
use crate::content::{BlogPost, Categorized, Listing, Project, ALL_TAB};
use crate::navigation::SectionId;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::image_loader;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, mouse_area, svg, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Vector};
use std::time::{Duration, Instant};

const TAB_BAR_DELAY: Duration = Duration::from_millis(200);

/// Delay between consecutive cards.
const CARD_STAGGER_MS: u64 = 100;

/// Per-listing state created when the section is built.
#[derive(Debug, Clone)]
pub struct ListingState {
    tab: String,
    revealed: Reveal,
    cards: Reveal,
}

impl ListingState {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            tab: ALL_TAB.to_string(),
            revealed: Reveal::started(now),
            cards: Reveal::started(now),
        }
    }

    #[must_use]
    pub fn tab(&self) -> &str {
        &self.tab
    }

    #[must_use]
    pub fn revealed(&self) -> Reveal {
        self.revealed
    }

    /// Switches tabs. Returns `true` when the tab changed.
    pub fn select(&mut self, tab: &str, now: Instant) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab.to_string();
        self.cards.restart(now);
        true
    }
}

/// An entry that renders as a listing card.
pub trait ListingEntry: Categorized {
    fn image(&self) -> Option<&str>;

    fn placeholder_icon() -> svg::Handle;

    /// Height of the card body below the image.
    fn body_height(&self, width: f32) -> f32;

    fn body<'a>(&'a self, ctx: &SectionContext<'a>, alpha: f32) -> Element<'a, Message>;
}

fn keys(section: SectionId) -> (&'static str, &'static str) {
    match section {
        SectionId::Blog => ("blog-title", "blog-subtitle"),
        _ => ("projects-title", "projects-subtitle"),
    }
}

fn tab_labels<'a, T>(all: &'a str, listing: &'a Listing<T>) -> impl Iterator<Item = &'a str> {
    std::iter::once(all).chain(listing.tabs.iter().map(|tab| tab.label.as_str()))
}

fn tab_bar_height<T>(m: &Measure, listing: &Listing<T>) -> f32 {
    let all = m.i18n.tr("tab-all");
    let rows = chip_rows(
        tab_labels(&all, listing),
        typography::BODY,
        spacing::MD,
        spacing::XXS,
        m.metrics.content_width - 2.0 * spacing::XXS,
    )
    .max(1) as f32;
    rows * sizing::BUTTON_HEIGHT + (rows - 1.0) * spacing::XXS + 2.0 * spacing::XXS
}

fn card_height<T: ListingEntry>(m: &Measure, listing: &Listing<T>) -> f32 {
    let inner = m.metrics.column_width(m.metrics.columns, spacing::LG) - 2.0 * spacing::LG;
    let tallest = listing
        .items
        .iter()
        .map(|item| item.body_height(inner))
        .fold(0.0_f32, f32::max);
    CARD_IMAGE_HEIGHT + 2.0 * spacing::LG + tallest
}

fn cards_height<T: ListingEntry>(m: &Measure, listing: &Listing<T>, tab: &str) -> f32 {
    let count = listing.count(tab);
    if count == 0 {
        return line_height(typography::BODY);
    }
    grid_height(
        count,
        m.metrics.columns,
        card_height(m, listing) + 2.0 * CARD_LIFT,
        spacing::LG,
    )
}

#[must_use]
pub fn height<T: ListingEntry>(
    m: &Measure,
    section: SectionId,
    listing: &Listing<T>,
    tab: &str,
) -> f32 {
    let (title, subtitle) = keys(section);
    let header = header_height(
        &m.i18n.tr(title),
        &m.i18n.tr(subtitle),
        m.metrics.content_width,
    );
    let body = tab_bar_height(m, listing)
        + 2.0 * BLOCK_RESERVE
        + spacing::XL
        + cards_height(m, listing, tab);
    section_height(&m.metrics, header, body)
}

fn card_transition(reduce_motion: bool, index: usize) -> Transition {
    Transition::card(
        reduce_motion,
        Duration::from_millis(CARD_STAGGER_MS * index as u64),
    )
}

/// Time until every card of `count` rests after a (re)start.
#[must_use]
pub fn cards_settle_span(count: usize, reduce_motion: bool) -> Duration {
    card_transition(reduce_motion, count.saturating_sub(1)).total()
}

/// Time until the whole section rests after it is built.
#[must_use]
pub fn settle_span(count: usize, reduce_motion: bool) -> Duration {
    Transition::section(reduce_motion, TAB_BAR_DELAY)
        .total()
        .max(cards_settle_span(count, reduce_motion))
}

pub fn view<'a, T: ListingEntry>(
    ctx: &SectionContext<'a>,
    section: SectionId,
    listing: &'a Listing<T>,
    state: &'a ListingState,
    height: f32,
    raised: bool,
) -> Element<'a, Message> {
    let (title, subtitle) = keys(section);
    let measure = ctx.measure();

    let tab_pose = ctx.pose(
        state.revealed,
        &Transition::section(ctx.reduce_motion, TAB_BAR_DELAY),
    );

    let body = Column::new()
        .width(Length::Fill)
        .push(header(
            ctx,
            state.revealed,
            ctx.i18n.tr(title),
            ctx.i18n.tr(subtitle),
        ))
        .push(Space::new().height(Length::Fixed(HEADER_GAP)))
        .push(posed(
            Container::new(tab_bar(ctx, section, listing, state, tab_pose.opacity))
                .center_x(Length::Fill),
            tab_pose,
            Vector::new(0.0, BLOCK_RESERVE),
        ))
        .push(Space::new().height(Length::Fixed(spacing::XL)))
        .push(cards(ctx, section, listing, state, card_height(&measure, listing)));

    band(body, &ctx.metrics, height, raised)
}

fn tab_bar<'a, T>(
    ctx: &SectionContext<'a>,
    section: SectionId,
    listing: &'a Listing<T>,
    state: &'a ListingState,
    alpha: f32,
) -> Element<'a, Message> {
    let tab_button = |id: &str, label: String| -> Element<'a, Message> {
        let selected = state.tab == id;
        button(Text::new(label).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::tab(selected, alpha))
            .on_press(Message::SelectTab {
                section,
                tab: id.to_string(),
            })
            .into()
    };

    let mut tabs: Vec<Element<'a, Message>> = vec![tab_button(ALL_TAB, ctx.i18n.tr("tab-all"))];
    tabs.extend(
        listing
            .tabs
            .iter()
            .map(|tab| tab_button(&tab.id, tab.label.clone())),
    );

    Container::new(
        Row::with_children(tabs)
            .spacing(spacing::XXS)
            .wrap()
            .vertical_spacing(spacing::XXS),
    )
    .padding(spacing::XXS)
    .style(styles::container::tab_bar(alpha))
    .into()
}

fn cards<'a, T: ListingEntry>(
    ctx: &SectionContext<'a>,
    section: SectionId,
    listing: &'a Listing<T>,
    state: &'a ListingState,
    card_height: f32,
) -> Element<'a, Message> {
    let items: Vec<&'a T> = listing.filtered(&state.tab).collect();
    if items.is_empty() {
        return Text::new(ctx.i18n.tr("listing-empty"))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(styles::text::muted(1.0))
            .into();
    }

    let columns = ctx.metrics.columns;
    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, chunk) in items.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (offset, &item) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            let card_ref = CardRef { section, index };
            let pose = ctx.hover_pose(
                card_ref,
                ctx.pose(state.cards, &card_transition(ctx.reduce_motion, index)),
            );

            let card = Container::new(
                Column::new()
                    .push(image_loader::view(
                        ctx.images.state(item.image()),
                        Length::Fill,
                        CARD_IMAGE_HEIGHT,
                        T::placeholder_icon(),
                        pose.opacity,
                    ))
                    .push(
                        Container::new(item.body(ctx, pose.opacity))
                            .padding(spacing::LG)
                            .width(Length::Fill),
                    ),
            )
            .width(Length::Fill)
            .height(Length::Fixed(card_height))
            .clip(true)
            .style(styles::container::card(pose.opacity));

            row = row.push(
                Container::new(
                    mouse_area(posed(card, pose, Vector::new(0.0, CARD_LIFT)))
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

fn on_accent(colors: &ColorScheme) -> Color {
    colors.on_accent
}

fn text_primary(colors: &ColorScheme) -> Color {
    colors.text_primary
}

fn link_button<'a>(label: String, url: &str, primary: bool, alpha: f32) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::themed(
            icons::external_link(),
            sizing::ICON_XS,
            if primary { on_accent } else { text_primary },
            alpha,
        ))
        .push(Text::new(label).size(typography::BODY));

    let base = if primary {
        button(content).style(styles::button::primary(alpha))
    } else {
        button(content).style(styles::button::outline(alpha))
    };
    base.padding([spacing::XS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(Message::CopyLink(url.to_string()))
        .into()
}

impl ListingEntry for Project {
    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn placeholder_icon() -> svg::Handle {
        icons::document()
    }

    fn body_height(&self, width: f32) -> f32 {
        let tags = badges_height(self.tags.iter().map(String::as_str), width);
        let links = if self.demo_url.is_some() || self.code_url.is_some() {
            spacing::MD + sizing::BUTTON_HEIGHT
        } else {
            0.0
        };
        text_height(&self.title, typography::TITLE_SM, width)
            + spacing::XS
            + text_height(&self.description, typography::BODY, width)
            + if tags > 0.0 { spacing::SM + tags } else { 0.0 }
            + links
    }

    fn body<'a>(&'a self, ctx: &SectionContext<'a>, alpha: f32) -> Element<'a, Message> {
        let mut column = Column::new()
            .push(
                Text::new(self.title.as_str())
                    .size(typography::TITLE_SM)
                    .style(styles::text::primary(alpha)),
            )
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(
                Text::new(self.description.as_str())
                    .size(typography::BODY)
                    .style(styles::text::secondary(alpha)),
            );

        if !self.tags.is_empty() {
            let tags = self.tags.iter().map(|tag| badge(tag.clone(), true, alpha));
            column = column
                .push(Space::new().height(Length::Fixed(spacing::SM)))
                .push(
                    Row::with_children(tags)
                        .spacing(spacing::XS)
                        .wrap()
                        .vertical_spacing(spacing::XS),
                );
        }

        let mut links = Row::new().spacing(spacing::SM);
        if let Some(url) = &self.demo_url {
            links = links.push(link_button(ctx.i18n.tr("project-demo"), url, true, alpha));
        }
        if let Some(url) = &self.code_url {
            links = links.push(link_button(ctx.i18n.tr("project-code"), url, false, alpha));
        }
        if self.demo_url.is_some() || self.code_url.is_some() {
            column = column
                .push(Space::new().height(Length::Fixed(spacing::MD)))
                .push(links);
        }
        column.into()
    }
}

impl ListingEntry for BlogPost {
    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn placeholder_icon() -> svg::Handle {
        icons::message()
    }

    fn body_height(&self, width: f32) -> f32 {
        line_height(typography::CAPTION).max(sizing::ICON_XS)
            + spacing::XS
            + BADGE_HEIGHT
            + spacing::XS
            + text_height(&self.title, typography::TITLE_SM, width)
            + spacing::XS
            + text_height(&self.excerpt, typography::BODY, width)
            + spacing::MD
            + sizing::BUTTON_HEIGHT
    }

    fn body<'a>(&'a self, ctx: &SectionContext<'a>, alpha: f32) -> Element<'a, Message> {
        let muted = |c: &ColorScheme| c.text_muted;
        let minutes = self.read_minutes.to_string();
        let meta = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::themed(icons::calendar(), sizing::ICON_XS, muted, alpha))
            .push(
                Text::new(self.date.format("%b %-d, %Y").to_string())
                    .size(typography::CAPTION)
                    .style(styles::text::muted(alpha)),
            )
            .push(Space::new().width(Length::Fixed(spacing::SM)))
            .push(icons::themed(icons::clock(), sizing::ICON_XS, muted, alpha))
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("blog-read-minutes", &[("minutes", minutes.as_str())]),
                )
                .size(typography::CAPTION)
                .style(styles::text::muted(alpha)),
            );

        let category = Row::new()
            .spacing(spacing::XXS)
            .align_y(alignment::Vertical::Center)
            .push(icons::themed(icons::tag(), sizing::ICON_XS, muted, alpha))
            .push(badge(self.category.clone(), true, alpha));

        Column::new()
            .push(meta)
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(category)
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(
                Text::new(self.title.as_str())
                    .size(typography::TITLE_SM)
                    .style(styles::text::primary(alpha)),
            )
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(
                Text::new(self.excerpt.as_str())
                    .size(typography::BODY)
                    .style(styles::text::secondary(alpha)),
            )
            .push(Space::new().height(Length::Fixed(spacing::MD)))
            .push(link_button(ctx.i18n.tr("blog-read-more"), &self.url, false, alpha))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use crate::i18n::fluent::I18n;
    use crate::ui::page::layout::Metrics;

    #[test]
    fn select_restarts_cards_only_on_change() {
        let start = Instant::now();
        let later = start + Duration::from_secs(5);
        let mut state = ListingState::new(start);
        assert_eq!(state.tab(), ALL_TAB);

        assert!(!state.select(ALL_TAB, later));
        assert!(state.select("cv", later));
        assert_eq!(state.tab(), "cv");
        let transition = card_transition(false, 0);
        assert!(state.cards.is_running(&transition, later));
        assert!(!state.revealed().is_running(&transition, later));
    }

    #[test]
    fn filtered_tab_shrinks_listing() {
        let i18n = I18n::default();
        let portfolio = Portfolio::embedded().expect("embedded content");
        let m = Measure {
            i18n: &i18n,
            portfolio: &portfolio,
            metrics: Metrics::new(375.0),
        };
        let all = height(&m, SectionId::Projects, &portfolio.projects, ALL_TAB);
        let cv = height(&m, SectionId::Projects, &portfolio.projects, "cv");
        assert!(all > cv);
    }

    #[test]
    fn empty_tab_keeps_a_message_line() {
        let i18n = I18n::default();
        let portfolio = Portfolio::embedded().expect("embedded content");
        let m = Measure {
            i18n: &i18n,
            portfolio: &portfolio,
            metrics: Metrics::new(1280.0),
        };
        assert_eq!(portfolio.blog.count("language"), 0);
        assert_eq!(
            cards_height(&m, &portfolio.blog, "language"),
            line_height(typography::BODY)
        );
    }

    #[test]
    fn more_cards_take_longer_to_settle() {
        assert!(cards_settle_span(6, false) > cards_settle_span(1, false));
        assert!(settle_span(3, true) < settle_span(3, false));
    }
}
