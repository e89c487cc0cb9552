// SPDX-License-Identifier: MPL-2.0
//! The scrolling portfolio page.
//!
//! The hero is always built. The five sections below it sit behind
//! [`LazySection`] gates and render a fixed-height placeholder until their
//! gate fires. Every section height is computed from content and window
//! width, so the [`PageLayout`] is known without measuring widgets. After a
//! scroll, a resize or a fragment change the page re-observes until no
//! further section triggers: a built section may push its neighbour out of
//! view or pull the next placeholder in.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod frame;
pub mod hero;
pub mod layout;
pub mod listing;

use crate::app::config::Config;
use crate::content::{Portfolio, ALL_TAB};
use crate::i18n::fluent::I18n;
use crate::navigation::{Fragment, Location, SectionId};
use crate::ui::animation::Reveal;
use crate::ui::contact_form::{self, Submission};
use crate::ui::image_loader::ImageLibrary;
use crate::ui::lazy_section::{LazySection, ViewportGate};
use crate::ui::state::{intersection_ratio, Span};
use contact::ContactState;
use frame::{Measure, SectionContext};
use iced::widget::Column;
use iced::{Element, Length};
use layout::{Metrics, PageLayout, FOOTER_HEIGHT};
use listing::ListingState;
use std::time::{Duration, Instant};

/// A hoverable card: a skill, or a listing card by position in the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub section: SectionId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(SectionId),
    SelectTab { section: SectionId, tab: String },
    CardHovered(Option<CardRef>),
    CopyLink(String),
    Contact(contact_form::Message),
}

/// Outcomes the application shell acts on.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(SectionId),
    CopyLink(String),
    ContactSubmitted(Submission),
    ContactRejected,
}

/// Read-only inputs shared by layout, update and view.
#[derive(Clone, Copy)]
pub struct PageEnv<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub reduce_motion: bool,
    pub now: Instant,
}

impl<'a> PageEnv<'a> {
    fn measure(&self, metrics: Metrics) -> Measure<'a> {
        Measure {
            i18n: self.i18n,
            portfolio: self.portfolio,
            metrics,
        }
    }
}

/// Content of a lazy section once its gate fired.
#[derive(Debug)]
pub enum SectionBody {
    About(Reveal),
    Projects(ListingState),
    Blog(ListingState),
    Experience(Reveal),
    Contact(ContactState),
}

impl SectionBody {
    /// Builds the body of `section`, starting its transitions at `now`.
    ///
    /// The hero is never gated; it maps to the about body.
    #[must_use]
    pub fn build(section: SectionId, now: Instant) -> Self {
        match section {
            SectionId::Home | SectionId::About => Self::About(Reveal::started(now)),
            SectionId::Projects => Self::Projects(ListingState::new(now)),
            SectionId::Blog => Self::Blog(ListingState::new(now)),
            SectionId::Experience => Self::Experience(Reveal::started(now)),
            SectionId::Contact => Self::Contact(ContactState::new(now)),
        }
    }

    fn height(&self, m: &Measure) -> f32 {
        match self {
            Self::About(_) => about::height(m),
            Self::Projects(state) => {
                listing::height(m, SectionId::Projects, &m.portfolio.projects, state.tab())
            }
            Self::Blog(state) => listing::height(m, SectionId::Blog, &m.portfolio.blog, state.tab()),
            Self::Experience(_) => experience::height(m),
            Self::Contact(_) => contact::height(m),
        }
    }

    fn settle_span(&self, portfolio: &Portfolio, reduce_motion: bool) -> Duration {
        match self {
            Self::About(_) => about::settle_span(portfolio, reduce_motion),
            Self::Projects(_) => listing::settle_span(portfolio.projects.count(ALL_TAB), reduce_motion),
            Self::Blog(_) => listing::settle_span(portfolio.blog.count(ALL_TAB), reduce_motion),
            Self::Experience(_) => experience::settle_span(portfolio.experience.len(), reduce_motion),
            Self::Contact(_) => contact::settle_span(reduce_motion),
        }
    }

    fn listing_mut(&mut self) -> Option<&mut ListingState> {
        match self {
            Self::Projects(state) | Self::Blog(state) => Some(state),
            _ => None,
        }
    }

    fn view<'a>(&'a self, ctx: &SectionContext<'a>, height: f32) -> Element<'a, Message> {
        match self {
            Self::About(reveal) => about::view(ctx, *reveal, height),
            Self::Projects(state) => listing::view(
                ctx,
                SectionId::Projects,
                &ctx.portfolio.projects,
                state,
                height,
                false,
            ),
            Self::Blog(state) => {
                listing::view(ctx, SectionId::Blog, &ctx.portfolio.blog, state, height, true)
            }
            Self::Experience(reveal) => experience::view(ctx, *reveal, height),
            Self::Contact(state) => contact::view(ctx, state, height),
        }
    }
}

/// Image sources a built section shows.
#[must_use]
pub fn section_images(portfolio: &Portfolio, section: SectionId) -> Vec<&str> {
    match section {
        SectionId::Projects => portfolio
            .projects
            .items
            .iter()
            .filter_map(|project| project.image.as_deref())
            .collect(),
        SectionId::Blog => portfolio
            .blog
            .items
            .iter()
            .filter_map(|post| post.image.as_deref())
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug)]
pub struct Page {
    hero: Reveal,
    footer: Reveal,
    sections: Vec<(SectionId, LazySection<SectionBody>)>,
    placeholder_height: f32,
    metrics: Metrics,
    layout: PageLayout,
    viewport: Option<Span>,
    hovered: Option<CardRef>,
    animate_until: Option<Instant>,
}

impl Page {
    #[must_use]
    pub fn new(config: &Config, env: &PageEnv<'_>, width: f32) -> Self {
        let gate = ViewportGate::new(config.visibility_threshold(), config.sections.fragment_scope);
        let sections = SectionId::LAZY
            .into_iter()
            .map(|id| (id, LazySection::with_gate(gate.clone().for_section(id))))
            .collect();

        let mut page = Self {
            hero: Reveal::started(env.now),
            footer: Reveal::default(),
            sections,
            placeholder_height: config.placeholder_height(),
            metrics: Metrics::new(width),
            layout: PageLayout::default(),
            viewport: None,
            hovered: None,
            animate_until: None,
        };
        page.extend_animation(env.now + hero::settle_span(env.reduce_motion));
        page.relayout(env);
        page
    }

    /// Mounts every gate against `location`. Returns the sections built.
    pub fn mount(&mut self, location: &Location, env: &PageEnv<'_>) -> Vec<SectionId> {
        let mut built = Vec::new();
        for (id, section) in &mut self.sections {
            section.mount(location);
            if section.build_if_triggered(|| SectionBody::build(*id, env.now)) {
                built.push(*id);
            }
        }
        self.after_build(&built, env);
        built.extend(self.settle(env));
        built
    }

    /// Records the visible page span and builds every section it reaches.
    pub fn observe(&mut self, viewport: Span, env: &PageEnv<'_>) -> Vec<SectionId> {
        self.viewport = Some(viewport);
        self.settle(env)
    }

    /// Forwards a fragment change to every gate.
    pub fn fragment_changed(&mut self, fragment: &Fragment, env: &PageEnv<'_>) -> Vec<SectionId> {
        let mut built = Vec::new();
        for (id, section) in &mut self.sections {
            let before = section.build_count();
            section.fragment_changed(fragment, || SectionBody::build(*id, env.now));
            if section.build_count() > before {
                built.push(*id);
            }
        }
        self.after_build(&built, env);
        built.extend(self.settle(env));
        built
    }

    pub fn resize(&mut self, width: f32, env: &PageEnv<'_>) -> Vec<SectionId> {
        self.metrics = Metrics::new(width);
        self.relayout(env);
        self.settle(env)
    }

    /// Releases every gate listener.
    pub fn unmount(&mut self) {
        for (_, section) in &mut self.sections {
            section.unmount();
        }
    }

    /// Whether any gate still holds a listener.
    #[must_use]
    pub fn listeners_active(&self) -> bool {
        self.sections
            .iter()
            .any(|(_, section)| section.gate().listeners().any())
    }

    #[must_use]
    pub fn is_built(&self, id: SectionId) -> bool {
        id == SectionId::Home || self.section(id).is_some_and(|s| s.content().is_some())
    }

    #[must_use]
    pub fn section(&self, id: SectionId) -> Option<&LazySection<SectionBody>> {
        self.sections
            .iter()
            .find(|(section, _)| *section == id)
            .map(|(_, section)| section)
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Whether some transition still moves at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animate_until.is_some_and(|until| until > now)
    }

    /// Section under the top edge of the viewport.
    #[must_use]
    pub fn current_section(&self) -> Option<SectionId> {
        self.viewport
            .and_then(|viewport| self.layout.section_at(viewport.top + 1.0))
    }

    pub fn update(&mut self, message: Message, env: &PageEnv<'_>) -> Event {
        match message {
            Message::Navigate(section) => Event::Navigate(section),
            Message::CopyLink(url) => Event::CopyLink(url),
            Message::CardHovered(card) => {
                self.hovered = card;
                Event::None
            }
            Message::SelectTab { section, tab } => {
                let Some(state) = self
                    .sections
                    .iter_mut()
                    .find(|(id, _)| *id == section)
                    .and_then(|(_, lazy)| lazy.content_mut())
                    .and_then(SectionBody::listing_mut)
                else {
                    return Event::None;
                };
                if state.select(&tab, env.now) {
                    tracing::debug!(?section, tab, "listing tab selected");
                    let count = match section {
                        SectionId::Blog => env.portfolio.blog.count(&tab),
                        _ => env.portfolio.projects.count(&tab),
                    };
                    self.hovered = None;
                    self.extend_animation(
                        env.now + listing::cards_settle_span(count, env.reduce_motion),
                    );
                    self.relayout(env);
                    self.settle(env);
                }
                Event::None
            }
            Message::Contact(message) => {
                let Some(SectionBody::Contact(state)) = self
                    .sections
                    .iter_mut()
                    .find(|(id, _)| *id == SectionId::Contact)
                    .and_then(|(_, lazy)| lazy.content_mut())
                else {
                    return Event::None;
                };
                match contact_form::update(&mut state.form, message) {
                    contact_form::Event::None => Event::None,
                    contact_form::Event::Submitted(submission) => {
                        Event::ContactSubmitted(submission)
                    }
                    contact_form::Event::Rejected => Event::ContactRejected,
                }
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        env: &PageEnv<'a>,
        images: &'a ImageLibrary,
        portrait: Option<&'a str>,
    ) -> Element<'a, Message> {
        let ctx = SectionContext {
            i18n: env.i18n,
            portfolio: env.portfolio,
            images,
            metrics: self.metrics,
            reduce_motion: env.reduce_motion,
            now: env.now,
            hovered: self.hovered,
        };
        let height_of = |id| {
            self.layout
                .region(id)
                .map_or(self.placeholder_height, |span| span.height)
        };

        let mut column = Column::new()
            .width(Length::Fill)
            .push(hero::view(&ctx, self.hero, portrait, height_of(SectionId::Home)));
        for (id, section) in &self.sections {
            let height = height_of(*id);
            column = column.push(
                section.view(self.placeholder_height, move |body| body.view(&ctx, height)),
            );
        }
        column.push(footer::view(&ctx, self.footer)).into()
    }

    fn relayout(&mut self, env: &PageEnv<'_>) {
        let measure = env.measure(self.metrics);
        let heights = std::iter::once((SectionId::Home, hero::height(&measure))).chain(
            self.sections.iter().map(|(id, section)| {
                let height = section
                    .content()
                    .map_or(self.placeholder_height, |body| body.height(&measure));
                (*id, height)
            }),
        );
        self.layout = PageLayout::stack(heights, FOOTER_HEIGHT);
    }

    /// Observes until the layout stops changing.
    fn settle(&mut self, env: &PageEnv<'_>) -> Vec<SectionId> {
        let Some(viewport) = self.viewport else {
            return Vec::new();
        };

        let mut built = Vec::new();
        loop {
            let mut round = Vec::new();
            for (id, section) in &mut self.sections {
                let Some(region) = self.layout.region(*id) else {
                    continue;
                };
                let ratio = intersection_ratio(region, viewport);
                let before = section.build_count();
                section.observe(ratio, || SectionBody::build(*id, env.now));
                if section.build_count() > before {
                    round.push(*id);
                }
            }
            if round.is_empty() {
                break;
            }
            self.after_build(&round, env);
            built.extend(round);
        }

        let total = self.layout.total_height();
        let footer = Span::new(total - FOOTER_HEIGHT, FOOTER_HEIGHT);
        if !self.footer.has_started() && intersection_ratio(footer, viewport) > 0.0 {
            self.footer.start(env.now);
            self.extend_animation(env.now + footer::settle_span(env.reduce_motion));
        }
        built
    }

    fn after_build(&mut self, built: &[SectionId], env: &PageEnv<'_>) {
        if built.is_empty() {
            return;
        }
        let spans: Vec<Duration> = built
            .iter()
            .filter_map(|id| self.section(*id).and_then(LazySection::content))
            .map(|body| body.settle_span(env.portfolio, env.reduce_motion))
            .collect();
        for span in spans {
            self.extend_animation(env.now + span);
        }
        self.relayout(env);
    }

    fn extend_animation(&mut self, until: Instant) {
        self.animate_until = Some(self.animate_until.map_or(until, |current| current.max(until)));
    }
}
