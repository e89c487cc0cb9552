// SPDX-License-Identifier: MPL-2.0
//! Sticky header with section navigation and the theme toggle.
//!
//! Wide windows show every nav item inline. Below the `md` breakpoint the
//! items move into a hamburger menu whose entries slide in one after the
//! other; choosing an entry closes the menu.

use crate::i18n::fluent::I18n;
use crate::navigation::SectionId;
use crate::ui::animation::{posed, Reveal, Transition};
use crate::ui::design_tokens::{breakpoint, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, svg, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Vector};
use std::time::Instant;

/// Horizontal room kept free for the menu entry slide.
const MENU_SLIDE_RESERVE: f32 = 20.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    menu_open: bool,
    menu_reveal: Reveal,
}

impl State {
    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the menu entries are still sliding in.
    #[must_use]
    pub fn is_animating(&self, reduce_motion: bool, now: Instant) -> bool {
        let last = Transition::menu_item(reduce_motion, SectionId::NAV.len() - 1);
        self.menu_open && self.menu_reveal.is_running(&last, now)
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub owner: &'a str,
    pub current: Option<SectionId>,
    pub window_width: f32,
    pub dark: bool,
    pub reduce_motion: bool,
    pub now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(SectionId),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(SectionId),
    ToggleTheme,
}

pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            if state.menu_open {
                state.menu_reveal.restart(now);
            }
            Event::None
        }
        Message::CloseMenu => {
            state.menu_open = false;
            Event::None
        }
        Message::Navigate(section) => {
            state.menu_open = false;
            Event::Navigate(section)
        }
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let compact = ctx.window_width < breakpoint::MD;

    let brand = button(
        Text::new(ctx.owner)
            .size(typography::TITLE_MD)
            .style(styles::text::primary(1.0)),
    )
    .padding(0)
    .style(styles::button::ghost(1.0))
    .on_press(Message::Navigate(SectionId::Home));

    let mut bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !compact {
        for section in SectionId::NAV {
            bar = bar.push(nav_button(&ctx, section));
        }
    }
    bar = bar.push(theme_toggle(&ctx));
    if compact {
        let icon = if ctx.state.menu_open {
            icons::cross()
        } else {
            icons::menu()
        };
        bar = bar.push(icon_button(icon, Message::ToggleMenu));
    }

    let header = Container::new(
        Container::new(bar)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::HEADER_HEIGHT))
    .padding([0.0, spacing::LG])
    .style(styles::container::header(1.0));

    let mut content = Column::new().width(Length::Fill).push(header);
    if compact && ctx.state.menu_open {
        content = content.push(dropdown(&ctx));
    }
    content.into()
}

fn nav_button<'a>(ctx: &ViewContext<'a>, section: SectionId) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::tab(ctx.current == Some(section), 1.0))
        .on_press(Message::Navigate(section))
        .into()
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let icon = if ctx.dark { icons::sun() } else { icons::moon() };
    icon_button(icon, Message::ToggleTheme)
}

fn icon_button<'a>(icon: svg::Handle, message: Message) -> Element<'a, Message> {
    button(icons::themed(
        icon,
        sizing::ICON_MD,
        |c: &ColorScheme| c.text_primary,
        1.0,
    ))
    .padding(spacing::XS)
    .style(styles::button::ghost(1.0))
    .on_press(message)
    .into()
}

fn dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = SectionId::NAV.into_iter().enumerate().map(|(index, section)| {
        let pose = ctx.state.menu_reveal.pose(
            &Transition::menu_item(ctx.reduce_motion, index),
            ctx.now,
        );
        let item = button(
            Text::new(ctx.i18n.tr(section.label_key()))
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::button::tab(ctx.current == Some(section), pose.opacity))
        .on_press(Message::Navigate(section));

        posed(item, pose, Vector::new(MENU_SLIDE_RESERVE, 0.0))
    });

    Container::new(Column::with_children(items).spacing(spacing::XXS))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::header(1.0))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ctx<'a>(i18n: &'a I18n, state: &'a State, width: f32) -> ViewContext<'a> {
        ViewContext {
            i18n,
            state,
            owner: "Ada",
            current: Some(SectionId::About),
            window_width: width,
            dark: false,
            reduce_motion: false,
            now: Instant::now(),
        }
    }

    #[test]
    fn navbar_renders_wide_and_compact() {
        let i18n = I18n::default();
        let mut state = State::default();
        drop(view(ctx(&i18n, &state, 1280.0)));
        update(&mut state, Message::ToggleMenu, Instant::now());
        assert!(state.is_menu_open());
        drop(view(ctx(&i18n, &state, 375.0)));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut state = State::default();
        let now = Instant::now();
        assert_eq!(update(&mut state, Message::ToggleMenu, now), Event::None);
        assert!(state.is_menu_open());
        assert!(state.is_animating(false, now));

        assert_eq!(update(&mut state, Message::ToggleMenu, now), Event::None);
        assert!(!state.is_menu_open());
        assert!(!state.is_animating(false, now));
    }

    #[test]
    fn choosing_an_item_closes_menu_and_navigates() {
        let mut state = State::default();
        let now = Instant::now();
        update(&mut state, Message::ToggleMenu, now);

        let event = update(&mut state, Message::Navigate(SectionId::Blog), now);
        assert_eq!(event, Event::Navigate(SectionId::Blog));
        assert!(!state.is_menu_open());
    }

    #[test]
    fn menu_settles_faster_with_reduced_motion() {
        let mut state = State::default();
        let now = Instant::now();
        update(&mut state, Message::ToggleMenu, now);
        let later = now + Duration::from_millis(500);
        assert!(state.is_animating(false, later));
        assert!(!state.is_animating(true, later));
    }

    #[test]
    fn theme_toggle_is_forwarded() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::ToggleTheme, Instant::now()),
            Event::ToggleTheme
        );
    }
}
