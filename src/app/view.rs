// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the scrollable page. The chat widget, the
//! scroll-to-top button and the toasts are stacked over the page.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::navigation::SectionId;
use crate::ui::chat;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::image_loader::ImageLibrary;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};
use crate::ui::page::{Page, PageEnv};
use crate::ui::scroll_to_top;
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{alignment, Element, Length, Padding};

/// Widget id of the page scrollable, target of scroll operations.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub env: PageEnv<'a>,
    pub page: &'a Page,
    pub images: &'a ImageLibrary,
    pub portrait: Option<&'a str>,
    pub navbar: &'a navbar::State,
    pub chat: Option<&'a chat::State>,
    pub scroll_to_top: &'a scroll_to_top::State,
    pub notifications: &'a notifications::Manager,
    pub owner: &'a str,
    pub window_width: f32,
    pub dark: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current = ctx
        .page
        .current_section()
        .filter(|section| *section != SectionId::Home);

    let header = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        owner: ctx.owner,
        current,
        window_width: ctx.window_width,
        dark: ctx.dark,
        reduce_motion: ctx.env.reduce_motion,
        now: ctx.env.now,
    })
    .map(Message::Navbar);

    let page = Scrollable::new(
        ctx.page
            .view(&ctx.env, ctx.images, ctx.portrait)
            .map(Message::Page),
    )
    .id(Id::new(PAGE_SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport: Viewport| Message::Scrolled {
        bounds: viewport.bounds(),
        offset: viewport.absolute_offset(),
    });

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(button) = scroll_to_top::view(
        ctx.scroll_to_top,
        Message::ScrollToTop,
        ctx.env.reduce_motion,
        ctx.env.now,
    ) {
        // Stays clear of the chat launcher when the chat is shown.
        let bottom = if ctx.chat.is_some() {
            spacing::LG + sizing::FLOATING_BUTTON + spacing::SM
        } else {
            spacing::LG
        };
        layers = layers.push(
            Container::new(button)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(Padding {
                    top: 0.0,
                    right: spacing::LG,
                    bottom,
                    left: 0.0,
                }),
        );
    }

    if let Some(state) = ctx.chat {
        layers = layers.push(
            chat::view(chat::ViewContext {
                i18n: ctx.i18n,
                state,
                owner: ctx.owner.split_whitespace().next().unwrap_or(ctx.owner),
                window_width: ctx.window_width,
                reduce_motion: ctx.env.reduce_motion,
                now: ctx.env.now,
            })
            .map(Message::Chat),
        );
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    Container::new(Column::new().push(header).push(layers))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
