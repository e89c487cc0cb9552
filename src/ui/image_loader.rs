// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image loading for the portrait and card images.
//!
//! Each source is decoded once on a blocking thread. An empty source counts
//! as loaded right away. A failed load also counts as loaded: the
//! placeholder stays and a warning is logged.

use crate::error::{Error, Result};
use crate::ui::design_tokens::{radius, sizing};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{container, image, svg, Container};
use iced::{ContentFit, Element, Length, Theme};
use std::collections::HashMap;
use std::path::PathBuf;

/// Load progress of one source.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(image::Handle),
    /// Empty source or failed load.
    Missing,
}

impl ImageState {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !matches!(self, ImageState::Loading)
    }

    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        match self {
            ImageState::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

/// Every image the page asked for, keyed by source path.
#[derive(Debug, Default)]
pub struct ImageLibrary {
    slots: HashMap<String, ImageState>,
}

impl ImageLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `source`. Returns the path to decode when a load must start.
    pub fn request(&mut self, source: &str) -> Option<PathBuf> {
        let source = source.trim();
        if source.is_empty() || self.slots.contains_key(source) {
            return None;
        }
        self.slots.insert(source.to_string(), ImageState::Loading);
        Some(PathBuf::from(source))
    }

    /// Records the outcome of a load started by [`request`](Self::request).
    pub fn finish(&mut self, source: &str, result: Result<image::Handle>) {
        let state = match result {
            Ok(handle) => ImageState::Ready(handle),
            Err(err) => {
                tracing::warn!(source, %err, "failed to load image");
                ImageState::Missing
            }
        };
        self.slots.insert(source.trim().to_string(), state);
    }

    /// State of `source`; empty or absent sources are already loaded.
    #[must_use]
    pub fn state(&self, source: Option<&str>) -> ImageState {
        match source.map(str::trim) {
            None | Some("") => ImageState::Missing,
            Some(source) => self
                .slots
                .get(source)
                .cloned()
                .unwrap_or(ImageState::Loading),
        }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.slots
            .values()
            .filter(|state| !state.is_loaded())
            .count()
    }
}

/// Decodes `path` into an RGBA handle off the UI thread.
pub async fn decode(path: PathBuf) -> Result<image::Handle> {
    tokio::task::spawn_blocking(move || {
        let decoded = image_rs::open(&path).map_err(|err| Error::Image(err.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
    })
    .await
    .map_err(|err| Error::Image(err.to_string()))?
}

/// Image filling a box of `height`, or a neutral placeholder showing `icon`
/// while loading or missing.
pub fn view<'a, Message: 'a>(
    state: ImageState,
    width: Length,
    height: f32,
    icon: svg::Handle,
    alpha: f32,
) -> Element<'a, Message> {
    match state {
        ImageState::Ready(handle) => image(handle)
            .width(width)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        ImageState::Loading | ImageState::Missing => placeholder(width, height, icon, alpha),
    }
}

/// Muted box with a centered icon.
pub fn placeholder<'a, Message: 'a>(
    width: Length,
    height: f32,
    icon: svg::Handle,
    alpha: f32,
) -> Element<'a, Message> {
    Container::new(icons::themed(
        icon,
        sizing::ICON_LG,
        |c: &ColorScheme| c.text_muted,
        alpha,
    ))
    .center_x(width)
    .center_y(Length::Fixed(height))
    .style(move |theme: &Theme| container::Style {
        border: iced::Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..styles::container::bubble(alpha)(theme)
    })
    .into()
}
