// SPDX-License-Identifier: MPL-2.0
//! Page geometry.
//!
//! Every section has a fixed height derived from its content and the window
//! width, so section regions, scroll targets and visibility ratios are known
//! without measuring widgets. Views render each section at exactly the height
//! computed here.

use crate::navigation::SectionId;
use crate::ui::design_tokens::{breakpoint, sizing, spacing};
use crate::ui::state::Span;

/// Line height multiplier of rendered text.
pub const LINE_HEIGHT: f32 = 1.3;

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH: f32 = 0.52;

/// Vertical room reserved around a sliding text element.
pub const TEXT_RESERVE: f32 = 10.0;

/// Vertical room reserved around a sliding section block.
pub const BLOCK_RESERVE: f32 = 20.0;

/// Hover lift of a card, reserved above every card.
pub const CARD_LIFT: f32 = 5.0;

pub const CARD_IMAGE_HEIGHT: f32 = 160.0;
pub const FOOTER_HEIGHT: f32 = 96.0;

/// Height of a small pill badge.
pub const BADGE_HEIGHT: f32 = 12.0 * LINE_HEIGHT + 2.0 * spacing::XXS;

/// Width-dependent layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub window_width: f32,
    /// Width available to section content after gutters.
    pub content_width: f32,
    /// Horizontal page padding on each side.
    pub gutter: f32,
    /// Card grid columns.
    pub columns: usize,
    /// Narrow layout: hamburger menu and compact section padding.
    pub compact: bool,
}

impl Metrics {
    #[must_use]
    pub fn new(window_width: f32) -> Self {
        let window_width = window_width.max(1.0);
        let gutter = if window_width < breakpoint::SM {
            spacing::MD
        } else {
            spacing::LG
        };
        let content_width =
            (window_width.min(sizing::CONTENT_MAX_WIDTH + 2.0 * gutter) - 2.0 * gutter).max(1.0);

        Self {
            window_width,
            content_width,
            gutter,
            columns: columns_for(window_width),
            compact: window_width < breakpoint::MD,
        }
    }

    /// Vertical padding above and below a section.
    #[must_use]
    pub fn section_padding(&self) -> f32 {
        if self.compact {
            spacing::SECTION_COMPACT
        } else {
            spacing::SECTION
        }
    }

    /// Columns of the skills grid.
    #[must_use]
    pub fn skill_columns(&self) -> usize {
        if self.window_width < breakpoint::SM {
            1
        } else if self.window_width < breakpoint::LG {
            2
        } else {
            4
        }
    }

    /// Whether two-column sections sit side by side.
    #[must_use]
    pub fn split(&self) -> bool {
        self.window_width >= breakpoint::MD
    }

    /// Width of one of `columns` equal columns separated by `gap`.
    #[must_use]
    pub fn column_width(&self, columns: usize, gap: f32) -> f32 {
        let columns = columns.max(1) as f32;
        ((self.content_width - gap * (columns - 1.0)) / columns).max(1.0)
    }
}

/// Card grid columns for a window width.
#[must_use]
pub fn columns_for(window_width: f32) -> usize {
    if window_width < breakpoint::SM {
        1
    } else if window_width < breakpoint::LG {
        2
    } else {
        3
    }
}

#[must_use]
pub fn line_height(size: f32) -> f32 {
    size * LINE_HEIGHT
}

/// Estimated number of lines `text` wraps to at `size` within `width`.
#[must_use]
pub fn wrapped_lines(text: &str, size: f32, width: f32) -> usize {
    let per_line = ((width / (size * GLYPH_WIDTH)).floor() as usize).max(1);
    text.lines()
        .map(|line| line.chars().count().div_ceil(per_line).max(1))
        .sum::<usize>()
        .max(1)
}

#[must_use]
pub fn text_height(text: &str, size: f32, width: f32) -> f32 {
    wrapped_lines(text, size, width) as f32 * line_height(size)
}

/// Height of `count` cards laid out in `columns` with `gap` between rows.
#[must_use]
pub fn grid_height(count: usize, columns: usize, card_height: f32, gap: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let rows = count.div_ceil(columns.max(1)) as f32;
    rows * card_height + (rows - 1.0) * gap
}

/// Rows of `items` chips of varying width flowing within `width`.
#[must_use]
pub fn chip_rows<'a>(
    items: impl IntoIterator<Item = &'a str>,
    size: f32,
    padding: f32,
    gap: f32,
    width: f32,
) -> usize {
    let mut rows = 0;
    let mut used = 0.0;
    for item in items {
        let chip = item.chars().count() as f32 * size * GLYPH_WIDTH + 2.0 * padding;
        if rows == 0 || used + gap + chip > width {
            rows += 1;
            used = chip;
        } else {
            used += gap + chip;
        }
    }
    rows
}

/// Vertical regions of every section plus the footer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    regions: Vec<(SectionId, Span)>,
    total_height: f32,
}

impl PageLayout {
    /// Stacks `heights` in order. The footer height is added at the end.
    #[must_use]
    pub fn stack(heights: impl IntoIterator<Item = (SectionId, f32)>, footer: f32) -> Self {
        let mut top = 0.0;
        let regions = heights
            .into_iter()
            .map(|(section, height)| {
                let span = Span::new(top, height);
                top += span.height;
                (section, span)
            })
            .collect();

        Self {
            regions,
            total_height: top + footer.max(0.0),
        }
    }

    #[must_use]
    pub fn region(&self, section: SectionId) -> Option<Span> {
        self.regions
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, span)| *span)
    }

    pub fn regions(&self) -> impl Iterator<Item = (SectionId, Span)> + '_ {
        self.regions.iter().copied()
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Page offset that brings `section` to the top of the viewport.
    #[must_use]
    pub fn scroll_target(&self, section: SectionId) -> f32 {
        self.region(section).map_or(0.0, |span| span.top)
    }

    /// Section whose region holds page position `y`.
    #[must_use]
    pub fn section_at(&self, y: f32) -> Option<SectionId> {
        self.regions
            .iter()
            .find(|(_, span)| y >= span.top && y < span.bottom())
            .map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn columns_follow_breakpoints() {
        assert_eq!(columns_for(375.0), 1);
        assert_eq!(columns_for(639.9), 1);
        assert_eq!(columns_for(640.0), 2);
        assert_eq!(columns_for(1023.0), 2);
        assert_eq!(columns_for(1024.0), 3);
        assert_eq!(columns_for(1920.0), 3);
    }

    #[test]
    fn metrics_cap_content_width() {
        let wide = Metrics::new(1920.0);
        assert_abs_diff_eq!(wide.content_width, sizing::CONTENT_MAX_WIDTH);
        assert!(!wide.compact);

        let phone = Metrics::new(375.0);
        assert_abs_diff_eq!(phone.content_width, 375.0 - 2.0 * spacing::MD);
        assert!(phone.compact);
        assert_eq!(phone.section_padding(), spacing::SECTION_COMPACT);
    }

    #[test]
    fn wrapping_estimate_grows_with_text() {
        let short = wrapped_lines("About Me", 36.0, 900.0);
        assert_eq!(short, 1);
        let long = "word ".repeat(200);
        assert!(wrapped_lines(&long, 14.0, 300.0) > 5);
        assert_eq!(wrapped_lines("", 14.0, 300.0), 1);
        assert_eq!(wrapped_lines("a\nb", 14.0, 300.0), 2);
    }

    #[test]
    fn grid_height_counts_rows() {
        assert_abs_diff_eq!(grid_height(0, 3, 100.0, 10.0), 0.0);
        assert_abs_diff_eq!(grid_height(3, 3, 100.0, 10.0), 100.0);
        assert_abs_diff_eq!(grid_height(4, 3, 100.0, 10.0), 210.0);
        assert_abs_diff_eq!(grid_height(3, 1, 100.0, 10.0), 320.0);
    }

    #[test]
    fn chips_wrap_to_new_rows() {
        let items = ["Python", "PyTorch", "Docker", "FastAPI"];
        assert_eq!(chip_rows(items, 12.0, 8.0, 8.0, 2000.0), 1);
        assert!(chip_rows(items, 12.0, 8.0, 8.0, 80.0) >= 4);
        assert_eq!(chip_rows(std::iter::empty(), 12.0, 8.0, 8.0, 80.0), 0);
    }

    #[test]
    fn stack_assigns_consecutive_regions() {
        let layout = PageLayout::stack(
            [
                (SectionId::Home, 600.0),
                (SectionId::About, 100.0),
                (SectionId::Projects, 800.0),
            ],
            96.0,
        );
        assert_eq!(layout.region(SectionId::About), Some(Span::new(600.0, 100.0)));
        assert_abs_diff_eq!(layout.scroll_target(SectionId::Projects), 700.0);
        assert_abs_diff_eq!(layout.total_height(), 1596.0);
        assert_eq!(layout.section_at(650.0), Some(SectionId::About));
        assert_eq!(layout.section_at(1550.0), None);
        assert_abs_diff_eq!(layout.scroll_target(SectionId::Contact), 0.0);
    }
}
