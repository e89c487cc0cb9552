// SPDX-License-Identifier: MPL-2.0
//! In-page navigation: section anchors and the current location fragment.

use std::fmt;

/// The `#section` part of a location, stored without the leading `#`.
///
/// # Example
///
/// ```
/// use iced_folio::navigation::Fragment;
///
/// let fragment = Fragment::parse("#contact").unwrap();
/// assert_eq!(fragment.as_str(), "contact");
/// assert_eq!(fragment.to_string(), "#contact");
/// assert!(Fragment::parse("#").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
    /// Parses `"#id"` or `"id"`. Empty fragments are `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let id = raw.trim();
        let id = id.strip_prefix('#').unwrap_or(id).trim();
        if id.is_empty() {
            None
        } else {
            Some(Self(id.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<SectionId> for Fragment {
    fn from(section: SectionId) -> Self {
        Self(section.anchor().to_string())
    }
}

/// Top-level page sections in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Blog,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Blog,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Sections built lazily, in page order.
    pub const LAZY: [SectionId; 5] = [
        SectionId::About,
        SectionId::Projects,
        SectionId::Blog,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Sections listed in the header navigation.
    pub const NAV: [SectionId; 5] = Self::LAZY;

    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Blog => "blog",
            SectionId::Experience => "experience",
            SectionId::Contact => "contact",
        }
    }

    /// i18n key of the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::About => "nav-about",
            SectionId::Projects => "nav-projects",
            SectionId::Blog => "nav-blog",
            SectionId::Experience => "nav-experience",
            SectionId::Contact => "nav-contact",
        }
    }

    /// Section targeted by a fragment, if any.
    #[must_use]
    pub fn from_fragment(fragment: &Fragment) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor().eq_ignore_ascii_case(fragment.as_str()))
    }
}

/// Current page location, reduced to its fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    fragment: Option<Fragment>,
}

impl Location {
    #[must_use]
    pub fn new(fragment: Option<Fragment>) -> Self {
        Self { fragment }
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// Moves to `fragment`. Returns `true` when the fragment changed, which is
    /// when a fragment-change event fires.
    pub fn navigate(&mut self, fragment: Fragment) -> bool {
        if self.fragment.as_ref() == Some(&fragment) {
            return false;
        }
        self.fragment = Some(fragment);
        true
    }
}
