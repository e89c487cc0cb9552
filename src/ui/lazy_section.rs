// SPDX-License-Identifier: MPL-2.0
//! Viewport-gated content loading.
//!
//! A [`LazySection`] keeps its content unbuilt until one of three things
//! happens first:
//!
//! 1. Its region becomes visible by at least the [`VisibilityThreshold`].
//! 2. The location already carries a fragment when the section mounts.
//! 3. The fragment changes after the section mounted.
//!
//! The gate is one-way. Once triggered the content is built exactly once and
//! stays built, even after the region scrolls out of view again.
//!
//! # Example
//!
//! ```
//! use iced_folio::navigation::Location;
//! use iced_folio::ui::lazy_section::{GateState, LazySection};
//!
//! let mut section: LazySection<Vec<&str>> = LazySection::new(Default::default(), Default::default());
//! section.mount(&Location::default());
//! assert_eq!(section.state(), GateState::Dormant);
//!
//! section.observe(0.5, || vec!["built"]);
//! assert_eq!(section.content(), Some(&vec!["built"]));
//! ```

use crate::app::config::FragmentScope;
use crate::navigation::{Fragment, Location, SectionId};
use crate::ui::state::VisibilityThreshold;
use iced::widget::{container, Space};
use iced::{Element, Length};

/// Whether a section's content has been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Dormant,
    Triggered,
}

/// What moved a gate out of `Dormant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerCause {
    Visible,
    InitialFragment,
    FragmentChanged,
}

/// Listeners a mounted gate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateListeners {
    pub visibility: bool,
    pub initial_fragment: bool,
    pub fragment_change: bool,
}

impl GateListeners {
    #[must_use]
    pub fn any(self) -> bool {
        self.visibility || self.initial_fragment || self.fragment_change
    }
}

/// Two-state gate with a single guarded transition.
#[derive(Debug, Clone, Default)]
pub struct ViewportGate {
    state: GateState,
    threshold: VisibilityThreshold,
    scope: FragmentScope,
    section: Option<SectionId>,
    listeners: GateListeners,
}

impl ViewportGate {
    #[must_use]
    pub fn new(threshold: VisibilityThreshold, scope: FragmentScope) -> Self {
        Self {
            threshold,
            scope,
            ..Self::default()
        }
    }

    /// Names the section this gate wraps, used by [`FragmentScope::Matching`].
    #[must_use]
    pub fn for_section(mut self, section: SectionId) -> Self {
        self.section = Some(section);
        self
    }

    /// Registers listeners and checks the location's fragment.
    pub fn mount(&mut self, location: &Location) -> Option<TriggerCause> {
        self.listeners = GateListeners {
            visibility: true,
            initial_fragment: true,
            fragment_change: true,
        };

        // The initial fragment check runs once at mount time
        self.listeners.initial_fragment = false;
        match location.fragment() {
            Some(fragment) if self.accepts(fragment) => {
                self.trigger(TriggerCause::InitialFragment)
            }
            _ => None,
        }
    }

    /// Reports the fraction of the region currently in view.
    pub fn observe(&mut self, visible_ratio: f32) -> Option<TriggerCause> {
        if !self.listeners.visibility || !self.threshold.is_met(visible_ratio) {
            return None;
        }
        let cause = self.trigger(TriggerCause::Visible);
        // One-shot observation
        self.listeners.visibility = false;
        cause
    }

    /// Reports a fragment-change event.
    pub fn fragment_changed(&mut self, fragment: &Fragment) -> Option<TriggerCause> {
        if !self.listeners.fragment_change || !self.accepts(fragment) {
            return None;
        }
        self.trigger(TriggerCause::FragmentChanged)
    }

    /// Releases every listener, whatever state the gate is in.
    pub fn unmount(&mut self) {
        self.listeners = GateListeners::default();
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.state == GateState::Triggered
    }

    #[must_use]
    pub fn listeners(&self) -> GateListeners {
        self.listeners
    }

    #[must_use]
    pub fn threshold(&self) -> VisibilityThreshold {
        self.threshold
    }

    fn accepts(&self, fragment: &Fragment) -> bool {
        match (self.scope, self.section) {
            (FragmentScope::Matching, Some(section)) => {
                SectionId::from_fragment(fragment) == Some(section)
            }
            _ => true,
        }
    }

    fn trigger(&mut self, cause: TriggerCause) -> Option<TriggerCause> {
        if self.state == GateState::Triggered {
            return None;
        }
        self.state = GateState::Triggered;
        self.listeners.visibility = false;
        tracing::debug!(section = ?self.section, ?cause, "lazy section triggered");
        Some(cause)
    }
}

/// A gate plus the content it guards.
#[derive(Debug, Clone, Default)]
pub struct LazySection<S> {
    gate: ViewportGate,
    content: Option<S>,
    builds: usize,
}

impl<S> LazySection<S> {
    #[must_use]
    pub fn new(threshold: VisibilityThreshold, scope: FragmentScope) -> Self {
        Self::with_gate(ViewportGate::new(threshold, scope))
    }

    #[must_use]
    pub fn with_gate(gate: ViewportGate) -> Self {
        Self {
            gate,
            content: None,
            builds: 0,
        }
    }

    /// Mounts the section; builds immediately when a fragment is present.
    pub fn mount(&mut self, location: &Location) -> Option<TriggerCause> {
        self.gate.mount(location)
    }

    pub fn observe(&mut self, visible_ratio: f32, build: impl FnOnce() -> S) -> Option<TriggerCause> {
        let cause = self.gate.observe(visible_ratio);
        self.build_if_triggered(build);
        cause
    }

    pub fn fragment_changed(
        &mut self,
        fragment: &Fragment,
        build: impl FnOnce() -> S,
    ) -> Option<TriggerCause> {
        let cause = self.gate.fragment_changed(fragment);
        self.build_if_triggered(build);
        cause
    }

    /// Builds the content if the gate fired and nothing was built yet.
    ///
    /// Returns `true` when this call built the content.
    pub fn build_if_triggered(&mut self, build: impl FnOnce() -> S) -> bool {
        if self.gate.is_triggered() && self.content.is_none() {
            self.content = Some(build());
            self.builds += 1;
            true
        } else {
            false
        }
    }

    pub fn unmount(&mut self) {
        self.gate.unmount();
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.gate.state()
    }

    #[must_use]
    pub fn gate(&self) -> &ViewportGate {
        &self.gate
    }

    #[must_use]
    pub fn content(&self) -> Option<&S> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut S> {
        self.content.as_mut()
    }

    /// Number of times the content was built. Never exceeds one.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds
    }

    /// Renders the content, or an empty placeholder while dormant.
    pub fn view<'a, Message: 'a>(
        &'a self,
        placeholder_height: f32,
        render: impl FnOnce(&'a S) -> Element<'a, Message>,
    ) -> Element<'a, Message> {
        match &self.content {
            Some(content) => render(content),
            None => placeholder(placeholder_height),
        }
    }
}

/// Empty box holding the place of an unbuilt section.
pub fn placeholder<'a, Message: 'a>(height: f32) -> Element<'a, Message> {
    container(Space::new().width(Length::Fill).height(Length::Fixed(height)))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> LazySection<String> {
        LazySection::new(VisibilityThreshold::default(), FragmentScope::Any)
    }

    fn build() -> String {
        "content".to_string()
    }

    #[test]
    fn dormant_without_fragment_or_visibility() {
        let mut lazy = section();
        assert_eq!(lazy.mount(&Location::default()), None);
        assert_eq!(lazy.state(), GateState::Dormant);
        assert!(lazy.content().is_none());

        assert_eq!(lazy.observe(0.05, build), None);
        assert!(lazy.content().is_none());
        assert_eq!(lazy.build_count(), 0);
    }

    #[test]
    fn visibility_builds_once_and_stays_built() {
        let mut lazy = section();
        lazy.mount(&Location::default());

        assert_eq!(lazy.observe(0.1, build), Some(TriggerCause::Visible));
        assert_eq!(lazy.build_count(), 1);
        assert!(!lazy.gate().listeners().visibility);

        // Scrolled back out of view
        assert_eq!(lazy.observe(0.0, build), None);
        assert_eq!(lazy.observe(1.0, build), None);
        assert_eq!(lazy.content().map(String::as_str), Some("content"));
        assert_eq!(lazy.build_count(), 1);
    }

    #[test]
    fn initial_fragment_builds_without_visibility() {
        let mut lazy = section();
        let location = Location::new(Fragment::parse("#contact"));
        assert_eq!(lazy.mount(&location), Some(TriggerCause::InitialFragment));
        assert!(lazy.build_if_triggered(build));
        assert_eq!(lazy.state(), GateState::Triggered);
        assert!(!lazy.build_if_triggered(build));
    }

    #[test]
    fn fragment_change_is_idempotent() {
        let mut lazy = section();
        lazy.mount(&Location::default());
        let fragment = Fragment::parse("#projects").unwrap();

        assert_eq!(
            lazy.fragment_changed(&fragment, build),
            Some(TriggerCause::FragmentChanged)
        );
        assert_eq!(lazy.fragment_changed(&fragment, build), None);
        assert_eq!(lazy.build_count(), 1);
    }

    #[test]
    fn matching_scope_ignores_other_sections() {
        let gate = ViewportGate::new(VisibilityThreshold::default(), FragmentScope::Matching)
            .for_section(SectionId::Contact);
        let mut lazy: LazySection<String> = LazySection::with_gate(gate);
        lazy.mount(&Location::new(Fragment::parse("#about")));
        assert_eq!(lazy.state(), GateState::Dormant);

        assert_eq!(
            lazy.fragment_changed(&Fragment::parse("#blog").unwrap(), build),
            None
        );
        assert_eq!(
            lazy.fragment_changed(&Fragment::parse("#contact").unwrap(), build),
            Some(TriggerCause::FragmentChanged)
        );
    }

    #[test]
    fn any_scope_triggers_on_unrelated_fragment() {
        let gate = ViewportGate::new(VisibilityThreshold::default(), FragmentScope::Any)
            .for_section(SectionId::Contact);
        let mut lazy: LazySection<String> = LazySection::with_gate(gate);
        assert_eq!(
            lazy.mount(&Location::new(Fragment::parse("#about"))),
            Some(TriggerCause::InitialFragment)
        );
    }

    #[test]
    fn unmount_releases_all_listeners() {
        let mut dormant = section();
        dormant.mount(&Location::default());
        assert!(dormant.gate().listeners().any());
        dormant.unmount();
        assert!(!dormant.gate().listeners().any());

        // Released gates ignore later events
        assert_eq!(dormant.observe(1.0, build), None);
        assert_eq!(
            dormant.fragment_changed(&Fragment::parse("#blog").unwrap(), build),
            None
        );
        assert_eq!(dormant.state(), GateState::Dormant);

        let mut triggered = section();
        triggered.mount(&Location::new(Fragment::parse("#blog")));
        triggered.unmount();
        assert!(!triggered.gate().listeners().any());
    }

    #[test]
    fn unmounted_gate_ignores_events() {
        let mut gate = ViewportGate::new(VisibilityThreshold::new(0.5), FragmentScope::Any);
        assert_eq!(gate.observe(0.9), None);
        assert_eq!(gate.state(), GateState::Dormant);
        gate.mount(&Location::default());
        assert_eq!(gate.observe(0.4), None);
        assert_eq!(gate.observe(0.5), Some(TriggerCause::Visible));
    }
}
