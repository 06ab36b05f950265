//! Scroll-triggered reveal state for page sections.
//!
//! Sections fade in when scrolled into view and fade back out when the
//! user scrolls back up past them. The transition rule is a pure function
//! over (state, visibility ratio, scroll direction) so it can be tested
//! without a terminal; the controller adds per-section bookkeeping and
//! exactly-once transition reporting on top.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

/// Transition reported once per crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    Entered,
    Exited,
}

/// Visibility-ratio band that drives reveal transitions.
///
/// The band is a configurable pair: a section reveals once its visible
/// ratio reaches `lower`, and un-reveals only when an upward scroll drops
/// the ratio back below `lower`. `upper` marks the end of the band and is
/// carried as configuration; crossing above it never hides a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerZone {
    pub lower: f64,
    pub upper: f64,
}

impl TriggerZone {
    pub fn new(lower: f64, upper: f64) -> Self {
        let lower = lower.clamp(0.0, 1.0);
        let upper = upper.clamp(0.0, 1.0);
        if lower <= upper {
            Self { lower, upper }
        } else {
            Self {
                lower: upper,
                upper: lower,
            }
        }
    }
}

impl Default for TriggerZone {
    fn default() -> Self {
        Self::new(0.2, 0.8)
    }
}

/// Pure reveal transition rule.
///
/// Entry is direction-agnostic: reaching the band reveals, and a ratio
/// that jumped past the whole band between two callbacks still counts as
/// having entered. Exit happens only while scrolling up, below the lower
/// bound.
pub fn step(
    current: RevealState,
    ratio: f64,
    direction: ScrollDirection,
    zone: &TriggerZone,
) -> RevealState {
    match current {
        RevealState::Hidden if ratio >= zone.lower => RevealState::Visible,
        RevealState::Visible
            if direction == ScrollDirection::Up && ratio < zone.lower =>
        {
            RevealState::Hidden
        }
        other => other,
    }
}

#[derive(Debug, Clone)]
struct SectionReveal {
    zone: TriggerZone,
    state: RevealState,
}

/// Tracks reveal state for every observed section of the page.
#[derive(Debug, Clone)]
pub struct RevealController<K> {
    sections: HashMap<K, SectionReveal>,
    animations_enabled: bool,
}

impl<K: Hash + Eq + Clone> RevealController<K> {
    /// With animations disabled (no TTY, reduced motion) every observed
    /// section is visible immediately and can never be hidden; content
    /// must not depend on animation capability.
    pub fn new(animations_enabled: bool) -> Self {
        Self {
            sections: HashMap::new(),
            animations_enabled,
        }
    }

    /// Register a section with its trigger zone
    pub fn observe(&mut self, id: K, zone: TriggerZone) {
        let state = if self.animations_enabled {
            RevealState::Hidden
        } else {
            RevealState::Visible
        };
        self.sections.insert(id, SectionReveal { zone, state });
    }

    /// Feed one visibility sample for a section.
    ///
    /// Returns the transition if this sample crossed a boundary, `None`
    /// for repeat samples on the same side of it. Unknown ids are ignored.
    pub fn on_visibility(
        &mut self,
        id: &K,
        ratio: f64,
        direction: ScrollDirection,
    ) -> Option<RevealTransition> {
        if !self.animations_enabled {
            return None;
        }
        let section = self.sections.get_mut(id)?;
        let next = step(section.state, ratio, direction, &section.zone);
        if next == section.state {
            return None;
        }
        section.state = next;
        match next {
            RevealState::Visible => Some(RevealTransition::Entered),
            RevealState::Hidden => Some(RevealTransition::Exited),
        }
    }

    /// Current state of a section. Unregistered ids read as Visible so a
    /// wiring gap can never suspend content.
    pub fn state(&self, id: &K) -> RevealState {
        self.sections
            .get(id)
            .map(|s| s.state)
            .unwrap_or(RevealState::Visible)
    }

    pub fn is_visible(&self, id: &K) -> bool {
        self.state(id) == RevealState::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RevealController<&'static str> {
        let mut c = RevealController::new(true);
        c.observe("events", TriggerZone::new(0.2, 0.8));
        c
    }

    #[test]
    fn test_reveal_on_scroll_down_into_zone() {
        let mut c = controller();
        assert_eq!(c.state(&"events"), RevealState::Hidden);

        assert_eq!(
            c.on_visibility(&"events", 0.5, ScrollDirection::Down),
            Some(RevealTransition::Entered)
        );
        assert_eq!(c.state(&"events"), RevealState::Visible);
    }

    #[test]
    fn test_reveal_reported_once_per_crossing() {
        let mut c = controller();
        assert!(c.on_visibility(&"events", 0.5, ScrollDirection::Down).is_some());
        // Repeat samples inside the zone are not re-reported
        assert!(c.on_visibility(&"events", 0.6, ScrollDirection::Down).is_none());
        assert!(c.on_visibility(&"events", 0.7, ScrollDirection::Down).is_none());
    }

    #[test]
    fn test_scrolling_down_past_zone_keeps_visible() {
        let mut c = controller();
        c.on_visibility(&"events", 0.5, ScrollDirection::Down);
        assert!(c.on_visibility(&"events", 0.9, ScrollDirection::Down).is_none());
        assert_eq!(c.state(&"events"), RevealState::Visible);
    }

    #[test]
    fn test_hide_only_on_upward_drop_below_lower() {
        let mut c = controller();
        c.on_visibility(&"events", 0.5, ScrollDirection::Down);

        // Dropping below the bound while still scrolling down: stays visible
        assert!(c.on_visibility(&"events", 0.1, ScrollDirection::Down).is_none());
        assert_eq!(c.state(&"events"), RevealState::Visible);

        // Same ratio scrolling up: hides, exactly once
        assert_eq!(
            c.on_visibility(&"events", 0.1, ScrollDirection::Up),
            Some(RevealTransition::Exited)
        );
        assert!(c.on_visibility(&"events", 0.05, ScrollDirection::Up).is_none());
    }

    #[test]
    fn test_re_entry_retriggers() {
        let mut c = controller();
        c.on_visibility(&"events", 0.5, ScrollDirection::Down);
        c.on_visibility(&"events", 0.1, ScrollDirection::Up);
        assert_eq!(
            c.on_visibility(&"events", 0.3, ScrollDirection::Down),
            Some(RevealTransition::Entered)
        );
    }

    #[test]
    fn test_entry_is_direction_agnostic() {
        let mut c = controller();
        // Section re-entering from above while scrolling up
        assert_eq!(
            c.on_visibility(&"events", 0.4, ScrollDirection::Up),
            Some(RevealTransition::Entered)
        );
    }

    #[test]
    fn test_fast_scroll_past_whole_zone_still_enters() {
        let mut c = controller();
        // One sample jumped from below the band to above it
        assert_eq!(
            c.on_visibility(&"events", 0.95, ScrollDirection::Down),
            Some(RevealTransition::Entered)
        );
    }

    #[test]
    fn test_disabled_defaults_to_visible() {
        let mut c: RevealController<&str> = RevealController::new(false);
        c.observe("hero", TriggerZone::default());
        assert_eq!(c.state(&"hero"), RevealState::Visible);
        // No transitions ever fire, nothing can hide the section
        assert!(c.on_visibility(&"hero", 0.0, ScrollDirection::Up).is_none());
        assert_eq!(c.state(&"hero"), RevealState::Visible);
    }

    #[test]
    fn test_unknown_section_reads_visible() {
        let mut c = controller();
        assert!(c.on_visibility(&"missing", 0.5, ScrollDirection::Down).is_none());
        assert!(c.is_visible(&"missing"));
    }

    #[test]
    fn test_swapped_zone_bounds_are_normalized() {
        let zone = TriggerZone::new(0.8, 0.2);
        assert_eq!(zone.lower, 0.2);
        assert_eq!(zone.upper, 0.8);
    }
}
