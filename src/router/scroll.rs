//! Scroll reset on navigation.

use super::location::Location;

/// Wraps the routed body. Every time the location changes it snaps the body
/// back to the top and greets the new path in the log. Rendering of the body
/// never waits on it.
#[derive(Debug, Default)]
pub struct ScrollReset {
    last: Option<Location>,
    offset: u16,
}

impl ScrollReset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the location differs from the last one observed and
    /// the reset was performed.
    pub fn observe(&mut self, location: &Location) -> bool {
        if self.last.as_ref() == Some(location) {
            return false;
        }
        self.last = Some(location.clone());
        self.offset = 0;
        tracing::info!(path = %location, "You are welcomed to {}", location);
        true
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.offset).saturating_add(delta);
        self.offset = next.clamp(0, i32::from(u16::MAX)) as u16;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_location_triggers_reset() {
        let mut scroll = ScrollReset::new();
        assert!(scroll.observe(&Location::root()));
    }

    #[test]
    fn same_location_does_not_retrigger() {
        let mut scroll = ScrollReset::new();
        scroll.observe(&Location::root());
        scroll.scroll_by(4);
        assert!(!scroll.observe(&Location::root()));
        assert_eq!(scroll.offset(), 4);
    }

    #[test]
    fn new_location_resets_offset() {
        let mut scroll = ScrollReset::new();
        scroll.observe(&Location::root());
        scroll.scroll_by(10);
        assert!(scroll.observe(&Location::parse("/about")));
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn scrolling_up_stops_at_top() {
        let mut scroll = ScrollReset::new();
        scroll.scroll_by(-3);
        assert_eq!(scroll.offset(), 0);
    }
}
