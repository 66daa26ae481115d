use crate::catalog::SectionId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Vertical scroll offset past which the nav bar compacts.
    pub scroll_threshold: f64,
    /// Distance from the viewport top of the line a section must straddle to
    /// become active.
    pub reference_line: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            reference_line: 150.0,
        }
    }
}

/// Viewport-relative vertical edges of a rendered section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: SectionId, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }

    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

pub fn is_scrolled_past(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Picks the section straddling `reference_line`.
///
/// Every bound is checked and the last qualifying one wins, so when sections
/// overlap the line the later one in page order is highlighted. When nothing
/// qualifies the `previous` section stays active.
pub fn resolve_active_section(
    bounds: &[SectionBounds],
    reference_line: f64,
    previous: SectionId,
) -> SectionId {
    bounds
        .iter()
        .filter(|b| b.straddles(reference_line))
        .last()
        .map(|b| b.id)
        .unwrap_or(previous)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub scrolled: bool,
    pub active: SectionId,
}

#[derive(Debug, Default, Clone)]
pub struct ViewportTracker {
    config: TrackerConfig,
    state: ViewportState,
}

impl ViewportTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: ViewportState::default(),
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn observe(&mut self, offset: f64, bounds: &[SectionBounds]) -> ViewportState {
        let next = ViewportState {
            scrolled: is_scrolled_past(offset, self.config.scroll_threshold),
            active: resolve_active_section(bounds, self.config.reference_line, self.state.active),
        };
        if next.active != self.state.active {
            log::debug!("active section {} -> {}", self.state.active, next.active);
        }
        self.state = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SECTIONS;

    /// Stacks sections of the given heights from `scroll_offset` upwards, the
    /// way they would be laid out on the page.
    fn layout(heights: [f64; 5], scroll_offset: f64) -> Vec<SectionBounds> {
        let mut top = -scroll_offset;
        SECTIONS
            .iter()
            .zip(heights)
            .map(|(section, height)| {
                let bounds = SectionBounds::new(section.id, top, top + height);
                top += height;
                bounds
            })
            .collect()
    }

    #[test]
    fn test_scroll_threshold_boundary() {
        assert!(!is_scrolled_past(0.0, 50.0));
        assert!(!is_scrolled_past(50.0, 50.0));
        assert!(is_scrolled_past(50.5, 50.0));
        assert!(is_scrolled_past(1200.0, 50.0));
    }

    #[test]
    fn test_section_straddling_reference_line() {
        let bounds = vec![
            SectionBounds::new(SectionId::Home, -800.0, -200.0),
            SectionBounds::new(SectionId::About, -200.0, 100.0),
            SectionBounds::new(SectionId::Skills, 100.0, 400.0),
            SectionBounds::new(SectionId::Projects, 400.0, 900.0),
            SectionBounds::new(SectionId::Contact, 900.0, 1400.0),
        ];
        assert_eq!(
            resolve_active_section(&bounds, 150.0, SectionId::Home),
            SectionId::Skills
        );
    }

    #[test]
    fn test_edges_are_inclusive() {
        let top_edge = [SectionBounds::new(SectionId::About, 150.0, 600.0)];
        assert_eq!(
            resolve_active_section(&top_edge, 150.0, SectionId::Home),
            SectionId::About
        );

        let bottom_edge = [SectionBounds::new(SectionId::About, -300.0, 150.0)];
        assert_eq!(
            resolve_active_section(&bottom_edge, 150.0, SectionId::Home),
            SectionId::About
        );
    }

    #[test]
    fn test_last_match_wins() {
        // About ends exactly where Skills starts, both touch the line
        let bounds = vec![
            SectionBounds::new(SectionId::About, -200.0, 150.0),
            SectionBounds::new(SectionId::Skills, 150.0, 500.0),
        ];
        assert_eq!(
            resolve_active_section(&bounds, 150.0, SectionId::Home),
            SectionId::Skills
        );

        // fully overlapping sections, later in the list wins regardless of size
        let bounds = vec![
            SectionBounds::new(SectionId::Home, 0.0, 1000.0),
            SectionBounds::new(SectionId::Contact, 140.0, 160.0),
            SectionBounds::new(SectionId::Projects, 100.0, 200.0),
        ];
        assert_eq!(
            resolve_active_section(&bounds, 150.0, SectionId::Home),
            SectionId::Projects
        );
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let bounds = vec![
            SectionBounds::new(SectionId::Home, 200.0, 900.0),
            SectionBounds::new(SectionId::About, 900.0, 1400.0),
        ];
        assert_eq!(
            resolve_active_section(&bounds, 150.0, SectionId::Projects),
            SectionId::Projects
        );
        assert_eq!(
            resolve_active_section(&[], 150.0, SectionId::Contact),
            SectionId::Contact
        );
    }

    #[test]
    fn test_non_finite_geometry_never_matches() {
        let bounds = [SectionBounds::new(SectionId::Skills, f64::NAN, f64::NAN)];
        assert_eq!(
            resolve_active_section(&bounds, 150.0, SectionId::About),
            SectionId::About
        );
    }

    #[test]
    fn test_tracker_follows_scrolling() {
        let mut tracker = ViewportTracker::default();
        assert_eq!(tracker.state(), ViewportState::default());
        assert_eq!(tracker.state().active, SectionId::Home);

        let heights = [800.0, 600.0, 500.0, 900.0, 700.0];

        let state = tracker.observe(0.0, &layout(heights, 0.0));
        assert!(!state.scrolled);
        assert_eq!(state.active, SectionId::Home);

        let state = tracker.observe(50.0, &layout(heights, 50.0));
        assert!(!state.scrolled);
        assert_eq!(state.active, SectionId::Home);

        // About spans [800, 1400] on the page, line sits at 700 + 150
        let state = tracker.observe(700.0, &layout(heights, 700.0));
        assert!(state.scrolled);
        assert_eq!(state.active, SectionId::About);

        let state = tracker.observe(2000.0, &layout(heights, 2000.0));
        assert_eq!(state.active, SectionId::Projects);

        // scrolled past the end of the page, nothing straddles the line
        let state = tracker.observe(5000.0, &layout(heights, 5000.0));
        assert_eq!(state.active, SectionId::Projects);
        assert_eq!(tracker.state(), state);

        let state = tracker.observe(0.0, &layout(heights, 0.0));
        assert!(!state.scrolled);
        assert_eq!(state.active, SectionId::Home);
    }

    #[test]
    fn test_active_section_is_always_known() {
        let mut tracker = ViewportTracker::default();
        let heights = [400.0, 300.0, 300.0, 300.0, 300.0];
        let mut offset = -500.0;
        while offset < 3000.0 {
            let state = tracker.observe(offset, &layout(heights, offset));
            assert!(SECTIONS.iter().any(|s| s.id == state.active));
            offset += 37.5;
        }
    }

    #[test]
    fn test_custom_config() {
        let mut tracker = ViewportTracker::new(TrackerConfig {
            scroll_threshold: 0.0,
            reference_line: 0.0,
        });
        // Skills spans [-50, 50] once the page is scrolled by 250
        let state = tracker.observe(1.0, &layout([100.0; 5], 250.0));
        assert!(state.scrolled);
        assert_eq!(state.active, SectionId::Skills);
    }
}
