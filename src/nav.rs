/// A section needs at least this much of itself on screen to take the
/// active nav slot.
pub const SECTION_THRESHOLD: f32 = 0.3;
/// The nav bar stays out of the way while the hero is on screen.
pub const HERO_THRESHOLD: f32 = 0.1;

/// Scroll-spy for the nav bar: tracks which section currently owns the
/// active link, and whether the bar should be shown at all. Fed the same
/// per-frame visible-fraction batches as the reveal dispatcher.
pub struct NavHighlighter {
    visible: bool,
    active: Option<usize>,
}

impl NavHighlighter {
    pub fn new() -> Self {
        Self {
            visible: false,
            active: None,
        }
    }

    /// Hero visibility controls the bar itself: on screen means hidden.
    pub fn observe_hero(&mut self, fraction: f32) {
        self.visible = fraction < HERO_THRESHOLD;
    }

    /// One batch of `(section index, visible fraction)` notifications. The
    /// most visible section past the threshold becomes active; if none
    /// qualifies the previous active link is kept, so the highlight never
    /// flickers off between sections.
    pub fn observe_sections(&mut self, batch: &[(usize, f32)]) {
        let best = batch
            .iter()
            .filter(|(_, fraction)| *fraction >= SECTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((index, _)) = best {
            self.active = Some(*index);
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl Default for NavHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_with_no_active_link() {
        let nav = NavHighlighter::new();
        assert!(!nav.visible());
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn bar_hides_while_the_hero_is_on_screen() {
        let mut nav = NavHighlighter::new();
        nav.observe_hero(0.0);
        assert!(nav.visible());
        nav.observe_hero(0.5);
        assert!(!nav.visible());
        // right at the threshold still counts as on screen
        nav.observe_hero(HERO_THRESHOLD);
        assert!(!nav.visible());
    }

    #[test]
    fn most_visible_section_past_threshold_wins() {
        let mut nav = NavHighlighter::new();
        nav.observe_sections(&[(0, 0.4), (1, 0.9), (2, 0.0)]);
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn below_threshold_sections_are_ignored() {
        let mut nav = NavHighlighter::new();
        nav.observe_sections(&[(0, 0.2), (1, 0.1)]);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn active_link_sticks_between_sections() {
        let mut nav = NavHighlighter::new();
        nav.observe_sections(&[(0, 1.0)]);
        assert_eq!(nav.active(), Some(0));
        // scrolling through a gap where nothing qualifies
        nav.observe_sections(&[(0, 0.1), (1, 0.2)]);
        assert_eq!(nav.active(), Some(0));
        nav.observe_sections(&[(1, 0.8)]);
        assert_eq!(nav.active(), Some(1));
    }
}
