use log::warn;

/// Wildcard key matching every content group.
pub const ALL: &str = "all";

/// Fade-out length before a hidden group leaves the layout.
pub const TRANSITION_SECS: f64 = 0.3;
const HIDE_OFFSET: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Shown,
    Hiding { since: f64 },
    Hidden,
}

struct Group {
    category: String,
    phase: Phase,
}

/// What a content group should look like right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupDisplay {
    /// False once the fade-out has finished and the group leaves layout.
    pub in_layout: bool,
    pub opacity: f32,
    pub offset_y: f32,
}

impl GroupDisplay {
    const SHOWN: GroupDisplay = GroupDisplay {
        in_layout: true,
        opacity: 1.0,
        offset_y: 0.0,
    };

    const GONE: GroupDisplay = GroupDisplay {
        in_layout: false,
        opacity: 0.0,
        offset_y: HIDE_OFFSET,
    };
}

/// Tab-based category filter over a fixed set of content groups. Exactly
/// one tab is active at a time; `"all"` shows everything.
pub struct TabFilter {
    tabs: Vec<String>,
    active: String,
    groups: Vec<Group>,
}

impl TabFilter {
    /// `categories` is one entry per content group. Tabs are the wildcard
    /// plus every distinct category, in first-seen order.
    pub fn new(categories: &[&str]) -> Self {
        let mut tabs = vec![ALL.to_owned()];
        for category in categories {
            if !tabs.iter().any(|t| t == category) {
                tabs.push((*category).to_owned());
            }
        }
        let groups = categories
            .iter()
            .map(|category| Group {
                category: (*category).to_owned(),
                phase: Phase::Shown,
            })
            .collect();
        Self {
            tabs,
            active: ALL.to_owned(),
            groups,
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Activate a tab. Re-selecting the active key is idempotent; unknown
    /// keys are ignored.
    pub fn select(&mut self, key: &str, now: f64) {
        if !self.tabs.iter().any(|t| t == key) {
            warn!("ignoring unknown filter key {key:?}");
            return;
        }
        if key == self.active {
            return;
        }
        for group in &mut self.groups {
            if key == ALL || group.category == key {
                group.phase = Phase::Shown;
            } else {
                match group.phase {
                    Phase::Shown => group.phase = Phase::Hiding { since: now },
                    // a finished fade settles into the hidden state
                    Phase::Hiding { since } if now - since >= TRANSITION_SECS => {
                        group.phase = Phase::Hidden;
                    }
                    // mid-fade or already gone; leave it be
                    Phase::Hiding { .. } | Phase::Hidden => {}
                }
            }
        }
        self.active = key.to_owned();
    }

    /// Display state of the group with the given category.
    pub fn display(&self, category: &str, now: f64) -> GroupDisplay {
        let Some(group) = self.groups.iter().find(|g| g.category == category) else {
            return GroupDisplay::SHOWN;
        };
        match group.phase {
            Phase::Shown => GroupDisplay::SHOWN,
            Phase::Hidden => GroupDisplay::GONE,
            Phase::Hiding { since } => {
                let t = ((now - since) / TRANSITION_SECS).clamp(0.0, 1.0) as f32;
                if t >= 1.0 {
                    GroupDisplay::GONE
                } else {
                    GroupDisplay {
                        in_layout: true,
                        opacity: 1.0 - t,
                        offset_y: HIDE_OFFSET * t,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CATEGORIES: [&str; 3] = ["web", "programming", "multimedia"];

    #[test]
    fn starts_with_everything_shown() {
        let filter = TabFilter::new(&CATEGORIES);
        assert_eq!(filter.active(), ALL);
        for category in CATEGORIES {
            assert_eq!(filter.display(category, 0.0), GroupDisplay::SHOWN);
        }
    }

    #[test]
    fn tabs_are_wildcard_plus_distinct_categories() {
        let filter = TabFilter::new(&["web", "web", "programming"]);
        assert_eq!(filter.tabs(), &["all", "web", "programming"]);
    }

    #[test]
    fn concrete_key_hides_everything_else_after_transition() {
        let mut filter = TabFilter::new(&CATEGORIES);
        filter.select("web", 1.0);
        assert_eq!(filter.display("web", 2.0), GroupDisplay::SHOWN);
        for category in ["programming", "multimedia"] {
            let display = filter.display(category, 2.0);
            assert!(!display.in_layout);
            assert_eq!(display.opacity, 0.0);
        }
    }

    #[test]
    fn hiding_groups_fade_through_the_transition() {
        let mut filter = TabFilter::new(&CATEGORIES);
        filter.select("web", 0.0);
        let display = filter.display("programming", 0.15);
        assert!(display.in_layout);
        assert!((display.opacity - 0.5).abs() < 1e-6);
        assert!((display.offset_y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn selecting_all_restores_every_group() {
        let mut filter = TabFilter::new(&CATEGORIES);
        filter.select("multimedia", 0.0);
        filter.select(ALL, 5.0);
        for category in CATEGORIES {
            assert_eq!(filter.display(category, 5.0), GroupDisplay::SHOWN);
        }
    }

    #[test]
    fn reselecting_the_active_key_changes_nothing() {
        let mut filter = TabFilter::new(&CATEGORIES);
        filter.select("web", 0.0);
        let before: Vec<_> = CATEGORIES
            .iter()
            .map(|c| filter.display(c, 10.0))
            .collect();
        filter.select("web", 10.0);
        let after: Vec<_> = CATEGORIES
            .iter()
            .map(|c| filter.display(c, 10.0))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut filter = TabFilter::new(&CATEGORIES);
        filter.select("design", 0.0);
        assert_eq!(filter.active(), ALL);
        for category in CATEGORIES {
            assert_eq!(filter.display(category, 1.0), GroupDisplay::SHOWN);
        }
    }
}
