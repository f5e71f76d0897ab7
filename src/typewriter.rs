use rand::Rng;

const START_DELAY: f64 = 1.0;
const TYPE_SECS: f64 = 0.10;
const DELETE_SECS: f64 = 0.05;
const JITTER_SECS: f64 = 0.05;
const HOLD_FULL_SECS: f64 = 2.0;
const HOLD_EMPTY_SECS: f64 = 0.5;

/// Cycling typewriter: types a title out, holds, deletes it, moves on to
/// the next, forever. Each keystroke gets a little random jitter so the
/// rhythm reads as human.
pub struct Typewriter {
    titles: Vec<String>,
    title: usize,
    chars: usize,
    deleting: bool,
    next_at: f64,
}

impl Typewriter {
    pub fn new(titles: Vec<String>, now: f64) -> Self {
        Self {
            titles,
            title: 0,
            chars: 0,
            deleting: false,
            next_at: now + START_DELAY,
        }
    }

    /// Advance to `now` and return the currently visible text.
    pub fn tick(&mut self, now: f64) -> String {
        if self.titles.is_empty() {
            return String::new();
        }
        while now >= self.next_at {
            self.step();
        }
        self.text()
    }

    pub fn text(&self) -> String {
        if self.titles.is_empty() {
            return String::new();
        }
        self.titles[self.title].chars().take(self.chars).collect()
    }

    fn step(&mut self) {
        let length = self.titles[self.title].chars().count();
        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(length);
        }

        let mut delay = if self.deleting { DELETE_SECS } else { TYPE_SECS };
        delay += rand::thread_rng().gen_range(0.0..JITTER_SECS);

        if !self.deleting && self.chars == length {
            delay = HOLD_FULL_SECS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.title = (self.title + 1) % self.titles.len();
            delay = HOLD_EMPTY_SECS;
        }
        self.next_at += delay;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer() -> Typewriter {
        Typewriter::new(vec!["Ada".to_owned(), "Grace".to_owned()], 0.0)
    }

    /// Advance in small increments until the visible text satisfies the
    /// predicate, or fail.
    fn advance_until(
        writer: &mut Typewriter,
        now: &mut f64,
        what: &str,
        predicate: impl Fn(&str) -> bool,
    ) -> String {
        for _ in 0..10_000 {
            *now += 0.05;
            let text = writer.tick(*now);
            if predicate(&text) {
                return text;
            }
        }
        panic!("typewriter never reached state: {what}");
    }

    #[test]
    fn nothing_visible_during_the_initial_delay() {
        let mut writer = writer();
        assert_eq!(writer.tick(0.9), "");
    }

    #[test]
    fn types_the_first_title_out_in_full() {
        let mut writer = writer();
        let mut now = 0.0;
        advance_until(&mut writer, &mut now, "full first title", |t| t == "Ada");
    }

    #[test]
    fn prefixes_grow_one_character_at_a_time() {
        let mut writer = writer();
        let mut now = 0.0;
        let mut seen = Vec::new();
        while seen.last().map(String::as_str) != Some("Ada") {
            now += 0.01;
            let text = writer.tick(now);
            if seen.last() != Some(&text) {
                seen.push(text);
            }
            assert!(now < 100.0, "first title never completed");
        }
        assert_eq!(seen, ["", "A", "Ad", "Ada"]);
    }

    #[test]
    fn deletes_and_cycles_to_the_next_title() {
        let mut writer = writer();
        let mut now = 0.0;
        advance_until(&mut writer, &mut now, "first title", |t| t == "Ada");
        advance_until(&mut writer, &mut now, "second title", |t| t == "Grace");
        // and wraps back around to the first
        advance_until(&mut writer, &mut now, "wrap-around", |t| t == "Ada");
    }

    #[test]
    fn empty_title_list_stays_silent() {
        let mut writer = Typewriter::new(Vec::new(), 0.0);
        assert_eq!(writer.tick(1_000.0), "");
    }
}
