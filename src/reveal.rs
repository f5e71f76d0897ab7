use std::sync::Arc;

use glam::Vec2;

use crate::motion::MotionCapability;

/// Entrance presets, matching the site's original animation vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    FadeIn,
    SlideUp,
    ScaleIn,
    SlideLeft,
    SlideRight,
}

impl RevealStyle {
    fn hidden(self) -> RevealState {
        match self {
            RevealStyle::FadeIn => RevealState::hidden_at(Vec2::new(0.0, 30.0), 1.0),
            RevealStyle::SlideUp => RevealState::hidden_at(Vec2::new(0.0, 50.0), 1.0),
            RevealStyle::ScaleIn => RevealState::hidden_at(Vec2::ZERO, 0.8),
            RevealStyle::SlideLeft => RevealState::hidden_at(Vec2::new(-50.0, 0.0), 1.0),
            RevealStyle::SlideRight => RevealState::hidden_at(Vec2::new(50.0, 0.0), 1.0),
        }
    }

    fn duration(self) -> f32 {
        match self {
            RevealStyle::FadeIn => 0.6,
            RevealStyle::SlideUp => 0.8,
            RevealStyle::ScaleIn => 0.5,
            RevealStyle::SlideLeft | RevealStyle::SlideRight => 0.7,
        }
    }

    fn ease(self, t: f32) -> f32 {
        match self {
            RevealStyle::SlideUp | RevealStyle::ScaleIn => ease_back_out(t),
            _ => ease_cubic_out(t),
        }
    }
}

/// Visual state of a registered element at some instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    pub opacity: f32,
    pub offset: Vec2,
    pub scale: f32,
}

impl RevealState {
    pub const REST: RevealState = RevealState {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    fn hidden_at(offset: Vec2, scale: f32) -> Self {
        Self {
            opacity: 0.0,
            offset,
            scale,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealHandle(usize);

enum Phase {
    /// Waiting for the element to cross its visibility threshold.
    Pending,
    /// Triggered; animation runs from `start` and the registration is
    /// retired, so later notifications are ignored.
    Armed { start: f64 },
}

struct Entry {
    style: RevealStyle,
    threshold: f32,
    phase: Phase,
}

/// One-shot entrance animations driven by viewport visibility. Elements
/// that are never observed simply stay in their hidden state.
pub struct RevealDispatcher {
    entries: Vec<Entry>,
    motion: Arc<dyn MotionCapability>,
}

impl RevealDispatcher {
    pub fn new(motion: Arc<dyn MotionCapability>) -> Self {
        Self {
            entries: Vec::new(),
            motion,
        }
    }

    /// Register an element; `threshold` is the visible fraction that
    /// triggers the reveal.
    pub fn register(&mut self, style: RevealStyle, threshold: f32) -> RevealHandle {
        self.entries.push(Entry {
            style,
            threshold: threshold.clamp(0.0, 1.0),
            phase: Phase::Pending,
        });
        RevealHandle(self.entries.len() - 1)
    }

    /// Process one batch of visibility notifications. Elements crossing
    /// their threshold in the same batch are staggered in batch order.
    pub fn observe(&mut self, batch: &[(RevealHandle, f32)], now: f64) {
        let stagger = self.motion.stagger() as f64;
        let mut triggered = 0usize;
        for (handle, visible_fraction) in batch {
            let entry = &mut self.entries[handle.0];
            if matches!(entry.phase, Phase::Pending) && *visible_fraction >= entry.threshold {
                entry.phase = Phase::Armed {
                    start: now + triggered as f64 * stagger,
                };
                triggered += 1;
            }
        }
    }

    pub fn state(&self, handle: RevealHandle, now: f64) -> RevealState {
        let entry = &self.entries[handle.0];
        match entry.phase {
            Phase::Pending => entry.style.hidden(),
            Phase::Armed { start } => {
                let duration = self.motion.duration(entry.style.duration());
                let elapsed = (now - start) as f32;
                if elapsed < 0.0 {
                    // stagger delay still pending
                    entry.style.hidden()
                } else if duration <= 0.0 || elapsed >= duration {
                    RevealState::REST
                } else {
                    let t = entry.style.ease(elapsed / duration);
                    let hidden = entry.style.hidden();
                    RevealState {
                        opacity: t.clamp(0.0, 1.0),
                        offset: hidden.offset.lerp(Vec2::ZERO, t),
                        scale: hidden.scale + (1.0 - hidden.scale) * t,
                    }
                }
            }
        }
    }

    /// Eased progress in [0, 1]; used for width-style animations such as
    /// the skill level bars.
    pub fn progress(&self, handle: RevealHandle, now: f64) -> f32 {
        let entry = &self.entries[handle.0];
        match entry.phase {
            Phase::Pending => 0.0,
            Phase::Armed { start } => {
                let duration = self.motion.duration(entry.style.duration());
                let elapsed = (now - start) as f32;
                if elapsed < 0.0 {
                    0.0
                } else if duration <= 0.0 || elapsed >= duration {
                    1.0
                } else {
                    entry.style.ease(elapsed / duration).clamp(0.0, 1.0)
                }
            }
        }
    }
}

fn ease_cubic_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

// back.out(1.7): overshoots the target, then settles
fn ease_back_out(t: f32) -> f32 {
    const C1: f32 = 1.7;
    const C3: f32 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}
