use std::sync::Arc;

/// Animation capability, picked once at startup. The full profile plays
/// the preset timings; the reduced profile snaps everything straight to
/// its resting state.
pub trait MotionCapability: Send + Sync {
    /// Effective duration for an animation with the given preset duration.
    fn duration(&self, base: f32) -> f32;
    /// Delay added per element when a batch reveals together.
    fn stagger(&self) -> f32;
    /// Length of the theme crossfade overlay.
    fn crossfade(&self) -> f32;
}

pub struct FullMotion;

impl MotionCapability for FullMotion {
    fn duration(&self, base: f32) -> f32 {
        base
    }

    fn stagger(&self) -> f32 {
        0.15
    }

    fn crossfade(&self) -> f32 {
        0.3
    }
}

pub struct ReducedMotion;

impl MotionCapability for ReducedMotion {
    fn duration(&self, _base: f32) -> f32 {
        0.0
    }

    fn stagger(&self) -> f32 {
        0.0
    }

    fn crossfade(&self) -> f32 {
        0.0
    }
}

pub fn select(reduced: bool) -> Arc<dyn MotionCapability> {
    if reduced {
        log::info!("reduced motion requested, animations disabled");
        Arc::new(ReducedMotion)
    } else {
        Arc::new(FullMotion)
    }
}
