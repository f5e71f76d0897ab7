use glam::Vec2;
use rand::prelude::*;
use rayon::prelude::*;

pub const DEFAULT_PARTICLE_COUNT: usize = 50;

/// Pointer attraction kicks in below this distance.
pub const INTERACTION_RADIUS: f32 = 100.0;
/// Pairs closer than this get a connecting line.
pub const LINK_RADIUS: f32 = 120.0;
pub const LINK_BASE_ALPHA: f32 = 0.2;

const ATTRACTION_SCALE: f32 = 0.01;
const DAMPING: f32 = 0.99;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub color: [u8; 3],
}

/// A line between two particles, referenced by index into the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Decorative background field: a fixed set of particles drifting inside
/// the surface bounds, pulled toward the pointer when it is near.
pub struct ParticleField {
    width: f32,
    height: f32,
    pointer: Option<Vec2>,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, count: usize) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .into_par_iter()
            .map(|_| {
                let mut rng = thread_rng();
                Particle {
                    position: Vec2::new(
                        rng.gen_range(0.0..=width),
                        rng.gen_range(0.0..=height),
                    ),
                    velocity: Vec2::new(
                        rng.gen_range(-0.25..=0.25),
                        rng.gen_range(-0.25..=0.25),
                    ),
                    radius: rng.gen_range(1.0..=4.0),
                    opacity: rng.gen_range(0.2..=0.7),
                    color: hsl_to_rgb(rng.gen_range(160.0..=220.0), 0.7, 0.6),
                }
            })
            .collect();
        Self {
            width,
            height,
            pointer: None,
            particles,
        }
    }

    /// Construct from explicit particles, mainly so behavior can be pinned
    /// down without randomness.
    pub fn with_particles(width: f32, height: f32, particles: Vec<Particle>) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pointer: None,
            particles,
        }
    }

    pub fn set_pointer(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// New surface dimensions. Existing positions are not rescaled; the
    /// boundary clamp pulls strays back in on the next update.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// One simulation step, invoked once per repaint.
    pub fn update(&mut self) {
        let pointer = self.pointer;
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            if let Some(pointer) = pointer {
                let delta = pointer - particle.position;
                let distance = delta.length();
                // distance 0 would blow up the normalization
                if distance > 0.0 && distance < INTERACTION_RADIUS {
                    let force = (INTERACTION_RADIUS - distance) / INTERACTION_RADIUS;
                    particle.velocity += delta / distance * force * ATTRACTION_SCALE;
                }
            }

            particle.position += particle.velocity;

            // Elastic reflection: flip velocity on crossing, clamp back in.
            if particle.position.x < 0.0 || particle.position.x > width {
                particle.velocity.x = -particle.velocity.x;
            }
            if particle.position.y < 0.0 || particle.position.y > height {
                particle.velocity.y = -particle.velocity.y;
            }
            particle.position.x = particle.position.x.clamp(0.0, width);
            particle.position.y = particle.position.y.clamp(0.0, height);

            particle.velocity *= DAMPING;
        }
    }

    /// All unordered pairs close enough to connect, with line alpha fading
    /// linearly to zero at the link radius. The scan is the naive O(N²)
    /// enumeration; N is small and fixed.
    pub fn links(&self) -> Vec<Link> {
        let particles = self.particles.as_slice();
        (0..particles.len())
            .into_par_iter()
            .flat_map_iter(|a| {
                let origin = particles[a].position;
                (a + 1..particles.len()).filter_map(move |b| {
                    let distance = origin.distance(particles[b].position);
                    (distance < LINK_RADIUS).then(|| Link {
                        a,
                        b,
                        alpha: LINK_BASE_ALPHA * (1.0 - distance / LINK_RADIUS),
                    })
                })
            })
            .collect()
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
