//! Matrix rain and particle network simulation for the background canvas.
//!
//! Only the state lives here. The front end draws the glyphs, particles and
//! links each frame.

use rand::Rng;

use crate::config::backdrop::{
    FONT_PX, GLYPHS, LINK_DISTANCE, PARTICLE_COUNT, PARTICLE_SPEED, RESET_CHANCE,
};

/// A glyph to draw at pixel position `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub x: f64,
    pub y: f64,
    pub ch: char,
}

/// Falling columns of glyphs.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    /// Row of the next glyph per column
    drops: Vec<u32>,
}

impl MatrixRain {
    pub fn new(width: f64) -> Self {
        let mut rain = Self { drops: Vec::new() };
        rain.resize(width);
        rain
    }

    /// Add columns when the canvas grows. Existing columns keep their state.
    pub fn resize(&mut self, width: f64) {
        let columns = (width / FONT_PX).floor().max(0.0) as usize;
        if columns > self.drops.len() {
            self.drops.resize(columns, 1);
        }
    }

    pub fn columns(&self) -> usize {
        self.drops.len()
    }

    /// Advance every column by one row and return the glyphs to draw.
    pub fn step<R: Rng + ?Sized>(&mut self, height: f64, rng: &mut R) -> Vec<Glyph> {
        self.drops
            .iter_mut()
            .enumerate()
            .map(|(i, drop)| {
                let glyph = Glyph {
                    x: i as f64 * FONT_PX,
                    y: f64::from(*drop) * FONT_PX,
                    ch: GLYPHS[rng.gen_range(0..GLYPHS.len())] as char,
                };
                if glyph.y > height && rng.gen_bool(RESET_CHANCE) {
                    *drop = 0;
                }
                *drop += 1;
                glyph
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// A line between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

/// Drifting particles that wrap at the canvas edges.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.gen_range(0.0..=width.max(0.0)),
                y: rng.gen_range(0.0..=height.max(0.0)),
                vx: rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                vy: rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            })
            .collect();
        Self::from_particles(particles, width, height)
    }

    pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Move every particle, wrapping to the opposite edge when it leaves.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 {
                p.x = self.width;
            } else if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            } else if p.y > self.height {
                p.y = 0.0;
            }
        }
    }

    /// Links between distinct particles closer than [`LINK_DISTANCE`].
    /// Closer pairs are more opaque.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < LINK_DISTANCE {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        alpha: 0.1 - dist / 1000.0,
                    });
                }
            }
        }
        links
    }
}
