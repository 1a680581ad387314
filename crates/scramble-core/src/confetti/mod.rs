//! Confetti burst system.
//!
//! Particles live in normalized [0, 1] screen space with y pointing down; the
//! JS canvas layer scales them to the viewport. Each frame the live particles
//! are rebuilt into a triangle-list vertex buffer (5 floats per vertex:
//! x, y, color index, u, v) read across the wasm boundary by pointer.

mod color;
mod particle;

pub use color::ConfettiColor;
pub use particle::Confetto;

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::easing::lerp;
use crate::rng::Rng;

/// Parameters for one confetti burst. The defaults are the celebratory burst
/// fired on game completion.
#[derive(Debug, Clone)]
pub struct BurstConfig {
    /// Number of confetti spawned.
    pub particle_count: usize,
    /// Full angular spread in degrees, centered on straight up.
    pub spread: f32,
    /// Launch point in normalized screen coordinates.
    pub origin: Vec2,
    /// Initial speed range, normalized units per second.
    pub start_velocity: (f32, f32),
    /// Base seconds each confetto lives (individual lifetimes vary a little).
    pub lifetime: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70.0,
            origin: Vec2::new(0.5, 0.6),
            start_velocity: (0.35, 0.9),
            lifetime: 3.0,
        }
    }
}

/// Container for live confetti plus their packed vertex buffer.
pub struct ConfettiState {
    pub particles: Vec<Confetto>,
    vertex_buffer: Vec<f32>,
    rng: Rng,
    max_particles: usize,
}

impl ConfettiState {
    pub const FLOATS_PER_VERTEX: usize = 5;
    const VERTS_PER_PARTICLE: usize = 6;

    /// Downward pull, normalized units per second squared.
    const GRAVITY: f32 = 1.1;
    /// Per-step velocity decay.
    const DRAG: f32 = 0.02;

    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, 256)
    }

    pub fn with_capacity(seed: u64, max_particles: usize) -> Self {
        ConfettiState {
            particles: Vec::with_capacity(max_particles),
            vertex_buffer: Vec::with_capacity(
                max_particles * Self::VERTS_PER_PARTICLE * Self::FLOATS_PER_VERTEX,
            ),
            rng: Rng::new(seed.wrapping_add(7919)),
            max_particles,
        }
    }

    /// Fire a burst. Spawns up to the remaining particle capacity.
    pub fn burst(&mut self, config: &BurstConfig) {
        let room = self.max_particles.saturating_sub(self.particles.len());
        let count = config.particle_count.min(room);
        let half_spread = config.spread.to_radians() * 0.5;

        for _ in 0..count {
            // Straight up is -PI/2 in y-down screen space.
            let angle = -FRAC_PI_2 + (self.rng.next_f32() * 2.0 - 1.0) * half_spread;
            let speed = lerp(
                config.start_velocity.0,
                config.start_velocity.1,
                self.rng.next_f32(),
            );
            self.particles.push(Confetto {
                pos: config.origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                size: 0.008 + self.rng.next_f32() * 0.008,
                rotation: self.rng.next_f32() * TAU,
                spin: (self.rng.next_f32() * 2.0 - 1.0) * 12.0,
                color: ConfettiColor::random(&mut self.rng),
                lifetime: config.lifetime * (0.7 + 0.3 * self.rng.next_f32()),
            });
        }
    }

    /// Advance all particles, dropping expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.particles
            .retain_mut(|p| p.tick(Self::GRAVITY, Self::DRAG, dt));
    }

    /// Rebuild the packed vertex buffer from the live particles.
    pub fn rebuild_vertex_buffer(&mut self) {
        self.vertex_buffer.clear();
        for p in &self.particles {
            p.append_vertices(&mut self.vertex_buffer);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_buffer.len() / Self::FLOATS_PER_VERTEX
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.vertex_buffer.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.vertex_buffer.clear();
    }
}
