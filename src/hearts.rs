use rand::Rng;

use crate::constants::*;

/// One decorative falling heart. Position is normalized to the screen so
/// the field survives window resizes untouched.
pub struct Heart {
    start_x: f32,
    start_y: f32,
    delay: f32,
}

impl Heart {
    /// Position and opacity at `clock` seconds, or `None` while the heart
    /// is still waiting out its start delay. The fall loops: down one full
    /// screen height while fading out, then back to the top.
    pub fn sample(&self, clock: f32) -> Option<HeartSample> {
        let elapsed = clock - self.delay;
        if elapsed < 0.0 {
            return None;
        }
        let phase = (elapsed / HEART_FALL_DURATION).fract();
        Some(HeartSample {
            x: self.start_x,
            y: (self.start_y + phase) % 1.0,
            opacity: 1.0 - phase,
        })
    }
}

pub struct HeartSample {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// The fixed flock of falling hearts. Placement and delays are randomized
/// once at construction and stay put for the life of the surface.
pub struct HeartField {
    hearts: Vec<Heart>,
    clock: f32,
}

impl HeartField {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|_| Heart {
                start_x: rng.random_range(0.0..1.0),
                start_y: rng.random_range(0.0..1.0),
                delay: rng.random_range(0.0..HEART_MAX_DELAY),
            })
            .collect();
        Self { hearts, clock: 0.0 }
    }

    pub fn update(&mut self, dt: f32) {
        self.clock += dt;
    }

    pub fn samples(&self) -> impl Iterator<Item = HeartSample> {
        self.hearts.iter().filter_map(|h| h.sample(self.clock))
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }
}
