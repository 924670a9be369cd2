use anyhow::bail;

use crate::bubble::BubbleField;
use crate::constants::*;

/// The whole display state: which image and quote are active, plus the live
/// bubbles. Rotation is driven by per-frame accumulators the frame loop
/// feeds with `dt`, so a surface dropped and rebuilt starts over at index 0.
pub struct DisplaySurface {
    image_count: usize,
    quote_count: usize,

    image_index: usize,
    quote_index: usize,

    image_timer: f32,
    quote_timer: f32,

    bubbles: BubbleField,
}

impl DisplaySurface {
    /// Both lists must be non-empty; the rotation modulo relies on it.
    pub fn new(image_count: usize, quote_count: usize) -> anyhow::Result<Self> {
        if image_count == 0 {
            bail!("cannot build a surface without images");
        }
        if quote_count == 0 {
            bail!("cannot build a surface without quotes");
        }
        Ok(Self {
            image_count,
            quote_count,
            image_index: 0,
            quote_index: 0,
            image_timer: 0.0,
            quote_timer: 0.0,
            bubbles: BubbleField::new(),
        })
    }

    /// Advances both rotations and ages the bubbles. A `dt` spanning several
    /// intervals produces several ticks, keeping index = ticks mod count.
    pub fn update(&mut self, dt: f32) {
        self.image_timer += dt;
        while self.image_timer >= IMAGE_INTERVAL {
            self.image_timer -= IMAGE_INTERVAL;
            self.image_index = (self.image_index + 1) % self.image_count;
        }

        self.quote_timer += dt;
        while self.quote_timer >= QUOTE_INTERVAL {
            self.quote_timer -= QUOTE_INTERVAL;
            self.quote_index = (self.quote_index + 1) % self.quote_count;
        }

        self.bubbles.update(dt);
    }

    /// A click anywhere on the surface spawns a bubble at that point.
    pub fn pointer_click(&mut self, x: f32, y: f32) {
        self.bubbles.spawn(x, y);
    }

    /// Thumbnail selection: takes effect immediately, the rotation timer
    /// keeps running and next advances from `index`. Out-of-range indices
    /// are ignored; the strip only ever hands out valid ones.
    pub fn select_image(&mut self, index: usize) {
        if index < self.image_count {
            self.image_index = index;
        }
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    pub fn quote_index(&self) -> usize {
        self.quote_index
    }

    pub fn bubbles(&self) -> &BubbleField {
        &self.bubbles
    }
}
