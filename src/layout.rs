use raylib::prelude::*;

pub const THUMBNAIL_SIZE: f32 = 64.0;
pub const THUMBNAIL_GAP: f32 = 24.0;
pub const THUMBNAIL_BOTTOM_MARGIN: f32 = 64.0;
pub const FOOTER_HEIGHT: f32 = 48.0;
pub const HEADER_TOP: f32 = 40.0;
pub const QUOTE_TOP: f32 = 110.0;

/// Per-frame screen geometry. Everything the renderer and the input step
/// need is derived from the current window size and the slide count, so
/// resizes just fall out.
pub struct Layout {
    width: f32,
    height: f32,
    image_count: usize,
}

impl Layout {
    pub fn new(width: i32, height: i32, image_count: usize) -> Self {
        Self { width: width as f32, height: height as f32, image_count }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Centered frame for the active image, nudged up to leave room for
    /// the caption and the thumbnail strip.
    pub fn main_image_rect(&self) -> Rectangle {
        let side = (self.width.min(self.height) * 0.45).max(120.0);
        Rectangle::new(
            (self.width - side) / 2.0,
            (self.height - side) / 2.0 - 20.0,
            side,
            side,
        )
    }

    pub fn caption_baseline(&self) -> f32 {
        let image = self.main_image_rect();
        image.y + image.height + 24.0
    }

    pub fn thumbnail_rect(&self, index: usize) -> Rectangle {
        let count = self.image_count as f32;
        let strip_width = count * THUMBNAIL_SIZE + (count - 1.0) * THUMBNAIL_GAP;
        let x0 = (self.width - strip_width) / 2.0;
        Rectangle::new(
            x0 + index as f32 * (THUMBNAIL_SIZE + THUMBNAIL_GAP),
            self.height - THUMBNAIL_BOTTOM_MARGIN - THUMBNAIL_SIZE,
            THUMBNAIL_SIZE,
            THUMBNAIL_SIZE,
        )
    }

    /// Which thumbnail a point lands on, if any. Drives the selection
    /// override; any miss is a plain surface click.
    pub fn thumbnail_at(&self, point: Vector2) -> Option<usize> {
        (0..self.image_count).find(|&i| self.thumbnail_rect(i).check_collision_point_rec(point))
    }

    pub fn footer_rect(&self) -> Rectangle {
        Rectangle::new(0.0, self.height - FOOTER_HEIGHT, self.width, FOOTER_HEIGHT)
    }
}
