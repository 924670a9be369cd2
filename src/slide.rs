use raylib::prelude::*;

use crate::theme;

/// One gallery entry: a loaded texture and its caption.
pub struct Slide {
    texture: Texture2D,
    caption: String,
}

impl Slide {
    pub fn new(texture: Texture2D, caption: String) -> Self {
        Self { texture, caption }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    fn source_rect(&self) -> Rectangle {
        Rectangle::new(0.0, 0.0, self.texture.width() as f32, self.texture.height() as f32)
    }

    /// Draws the slide scaled to fit inside `frame` (aspect preserved),
    /// on a white backing card.
    pub fn draw_main(&self, d: &mut RaylibDrawHandle, frame: Rectangle) {
        d.draw_rectangle_rounded(frame, 0.08, 8, theme::FRAME_COLOR);

        let inner = Rectangle::new(
            frame.x + 6.0,
            frame.y + 6.0,
            frame.width - 12.0,
            frame.height - 12.0,
        );
        let dest = fit_inside(self.source_rect(), inner);
        d.draw_texture_pro(
            &self.texture,
            self.source_rect(),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }

    /// Thumbnail rendering: the texture squeezed into the cell behind a
    /// border colored by whether this slide is the active one.
    pub fn draw_thumbnail(&self, d: &mut RaylibDrawHandle, cell: Rectangle, active: bool) {
        d.draw_texture_pro(
            &self.texture,
            self.source_rect(),
            cell,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        let border = if active { theme::ACTIVE_BORDER } else { theme::INACTIVE_BORDER };
        d.draw_rectangle_lines_ex(cell, 4.0, border);
    }
}

/// Largest aspect-preserving placement of `source` centered in `bounds`.
pub fn fit_inside(source: Rectangle, bounds: Rectangle) -> Rectangle {
    let scale = (bounds.width / source.width).min(bounds.height / source.height);
    let width = source.width * scale;
    let height = source.height * scale;
    Rectangle::new(
        bounds.x + (bounds.width - width) / 2.0,
        bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_source_fills_the_width() {
        let dest = fit_inside(
            Rectangle::new(0.0, 0.0, 200.0, 100.0),
            Rectangle::new(0.0, 0.0, 100.0, 100.0),
        );
        assert_eq!(dest.width, 100.0);
        assert_eq!(dest.height, 50.0);
        assert_eq!(dest.y, 25.0);
    }

    #[test]
    fn tall_source_fills_the_height() {
        let dest = fit_inside(
            Rectangle::new(0.0, 0.0, 100.0, 400.0),
            Rectangle::new(10.0, 10.0, 100.0, 100.0),
        );
        assert_eq!(dest.height, 100.0);
        assert_eq!(dest.width, 25.0);
        assert_eq!(dest.x, 10.0 + 37.5);
    }

    #[test]
    fn fitted_rect_never_escapes_its_bounds() {
        let bounds = Rectangle::new(5.0, 5.0, 90.0, 60.0);
        for (w, h) in [(30.0, 30.0), (300.0, 40.0), (40.0, 300.0)] {
            let dest = fit_inside(Rectangle::new(0.0, 0.0, w, h), bounds);
            assert!(dest.x >= bounds.x && dest.y >= bounds.y);
            assert!(dest.x + dest.width <= bounds.x + bounds.width + 0.001);
            assert!(dest.y + dest.height <= bounds.y + bounds.height + 0.001);
        }
    }
}
