use raylib::prelude::*;

use crate::constants::BUBBLE_RADIUS;
use crate::content;
use crate::hearts::HeartField;
use crate::layout::{HEADER_TOP, Layout, QUOTE_TOP};
use crate::slide::Slide;
use crate::surface::DisplaySurface;
use crate::theme;

/// Projects the current state to the screen. Pure: draws, mutates nothing.
pub fn draw_frame(
    d: &mut RaylibDrawHandle,
    layout: &Layout,
    surface: &DisplaySurface,
    hearts: &HeartField,
    slides: &[Slide],
    quotes: &[String],
    title: &str,
    clock: f32,
) {
    draw_background(d, layout);
    draw_hearts(d, layout, hearts);

    let float_y = theme::float_offset(clock);
    draw_centered_text(
        d,
        title,
        HEADER_TOP + float_y,
        theme::HEADER_FONT_SIZE,
        layout.width(),
    );
    draw_centered_text(
        d,
        &quotes[surface.quote_index()],
        QUOTE_TOP,
        theme::QUOTE_FONT_SIZE,
        layout.width(),
    );

    let slide = &slides[surface.image_index()];
    slide.draw_main(d, layout.main_image_rect());
    draw_centered_text(
        d,
        slide.caption(),
        layout.caption_baseline(),
        theme::CAPTION_FONT_SIZE,
        layout.width(),
    );

    for (i, slide) in slides.iter().enumerate() {
        let mut cell = layout.thumbnail_rect(i);
        // Staggered float so the strip ripples instead of bobbing as one
        cell.y += theme::float_offset(clock + i as f32 * 0.4);
        slide.draw_thumbnail(d, cell, i == surface.image_index());
    }

    draw_footer(d, layout);
    draw_bubbles(d, surface);
}

fn draw_background(d: &mut RaylibDrawHandle, layout: &Layout) {
    let half = (layout.height() / 2.0) as i32;
    let width = layout.width() as i32;
    d.draw_rectangle_gradient_v(0, 0, width, half, theme::GRADIENT_TOP, theme::GRADIENT_MID);
    d.draw_rectangle_gradient_v(
        0,
        half,
        width,
        layout.height() as i32 - half,
        theme::GRADIENT_MID,
        theme::GRADIENT_BOTTOM,
    );
}

fn draw_hearts(d: &mut RaylibDrawHandle, layout: &Layout, hearts: &HeartField) {
    for sample in hearts.samples() {
        let center = Vector2::new(sample.x * layout.width(), sample.y * layout.height());
        let color = theme::with_alpha(theme::HEART_COLOR, sample.opacity);
        draw_heart(d, center, 24.0, color);
    }
}

fn draw_heart(d: &mut RaylibDrawHandle, center: Vector2, size: f32, color: Color) {
    let r = size * 0.25;
    let lobe_y = center.y - size * 0.1;
    d.draw_circle_v(Vector2::new(center.x - r, lobe_y), r, color);
    d.draw_circle_v(Vector2::new(center.x + r, lobe_y), r, color);
    d.draw_triangle(
        Vector2::new(center.x - 2.0 * r, lobe_y + r * 0.4),
        Vector2::new(center.x, center.y + size * 0.5),
        Vector2::new(center.x + 2.0 * r, lobe_y + r * 0.4),
        color,
    );
}

fn draw_bubbles(d: &mut RaylibDrawHandle, surface: &DisplaySurface) {
    for bubble in surface.bubbles().iter() {
        d.draw_circle_v(
            Vector2::new(bubble.x, bubble.y),
            BUBBLE_RADIUS * bubble.scale(),
            theme::with_alpha(theme::BUBBLE_COLOR, bubble.opacity()),
        );
    }
}

fn draw_footer(d: &mut RaylibDrawHandle, layout: &Layout) {
    let footer = layout.footer_rect();
    d.draw_rectangle_rec(footer, theme::FOOTER_TINT);
    let text_y = footer.y + (footer.height - theme::FOOTER_FONT_SIZE as f32) / 2.0;
    draw_centered_text(
        d,
        content::FOOTER_TEXT,
        text_y,
        theme::FOOTER_FONT_SIZE,
        layout.width(),
    );
}

fn draw_centered_text(
    d: &mut RaylibDrawHandle,
    text: &str,
    y: f32,
    font_size: i32,
    screen_width: f32,
) {
    let text_width = measure_text(text, font_size);
    let x = ((screen_width as i32 - text_width) / 2).max(0);
    d.draw_text(text, x, y as i32, font_size, theme::TEXT_COLOR);
}
