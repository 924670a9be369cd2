use std::f32::consts::TAU;

use raylib::prelude::*;

use crate::constants::{FLOAT_AMPLITUDE, FLOAT_PERIOD};

// Background gradient stops, top to bottom (pink / purple / blue).
pub const GRADIENT_TOP: Color = Color::new(236, 72, 153, 255);
pub const GRADIENT_MID: Color = Color::new(168, 85, 247, 255);
pub const GRADIENT_BOTTOM: Color = Color::new(59, 130, 246, 255);

pub const HEART_COLOR: Color = Color::new(248, 113, 113, 255);
pub const BUBBLE_COLOR: Color = Color::WHITE;
pub const FRAME_COLOR: Color = Color::WHITE;
pub const ACTIVE_BORDER: Color = Color::new(253, 224, 71, 255);
pub const INACTIVE_BORDER: Color = Color::WHITE;
pub const TEXT_COLOR: Color = Color::WHITE;
pub const FOOTER_TINT: Color = Color::new(255, 255, 255, 26);

pub const HEADER_FONT_SIZE: i32 = 48;
pub const QUOTE_FONT_SIZE: i32 = 24;
pub const CAPTION_FONT_SIZE: i32 = 28;
pub const FOOTER_FONT_SIZE: i32 = 16;

/// The "float" keyframe: translateY eases from 0 to -FLOAT_AMPLITUDE and
/// back over FLOAT_PERIOD seconds, looping forever. Cosine gives the
/// ease-in-out shape.
pub fn float_offset(clock: f32) -> f32 {
    let phase = clock / FLOAT_PERIOD;
    -FLOAT_AMPLITUDE * 0.5 * (1.0 - (TAU * phase).cos())
}

pub fn with_alpha(color: Color, opacity: f32) -> Color {
    let a = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    Color::new(color.r, color.g, color.b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_keyframe_hits_its_endpoints() {
        assert!(float_offset(0.0).abs() < 1e-4);
        assert!((float_offset(FLOAT_PERIOD / 2.0) + FLOAT_AMPLITUDE).abs() < 1e-3);
        assert!(float_offset(FLOAT_PERIOD).abs() < 1e-3);
    }

    #[test]
    fn float_offset_never_leaves_its_travel_range() {
        let mut clock = 0.0;
        while clock < FLOAT_PERIOD * 4.0 {
            let y = float_offset(clock);
            assert!(y <= 1e-3 && y >= -FLOAT_AMPLITUDE - 1e-3);
            clock += 0.05;
        }
    }

    #[test]
    fn with_alpha_clamps_opacity() {
        assert_eq!(with_alpha(Color::WHITE, 2.0).a, 255);
        assert_eq!(with_alpha(Color::WHITE, -1.0).a, 0);
        assert_eq!(with_alpha(Color::WHITE, 0.5).a, 127);
    }
}
