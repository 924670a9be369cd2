pub const WINDOW_WIDTH: i32 = 1280;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 800;            // Initial window height
pub const FPS: u32 = 60;                       // Frames per second

pub const IMAGE_INTERVAL: f32 = 4.0;           // Seconds between image rotations
pub const QUOTE_INTERVAL: f32 = 5.0;           // Seconds between quote rotations

pub const BUBBLE_LIFETIME: f32 = 1.2;          // Seconds a bubble stays in the collection
pub const BUBBLE_FADE_DURATION: f32 = 1.0;     // Seconds over which a bubble fades and grows
pub const BUBBLE_RADIUS: f32 = 10.0;           // Starting bubble radius (pixels)
pub const BUBBLE_END_SCALE: f32 = 2.0;         // Scale a bubble reaches at the end of its fade

pub const HEART_COUNT: usize = 20;             // Decorative falling hearts
pub const HEART_FALL_DURATION: f32 = 6.0;      // Seconds for one full fall cycle
pub const HEART_MAX_DELAY: f32 = 2.0;          // Upper bound on per-heart animation delay

pub const FLOAT_PERIOD: f32 = 3.0;             // Seconds for one "float" keyframe loop
pub const FLOAT_AMPLITUDE: f32 = 10.0;         // Pixels of vertical float travel
