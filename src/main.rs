use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;

mod bubble;
mod constants;
mod content;
mod hearts;
mod layout;
mod render;
mod slide;
mod surface;
mod texture_loader;
mod theme;

use crate::constants::*;
use crate::hearts::HeartField;
use crate::layout::Layout;
use crate::slide::Slide;
use crate::surface::DisplaySurface;

/// A romantic animated photo wall: rotating images and quotes, falling
/// hearts, and click bubbles.
#[derive(Parser)]
#[command(name = "heartwall")]
struct Args {
    /// Directory holding the images to rotate through
    image_dir: PathBuf,

    /// Plain text file with one quote per line (built-in quotes otherwise)
    #[arg(long)]
    quotes: Option<PathBuf>,

    /// Header title shown at the top of the wall
    #[arg(long, default_value = content::HEADER_TITLE)]
    title: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let quotes = match &args.quotes {
        Some(path) => content::load_quotes(path)?,
        None => content::default_quotes(),
    };
    let image_paths = texture_loader::load_sorted_image_paths(&args.image_dir)?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Heartwall")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides: Vec<Slide> = Vec::new();
    for (i, path) in image_paths.iter().enumerate() {
        match texture_loader::load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => {
                slides.push(Slide::new(texture, content::caption_for(i).to_string()));
            }
            Err(e) => eprintln!("Skipping {:?}: {}", path, e),
        }
    }

    let mut surface = DisplaySurface::new(slides.len(), quotes.len())
        .context("no usable images or quotes to display")?;
    let mut hearts = HeartField::new(&mut rand::rng());
    let mut clock: f32 = 0.0;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        clock += dt;

        let layout = Layout::new(rl.get_screen_width(), rl.get_screen_height(), slides.len());

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let pos = rl.get_mouse_position();
            if let Some(index) = layout.thumbnail_at(pos) {
                surface.select_image(index);
            }
            // Thumbnail clicks are still surface clicks, so they bubble too
            surface.pointer_click(pos.x, pos.y);
        }

        surface.update(dt);
        hearts.update(dt);

        let mut d = rl.begin_drawing(&thread);
        render::draw_frame(
            &mut d,
            &layout,
            &surface,
            &hearts,
            &slides,
            &quotes,
            &args.title,
            clock,
        );
    }

    Ok(())
}
