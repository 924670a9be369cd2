use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Collects the image files in `dir`, sorted by file name so the gallery
/// order is stable across runs.
pub fn load_sorted_image_paths(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read image directory {:?}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in {:?}", dir);
    }
    Ok(paths)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Loads an image file into a texture, honoring the EXIF orientation tag
/// for JPEGs. Orientations involving mirror flips are ignored.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> anyhow::Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {:?}", path))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {:?}: {}", path, e))?;

    match exif_orientation(&extension, &bytes) {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {:?}: {}", path, e))
}

// 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
fn exif_orientation(extension: &str, bytes: &[u8]) -> u16 {
    if extension != "jpg" && extension != "jpeg" {
        return 1;
    }
    let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(bytes)) else {
        return 1;
    };
    match exif.get_field(Tag::Orientation, In::PRIMARY) {
        Some(field) => match &field.value {
            Value::Short(values) => values.first().copied().unwrap_or(1),
            _ => 1,
        },
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn paths_are_filtered_and_name_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.jpg", "a.png", "notes.txt", "b.JPEG"] {
            File::create(dir.path().join(name)).unwrap();
        }
        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPEG", "c.jpg"]);
    }

    #[test]
    fn a_directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("readme.md")).unwrap();
        assert!(load_sorted_image_paths(dir.path()).is_err());
    }

    #[test]
    fn non_jpeg_bytes_default_to_no_rotation() {
        assert_eq!(exif_orientation("png", &[0, 1, 2]), 1);
        assert_eq!(exif_orientation("jpg", &[0, 1, 2]), 1);
    }
}
