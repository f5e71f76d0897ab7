use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

/// Decoded RGBA pixels, ready to upload as a texture.
pub struct RgbaPixels {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

pub fn load_rgba(path: &Path) -> Result<RgbaPixels> {
    let decoded = image::open(path).with_context(|| format!("decoding {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    Ok(RgbaPixels {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
        pixels: rgba.into_raw(),
    })
}

/// Load an image, falling back to a generated placeholder when the file is
/// missing or undecodable. Load failure is a presentation fallback, not an
/// error the caller sees.
pub fn load_or_placeholder(path: &Path, width: usize, height: usize) -> RgbaPixels {
    match load_rgba(path) {
        Ok(pixels) => pixels,
        Err(error) => {
            warn!("{error:#}; using placeholder");
            let mut hasher = DefaultHasher::new();
            path.hash(&mut hasher);
            placeholder(width, height, hasher.finish())
        }
    }
}

/// Teal diagonal gradient standing in for a missing image. Deterministic
/// for a given seed and size; the seed nudges the end color so different
/// assets get visually distinct placeholders.
pub fn placeholder(width: usize, height: usize, seed: u64) -> RgbaPixels {
    let start = [0u8, 194, 168];
    let shift = (seed % 48) as i16 - 24;
    let end = [
        0u8,
        (166 + shift).clamp(90, 255) as u8,
        (147 + shift).clamp(90, 255) as u8,
    ];

    let mut pixels = Vec::with_capacity(width * height * 4);
    let span = (width + height).max(1) as f32;
    for y in 0..height {
        for x in 0..width {
            let t = (x + y) as f32 / span;
            for channel in 0..3 {
                let a = start[channel] as f32;
                let b = end[channel] as f32;
                pixels.push((a + (b - a) * t).round() as u8);
            }
            pixels.push(255);
        }
    }
    RgbaPixels {
        width,
        height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_placeholder() {
        let pixels = load_or_placeholder(Path::new("definitely/not/here.png"), 8, 6);
        assert_eq!(pixels.width, 8);
        assert_eq!(pixels.height, 6);
        assert_eq!(pixels.pixels.len(), 8 * 6 * 4);
    }

    #[test]
    fn placeholder_is_deterministic_per_seed() {
        let a = placeholder(16, 16, 7);
        let b = placeholder(16, 16, 7);
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn placeholder_seeds_produce_distinct_gradients() {
        let a = placeholder(16, 16, 1);
        let b = placeholder(16, 16, 40);
        assert_ne!(a.pixels, b.pixels);
    }

    #[test]
    fn placeholder_is_opaque() {
        let pixels = placeholder(4, 4, 0);
        for alpha in pixels.pixels.iter().skip(3).step_by(4) {
            assert_eq!(*alpha, 255);
        }
    }

    #[test]
    fn garbage_bytes_do_not_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(load_rgba(&path).is_err());
    }
}
