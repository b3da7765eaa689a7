//! # Assets — Sprites and Font Loaded Once at Startup
//!
//! The asset directory has a fixed layout:
//!
//! ```text
//! assets/
//! ├── beach.png          background, drawn scaled to fill the canvas
//! ├── fish.png           the collectible
//! ├── crab/              walk cycle, frames ordered by file name
//! │   ├── 0.png
//! │   ├── 1.png
//! │   └── ...
//! ├── fonts/score.ttf    score label font
//! └── crab.json          optional config overrides
//! ```
//!
//! Images are decoded to RGBA8 on the CPU here; uploading them to the GPU is
//! the renderer's job. Every crab frame and the fish must have the same size,
//! since the simulation uses one bounding box size for both.
//!
//! Any failure is returned as [`CrabError::Asset`] and aborts startup. There
//! is no sensible game without its sprites.

use std::path::{Path, PathBuf};

use crate::error::CrabError;
use crate::state::SpriteSize;

pub const BACKGROUND_FILE: &str = "beach.png";
pub const FISH_FILE: &str = "fish.png";
pub const CRAB_DIR: &str = "crab";
pub const FONT_FILE: &str = "fonts/score.ttf";

/// A decoded RGBA8 image.
#[derive(Clone)]
pub struct ImageData {
    /// Where the image came from, used as a GPU debug label.
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// Decode a PNG or JPEG from disk.
    pub fn load(path: &Path) -> Result<Self, CrabError> {
        let img = image::open(path)
            .map_err(|e| CrabError::asset(path, e))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            label: path.display().to_string(),
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    pub fn size(&self) -> SpriteSize {
        SpriteSize::new(self.width as i32, self.height as i32)
    }
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("label", &self.label)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Every read-only resource the game draws.
#[derive(Debug, Clone)]
pub struct SpriteAssets {
    pub background: ImageData,
    pub fish: ImageData,
    /// Walk cycle, at least one frame.
    pub crab_frames: Vec<ImageData>,
    /// Raw TTF/OTF bytes for the score label.
    pub font: Vec<u8>,
    /// Where `font` was read from.
    pub font_path: PathBuf,
}

impl SpriteAssets {
    /// Load the full asset set from `dir`.
    pub fn load(dir: &Path) -> Result<Self, CrabError> {
        log::info!("Loading assets from {}", dir.display());

        let background = ImageData::load(&dir.join(BACKGROUND_FILE))?;
        let fish = ImageData::load(&dir.join(FISH_FILE))?;
        let crab_frames = load_frames(&dir.join(CRAB_DIR))?;
        let font_path = dir.join(FONT_FILE);
        let font = std::fs::read(&font_path).map_err(|e| CrabError::asset(&font_path, e))?;

        let assets = Self {
            background,
            fish,
            crab_frames,
            font,
            font_path,
        };
        assets.sprite_size()?;

        log::info!(
            "Loaded {} crab frames, sprite size {}x{}",
            assets.crab_frames.len(),
            assets.fish.width,
            assets.fish.height
        );
        Ok(assets)
    }

    /// The shared crab/fish size. Fails if any crab frame differs from the fish.
    pub fn sprite_size(&self) -> Result<SpriteSize, CrabError> {
        let size = self.fish.size();
        for frame in &self.crab_frames {
            if frame.size() != size {
                return Err(CrabError::asset(
                    &frame.label,
                    format!(
                        "crab frame is {}x{} but the fish is {}x{}",
                        frame.width, frame.height, size.width, size.height
                    ),
                ));
            }
        }
        Ok(size)
    }

    pub fn frame_count(&self) -> usize {
        self.crab_frames.len()
    }
}

/// Image files directly inside `dir`, in frame order.
///
/// Numeric stems sort by value (`2.png` before `10.png`) and come before any
/// other names, which sort as text.
fn frame_paths(dir: &Path) -> Result<Vec<PathBuf>, CrabError> {
    let entries = std::fs::read_dir(dir).map_err(|e| CrabError::asset(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CrabError::asset(dir, e))?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"))
            .unwrap_or(false);
        if path.is_file() && is_image {
            paths.push(path);
        }
    }
    paths.sort_by_cached_key(|p| frame_key(p));
    Ok(paths)
}

fn frame_key(path: &Path) -> (bool, u64, String) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let number = path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse::<u64>().ok());
    match number {
        Some(n) => (false, n, name),
        None => (true, 0, name),
    }
}

fn load_frames(dir: &Path) -> Result<Vec<ImageData>, CrabError> {
    let paths = frame_paths(dir)?;
    if paths.is_empty() {
        return Err(CrabError::asset(dir, "no crab animation frames found"));
    }
    paths.iter().map(|p| ImageData::load(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A scratch asset directory, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("crab-assets-{name}-{}", std::process::id()));
            let _ = std::fs::remove_dir_all(&dir);
            std::fs::create_dir_all(dir.join(CRAB_DIR)).unwrap();
            std::fs::create_dir_all(dir.join("fonts")).unwrap();
            Self(dir)
        }

        fn png(&self, rel: &str, w: u32, h: u32) {
            image::RgbaImage::from_pixel(w, h, image::Rgba([200, 80, 40, 255]))
                .save(self.0.join(rel))
                .unwrap();
        }

        fn font(&self) {
            std::fs::write(self.0.join(FONT_FILE), b"not really a font").unwrap();
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn complete(name: &str) -> ScratchDir {
        let dir = ScratchDir::new(name);
        dir.png(BACKGROUND_FILE, 50, 40);
        dir.png(FISH_FILE, 16, 16);
        dir.png("crab/1.png", 16, 16);
        dir.png("crab/0.png", 16, 16);
        dir.png("crab/2.png", 16, 16);
        dir.font();
        dir
    }

    #[test]
    fn loads_complete_asset_set() {
        let dir = complete("ok");
        let assets = SpriteAssets::load(&dir.0).unwrap();
        assert_eq!(assets.frame_count(), 3);
        assert_eq!(assets.sprite_size().unwrap(), SpriteSize::new(16, 16));
        assert_eq!(assets.background.width, 50);
        assert_eq!(assets.background.rgba.len(), 50 * 40 * 4);
        assert_eq!(assets.font, b"not really a font");
    }

    fn frame_names(assets: &SpriteAssets) -> Vec<String> {
        assets
            .crab_frames
            .iter()
            .map(|f| Path::new(&f.label).file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn frames_are_ordered_by_file_name() {
        let dir = complete("order");
        for i in 3..12 {
            dir.png(&format!("crab/{i}.png"), 16, 16);
        }
        let assets = SpriteAssets::load(&dir.0).unwrap();
        let expected: Vec<String> = (0..12).map(|i| format!("{i}.png")).collect();
        assert_eq!(frame_names(&assets), expected);
    }

    #[test]
    fn named_frames_follow_numbered_ones() {
        let dir = complete("named");
        dir.png("crab/walk_b.png", 16, 16);
        dir.png("crab/walk_a.png", 16, 16);
        let assets = SpriteAssets::load(&dir.0).unwrap();
        assert_eq!(
            frame_names(&assets),
            ["0.png", "1.png", "2.png", "walk_a.png", "walk_b.png"]
        );
    }

    #[test]
    fn font_path_is_recorded() {
        let dir = complete("fontpath");
        let assets = SpriteAssets::load(&dir.0).unwrap();
        assert_eq!(assets.font_path, dir.0.join(FONT_FILE));
    }

    #[test]
    fn non_image_files_are_skipped() {
        let dir = complete("skip");
        std::fs::write(dir.0.join("crab/notes.txt"), "walk cycle").unwrap();
        assert_eq!(SpriteAssets::load(&dir.0).unwrap().frame_count(), 3);
    }

    #[test]
    fn missing_fish_is_an_asset_error() {
        let dir = complete("nofish");
        std::fs::remove_file(dir.0.join(FISH_FILE)).unwrap();
        let err = SpriteAssets::load(&dir.0).unwrap_err();
        match err {
            CrabError::Asset { path, .. } => assert!(path.ends_with(FISH_FILE)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_crab_dir_is_an_error() {
        let dir = ScratchDir::new("noframes");
        dir.png(BACKGROUND_FILE, 50, 40);
        dir.png(FISH_FILE, 16, 16);
        dir.font();
        assert!(matches!(SpriteAssets::load(&dir.0), Err(CrabError::Asset { .. })));
    }

    #[test]
    fn mismatched_frame_size_is_an_error() {
        let dir = complete("mismatch");
        dir.png("crab/3.png", 20, 16);
        assert!(matches!(SpriteAssets::load(&dir.0), Err(CrabError::Asset { .. })));
    }

    #[test]
    fn missing_font_is_an_error() {
        let dir = complete("nofont");
        std::fs::remove_file(dir.0.join(FONT_FILE)).unwrap();
        assert!(SpriteAssets::load(&dir.0).is_err());
    }
}
