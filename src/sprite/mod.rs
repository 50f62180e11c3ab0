//! Sprite sheet decoding and the in-memory sprite cache.
//!
//! A sheet is a grid of equally sized cells, optionally separated by a
//! uniform spacing. Cells are read row by row, left to right, and every
//! cell with at least one visible pixel becomes a frame. Fully
//! transparent cells are dropped, so a sprite may have fewer frames than
//! its sheet has cells.

mod kind;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::{debug, info};
use thiserror::Error;

use crate::color::Rgba;

pub use kind::SpriteKind;

/// Name of the digit sheet: glyphs 0-9 followed by the blinker glyph
pub const DIGITS_SPRITE: &str = "digits";

/// Errors raised while importing sprite sheets
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("failed to decode sprite sheet {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to read sprite directory {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },
}

/// One still image of a sprite, row-major RGBA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Frame {
    /// Build a frame from row-major pixels; `None` if the length does not match
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgba>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame filled with one color
    pub fn solid(width: usize, height: usize, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(i, j)` within the frame
    pub fn get(&self, i: usize, j: usize) -> Option<Rgba> {
        if i >= self.width || j >= self.height {
            return None;
        }
        self.pixels.get(j * self.width + i).copied()
    }

    /// Iterate `(i, j, pixel)` in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, Rgba)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(index, pixel)| (index % width, index / width, *pixel))
    }

    /// Check if any pixel has non-zero alpha
    pub fn is_visible(&self) -> bool {
        self.pixels.iter().any(|pixel| pixel.a != 0)
    }
}

/// Named, ordered sequence of frames
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    name: String,
    frames: Vec<Frame>,
}

impl Sprite {
    pub fn new(name: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            name: name.into(),
            frames,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Frame for an ever-increasing tick counter, wrapping around
    #[allow(clippy::cast_possible_truncation)]
    pub fn cycle(&self, ticks: u64) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        let index = (ticks % self.frames.len() as u64) as usize;
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Cut a sheet into frames
///
/// Only cells that fit entirely inside the image are read.
pub fn slice_sheet(
    image: &RgbaImage,
    frame_size: (u32, u32),
    spacing: u32,
) -> Result<Vec<Frame>, SpriteError> {
    let (frame_width, frame_height) = frame_size;
    if frame_width == 0 || frame_height == 0 {
        return Err(SpriteError::InvalidFrameSize {
            width: frame_width,
            height: frame_height,
        });
    }

    // A step past u32 range leaves room for a single cell along that axis
    let step_x = grid_step(frame_width, spacing);
    let step_y = grid_step(frame_height, spacing);
    let mut frames = Vec::new();

    for y in (0..image.height()).step_by(step_y) {
        if !fits(y, frame_height, image.height()) {
            break;
        }
        for x in (0..image.width()).step_by(step_x) {
            if !fits(x, frame_width, image.width()) {
                break;
            }
            let mut pixels = Vec::with_capacity(frame_width as usize * frame_height as usize);
            for y2 in 0..frame_height {
                for x2 in 0..frame_width {
                    let [r, g, b, a] = image.get_pixel(x + x2, y + y2).0;
                    pixels.push(Rgba { r, g, b, a });
                }
            }
            let frame = Frame {
                width: frame_width as usize,
                height: frame_height as usize,
                pixels,
            };
            if frame.is_visible() {
                frames.push(frame);
            } else {
                debug!("[Sprite Cache] Skipping empty cell at ({x}, {y})");
            }
        }
    }

    Ok(frames)
}

fn grid_step(frame: u32, spacing: u32) -> usize {
    frame
        .checked_add(spacing)
        .and_then(|step| usize::try_from(step).ok())
        .unwrap_or(usize::MAX)
}

/// Check that a cell starting at `start` with length `len` ends inside `limit`
fn fits(start: u32, len: u32, limit: u32) -> bool {
    start.checked_add(len).is_some_and(|end| end <= limit)
}

/// Process-lifetime store of decoded sprites, keyed by name
///
/// Sprites keep their insertion order; importing under an existing name
/// replaces the sprite in place.
#[derive(Debug, Default)]
pub struct SpriteCache {
    sprites: Vec<Sprite>,
    index: HashMap<String, usize>,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a sprite, replacing any sprite with the same name
    pub fn insert(&mut self, sprite: Sprite) -> &Sprite {
        let slot = if let Some(&slot) = self.index.get(sprite.name()) {
            self.sprites[slot] = sprite;
            slot
        } else {
            let slot = self.sprites.len();
            self.index.insert(sprite.name().to_owned(), slot);
            self.sprites.push(sprite);
            slot
        };
        &self.sprites[slot]
    }

    /// Import an already decoded sheet under `name`
    pub fn import_sprite(
        &mut self,
        image: &RgbaImage,
        frame_size: (u32, u32),
        spacing: u32,
        name: &str,
    ) -> Result<&Sprite, SpriteError> {
        let frames = slice_sheet(image, frame_size, spacing)?;
        info!(
            "[Sprite Cache] Imported {name} ({} frames)",
            frames.len()
        );
        Ok(self.insert(Sprite::new(name, frames)))
    }

    /// Decode and import a sheet from disk
    ///
    /// Without an explicit `name` the file stem is used.
    pub fn import_file(
        &mut self,
        path: impl AsRef<Path>,
        frame_size: (u32, u32),
        spacing: u32,
        name: Option<&str>,
    ) -> Result<&Sprite, SpriteError> {
        let path = path.as_ref();
        info!("[Sprite Cache] Importing {}", path.display());

        let image = image::open(path)
            .map_err(|source| SpriteError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let name = match name {
            Some(name) => name.to_owned(),
            None => sprite_name_from_path(path),
        };
        self.import_sprite(&image, frame_size, spacing, &name)
    }

    /// Import every file of a directory, in file name order
    ///
    /// Returns the number of imported sprites.
    pub fn import_dir(
        &mut self,
        dir: impl AsRef<Path>,
        frame_size: (u32, u32),
        spacing: u32,
    ) -> Result<usize, SpriteError> {
        let dir = dir.as_ref();
        let io_error = |source| SpriteError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.import_file(path, frame_size, spacing, None)?;
        }
        Ok(paths.len())
    }

    /// Lookup by name; `None` means "draw nothing"
    pub fn get(&self, name: &str) -> Option<&Sprite> {
        self.index.get(name).map(|&slot| &self.sprites[slot])
    }

    pub fn get_kind(&self, kind: SpriteKind) -> Option<&Sprite> {
        self.get(kind.as_str())
    }

    /// Weather glyph kinds present in the cache, in insertion order
    pub fn kinds(&self) -> impl Iterator<Item = SpriteKind> + '_ {
        self.sprites
            .iter()
            .filter_map(|sprite| SpriteKind::parse_from_str(sprite.name()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

fn sprite_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| path.to_string_lossy(), |stem| stem.to_string_lossy())
        .into_owned()
}
