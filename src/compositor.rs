//! Double-buffered pixel compositor.
//!
//! Draw calls stamp sprite frames into the `current` buffer with alpha
//! blending and color filters. Once per tick the finished buffer is
//! handed to the flush step, optionally mixed 50/50 with the previous
//! frame ("ghosting"), and then kept as `previous` for the next tick.

use crate::bounds::Shape;
use crate::color::{BLACK, Rgb, average_colors, blend_over};
use crate::filter::{ColorFilter, apply_filters};
use crate::sprite::Frame;

/// Width × height grid of opaque pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    shape: Shape,
    pixels: Vec<Rgb>,
}

impl FrameBuffer {
    /// Create an all-black buffer
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            pixels: vec![BLACK; shape.area()],
        }
    }

    pub const fn shape(&self) -> Shape {
        self.shape
    }

    pub const fn width(&self) -> usize {
        self.shape.width
    }

    pub const fn height(&self) -> usize {
        self.shape.height
    }

    /// Pixel at a logical coordinate, `None` when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.shape.index_of(x, y).map(|index| self.pixels[index])
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate `(x, y, color)` over every cell
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        let width = self.shape.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(index, color)| (index % width, index / width, *color))
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Rgb> {
        let index = self.shape.index_of(x, y)?;
        Some(&mut self.pixels[index])
    }
}

/// Pixel compositor owning the current and previous frame buffers
#[derive(Debug, Clone)]
pub struct Compositor {
    current: FrameBuffer,
    previous: FrameBuffer,
    output: FrameBuffer,
    ghosting: bool,
}

impl Compositor {
    /// Create a compositor for a grid of the given shape
    ///
    /// With `ghosting` enabled every flushed frame is the 50/50 mix of the
    /// current and the previous frame, which smooths animation on the panel.
    pub fn new(shape: Shape, ghosting: bool) -> Self {
        Self {
            current: FrameBuffer::new(shape),
            previous: FrameBuffer::new(shape),
            output: FrameBuffer::new(shape),
            ghosting,
        }
    }

    pub const fn shape(&self) -> Shape {
        self.current.shape()
    }

    pub const fn width(&self) -> usize {
        self.current.width()
    }

    pub const fn height(&self) -> usize {
        self.current.height()
    }

    pub const fn ghosting(&self) -> bool {
        self.ghosting
    }

    /// The buffer being drawn this tick
    pub const fn current(&self) -> &FrameBuffer {
        &self.current
    }

    /// The buffer flushed on the previous tick (before ghosting)
    pub const fn previous(&self) -> &FrameBuffer {
        &self.previous
    }

    /// Reset the current buffer to black; `previous` is left untouched
    pub fn clear(&mut self) {
        self.current.fill(BLACK);
    }

    /// Composite a sprite frame with its top-left corner at `(x, y)`
    ///
    /// Pixels that fall outside the buffer are skipped. Fully transparent
    /// pixels leave the target untouched, fully opaque ones replace it, and
    /// everything in between is blended over what is already there, so
    /// later stamps land on top of earlier ones.
    pub fn stamp(&mut self, frame: &Frame, x: i32, y: i32, filters: &[ColorFilter]) {
        for (i, j, pixel) in frame.pixels() {
            if pixel.a == 0 {
                continue;
            }
            let Some((tx, ty)) = offset(x, i).zip(offset(y, j)) else {
                continue;
            };
            let Some(target) = self.current.cell_mut(tx, ty) else {
                continue;
            };
            let src = apply_filters(Rgb::new(pixel.r, pixel.g, pixel.b), filters);
            *target = blend_over(*target, src, pixel.a);
        }
    }

    /// Opaque write of a single pixel, silently clipped
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb, filters: &[ColorFilter]) {
        if let Some(target) = self.current.cell_mut(x, y) {
            *target = apply_filters(color, filters);
        }
    }

    /// Finish the tick: return the frame to flush and roll `current` into `previous`
    pub fn snapshot_and_swap(&mut self) -> &FrameBuffer {
        if self.ghosting {
            for ((out, current), previous) in self
                .output
                .pixels
                .iter_mut()
                .zip(&self.current.pixels)
                .zip(&self.previous.pixels)
            {
                *out = average_colors(*current, *previous);
            }
        } else {
            self.output.pixels.copy_from_slice(&self.current.pixels);
        }
        self.previous.pixels.copy_from_slice(&self.current.pixels);
        &self.output
    }
}

/// `origin + delta`, or `None` when the sum leaves the `i32` range
fn offset(origin: i32, delta: usize) -> Option<i32> {
    origin.checked_add(i32::try_from(delta).ok()?)
}
