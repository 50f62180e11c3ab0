//! Display adapter contract and an in-memory implementation.

use core::convert::Infallible;

use crate::{
    bounds::Shape,
    color::{BLACK, Rgb},
};

/// Abstract LED matrix driver
///
/// Implement this trait to support different panels. Writes are expected
/// to be fast and synchronous; any error is treated as fatal by the
/// render loop.
pub trait MatrixDriver {
    type Error: core::error::Error + 'static;

    /// Physical `(width, height)` of the panel
    fn shape(&self) -> Shape;

    /// Blank the driver's pending buffer
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Write one pixel in physical coordinates
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Present the pending buffer
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Power the panel down
    fn off(&mut self) -> Result<(), Self::Error>;

    /// Rotate the panel output by `degrees`
    fn set_rotation(&mut self, degrees: u16) -> Result<(), Self::Error>;

    /// Global output brightness in `[0, 1]`
    fn set_brightness(&mut self, level: f32) -> Result<(), Self::Error>;
}

/// Driver that keeps everything in memory
///
/// Useful for tests and for running the renderer on machines without
/// a panel attached. `presented` holds the last shown buffer.
#[derive(Debug, Clone)]
pub struct MemoryMatrix {
    shape: Shape,
    pending: Vec<Rgb>,
    presented: Vec<Rgb>,
    brightness: f32,
    rotation: u16,
    powered: bool,
    frames_shown: usize,
}

impl MemoryMatrix {
    pub fn new(width: usize, height: usize) -> Self {
        let shape = Shape::new(width, height);
        Self {
            shape,
            pending: vec![BLACK; shape.area()],
            presented: vec![BLACK; shape.area()],
            brightness: 1.0,
            rotation: 0,
            powered: true,
            frames_shown: 0,
        }
    }

    /// Pixel of the last presented frame, in physical coordinates
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.shape.width || y >= self.shape.height {
            return None;
        }
        self.presented.get(y * self.shape.width + x).copied()
    }

    pub fn presented(&self) -> &[Rgb] {
        &self.presented
    }

    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    pub const fn rotation(&self) -> u16 {
        self.rotation
    }

    pub const fn is_powered(&self) -> bool {
        self.powered
    }

    pub const fn frames_shown(&self) -> usize {
        self.frames_shown
    }
}

impl MatrixDriver for MemoryMatrix {
    type Error = Infallible;

    fn shape(&self) -> Shape {
        self.shape
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.pending.fill(BLACK);
        Ok(())
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) -> Result<(), Self::Error> {
        if x < self.shape.width && y < self.shape.height {
            self.pending[y * self.shape.width + x] = color;
        }
        Ok(())
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.presented.copy_from_slice(&self.pending);
        self.frames_shown += 1;
        self.powered = true;
        Ok(())
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        self.pending.fill(BLACK);
        self.presented.fill(BLACK);
        self.powered = false;
        Ok(())
    }

    fn set_rotation(&mut self, degrees: u16) -> Result<(), Self::Error> {
        self.rotation = degrees % 360;
        Ok(())
    }

    fn set_brightness(&mut self, level: f32) -> Result<(), Self::Error> {
        self.brightness = level.clamp(0.0, 1.0);
        Ok(())
    }
}
