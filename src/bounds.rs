/// Size of a pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub width: usize,
    pub height: usize,
}

impl Shape {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of cells in the grid
    pub const fn area(self) -> usize {
        self.width * self.height
    }

    /// Check a signed logical coordinate against the grid
    #[allow(clippy::cast_sign_loss)]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Row-major index of a cell, if it lies inside the grid
    #[allow(clippy::cast_sign_loss)]
    pub const fn index_of(self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }
}

/// Logical-to-physical coordinate transform for the panel wiring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelMapping {
    /// Flip columns: logical `x` lands on physical `width - x - 1`
    pub mirror_x: bool,
    /// Flip rows: logical `y` lands on physical `height - y - 1`
    pub mirror_y: bool,
}

impl PixelMapping {
    /// Identity mapping
    pub const IDENTITY: Self = Self {
        mirror_x: false,
        mirror_y: false,
    };

    /// Map an in-bounds logical cell to the driver's coordinate space
    pub const fn map(self, x: usize, y: usize, shape: Shape) -> (usize, usize) {
        let x = if self.mirror_x { shape.width - x - 1 } else { x };
        let y = if self.mirror_y { shape.height - y - 1 } else { y };
        (x, y)
    }
}
