//! Image carousel cursor.

/// Index into a product's images, always in `[0, count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCursor {
    index: usize,
    count: usize,
}

impl ImageCursor {
    /// A cursor over `count` images. Zero images is a precondition violation
    /// and is treated as a single (missing) image.
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Step left, wrapping from the first image to the last.
    pub fn prev(self) -> Self {
        let index = if self.index == 0 {
            self.count - 1
        } else {
            self.index - 1
        };
        Self { index, ..self }
    }

    /// Step right, wrapping from the last image to the first.
    pub fn next(self) -> Self {
        let index = if self.index + 1 >= self.count {
            0
        } else {
            self.index + 1
        };
        Self { index, ..self }
    }
}

impl Default for ImageCursor {
    fn default() -> Self {
        Self::new(1)
    }
}
