use std::ops::{Index, IndexMut};

/// Rectangular grid with row-major `Vec` storage.
///
/// Cells are addressed either by `(x, y)` coordinate or by flat index
/// (`index = y * width + x`). All neighbour methods return in-bounds flat
/// indices only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a `width x height` grid with every cell set to `value`.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize, value: T) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be nonzero");
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Overwrites every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(self.contains(x, y));
        y * self.width + x
    }

    /// `(x, y)` coordinate of a flat index.
    #[inline]
    pub fn coordinate(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let index = self.index(x, y);
        &mut self.cells[index]
    }

    /// Iterates cell values in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates the grid row by row, each item one row slice.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.width)
    }

    /// 4-way neighbours of `(x, y)`, in left, right, above, below order.
    pub fn direct_neighbours(&self, x: usize, y: usize) -> Vec<usize> {
        let mut neighbours = Vec::with_capacity(4);
        if x > 0 {
            neighbours.push(self.index(x - 1, y));
        }
        if x < self.width - 1 {
            neighbours.push(self.index(x + 1, y));
        }
        if y > 0 {
            neighbours.push(self.index(x, y - 1));
        }
        if y < self.height - 1 {
            neighbours.push(self.index(x, y + 1));
        }
        neighbours
    }

    /// Diagonal neighbours of `(x, y)`.
    pub fn diagonal_neighbours(&self, x: usize, y: usize) -> Vec<usize> {
        let mut neighbours = Vec::with_capacity(4);
        if x > 0 {
            if y > 0 {
                neighbours.push(self.index(x - 1, y - 1));
            }
            if y < self.height - 1 {
                neighbours.push(self.index(x - 1, y + 1));
            }
        }
        if x < self.width - 1 {
            if y > 0 {
                neighbours.push(self.index(x + 1, y - 1));
            }
            if y < self.height - 1 {
                neighbours.push(self.index(x + 1, y + 1));
            }
        }
        neighbours
    }

    /// All 8-way neighbours: direct first, then diagonal.
    pub fn all_neighbours(&self, x: usize, y: usize) -> Vec<usize> {
        let mut neighbours = self.direct_neighbours(x, y);
        neighbours.extend(self.diagonal_neighbours(x, y));
        neighbours
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.cells[index]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.cells[index]
    }
}
