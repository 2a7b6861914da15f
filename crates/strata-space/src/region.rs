//! Axis-aligned rectangular regions within a layer.

/// An axis-aligned rectangle of cells within one layer.
///
/// The origin may lie outside a matrix; use [`clip`](Rect::clip) to
/// restrict a rectangle to valid positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Leftmost column.
    pub x: i32,
    /// Topmost row.
    pub y: i32,
    /// Number of columns. Always at least one.
    pub width: usize,
    /// Number of rows. Always at least one.
    pub height: usize,
}

impl Rect {
    /// A rectangle spanning two corners, both inclusive, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use strata_space::Rect;
    ///
    /// let r = Rect::from_corners((4, 1), (2, 3));
    /// assert_eq!((r.x, r.y, r.width, r.height), (2, 1, 3, 3));
    /// ```
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        let (x0, x1) = (a.0.min(b.0), a.0.max(b.0));
        let (y0, y1) = (a.1.min(b.1), a.1.max(b.1));
        Self {
            x: x0,
            y: y0,
            width: x1.abs_diff(x0) as usize + 1,
            height: y1.abs_diff(y0) as usize + 1,
        }
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether `(x, y)` lies inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = i64::from(x) - i64::from(self.x);
        let dy = i64::from(y) - i64::from(self.y);
        (0..self.width as i64).contains(&dx) && (0..self.height as i64).contains(&dy)
    }

    /// Intersection with `[0, width) x [0, height)`, or `None` if disjoint.
    pub fn clip(&self, width: usize, height: usize) -> Option<Rect> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + self.width as i64).min(width as i64);
        let y1 = (i64::from(self.y) + self.height as i64).min(height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Rect {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as usize,
            height: (y1 - y0) as usize,
        })
    }

    /// Covered positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x, y) = (self.x, self.y);
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |dy| (0..width).map(move |dx| (x + dx, y + dy)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_corners() {
        let r = Rect::from_corners((3, 3), (3, 3));
        assert_eq!(r.area(), 1);
        assert!(r.contains(3, 3));
        assert!(!r.contains(4, 3));
    }

    #[test]
    fn iter_is_row_major() {
        let r = Rect::from_corners((0, 0), (1, 1));
        let v: Vec<_> = r.iter().collect();
        assert_eq!(v, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn clip_partial_overlap() {
        let r = Rect::from_corners((-2, -1), (1, 5));
        let c = r.clip(4, 3).unwrap();
        assert_eq!((c.x, c.y, c.width, c.height), (0, 0, 2, 3));
    }

    #[test]
    fn clip_disjoint() {
        let r = Rect::from_corners((5, 5), (6, 6));
        assert_eq!(r.clip(4, 4), None);
        let r = Rect::from_corners((-3, 0), (-1, 0));
        assert_eq!(r.clip(4, 4), None);
    }

    #[test]
    fn contains_handles_negative_origin() {
        let r = Rect::from_corners((-1, -1), (1, 1));
        assert!(r.contains(-1, 0));
        assert!(!r.contains(2, 0));
        assert!(!r.contains(0, -2));
    }
}
