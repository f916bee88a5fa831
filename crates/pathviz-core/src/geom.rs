//! Cell coordinates ([`Point`]) and origin-anchored extents ([`Range`]).

use std::fmt;
use std::ops::{Add, Sub};

/// Integer cell coordinates: `x` is the column, `y` the row (down).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self` moved by `dx` columns and `dy` rows.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs.x, -rhs.y)
    }
}

/// The cells `(0, 0)` up to, but excluding, `(width, height)`.
///
/// Both the display buffer and the search grid are laid out row-major over
/// a `Range`, so [`index`](Range::index) doubles as their storage offset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    width: i32,
    height: i32,
}

impl Range {
    /// Negative dimensions are clamped to zero.
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    #[inline]
    pub fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// `(width, height)` as a point.
    #[inline]
    pub fn size(self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Row-major offset of `p`.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    /// Every point, row by row.
    pub fn iter(self) -> impl ExactSizeIterator<Item = Point> + Clone {
        let w = self.width.max(1) as usize;
        (0..self.len()).map(move |i| Point::new((i % w) as i32, (i / w) as i32))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_sub_shift() {
        let p = Point::new(2, 5);
        assert_eq!(p + Point::new(1, -1), Point::new(3, 4));
        assert_eq!(p - p, Point::ZERO);
        assert_eq!(p.to_string(), "(2, 5)");
    }

    #[test]
    fn negative_extent_is_empty() {
        let r = Range::new(-3, 4);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
        assert!(!r.contains(Point::ZERO));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Range::new(3, 2);
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 0)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn iter_matches_index() {
        let r = Range::new(4, 3);
        assert_eq!(r.iter().len(), 12);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
        }
        assert_eq!(r.iter().last(), Some(Point::new(3, 2)));
        assert_eq!(r.index(Point::new(4, 0)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_is_a_plain_struct() {
        let json = serde_json::to_string(&Point::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":7}"#);
        let back: Range = serde_json::from_str(r#"{"width":2,"height":5}"#).unwrap();
        assert_eq!(back, Range::new(2, 5));
    }
}
