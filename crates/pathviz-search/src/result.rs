use pathviz_core::Point;

use crate::distance::manhattan;
use crate::step::Cancelled;

/// A solution from Start to End, both endpoints included.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Length in edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether every consecutive pair is orthogonally adjacent.
    pub fn is_contiguous(&self) -> bool {
        self.points.windows(2).all(|w| manhattan(w[0], w[1]) == 1)
    }
}

/// Outcome of one search invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchResult {
    Found(Path),
    /// The reachable space was exhausted without reaching End.
    NotFound,
    /// The stepper asked the search to stop.
    Cancelled,
}

impl SearchResult {
    #[inline]
    pub fn found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    #[inline]
    pub fn cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Short label for status lines and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "no path",
            Self::Cancelled => "cancelled",
        }
    }
}

impl From<Result<Option<Path>, Cancelled>> for SearchResult {
    fn from(r: Result<Option<Path>, Cancelled>) -> Self {
        match r {
            Ok(Some(path)) => Self::Found(path),
            Ok(None) => Self::NotFound,
            Err(Cancelled) => Self::Cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_len_counts_edges() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]);
        assert_eq!(p.len(), 2);
        assert!(p.is_contiguous());
        assert_eq!(p.first(), Some(Point::new(0, 0)));
        assert_eq!(p.last(), Some(Point::new(1, 1)));
        assert!(Path::new(vec![Point::ZERO]).is_empty());
    }

    #[test]
    fn gap_is_not_contiguous() {
        let p = Path::new(vec![Point::new(0, 0), Point::new(2, 0)]);
        assert!(!p.is_contiguous());
    }

    #[test]
    fn result_from_inner() {
        assert!(SearchResult::from(Ok(None)).not_found());
        assert!(SearchResult::from(Err(Cancelled)).cancelled());
        let r = SearchResult::from(Ok(Some(Path::new(vec![Point::ZERO, Point::new(0, 1)]))));
        assert!(r.found());
        assert_eq!(r.path().map(Path::len), Some(1));
        assert_eq!(r.label(), "found");
    }
}
