// Tile coordinates for placed objects

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute tile coordinate: x/y on the grid plus a height level.
///
/// Plain value type; records carry it by value and copies are free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Offset within the same plane.
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            plane: self.plane,
        }
    }

    /// Same x/y on a different height level.
    pub const fn with_plane(self, plane: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            plane,
        }
    }

    /// Tile distance under the square-grid movement metric, where a diagonal
    /// step counts as one. Planes are ignored; use [`within_distance`] for
    /// plane-aware checks.
    ///
    /// [`within_distance`]: Position::within_distance
    pub fn chebyshev_distance(self, other: Position) -> u32 {
        // i64 intermediates keep the subtraction in range for any pair of
        // coordinates; the result itself always fits in u32.
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        dx.max(dy) as u32
    }

    /// True when `other` shares this plane and is within `radius` tiles.
    pub fn within_distance(self, other: Position, radius: u32) -> bool {
        self.plane == other.plane && self.chebyshev_distance(other) <= radius
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_offsets_x_y_only() {
        let p = Position::new(3200, 3200, 1);
        let q = p.translate(-5, 12);
        assert_eq!(q, Position::new(3195, 3212, 1));
        // Source is untouched
        assert_eq!(p, Position::new(3200, 3200, 1));
    }

    #[test]
    fn test_with_plane_keeps_x_y() {
        let p = Position::new(10, 20, 0).with_plane(3);
        assert_eq!(p, Position::new(10, 20, 3));
    }

    #[test]
    fn test_chebyshev_distance() {
        let origin = Position::default();
        assert_eq!(origin.chebyshev_distance(origin), 0);
        assert_eq!(origin.chebyshev_distance(Position::new(3, 0, 0)), 3);
        assert_eq!(origin.chebyshev_distance(Position::new(3, -4, 0)), 4);
        // Diagonal steps count once
        assert_eq!(origin.chebyshev_distance(Position::new(7, 7, 0)), 7);
        // Symmetric
        let a = Position::new(-2, 9, 0);
        let b = Position::new(4, -1, 0);
        assert_eq!(a.chebyshev_distance(b), b.chebyshev_distance(a));
    }

    #[test]
    fn test_chebyshev_distance_extreme_coordinates() {
        let a = Position::new(i32::MIN, 0, 0);
        let b = Position::new(i32::MAX, 0, 0);
        assert_eq!(a.chebyshev_distance(b), u32::MAX);
    }

    #[test]
    fn test_within_distance_requires_same_plane() {
        let a = Position::new(100, 100, 0);
        let b = Position::new(102, 99, 0);
        assert!(a.within_distance(b, 2));
        assert!(!a.within_distance(b, 1));
        // Same tile on another plane is never "within"
        assert!(!a.within_distance(a.with_plane(1), u32::MAX));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3222, 3218, 0).to_string(), "(3222, 3218, 0)");
        assert_eq!(Position::new(-1, 5, 2).to_string(), "(-1, 5, 2)");
    }
}
