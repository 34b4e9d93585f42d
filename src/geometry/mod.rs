use std::ops::{Add, Mul};

use num::{Signed, Zero};

use crate::config::Measure;

/// Path data builder for curved outlines (icons mostly).
pub mod path;

/// Transform lists, rendered as SVG `transform` attributes.
pub mod transform;

/// Trait and helpers turning exact geometry into `svg` crate elements.
pub mod svg;

/// An absolute position in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: Measure,
    pub y: Measure,
}

/// A relative displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dx: Measure,
    pub dy: Measure,
}

impl Coord {
    pub fn new(x: Measure, y: Measure) -> Coord {
        Coord { x, y }
    }

    pub fn origin() -> Coord {
        Coord::new(Measure::zero(), Measure::zero())
    }
}

impl Vector {
    pub fn new(dx: Measure, dy: Measure) -> Vector {
        Vector { dx, dy }
    }

    /// Same displacement, reflected across the vertical axis.
    pub fn mirrored(&self) -> Vector {
        Vector::new(-self.dx, self.dy)
    }
}

impl Add<Vector> for Coord {
    type Output = Coord;

    fn add(self, rhs: Vector) -> Coord {
        Coord::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Mul<Measure> for Coord {
    type Output = Coord;

    fn mul(self, rhs: Measure) -> Coord {
        Coord::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Measure> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Measure) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

/// Convenience for writing integer-valued vectors in tables.
pub fn v(dx: Measure, dy: Measure) -> Vector {
    Vector::new(dx, dy)
}

/// A filled outline: one absolute anchor, then relative moves only. Keeping
/// absolute positions out of the moves is what lets a whole trident move or
/// scale by wrapping it, without recomputing any of its geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub anchor: Coord,
    pub moves: Vec<Vector>,
}

impl PathSegment {
    pub fn new(anchor: Coord, moves: Vec<Vector>) -> PathSegment {
        PathSegment { anchor, moves }
    }

    /// True when the moves bring the pen back to the anchor.
    pub fn is_closed(&self) -> bool {
        let total = self
            .moves
            .iter()
            .fold(Vector::new(Measure::zero(), Measure::zero()), |acc, m| {
                Vector::new(acc.dx + m.dx, acc.dy + m.dy)
            });
        total.dx.is_zero() && total.dy.is_zero()
    }

    /// Absolute vertices, anchor first.
    pub fn vertices(&self) -> Vec<Coord> {
        let mut out = vec![self.anchor];
        let mut pen = self.anchor;
        for step in &self.moves {
            pen = pen + *step;
            out.push(pen);
        }
        out
    }

    pub fn scaled(&self, k: Measure) -> PathSegment {
        PathSegment {
            anchor: self.anchor * k,
            moves: self.moves.iter().map(|m| *m * k).collect(),
        }
    }

    /// SVG path data: `M x y l dx dy ... z`
    pub fn to_path_data(&self) -> String {
        let mut data = format!("M {} {}", number(self.anchor.x), number(self.anchor.y));
        for step in &self.moves {
            data.push_str(&format!(" l {} {}", number(step.dx), number(step.dy)));
        }
        data.push_str(" z");
        data
    }
}

/// Render an exact measure for markup. Integers print as integers, anything
/// else is rounded to four decimal places with trailing zeros trimmed. This is
/// the only place a measure turns into floating point.
pub fn number(value: Measure) -> String {
    if value.is_integer() {
        return value.to_integer().to_string();
    }
    let approx = *value.numer() as f64 / *value.denom() as f64;
    let text = format!("{:.4}", approx);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" || text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// Absolute difference, used for dimension labels.
pub fn span(a: Measure, b: Measure) -> Measure {
    (b - a).abs()
}

#[cfg(test)]
mod test {
    use super::*;

    fn m(n: i64) -> Measure {
        Measure::from_integer(n)
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(m(768)), "768");
        assert_eq!(number(m(-12)), "-12");
        assert_eq!(number(Measure::new(1, 2)), "0.5");
        assert_eq!(number(Measure::new(4096, 3)), "1365.3333");
        assert_eq!(number(Measure::new(-1, 100000)), "0");
    }

    #[test]
    fn test_segment_closure_and_vertices() {
        let square = PathSegment::new(
            Coord::new(m(10), m(10)),
            vec![v(m(5), m(0)), v(m(0), m(5)), v(m(-5), m(0)), v(m(0), m(-5))],
        );
        assert!(square.is_closed());
        let verts = square.vertices();
        assert_eq!(verts.len(), 5);
        assert_eq!(verts[2], Coord::new(m(15), m(15)));
        assert_eq!(verts[4], square.anchor);

        let open = PathSegment::new(Coord::origin(), vec![v(m(1), m(1))]);
        assert!(!open.is_closed());
    }

    #[test]
    fn test_segment_path_data() {
        let tri = PathSegment::new(
            Coord::new(m(0), m(0)),
            vec![v(Measure::new(3, 2), m(2)), v(m(-3), m(0))],
        );
        assert_eq!(tri.to_path_data(), "M 0 0 l 1.5 2 l -3 0 z");
    }

    #[test]
    fn test_scaled_segment() {
        let seg = PathSegment::new(Coord::new(m(2), m(4)), vec![v(m(1), m(-1))]);
        let doubled = seg.scaled(m(2));
        assert_eq!(doubled.anchor, Coord::new(m(4), m(8)));
        assert_eq!(doubled.moves[0], v(m(2), m(-2)));
    }
}
