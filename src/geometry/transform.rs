use num::Zero;

use crate::config::Measure;
use crate::geometry::{number, Coord};

/// One step of an SVG transform list. Angles are degrees, clockwise in SVG
/// screen space, and stay exact until rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Translate(Measure, Measure),
    Rotate(Measure, Measure, Measure),
    Scale(Measure),
}

impl Transform {
    pub fn translate(tx: Measure, ty: Measure) -> Transform {
        Transform::Translate(tx, ty)
    }

    /// Rotation by `degrees` about `about`.
    pub fn rotate(degrees: Measure, about: Coord) -> Transform {
        Transform::Rotate(degrees, about.x, about.y)
    }

    pub fn scale(s: Measure) -> Transform {
        Transform::Scale(s)
    }

    /// Scale by `s` while keeping `fixed` where it is. Expressed as the
    /// translate/scale pair so the inner geometry can stay in its own units.
    pub fn scale_about(s: Measure, fixed: Coord) -> Vec<Transform> {
        let keep = Measure::from_integer(1) - s;
        vec![
            Transform::Translate(fixed.x * keep, fixed.y * keep),
            Transform::Scale(s),
        ]
    }

    /// Exact application for translate, scale and quarter-turn rotations.
    /// Arbitrary rotations have no exact rational image, so they return None.
    pub fn apply(&self, c: &Coord) -> Option<Coord> {
        match self {
            Transform::Translate(tx, ty) => Some(Coord::new(c.x + tx, c.y + ty)),
            Transform::Scale(s) => Some(Coord::new(c.x * s, c.y * s)),
            Transform::Rotate(deg, cx, cy) => {
                if !(deg % Measure::from_integer(90)).is_zero() {
                    return None;
                }
                let (dx, dy) = (c.x - cx, c.y - cy);
                let turns = (deg / Measure::from_integer(90)).to_integer().rem_euclid(4);
                let (rx, ry) = match turns {
                    0 => (dx, dy),
                    1 => (-dy, dx),
                    2 => (-dx, -dy),
                    _ => (dy, -dx),
                };
                Some(Coord::new(cx + rx, cy + ry))
            }
        }
    }

    pub fn render(&self) -> String {
        match self {
            Transform::Translate(tx, ty) => format!("translate({} {})", number(*tx), number(*ty)),
            Transform::Rotate(deg, cx, cy) => {
                format!("rotate({} {} {})", number(*deg), number(*cx), number(*cy))
            }
            Transform::Scale(s) => format!("scale({})", number(*s)),
        }
    }
}

/// Render a transform list. SVG applies the rightmost entry first, same as
/// composing matrices right to left.
pub fn render_list(list: &[Transform]) -> String {
    list.iter()
        .map(|t| t.render())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Apply a list the way SVG would (last entry first), if every step is exact.
pub fn apply_list(list: &[Transform], c: &Coord) -> Option<Coord> {
    list.iter()
        .rev()
        .try_fold(*c, |acc, step| step.apply(&acc))
}

#[cfg(test)]
mod test {
    use super::*;

    fn m(n: i64) -> Measure {
        Measure::from_integer(n)
    }

    #[test]
    fn test_translate() {
        let tx = Transform::translate(m(10), m(5));
        let dest = tx.apply(&Coord::new(m(25), m(25))).unwrap();
        assert_eq!(dest, Coord::new(m(35), m(30)));
        assert_eq!(tx.render(), "translate(10 5)");
    }

    #[test]
    fn test_quarter_rotations() {
        let about = Coord::new(m(0), m(0));
        for (deg, dest) in vec![
            (90, Coord::new(m(0), m(1))),
            (180, Coord::new(m(-1), m(0))),
            (-90, Coord::new(m(0), m(-1))),
            (360, Coord::new(m(1), m(0))),
        ] {
            let rot = Transform::rotate(m(deg), about);
            assert_eq!(rot.apply(&Coord::new(m(1), m(0))), Some(dest));
        }
        assert_eq!(
            Transform::rotate(m(45), about).apply(&Coord::new(m(1), m(0))),
            None
        );
    }

    #[test]
    fn test_scale_about_keeps_fixed_point() {
        let fixed = Coord::new(m(100), m(60));
        let list = Transform::scale_about(Measure::new(2, 5), fixed);
        assert_eq!(apply_list(&list, &fixed), Some(fixed));
        assert_eq!(
            apply_list(&list, &Coord::new(m(110), m(60))),
            Some(Coord::new(m(104), m(60)))
        );
        assert_eq!(render_list(&list), "translate(60 36) scale(0.4)");
    }
}
