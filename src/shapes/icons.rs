//! Icons for the non-trident flags, plus the star shared by the ensign, US flag
//! and cruise pennant.
//!
//! Icons are drawn in a 1000-unit square centred on the origin and placed with
//! a translate/scale pair, so a single outline serves every size.
use std::str::FromStr;

use svg::node::element::{Group, Rectangle};

use crate::config::{FlagColor, Measure};
use crate::errors::FlagError;
use crate::geometry::path::PathData;
use crate::geometry::svg::{circle, rect, transformed_group, ToSvg};
use crate::geometry::transform::Transform;
use crate::geometry::{number, v, Coord, PathSegment, Vector};

/// Icon box edge, in icon units.
pub const ICON_UNITS: i64 = 1000;

/// Five pointed star, radius 500, point up, in hundredths of an icon unit.
/// Outer and inner points alternate.
const STAR_POINTS: [(i64, i64); 10] = [
    (0, -50000),
    (11226, -15451),
    (47553, -15451),
    (18163, 5902),
    (29389, 40451),
    (0, 19098),
    (-29389, 40451),
    (-18163, 5902),
    (-47553, -15451),
    (-11226, -15451),
];

fn m(n: i64) -> Measure {
    Measure::from_integer(n)
}

/// Star outline with its centre at `center` and outer radius `radius`.
pub fn star_outline(center: Coord, radius: Measure) -> PathSegment {
    let k = radius / 50000;
    let points: Vec<Coord> = STAR_POINTS
        .iter()
        .map(|(x, y)| Coord::new(center.x + m(*x) * k, center.y + m(*y) * k))
        .collect();
    let moves = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| Vector::new(b.x - a.x, b.y - a.y))
        .collect();
    PathSegment::new(points[0], moves)
}

/// Binocular size steps by organisational level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Squadron,
    District,
    National,
}

impl Level {
    pub fn scale(&self) -> Measure {
        match self {
            Level::Squadron => Measure::new(3, 4),
            Level::District => m(1),
            Level::National => Measure::new(5, 4),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Anchor,
    Star,
    Lighthouse,
    Binoculars(Level),
    Trumpet,
}

impl FromStr for Icon {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anchor" => Ok(Icon::Anchor),
            "star" => Ok(Icon::Star),
            "lighthouse" => Ok(Icon::Lighthouse),
            "binoculars" => Ok(Icon::Binoculars(Level::District)),
            "trumpet" => Ok(Icon::Trumpet),
            _ => Err(FlagError::InvalidSelector(format!("icon '{}'", s))),
        }
    }
}

fn box_path(x0: i64, y0: i64, x1: i64, y1: i64) -> PathSegment {
    PathSegment::new(
        Coord::new(m(x0), m(y0)),
        vec![
            v(m(x1 - x0), m(0)),
            v(m(0), m(y1 - y0)),
            v(m(x0 - x1), m(0)),
            v(m(0), m(y0 - y1)),
        ],
    )
}

fn triangle(x: i64, y: i64, a: (i64, i64), b: (i64, i64)) -> PathSegment {
    PathSegment::new(
        Coord::new(m(x), m(y)),
        vec![
            v(m(a.0), m(a.1)),
            v(m(b.0 - a.0), m(b.1 - a.1)),
            v(m(-b.0), m(-b.1)),
        ],
    )
}

fn rounded(x0: i64, y0: i64, x1: i64, y1: i64, radius: i64) -> Rectangle {
    rect(m(x0), m(y0), m(x1 - x0), m(y1 - y0)).set("rx", number(m(radius)))
}

impl Icon {
    /// Add the outline parts, in icon units, to `group`. `color` is needed
    /// for stroked parts.
    fn draw(&self, color: FlagColor, group: Group) -> Group {
        match self {
            Icon::Anchor => {
                let arms = PathData::new()
                    .move_to(Coord::new(m(-320), m(160)))
                    .quad_by(v(m(80), m(260)), v(m(320), m(260)))
                    .quad_by(v(m(240), m(0)), v(m(320), m(-260)))
                    .line_by(v(m(-60), m(30)))
                    .quad_by(v(m(-60), m(170)), v(m(-260), m(170)))
                    .quad_by(v(m(-200), m(0)), v(m(-260), m(-170)))
                    .close();
                group
                    .add(
                        circle(Coord::new(m(0), m(-380)), m(70))
                            .set("fill", "none")
                            .set("stroke", color.hex())
                            .set("stroke-width", "30"),
                    )
                    .add(box_path(-30, -310, 30, 380).to_path())
                    .add(box_path(-200, -270, 200, -220).to_path())
                    .add(arms.to_path())
                    .add(triangle(-320, 160, (-40, -110), (110, -70)).to_path())
                    .add(triangle(320, 160, (40, -110), (-110, -70)).to_path())
            }
            Icon::Star => group.add(star_outline(Coord::origin(), m(500)).to_path()),
            Icon::Lighthouse => group
                .add(
                    PathSegment::new(
                        Coord::new(m(-150), m(450)),
                        vec![
                            v(m(60), m(-600)),
                            v(m(180), m(0)),
                            v(m(60), m(600)),
                            v(m(-300), m(0)),
                        ],
                    )
                    .to_path(),
                )
                .add(box_path(-130, -190, 130, -150).to_path())
                .add(box_path(-80, -330, 80, -190).to_path())
                .add(
                    PathData::new()
                        .move_to(Coord::new(m(-110), m(-330)))
                        .arc_by(m(110), false, true, v(m(220), m(0)))
                        .close()
                        .to_path(),
                )
                .add(triangle(-90, -270, (-380, -90), (-380, 90)).to_path())
                .add(triangle(90, -270, (380, -90), (380, 90)).to_path())
                .add(box_path(-250, 450, 250, 500).to_path()),
            Icon::Binoculars(_) => group
                .add(rounded(-300, -150, -60, 350, 40))
                .add(rounded(60, -150, 300, 350, 40))
                .add(box_path(-60, -50, 60, 50).to_path())
                .add(rounded(-260, -300, -100, -150, 20))
                .add(rounded(100, -300, 260, -150, 20)),
            Icon::Trumpet => {
                let bell = PathData::new()
                    .move_to(Coord::new(m(200), m(-25)))
                    .quad_by(v(m(100), m(-10)), v(m(200), m(-175)))
                    .line_by(v(m(0), m(400)))
                    .quad_by(v(m(-100), m(-165)), v(m(-200), m(-175)))
                    .close();
                group
                    .add(box_path(-400, -25, 200, 25).to_path())
                    .add(bell.to_path())
                    .add(box_path(-450, -45, -400, 45).to_path())
                    .add(box_path(-150, -110, -110, -25).to_path())
                    .add(box_path(-80, -110, -40, -25).to_path())
                    .add(box_path(-10, -110, 30, -25).to_path())
            }
        }
    }

    /// Placement transforms: move the icon's origin to `center` and scale the
    /// 1000-unit box to `size`.
    pub fn placement(&self, center: Coord, size: Measure) -> Vec<Transform> {
        let size = match self {
            Icon::Binoculars(level) => size * level.scale(),
            _ => size,
        };
        vec![
            Transform::translate(center.x, center.y),
            Transform::scale(size / ICON_UNITS),
        ]
    }

    pub fn to_group(&self, color: FlagColor, center: Coord, size: Measure) -> Group {
        self.draw(
            color,
            transformed_group(&self.placement(center, size)).set("fill", color.hex()),
        )
    }

    pub fn render(&self, color: FlagColor, center: Coord, size: Measure) -> String {
        self.to_group(color, center, size).to_string()
    }
}

/// Two trumpets crossed at plus/minus 45 degrees about `center`.
pub fn crossed_trumpets(color: FlagColor, center: Coord, size: Measure) -> String {
    [-45i64, 45]
        .iter()
        .map(|deg| {
            transformed_group(&[Transform::rotate(m(*deg), center)])
                .add(Icon::Trumpet.to_group(color, center, size))
                .to_string()
        })
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_star_closed_and_exact() {
        let star = star_outline(Coord::new(m(100), m(100)), m(50));
        assert!(star.is_closed());
        assert_eq!(star.moves.len(), 10);
        assert_eq!(star.anchor, Coord::new(m(100), m(50)));
        // Symmetric about the vertical axis.
        let verts = star.vertices();
        assert_eq!(verts[2].x - m(100), m(100) - verts[8].x);
    }

    #[test]
    fn test_star_scales_linearly() {
        let small = star_outline(Coord::origin(), m(10));
        let big = star_outline(Coord::origin(), m(30));
        assert_eq!(small.scaled(m(3)), big);
    }

    #[test]
    fn test_icon_placement() {
        let center = Coord::new(m(2304), m(1536));
        let list = Icon::Anchor.placement(center, m(1500));
        assert_eq!(
            crate::geometry::transform::render_list(&list),
            "translate(2304 1536) scale(1.5)"
        );
        let national = Icon::Binoculars(Level::National).placement(center, m(1000));
        assert_eq!(national[1], Transform::scale(Measure::new(5, 4)));
    }

    #[test]
    fn test_icon_render_uses_color() {
        let center = Coord::new(m(0), m(0));
        for icon in [
            Icon::Anchor,
            Icon::Star,
            Icon::Lighthouse,
            Icon::Binoculars(Level::Squadron),
            Icon::Trumpet,
        ] {
            let markup = icon.render(FlagColor::Blue, center, m(1000));
            assert!(markup.contains("fill=\"#041E42\""));
            assert!(markup.contains("<path") || markup.contains("<rect"));
        }
        let anchor = Icon::Anchor.render(FlagColor::Red, center, m(1000));
        assert!(anchor.contains("stroke=\"#BF0D3E\""));
    }

    #[test]
    fn test_crossed_trumpets() {
        let markup = crossed_trumpets(FlagColor::White, Coord::new(m(10), m(10)), m(100));
        assert_eq!(markup.matches("rotate(").count(), 2);
        assert!(markup.contains("rotate(-45 10 10)"));
    }

    #[test]
    fn test_icon_parse() {
        assert_eq!("Lighthouse".parse::<Icon>().unwrap(), Icon::Lighthouse);
        assert!("compass".parse::<Icon>().is_err());
    }
}
