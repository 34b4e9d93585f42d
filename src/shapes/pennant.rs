//! Tapered pennants, flown at a quarter of the flag hoist.
use std::str::FromStr;

use num::Zero;
use svg::node::element::Group;

use crate::config::{Config, FlagColor, Measure, BLACK};
use crate::errors::FlagError;
use crate::geometry::svg::{transformed_group, ToSvg};
use crate::geometry::transform::Transform;
use crate::geometry::{number, v, Coord, PathSegment};
use crate::shapes::field::Field;
use crate::shapes::icons::star_outline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PennantKind {
    OfficerInCharge,
    Cruise,
}

impl PennantKind {
    pub fn name(&self) -> &'static str {
        match self {
            PennantKind::OfficerInCharge => "oic",
            PennantKind::Cruise => "cruise",
        }
    }
}

impl FromStr for PennantKind {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "oic" | "officer-in-charge" => Ok(PennantKind::OfficerInCharge),
            "cruise" => Ok(PennantKind::Cruise),
            _ => Err(FlagError::InvalidSelector(format!("pennant '{}'", s))),
        }
    }
}

/// Pennant canvas height.
pub fn pennant_hoist(config: &Config) -> Measure {
    config.hoist() / 4
}

/// Upper and lower edge of the taper at `x`.
pub fn edge_at(config: &Config, x: Measure) -> (Measure, Measure) {
    let half = pennant_hoist(config) / 2;
    let top = half * x / config.fly();
    (top, pennant_hoist(config) - top)
}

/// Quadrilateral slice of the taper between `x0` and `x1`. Collapses to a
/// triangle when `x1` is the fly end.
fn slice(config: &Config, x0: Measure, x1: Measure) -> PathSegment {
    let (top0, bottom0) = edge_at(config, x0);
    let (top1, bottom1) = edge_at(config, x1);
    let zero = Measure::zero();
    let mut moves = vec![v(x1 - x0, top1 - top0)];
    if bottom1 != top1 {
        moves.push(v(zero, bottom1 - top1));
    }
    moves.push(v(x0 - x1, bottom0 - bottom1));
    moves.push(v(zero, top0 - bottom0));
    PathSegment::new(Coord::new(x0, top0), moves)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pennant {
    pub kind: PennantKind,
}

impl Pennant {
    pub fn new(kind: PennantKind) -> Pennant {
        Pennant { kind }
    }

    pub fn outline(&self, config: &Config) -> PathSegment {
        slice(config, Measure::zero(), config.fly())
    }

    /// Coloured sections, hoist first.
    pub fn sections(&self, config: &Config) -> Vec<(PathSegment, FlagColor)> {
        let fly = config.fly();
        match self.kind {
            PennantKind::OfficerInCharge => vec![(self.outline(config), FlagColor::Blue)],
            PennantKind::Cruise => vec![
                (slice(config, Measure::zero(), fly / 4), FlagColor::Red),
                (slice(config, fly / 4, fly / 2), FlagColor::White),
                (slice(config, fly / 2, fly), FlagColor::Blue),
            ],
        }
    }

    pub fn render(&self, config: &Config) -> String {
        let border = number(Field::border_width(config));
        let mut group = Group::new().set("class", format!("pennant pennant-{}", self.kind.name()));
        for (section, color) in self.sections(config) {
            group = group.add(section.to_path().set("fill", color.hex()));
        }
        match self.kind {
            PennantKind::OfficerInCharge => {
                let centroid = Coord::new(config.fly() / 3, pennant_hoist(config) / 2);
                group = group.add(
                    transformed_group(&Transform::scale_about(Measure::new(9, 10), centroid)).add(
                        self.outline(config)
                            .to_path()
                            .set("fill", "none")
                            .set("stroke", FlagColor::White.hex())
                            .set("stroke-width", number(config.fly() / 192)),
                    ),
                );
            }
            PennantKind::Cruise => {
                let hoist = pennant_hoist(config);
                let center = Coord::new(config.fly() / 8, hoist / 2);
                group = group.add(
                    star_outline(center, hoist / 4)
                        .to_path()
                        .set("fill", FlagColor::White.hex()),
                );
            }
        }
        group
            .add(
                self.outline(config)
                    .to_path()
                    .set("fill", "none")
                    .set("stroke", BLACK)
                    .set("stroke-width", border),
            )
            .to_string()
    }
}
