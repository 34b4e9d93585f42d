use std::str::FromStr;

use num::{Signed, Zero};
use svg::node::element::Group;

use crate::config::{Config, FlagColor, Measure, BLACK};
use crate::errors::FlagError;
use crate::geometry::svg::{rect, ToSvg};
use crate::geometry::{v, Coord, PathSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStyle {
    Regular,
    /// Notched fly end.
    Swallowtail,
    /// Swallowtail with a contrasting stripe down the hoist edge.
    Past,
}

impl FromStr for FieldStyle {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(FieldStyle::Regular),
            "swallowtail" => Ok(FieldStyle::Swallowtail),
            "past" => Ok(FieldStyle::Past),
            _ => Err(FlagError::InvalidSelector(format!("field style '{}'", s))),
        }
    }
}

/// Flag background. White fields get a thin border so they read on white paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub style: FieldStyle,
    pub color: FlagColor,
}

impl Field {
    pub fn new(style: FieldStyle, color: FlagColor) -> Field {
        Field { style, color }
    }

    /// Depth of the swallowtail notch. Shallow enough that the outer member
    /// of a triple trident stays clear of it.
    pub fn notch_depth(config: &Config) -> Measure {
        config.fly() / 8
    }

    pub fn past_stripe_width(config: &Config) -> Measure {
        config.fly() / 16
    }

    pub fn border_width(config: &Config) -> Measure {
        config.fly() / 600
    }

    /// Stripe colour for past officers: whichever brand colour isn't the field.
    pub fn past_stripe_color(&self) -> FlagColor {
        match self.color {
            FlagColor::Blue => FlagColor::Red,
            FlagColor::Red | FlagColor::White => FlagColor::Blue,
        }
    }

    /// Silhouette of the field, starting at the upper hoist corner.
    pub fn outline(&self, config: &Config) -> PathSegment {
        let (fly, hoist) = (config.fly(), config.hoist());
        let zero = Measure::zero();
        match self.style {
            FieldStyle::Regular => PathSegment::new(
                Coord::origin(),
                vec![v(fly, zero), v(zero, hoist), v(-fly, zero), v(zero, -hoist)],
            ),
            FieldStyle::Swallowtail | FieldStyle::Past => {
                let notch = Field::notch_depth(config);
                PathSegment::new(
                    Coord::origin(),
                    vec![
                        v(fly, zero),
                        v(-notch, hoist / 2),
                        v(notch, hoist / 2),
                        v(-fly, zero),
                        v(zero, -hoist),
                    ],
                )
            }
        }
    }

    /// Whether `at` lies inside the field or on its edge.
    pub fn contains(&self, config: &Config, at: &Coord) -> bool {
        let (fly, hoist) = (config.fly(), config.hoist());
        let zero = Measure::zero();
        if at.x < zero || at.y < zero || at.y > hoist {
            return false;
        }
        let edge = match self.style {
            FieldStyle::Regular => fly,
            FieldStyle::Swallowtail | FieldStyle::Past => {
                let half = hoist / 2;
                fly - Field::notch_depth(config) * (half - (at.y - half).abs()) / half
            }
        };
        at.x <= edge
    }

    pub fn render(&self, config: &Config) -> String {
        let mut body = self.outline(config).to_path().set("fill", self.color.hex());
        if self.color == FlagColor::White {
            body = body
                .set("stroke", BLACK)
                .set("stroke-width", crate::geometry::number(Field::border_width(config)));
        }
        let mut group = Group::new().set("class", "field").add(body);
        if self.style == FieldStyle::Past {
            group = group.add(
                rect(
                    Measure::zero(),
                    Measure::zero(),
                    Field::past_stripe_width(config),
                    config.hoist(),
                )
                .set("fill", self.past_stripe_color().hex()),
            );
        }
        group.to_string()
    }
}
