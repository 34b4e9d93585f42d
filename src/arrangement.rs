//! Multi-trident layouts for rank marks.
//!
//! An [`Arrangement`] never touches a trident's geometry. Each member is a
//! complete trident wrapped in a transform group, and the offsets are fixed
//! fractions of the fly rather than anything measured from the shapes.
use std::str::FromStr;

use num::Zero;

use crate::config::{Config, FlagColor, Measure};
use crate::errors::FlagError;
use crate::geometry::svg::transformed_group;
use crate::geometry::transform::Transform;
use crate::geometry::Coord;
use crate::measure::TridentTier;
use crate::shapes::trident::{defs_markup, Trident, TridentFragment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One centered trident.
    Single,
    /// Two side by side at plus/minus a sixth of the fly.
    Double,
    /// Outer pair at plus/minus a quarter fly, dropped slightly; centre stays put.
    Triple,
    /// Two copies at minus/plus 45 degrees about the flag centre, then the
    /// upright copy.
    Crossed,
}

impl Layout {
    pub fn count(&self) -> usize {
        match self {
            Layout::Single => 1,
            Layout::Double => 2,
            Layout::Triple | Layout::Crossed => 3,
        }
    }

    /// Per-member transform lists, in emission order.
    pub fn transforms(&self, config: &Config) -> Vec<Vec<Transform>> {
        let fly = config.fly();
        let zero = Measure::zero();
        match self {
            Layout::Single => vec![vec![]],
            Layout::Double => vec![
                vec![Transform::translate(-fly / 6, zero)],
                vec![Transform::translate(fly / 6, zero)],
            ],
            Layout::Triple => {
                let drop = fly / 48;
                vec![
                    vec![Transform::translate(-fly / 4, drop)],
                    vec![],
                    vec![Transform::translate(fly / 4, drop)],
                ]
            }
            Layout::Crossed => {
                let center = Coord::new(fly / 2, config.hoist() / 2);
                vec![
                    vec![Transform::rotate(Measure::from_integer(-45), center)],
                    vec![Transform::rotate(Measure::from_integer(45), center)],
                    vec![],
                ]
            }
        }
    }
}

impl FromStr for Layout {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" => Ok(Layout::Single),
            "double" | "2" => Ok(Layout::Double),
            "triple" | "3" => Ok(Layout::Triple),
            "crossed" | "x" => Ok(Layout::Crossed),
            _ => Err(FlagError::InvalidSelector(format!("layout '{}'", s))),
        }
    }
}

/// One placed trident.
#[derive(Debug, Clone)]
pub struct Member {
    pub transforms: Vec<Transform>,
    pub fragment: TridentFragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    pub tier: TridentTier,
    pub color: FlagColor,
    pub layout: Layout,
}

impl Arrangement {
    pub fn new(tier: TridentTier, color: FlagColor, layout: Layout) -> Arrangement {
        Arrangement {
            tier,
            color,
            layout,
        }
    }

    pub fn count(&self) -> usize {
        self.layout.count()
    }

    /// Independently built tridents, each with its own placement.
    pub fn members(&self, config: &Config) -> Vec<Member> {
        self.layout
            .transforms(config)
            .into_iter()
            .map(|transforms| Member {
                transforms,
                fragment: Trident::new(config, self.tier, self.color).render(),
            })
            .collect()
    }

    /// Masks once, then one group per member in layout order.
    pub fn render(&self, config: &Config) -> String {
        let members = self.members(config);
        let mut parts: Vec<String> = vec![];
        if let Some(defs) = members.first().and_then(|m| defs_markup(&m.fragment.defs)) {
            parts.push(defs);
        }
        for member in members {
            let group = transformed_group(&member.transforms).add(member.fragment.body);
            parts.push(group.to_string());
        }
        parts.join("\n")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::transform::apply_list;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_layout_counts() {
        let config = Config::new();
        for tier in TridentTier::ALL {
            for color in [FlagColor::White, FlagColor::Red, FlagColor::Blue] {
                for (layout, expected) in [
                    (Layout::Single, 1),
                    (Layout::Double, 2),
                    (Layout::Triple, 3),
                    (Layout::Crossed, 3),
                ] {
                    let arrangement = Arrangement::new(tier, color, layout);
                    assert_eq!(arrangement.count(), expected);
                    assert_eq!(arrangement.members(&config).len(), expected);
                    let markup = arrangement.render(&config);
                    assert_eq!(count(&markup, "class=\"trident trident-"), expected);
                }
            }
        }
    }

    #[test]
    fn test_crossed_rotations() {
        let config = Config::new();
        let markup = Arrangement::new(TridentTier::Long, FlagColor::White, Layout::Crossed)
            .render(&config);
        assert_eq!(count(&markup, "rotate(-45 2304 1536)"), 1);
        assert_eq!(count(&markup, "rotate(45 2304 1536)"), 1);
        // Upright copy comes last.
        let last = markup.rfind("class=\"trident").unwrap();
        assert!(markup.rfind("rotate(").unwrap() < last);
    }

    #[test]
    fn test_offsets_are_fixed_fractions_of_fly() {
        let config = Config::new();
        let members = Arrangement::new(TridentTier::Short, FlagColor::White, Layout::Triple)
            .members(&config);
        let anchors: Vec<Coord> = members
            .iter()
            .map(|m| {
                let trident = Trident::new(&config, TridentTier::Short, FlagColor::White);
                apply_list(&m.transforms, &trident.skeleton().main_spike.anchor).unwrap()
            })
            .collect();
        let fly = config.fly();
        assert_eq!(anchors[1].x, fly / 2);
        assert_eq!(anchors[0].x, fly / 2 - fly / 4);
        assert_eq!(anchors[2].x, fly / 2 + fly / 4);
        assert_eq!(anchors[0].y, anchors[1].y + fly / 48);
        assert_eq!(anchors[0].y, anchors[2].y);
    }

    #[test]
    fn test_masks_emitted_once() {
        let config = Config::new();
        let markup = Arrangement::new(TridentTier::Circle, FlagColor::White, Layout::Triple)
            .render(&config);
        assert_eq!(count(&markup, "id=\"circle-mask\""), 1);
        assert_eq!(count(&markup, "url(#circle-mask)"), 3);
        let plain = Arrangement::new(TridentTier::Short, FlagColor::White, Layout::Double)
            .render(&config);
        assert!(!plain.contains("<defs"));
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("Crossed".parse::<Layout>().unwrap(), Layout::Crossed);
        assert!("quad".parse::<Layout>().is_err());
    }
}
