//! The trident itself: a four-piece skeleton plus a tier-specific hash.
//!
//! All geometry comes from [`TridentMeasurements`]; this module only decides
//! how the pieces fit together and how the delta and circle cut-outs are
//! composited through masks.
use svg::node::element::{Definitions, Group, Mask, Rectangle};
use svg::Node;
use num::Zero;

use crate::config::{Config, FlagColor, Measure, BLACK, WHITE};
use crate::errors::FlagError;
use crate::geometry::svg::{circle, rect, transformed_group, ToSvg};
use crate::geometry::transform::Transform;
use crate::geometry::{v, Coord, PathSegment};
use crate::measure::{HashStyle, TridentMeasurements, TridentTier};

pub const DELTA_MASK: &str = "delta-mask";
pub const CIRCLE_MASK: &str = "circle-mask";
pub const CIRCLE_SPIKE_MASK: &str = "circle-mask-for-main-spike";

pub fn mask_url(id: &str) -> String {
    format!("url(#{})", id)
}

/// The four pieces every trident shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    pub main_spike: PathSegment,
    pub crossbar: PathSegment,
    pub left_spike: PathSegment,
    pub right_spike: PathSegment,
}

/// Terminal ornament, one variant per [`HashStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hash {
    Plain {
        origin: Coord,
        width: Measure,
        height: Measure,
    },
    /// Filled triangle, and the transform that shrinks the same triangle
    /// into the black cut-out.
    Delta {
        triangle: PathSegment,
        cutout: Vec<Transform>,
    },
    Circle {
        center: Coord,
        outer_radius: Measure,
        inner_radius: Measure,
    },
}

/// Rendered trident: mask definitions plus the visible body. The two are kept
/// apart so a composite of several tridents can emit the masks once.
#[derive(Debug, Clone)]
pub struct TridentFragment {
    pub tier: TridentTier,
    pub defs: Vec<Mask>,
    pub body: Group,
}

impl TridentFragment {
    /// Standalone markup: a `<defs>` block (when masks exist) then the body.
    pub fn to_markup(&self) -> String {
        let body = self.body.to_string();
        match defs_markup(&self.defs) {
            Some(defs) => format!("{}\n{}", defs, body),
            None => body,
        }
    }
}

/// `<defs>` wrapping the given masks, or None if there are none.
pub fn defs_markup(masks: &[Mask]) -> Option<String> {
    if masks.is_empty() {
        return None;
    }
    let defs = masks
        .iter()
        .fold(Definitions::new(), |defs, mask| defs.add(mask.clone()));
    Some(defs.to_string())
}

#[derive(Debug, Clone)]
pub struct Trident {
    measurements: TridentMeasurements,
    color: FlagColor,
}

impl Trident {
    pub fn new(config: &Config, tier: TridentTier, color: FlagColor) -> Trident {
        Trident {
            measurements: config.trident(tier),
            color,
        }
    }

    /// Build from a tier code such as `"delta"` or `"stf"`.
    pub fn from_code(config: &Config, code: &str, color: FlagColor) -> Result<Trident, FlagError> {
        Ok(Trident::new(config, code.parse()?, color))
    }

    pub fn tier(&self) -> TridentTier {
        self.measurements.tier
    }

    pub fn measurements(&self) -> &TridentMeasurements {
        &self.measurements
    }

    pub fn skeleton(&self) -> Skeleton {
        let t = &self.measurements;
        let bw = t.bar_width;
        let spread = t.side_spike_spread;
        let crossbar_top = t.crossbar_top();
        let side_rise = t.side_spike_height + t.side_point_height;
        let zero = Measure::zero();

        let main_spike = PathSegment::new(
            Coord::new(t.center_point, t.top_point),
            vec![
                v(bw, t.point_height),
                v(-bw / 2, -t.main_point_barb),
                v(zero, t.main_length),
                v(-bw, zero),
                v(zero, -t.main_length),
                v(-bw / 2, t.main_point_barb),
                v(bw, -t.point_height),
            ],
        );

        let crossbar = PathSegment::new(
            Coord::new(t.center_point - spread, crossbar_top),
            vec![
                v(spread * 2, zero),
                v(zero, bw),
                v(-spread * 2, zero),
                v(zero, -bw),
            ],
        );

        let left_moves = vec![
            v(zero, -side_rise),
            v(bw, t.side_point_height),
            v(zero, t.side_spike_height),
            v(-bw, zero),
        ];
        let right_moves = left_moves.iter().map(|m| m.mirrored()).collect();

        Skeleton {
            main_spike,
            crossbar,
            left_spike: PathSegment::new(
                Coord::new(t.center_point - spread, crossbar_top),
                left_moves,
            ),
            right_spike: PathSegment::new(
                Coord::new(t.center_point + spread, crossbar_top),
                right_moves,
            ),
        }
    }

    pub fn hash(&self) -> Hash {
        let t = &self.measurements;
        match t.tier.hash_style() {
            HashStyle::Plain => Hash::Plain {
                origin: Coord::new(t.center_point - t.hash_width / 2, t.hash_top()),
                width: t.hash_width,
                height: t.bar_width,
            },
            HashStyle::Delta => {
                let (dw, dh) = (t.delta_width, t.delta_height);
                let zero = Measure::zero();
                let triangle = PathSegment::new(
                    Coord::new(t.center_point, t.delta_apex()),
                    vec![v(dw / 2, dh), v(-dw, zero), v(dw / 2, -dh)],
                );
                let incenter = Coord::new(t.center_point, t.delta_incenter_y());
                Hash::Delta {
                    triangle,
                    cutout: Transform::scale_about(t.delta_cutout_scale(), incenter),
                }
            }
            HashStyle::Circle => Hash::Circle {
                center: Coord::new(t.center_point, t.circle_center_y()),
                outer_radius: t.circle_outer_radius,
                inner_radius: t.circle_inner_radius(),
            },
        }
    }

    /// White everywhere on the flag canvas; masks start from this.
    fn canvas(&self) -> Rectangle {
        rect(
            Measure::zero(),
            Measure::zero(),
            self.measurements.fly,
            self.measurements.hoist,
        )
        .set("fill", WHITE)
    }

    pub fn render(&self) -> TridentFragment {
        let tier = self.tier();
        log::trace!("rendering {} trident in {:?}", tier, self.color);
        let skeleton = self.skeleton();
        let mut defs = vec![];
        let mut main_spike = skeleton.main_spike.to_path();

        let hash_node: Box<dyn Node> = match self.hash() {
            Hash::Plain {
                origin,
                width,
                height,
            } => Box::new(rect(origin.x, origin.y, width, height)),
            Hash::Delta { triangle, cutout } => {
                defs.push(
                    Mask::new()
                        .set("id", DELTA_MASK)
                        .add(self.canvas())
                        .add(transformed_group(&cutout).add(triangle.to_path().set("fill", BLACK))),
                );
                Box::new(triangle.to_path().set("mask", mask_url(DELTA_MASK)))
            }
            Hash::Circle {
                center,
                outer_radius,
                inner_radius,
            } => {
                let hole = circle(center, inner_radius).set("fill", BLACK);
                defs.push(
                    Mask::new()
                        .set("id", CIRCLE_MASK)
                        .add(self.canvas())
                        .add(hole.clone()),
                );
                defs.push(
                    Mask::new()
                        .set("id", CIRCLE_SPIKE_MASK)
                        .add(self.canvas())
                        .add(hole),
                );
                main_spike = main_spike.set("mask", mask_url(CIRCLE_SPIKE_MASK));
                Box::new(circle(center, outer_radius).set("mask", mask_url(CIRCLE_MASK)))
            }
        };

        let body = Group::new()
            .set("class", format!("trident trident-{}", tier.name()))
            .set("fill", self.color.hex())
            .add(main_spike)
            .add(skeleton.crossbar.to_path())
            .add(skeleton.left_spike.to_path())
            .add(skeleton.right_spike.to_path())
            .add(hash_node);

        TridentFragment { tier, defs, body }
    }
}
