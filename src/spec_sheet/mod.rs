//! Dimensioned drawing of all four trident tiers.
//!
//! Every dimension is drawn in base units on a full-size trident and labelled
//! with its physical size at the requested fly, so the labels are exact
//! fractions of whatever unit the caller asked for. One table-driven function
//! covers every tier: shared dimensions first, then the ones that only make
//! sense for that tier's hash.
use num::traits::CheckedDiv;
use num::Zero;
use svg::node::element::{Definitions, Group, Rectangle};

use crate::config::{Config, FlagColor, Measure, BLACK};
use crate::errors::FlagError;
use crate::fraction::simplify;
use crate::geometry::number;
use crate::geometry::svg::rect;
use crate::geometry::transform::Transform;
use crate::geometry::Coord;
use crate::measure::{HashStyle, TridentMeasurements, TridentTier};
use crate::shapes::trident::Trident;

/// Dimension arrows, tick marks and labels.
pub mod arrows;

use arrows::{marker_defs, text, ArrowStyle, DimensionArrow};

/// A named dimension on one tier's drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: &'static str,
    pub arrow: DimensionArrow,
}

fn dim(name: &'static str, arrow: DimensionArrow) -> Dimension {
    Dimension { name, arrow }
}

/// Every dimension drawn for one tier, in base units.
pub fn dimensions(t: &TridentMeasurements) -> Vec<Dimension> {
    let gap = t.fly / 32;
    let text_gap = t.fly / 96;
    let cx = t.center_point;
    let left = cx - t.side_spike_spread;
    let right = cx + t.side_spike_spread;
    let top = t.top_point;
    let foot = t.shaft_foot();
    let bw = t.bar_width;
    let crossbar_top = t.crossbar_top();
    let point_base = top + t.point_height;
    let spike_top = crossbar_top - t.side_spike_height - t.side_point_height;

    let mut out = vec![
        dim(
            "boundary height",
            DimensionArrow::vertical(left - gap * 3, top, foot)
                .pointers(left, left)
                .label_offset(-text_gap),
        ),
        dim(
            "boundary width",
            DimensionArrow::horizontal(foot + gap * 2, left, right)
                .pointers(foot, foot)
                .label_offset(gap),
        ),
        dim(
            "main point height",
            DimensionArrow::vertical(right + gap, top, point_base)
                .pointers(cx, cx + bw)
                .label_offset(text_gap),
        ),
        dim(
            "main point barb",
            DimensionArrow::vertical(right + gap * 3, point_base - t.main_point_barb, point_base)
                .pointers(cx + bw / 2, cx + bw)
                .label_offset(text_gap),
        ),
        dim(
            "bar width",
            DimensionArrow::horizontal(top - gap, cx - bw / 2, cx + bw / 2)
                .pointers(point_base, point_base)
                .label_offset(-text_gap),
        ),
        dim(
            "crossbar from top",
            DimensionArrow::vertical(left - gap, top, crossbar_top)
                .pointers(cx, left)
                .label_offset(-text_gap),
        ),
        dim(
            "side spike height",
            DimensionArrow::vertical(right + gap, crossbar_top - t.side_spike_height, crossbar_top)
                .pointers(right, right)
                .label_offset(text_gap),
        ),
        dim(
            "side point height",
            DimensionArrow::vertical(
                right + gap * 2,
                spike_top,
                crossbar_top - t.side_spike_height,
            )
            .pointers(right, right)
            .label_offset(text_gap),
        ),
    ];

    match t.tier.hash_style() {
        HashStyle::Plain => {
            let half = t.hash_width / 2;
            out.push(dim(
                "hash width",
                DimensionArrow::horizontal(t.hash_top() + bw + gap, cx - half, cx + half)
                    .pointers(t.hash_top() + bw, t.hash_top() + bw)
                    .label_offset(gap),
            ));
            out.push(dim(
                "hash from bottom",
                DimensionArrow::vertical(cx + half + gap, t.hash_top(), foot)
                    .pointers(cx + half, cx + bw / 2)
                    .label_offset(text_gap),
            ));
        }
        HashStyle::Delta => {
            let half = t.delta_width / 2;
            let apex = t.delta_apex();
            let base = apex + t.delta_height;
            out.push(dim(
                "delta width",
                DimensionArrow::horizontal(base + gap, cx - half, cx + half)
                    .pointers(base, base)
                    .label_offset(gap),
            ));
            out.push(dim(
                "delta height",
                DimensionArrow::vertical(cx + half + gap, apex, base)
                    .pointers(cx, cx + half)
                    .label_offset(text_gap),
            ));
            out.push(dim(
                "delta gap height",
                DimensionArrow::vertical(cx - half - gap, base - t.delta_gap, base)
                    .pointers(cx, cx - half)
                    .label_offset(-text_gap),
            ));
            out.push(dim(
                "delta from bottom",
                DimensionArrow::vertical(cx + half + gap * 3, apex, foot)
                    .pointers(cx, cx + bw / 2)
                    .label_offset(text_gap),
            ));
        }
        HashStyle::Circle => {
            let outer = t.circle_outer_radius;
            let inner = t.circle_inner_radius();
            let center_y = t.circle_center_y();
            out.push(dim(
                "outer diameter",
                DimensionArrow::horizontal(center_y + outer + gap, cx - outer, cx + outer)
                    .pointers(center_y, center_y)
                    .label_offset(gap),
            ));
            out.push(dim(
                "inner diameter",
                DimensionArrow::horizontal(center_y - outer - gap, cx - inner, cx + inner)
                    .pointers(center_y, center_y)
                    .label_offset(-text_gap),
            ));
            out.push(dim(
                "circle from bottom",
                DimensionArrow::vertical(cx + outer + gap, foot - t.circle_from_bottom, foot)
                    .pointers(cx, cx + bw / 2)
                    .label_offset(text_gap),
            ));
        }
    }
    out
}

/// Canvas of the sheet: four columns side by side, with a heading band above
/// them and a title band below.
pub fn sheet_size(config: &Config) -> (Measure, Measure) {
    (config.fly() * 2, config.hoist() + band(config) * 2)
}

fn band(config: &Config) -> Measure {
    config.hoist() / 8
}

/// The annotated sheet for one physical flag size.
#[derive(Debug, Clone)]
pub struct SpecSheet<'a> {
    config: &'a Config,
    fly: Measure,
    unit: String,
}

impl<'a> SpecSheet<'a> {
    pub fn new(config: &'a Config, fly: Measure, unit: &str) -> SpecSheet<'a> {
        SpecSheet {
            config,
            fly,
            unit: unit.to_string(),
        }
    }

    /// Physical size of one base unit.
    pub fn scale(&self) -> Result<Measure, FlagError> {
        self.fly.checked_div(&self.config.fly()).ok_or_else(|| {
            FlagError::InvalidParameter(format!("spec sheet fly {} is out of range", self.fly))
        })
    }

    pub fn heading(&self) -> String {
        format!(
            "All measurements are displayed at the size of a flag with a fly of {}",
            simplify(self.fly).with_unit(&self.unit)
        )
    }

    /// Centre of the column holding `tier`, on the `2F` wide sheet.
    pub fn column_center(&self, tier: TridentTier) -> Measure {
        let column = self.config.fly() / 2;
        let index = TridentTier::ALL
            .iter()
            .position(|t| *t == tier)
            .unwrap_or_default() as i64;
        column / 2 + column * index
    }

    /// Labels for `tier`, in drawing order.
    pub fn labels(&self, tier: TridentTier) -> Result<Vec<(&'static str, String)>, FlagError> {
        let k = self.scale()?;
        dimensions(&self.config.trident(tier))
            .into_iter()
            .map(|d| d.arrow.label(k, &self.unit).map(|label| (d.name, label)))
            .collect()
    }

    /// Where a column's own drawing starts on the sheet.
    fn column_offset(&self, tier: TridentTier) -> Coord {
        Coord::new(
            self.column_center(tier) - self.config.fly() / 2,
            band(self.config),
        )
    }

    /// Baseline of the column titles, in column coordinates.
    fn title_baseline(&self) -> Measure {
        let hoist = self.config.hoist();
        hoist + band(self.config) - hoist / 32
    }

    fn section(&self, tier: TridentTier, style: &ArrowStyle) -> Result<Group, FlagError> {
        let t = self.config.trident(tier);
        let offset = self.column_offset(tier);
        let fragment = Trident::new(self.config, tier, FlagColor::Blue).render();

        let mut group = Group::new()
            .set("id", format!("spec-{}", tier.name()))
            .set("transform", Transform::translate(offset.x, offset.y).render())
            .add(text(
                Coord::new(t.center_point, self.title_baseline()),
                &format!("{} trident", capitalized(tier.name())),
                style.font_size * 2,
            ));
        if !fragment.defs.is_empty() {
            group = group.add(
                fragment
                    .defs
                    .iter()
                    .fold(Definitions::new(), |defs, mask| defs.add(mask.clone())),
            );
        }
        group = group.add(boundary(&t, style)).add(fragment.body);
        for (d, (_, label)) in dimensions(&t).iter().zip(self.labels(tier)?) {
            group = group.add(d.arrow.render(&label, style));
        }
        Ok(group)
    }

    pub fn render(&self) -> Result<String, FlagError> {
        if self.fly <= Measure::zero() {
            return Err(FlagError::InvalidParameter(format!(
                "spec sheet fly must be positive, got {}",
                self.fly
            )));
        }
        log::debug!("rendering spec sheet at {}", simplify(self.fly).with_unit(&self.unit));
        let style = ArrowStyle::for_fly(self.config.fly());
        let fly = self.config.fly();
        let hoist = self.config.hoist();

        let mut parts = vec![
            marker_defs().to_string(),
            text(Coord::new(fly, hoist / 24), "Trident specifications", style.font_size * 2)
                .to_string(),
            text(Coord::new(fly, hoist / 12), &self.heading(), style.font_size).to_string(),
        ];
        for tier in TridentTier::ALL {
            parts.push(self.section(tier, &style)?.to_string());
        }
        Ok(parts.join("\n"))
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dashed box around the trident's extent.
fn boundary(t: &TridentMeasurements, style: &ArrowStyle) -> Rectangle {
    rect(
        t.center_point - t.side_spike_spread,
        t.top_point,
        t.overall_width(),
        t.height,
    )
    .set("fill", "none")
    .set("stroke", BLACK)
    .set("stroke-width", number(style.stroke_width))
    .set("stroke-dasharray", format!("{} {}", number(style.tick_length), number(style.tick_length)))
}
