use svg::node::element::{Definitions, Element, Group, Line, Marker, Path};
use num::traits::CheckedMul;
use svg::node::Node;

use crate::config::{Measure, BLACK};
use crate::errors::FlagError;
use crate::fraction::simplify;
use crate::geometry::{number, span, Coord};

pub const ARROW_MARKER: &str = "spec-arrow";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// One labelled dimension, in base drawing units.
///
/// For a vertical arrow `at` is its x position and `from`/`to` are y values;
/// horizontal arrows swap the roles. Pointer lines run perpendicular from the
/// measured feature (at `pointer_from`/`pointer_to` on the other axis) out to
/// the arrow, for dimensions drawn offset from what they measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionArrow {
    pub axis: Axis,
    pub at: Measure,
    pub from: Measure,
    pub to: Measure,
    pub pointer_from: Option<Measure>,
    pub pointer_to: Option<Measure>,
    /// Signed distance from the arrow line to the label.
    pub label_offset: Measure,
}

/// Line weights and sizes for annotations, all fixed fractions of the fly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowStyle {
    pub stroke_width: Measure,
    pub tick_length: Measure,
    pub font_size: Measure,
}

impl ArrowStyle {
    pub fn for_fly(fly: Measure) -> ArrowStyle {
        ArrowStyle {
            stroke_width: fly / 1152,
            tick_length: fly / 96,
            font_size: fly / 64,
        }
    }
}

impl DimensionArrow {
    pub fn vertical(at: Measure, from: Measure, to: Measure) -> DimensionArrow {
        DimensionArrow {
            axis: Axis::Vertical,
            at,
            from,
            to,
            pointer_from: None,
            pointer_to: None,
            label_offset: Measure::from_integer(0),
        }
    }

    pub fn horizontal(at: Measure, from: Measure, to: Measure) -> DimensionArrow {
        DimensionArrow {
            axis: Axis::Horizontal,
            ..DimensionArrow::vertical(at, from, to)
        }
    }

    pub fn pointers(mut self, from: Measure, to: Measure) -> Self {
        self.pointer_from = Some(from);
        self.pointer_to = Some(to);
        self
    }

    pub fn label_offset(mut self, offset: Measure) -> Self {
        self.label_offset = offset;
        self
    }

    /// Measured length in base units.
    pub fn length(&self) -> Measure {
        span(self.from, self.to)
    }

    /// Physical size of the dimension at scale `k`, as an exact fraction.
    /// Fails when the product does not fit the rational representation.
    pub fn label(&self, k: Measure, unit: &str) -> Result<String, FlagError> {
        let size = self.length().checked_mul(&k).ok_or_else(|| {
            FlagError::InvalidParameter(format!(
                "{} scaled by {} is out of range",
                self.length(),
                k
            ))
        })?;
        Ok(simplify(size).with_unit(unit))
    }

    /// Point on the drawing for a position along the arrow and across it.
    fn point(&self, along: Measure, across: Measure) -> Coord {
        match self.axis {
            Axis::Vertical => Coord::new(across, along),
            Axis::Horizontal => Coord::new(along, across),
        }
    }

    /// Arrow, ticks, pointers and the already formatted `label`.
    pub fn render(&self, label: &str, style: &ArrowStyle) -> Group {
        let stroke = number(style.stroke_width);
        let half_tick = style.tick_length / 2;
        let mut group = Group::new()
            .set("class", "dimension")
            .set("stroke", BLACK)
            .set("stroke-width", stroke.clone())
            .add(
                line(self.point(self.from, self.at), self.point(self.to, self.at))
                    .set("marker-start", format!("url(#{})", ARROW_MARKER))
                    .set("marker-end", format!("url(#{})", ARROW_MARKER)),
            );
        for end in [self.from, self.to] {
            group = group.add(line(
                self.point(end, self.at - half_tick),
                self.point(end, self.at + half_tick),
            ));
        }
        for (end, feature) in [(self.from, self.pointer_from), (self.to, self.pointer_to)] {
            if let Some(feature) = feature {
                group = group.add(
                    line(self.point(end, feature), self.point(end, self.at))
                        .set("stroke-dasharray", format!("{} {}", stroke, stroke)),
                );
            }
        }

        let middle = (self.from + self.to) / 2;
        let anchor = match self.axis {
            Axis::Horizontal => "middle",
            Axis::Vertical if self.label_offset < Measure::from_integer(0) => "end",
            Axis::Vertical => "start",
        };
        let mut caption = text(
            self.point(middle, self.at + self.label_offset),
            label,
            style.font_size,
        );
        caption.assign("text-anchor", anchor);
        group.add(caption)
    }
}

fn line(a: Coord, b: Coord) -> Line {
    Line::new()
        .set("x1", number(a.x))
        .set("y1", number(a.y))
        .set("x2", number(b.x))
        .set("y2", number(b.y))
}

/// Filled, unstroked `<text>` element.
pub fn text(at: Coord, content: &str, font_size: Measure) -> Element {
    let mut element = Element::new("text");
    element.assign("x", number(at.x));
    element.assign("y", number(at.y));
    element.assign("font-size", number(font_size));
    element.assign("fill", BLACK);
    element.assign("stroke", "none");
    element.assign("font-family", "sans-serif");
    element.append(svg::node::Text::new(content));
    element
}

/// `<defs>` holding the arrowhead marker.
pub fn marker_defs() -> Definitions {
    Definitions::new().add(
        Marker::new()
            .set("id", ARROW_MARKER)
            .set("viewBox", "0 0 10 10")
            .set("refX", 10)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto-start-reverse")
            .add(Path::new().set("d", "M 0 0 L 10 5 L 0 10 z").set("fill", BLACK)),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn m(n: i64) -> Measure {
        Measure::from_integer(n)
    }

    #[test]
    fn test_label_scales_exactly() {
        let arrow = DimensionArrow::vertical(m(0), m(768), m(2304));
        assert_eq!(arrow.length(), m(1536));
        assert_eq!(arrow.label(Measure::new(1, 192), "in").unwrap(), "8 in");
        // Reversed ends measure the same.
        let reversed = DimensionArrow::horizontal(m(0), m(2304), m(768));
        assert_eq!(reversed.label(Measure::new(1, 192), "in").unwrap(), "8 in");
        assert_eq!(
            DimensionArrow::vertical(m(0), m(0), m(96))
                .label(Measure::new(1, 192), "in")
                .unwrap(),
            "1/2 in"
        );
    }

    #[test]
    fn test_label_overflow_is_an_error() {
        let arrow = DimensionArrow::vertical(m(0), m(0), m(2));
        assert!(matches!(
            arrow.label(m(i64::MAX), "in"),
            Err(FlagError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_render_parts() {
        let style = ArrowStyle::for_fly(m(4608));
        let markup = DimensionArrow::horizontal(m(100), m(10), m(50))
            .pointers(m(40), m(40))
            .render("40 cm", &style)
            .to_string();
        assert!(markup.contains("url(#spec-arrow)"));
        assert_eq!(markup.matches("<line").count(), 5);
        assert_eq!(markup.matches("stroke-dasharray").count(), 2);
        assert!(markup.contains("40 cm"));
        assert!(markup.contains("text-anchor=\"middle\""));
    }

    #[test]
    fn test_vertical_without_pointers() {
        let style = ArrowStyle::for_fly(m(4608));
        let markup = DimensionArrow::vertical(m(100), m(0), m(10))
            .label_offset(m(-20))
            .render("10", &style)
            .to_string();
        assert_eq!(markup.matches("<line").count(), 3);
        assert!(!markup.contains("stroke-dasharray"));
        assert!(markup.contains("text-anchor=\"end\""));
        assert!(markup.contains("x=\"80\""));
    }

    #[test]
    fn test_marker_defs() {
        let markup = marker_defs().to_string();
        assert!(markup.contains("<marker"));
        assert!(markup.contains("id=\"spec-arrow\""));
    }
}
