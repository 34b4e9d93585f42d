use svg::node::element::{Circle, Group, Path, Rectangle};

use crate::config::Measure;
use crate::geometry::path::PathData;
use crate::geometry::transform::{render_list, Transform};
use crate::geometry::{number, Coord, PathSegment};

/// Convert exact geometry into an SVG path element.
pub trait ToSvg {
    /// Path data only.
    fn to_path_data_string(&self) -> String;

    /// Bare `<path>` with the geometry; callers add fill, masks etc.
    fn to_path(&self) -> Path {
        Path::new().set("d", self.to_path_data_string())
    }
}

impl ToSvg for PathSegment {
    fn to_path_data_string(&self) -> String {
        self.to_path_data()
    }
}

impl ToSvg for PathData {
    fn to_path_data_string(&self) -> String {
        self.render()
    }
}

pub fn rect(x: Measure, y: Measure, width: Measure, height: Measure) -> Rectangle {
    Rectangle::new()
        .set("x", number(x))
        .set("y", number(y))
        .set("width", number(width))
        .set("height", number(height))
}

pub fn circle(center: Coord, radius: Measure) -> Circle {
    Circle::new()
        .set("cx", number(center.x))
        .set("cy", number(center.y))
        .set("r", number(radius))
}

/// Group wrapped in a transform list. An empty list yields a plain group.
pub fn transformed_group(transforms: &[Transform]) -> Group {
    if transforms.is_empty() {
        Group::new()
    } else {
        Group::new().set("transform", render_list(transforms))
    }
}
