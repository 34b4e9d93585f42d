//! The national flag, drawn on the same `F x H` canvas as everything else.
use num::Zero;
use svg::node::element::Group;

use crate::config::{Config, FlagColor, Measure};
use crate::geometry::svg::{rect, ToSvg};
use crate::geometry::Coord;
use crate::shapes::icons::star_outline;

pub const STRIPES: i64 = 13;
pub const STAR_ROWS: i64 = 9;

pub fn canton_size(config: &Config) -> (Measure, Measure) {
    (
        config.fly() * Measure::new(2, 5),
        config.hoist() * Measure::new(7, 13),
    )
}

/// Star centres, row by row. Even rows hold six stars, odd rows five,
/// offset by half a column.
pub fn star_centers(config: &Config) -> Vec<Coord> {
    let (width, height) = canton_size(config);
    let column = width / 12;
    let row_step = height / 10;
    let mut centers = vec![];
    for row in 0..STAR_ROWS {
        let y = row_step * (row + 1);
        let columns: Vec<i64> = if row % 2 == 0 {
            vec![1, 3, 5, 7, 9, 11]
        } else {
            vec![2, 4, 6, 8, 10]
        };
        centers.extend(columns.into_iter().map(|c| Coord::new(column * c, y)));
    }
    centers
}

pub fn star_radius(config: &Config) -> Measure {
    canton_size(config).1 / 25
}

pub fn render(config: &Config) -> String {
    let zero = Measure::zero();
    let stripe = config.hoist() / STRIPES;
    let (canton_width, canton_height) = canton_size(config);

    let stripes = (0..STRIPES).fold(Group::new().set("class", "stripes"), |group, i| {
        let color = if i % 2 == 0 {
            FlagColor::Red
        } else {
            FlagColor::White
        };
        group.add(rect(zero, stripe * i, config.fly(), stripe).set("fill", color.hex()))
    });

    let radius = star_radius(config);
    let stars = star_centers(config)
        .into_iter()
        .fold(Group::new().set("class", "stars").set("fill", FlagColor::White.hex()), |group, c| {
            group.add(star_outline(c, radius).to_path())
        });

    Group::new()
        .set("class", "us-flag")
        .add(stripes)
        .add(rect(zero, zero, canton_width, canton_height).set("fill", FlagColor::Blue.hex()))
        .add(stars)
        .to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fifty_stars_in_alternating_rows() {
        let config = Config::new();
        let centers = star_centers(&config);
        assert_eq!(centers.len(), 50);
        let mut rows: Vec<usize> = vec![];
        let mut last_y = None;
        for c in &centers {
            if last_y != Some(c.y) {
                rows.push(0);
                last_y = Some(c.y);
            }
            if let Some(n) = rows.last_mut() {
                *n += 1;
            }
        }
        assert_eq!(rows, vec![6, 5, 6, 5, 6, 5, 6, 5, 6]);
    }

    #[test]
    fn test_stars_inside_canton() {
        let config = Config::new();
        let (width, height) = canton_size(&config);
        let radius = star_radius(&config);
        for c in star_centers(&config) {
            assert!(c.x - radius > Measure::zero() && c.x + radius < width);
            assert!(c.y - radius > Measure::zero() && c.y + radius < height);
        }
    }

    #[test]
    fn test_structure() {
        let config = Config::new();
        let markup = render(&config);
        assert_eq!(markup.matches("fill=\"#BF0D3E\"").count(), 7);
        assert_eq!(markup.matches("<path").count(), 50);
        // Canton is 2F/5 by 7H/13.
        assert!(markup.contains("width=\"1843.2\""));
        assert!(markup.contains("height=\"1654.1538\""));
    }
}
