//! The squadron ensign: vertical stripes, a blue canton, and an anchor ringed
//! by thirteen stars.
use num::Zero;
use svg::node::element::Group;

use crate::config::{Config, FlagColor, Measure};
use crate::geometry::svg::{rect, transformed_group, ToSvg};
use crate::geometry::transform::Transform;
use crate::geometry::Coord;
use crate::shapes::icons::{star_outline, Icon};

pub const STRIPES: i64 = 13;
pub const STARS: i64 = 13;

/// Canton width and height.
pub fn canton_size(config: &Config) -> (Measure, Measure) {
    (config.fly() * Measure::new(3, 8), config.hoist() / 2)
}

pub fn canton_center(config: &Config) -> Coord {
    let (width, height) = canton_size(config);
    Coord::new(width / 2, height / 2)
}

/// Radius of the ring the star centres sit on.
pub fn star_ring_radius(config: &Config) -> Measure {
    config.hoist() / 5
}

pub fn star_radius(config: &Config) -> Measure {
    config.hoist() / 40
}

/// Rotation for the `k`th star, about the canton centre.
pub fn star_rotation(config: &Config, k: i64) -> Transform {
    Transform::rotate(Measure::new(360 * k, STARS), canton_center(config))
}

pub fn render(config: &Config) -> String {
    let zero = Measure::zero();
    let stripe = config.fly() / STRIPES;
    let center = canton_center(config);
    let (canton_width, canton_height) = canton_size(config);

    let stripes = (0..STRIPES).fold(Group::new().set("class", "stripes"), |group, i| {
        let color = if i % 2 == 0 {
            FlagColor::Red
        } else {
            FlagColor::White
        };
        group.add(rect(stripe * i, zero, stripe, config.hoist()).set("fill", color.hex()))
    });

    let top_star = star_outline(
        Coord::new(center.x, center.y - star_ring_radius(config)),
        star_radius(config),
    );
    let stars = (0..STARS).fold(Group::new().set("class", "stars"), |group, k| {
        group.add(
            transformed_group(&[star_rotation(config, k)])
                .add(top_star.to_path().set("fill", FlagColor::White.hex())),
        )
    });

    Group::new()
        .set("class", "ensign")
        .add(stripes)
        .add(rect(zero, zero, canton_width, canton_height).set("fill", FlagColor::Blue.hex()))
        .add(Icon::Anchor.to_group(FlagColor::White, center, config.hoist() * Measure::new(3, 10)))
        .add(stars)
        .to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_canton_geometry() {
        let config = Config::new();
        assert_eq!(
            canton_size(&config),
            (Measure::from_integer(1728), Measure::from_integer(1536))
        );
        assert_eq!(
            canton_center(&config),
            Coord::new(Measure::from_integer(864), Measure::from_integer(768))
        );
        // Ring plus star stays inside the canton.
        let reach = star_ring_radius(&config) + star_radius(&config);
        assert!(reach < canton_size(&config).1 / 2);
    }

    #[test]
    fn test_structure() {
        let config = Config::new();
        let markup = render(&config);
        assert_eq!(markup.matches("fill=\"#BF0D3E\"").count(), 7);
        assert_eq!(markup.matches("rotate(").count(), 13);
        assert!(markup.contains("rotate(0 864 768)"));
        assert!(markup.contains("rotate(27.6923 864 768)"));
        assert!(markup.contains("class=\"stars\""));
    }

    #[test]
    fn test_star_rotation_quarter_turn_is_exact() {
        let config = Config::new().with_base_fly(1248);
        // 360 * 13 / 13 is a full turn; the star at k = 0 is unrotated.
        let full = Transform::rotate(Measure::from_integer(360), canton_center(&config));
        let top = Coord::new(canton_center(&config).x, Measure::zero());
        assert_eq!(full.apply(&top), Some(top));
        assert_eq!(star_rotation(&config, 0).apply(&top), Some(top));
    }
}
