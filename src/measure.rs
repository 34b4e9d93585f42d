//! Trident measurement tables.
//!
//! Every trident dimension is a fixed ratio of the configured fly or hoist.
//! The only switch is [`Config::use_larger_tridents`], which widens the bars
//! and the delta gap and leaves everything else alone.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{Config, Measure};
use crate::errors::FlagError;

/// The four trident size/style classes, smallest to largest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TridentTier {
    Short,
    Delta,
    Circle,
    Long,
}

/// Terminal ornament at the foot of the main spike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStyle {
    Plain,
    Delta,
    Circle,
}

impl TridentTier {
    pub const ALL: [TridentTier; 4] = [
        TridentTier::Short,
        TridentTier::Delta,
        TridentTier::Circle,
        TridentTier::Long,
    ];

    pub fn hash_style(&self) -> HashStyle {
        match self {
            TridentTier::Short | TridentTier::Long => HashStyle::Plain,
            TridentTier::Delta => HashStyle::Delta,
            TridentTier::Circle => HashStyle::Circle,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TridentTier::Short => "short",
            TridentTier::Delta => "delta",
            TridentTier::Circle => "circle",
            TridentTier::Long => "long",
        }
    }

    /// Overall height as a fraction of the hoist.
    fn height_ratio(&self) -> Measure {
        match self {
            TridentTier::Short => Measure::new(1, 2),
            TridentTier::Delta => Measure::new(5, 8),
            TridentTier::Circle => Measure::new(11, 16),
            TridentTier::Long => Measure::new(3, 4),
        }
    }
}

impl fmt::Display for TridentTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TridentTier {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" | "s" => Ok(TridentTier::Short),
            "delta" | "d" => Ok(TridentTier::Delta),
            "circle" | "stf" => Ok(TridentTier::Circle),
            "long" | "n" => Ok(TridentTier::Long),
            _ => Err(FlagError::InvalidSelector(format!("trident tier '{}'", s))),
        }
    }
}

/// Absolute trident dimensions for one tier, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TridentMeasurements {
    pub tier: TridentTier,
    pub fly: Measure,
    pub hoist: Measure,
    pub height: Measure,
    pub center_point: Measure,
    pub top_point: Measure,
    pub bar_width: Measure,
    pub point_height: Measure,
    pub main_point_barb: Measure,
    pub main_length: Measure,
    pub crossbar_from_top: Measure,
    /// Half the crossbar length; side spikes sit at the ends.
    pub side_spike_spread: Measure,
    pub side_spike_height: Measure,
    pub side_point_height: Measure,
    pub hash_width: Measure,
    pub hash_from_bottom: Measure,
    pub delta_from_bottom: Measure,
    pub delta_width: Measure,
    pub delta_height: Measure,
    pub delta_gap: Measure,
    pub circle_from_bottom: Measure,
    pub circle_height_adj: Measure,
    pub circle_outer_radius: Measure,
}

/// Build the measurement table for `tier`. Pure: same inputs, same table.
pub fn derive_measurements(config: &Config, tier: TridentTier) -> TridentMeasurements {
    let fly = config.fly();
    let hoist = config.hoist();
    let height = hoist * tier.height_ratio();

    let (bar_width, delta_gap) = if config.use_larger_tridents {
        (fly * Measure::new(5, 192), fly * Measure::new(5, 256))
    } else {
        (fly / 48, fly / 64)
    };

    let point_height = fly / 32;
    let main_point_barb = hoist / 128;
    let hash_width = fly * Measure::new(5, 48);
    let delta_width = fly * Measure::new(5, 48);

    TridentMeasurements {
        tier,
        fly,
        hoist,
        height,
        center_point: fly / 2,
        top_point: (hoist - height) / 2,
        bar_width,
        point_height,
        main_point_barb,
        main_length: height - (point_height - main_point_barb),
        crossbar_from_top: hoist / 8,
        side_spike_spread: fly / 9,
        side_spike_height: hoist / 16,
        side_point_height: fly / 48,
        hash_width,
        hash_from_bottom: hoist / 8,
        delta_from_bottom: hoist / 4,
        delta_width,
        delta_height: delta_width * Measure::new(2, 3),
        delta_gap,
        circle_from_bottom: hoist * Measure::new(3, 16),
        circle_height_adj: fly / 768,
        circle_outer_radius: hash_width / 2,
    }
}

impl TridentMeasurements {
    pub fn crossbar_top(&self) -> Measure {
        self.top_point + self.crossbar_from_top
    }

    /// Bottom end of the main shaft.
    pub fn shaft_foot(&self) -> Measure {
        self.top_point + self.height
    }

    pub fn hash_top(&self) -> Measure {
        self.shaft_foot() - self.hash_from_bottom
    }

    pub fn delta_apex(&self) -> Measure {
        self.shaft_foot() - self.delta_from_bottom
    }

    /// The delta is a 3-4-5 isosceles triangle, so its inradius is exact.
    pub fn delta_inradius(&self) -> Measure {
        self.delta_width / 4
    }

    /// Vertical position of the incenter, the fixed point of the cut-out scale.
    pub fn delta_incenter_y(&self) -> Measure {
        self.delta_apex() + self.delta_height - self.delta_inradius()
    }

    /// Cut-out triangle size relative to the outer one, giving a uniform gap.
    pub fn delta_cutout_scale(&self) -> Measure {
        Measure::from_integer(1) - self.delta_gap / self.delta_inradius()
    }

    pub fn circle_inner_radius(&self) -> Measure {
        self.circle_outer_radius - self.bar_width
    }

    pub fn circle_center_y(&self) -> Measure {
        self.shaft_foot() - self.circle_from_bottom + self.circle_height_adj
    }

    /// Width of the whole trident (crossbar end to crossbar end).
    pub fn overall_width(&self) -> Measure {
        self.side_spike_spread * 2
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn m(n: i64) -> Measure {
        Measure::from_integer(n)
    }

    #[test]
    fn test_tier_parse() {
        assert_eq!("short".parse::<TridentTier>().unwrap(), TridentTier::Short);
        assert_eq!("STF".parse::<TridentTier>().unwrap(), TridentTier::Circle);
        assert_eq!(" n ".parse::<TridentTier>().unwrap(), TridentTier::Long);
        assert!(matches!(
            "medium".parse::<TridentTier>(),
            Err(FlagError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_default_table() {
        let t = derive_measurements(&Config::new(), TridentTier::Short);
        assert_eq!(t.height, m(1536));
        assert_eq!(t.top_point, m(768));
        assert_eq!(t.center_point, m(2304));
        assert_eq!(t.bar_width, m(96));
        assert_eq!(t.main_length, m(1536 - (144 - 24)));
        assert_eq!(t.shaft_foot(), m(2304));
        assert_eq!(t.delta_height, m(320));
        assert_eq!(t.delta_inradius(), m(120));
        assert_eq!(t.delta_cutout_scale(), Measure::new(2, 5));
        assert_eq!(t.circle_inner_radius(), m(144));
    }

    #[test]
    fn test_tiers_grow() {
        let config = Config::new();
        let heights: Vec<Measure> = TridentTier::ALL
            .iter()
            .map(|tier| config.trident(*tier).height)
            .collect();
        for pair in heights.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_vertically_centered() {
        let config = Config::new();
        for tier in TridentTier::ALL {
            let t = config.trident(tier);
            assert_eq!(t.top_point + t.height / 2, config.hoist() / 2);
        }
    }

    #[test]
    fn test_idempotent() {
        let config = Config::new();
        for tier in TridentTier::ALL {
            assert_eq!(derive_measurements(&config, tier), derive_measurements(&config, tier));
        }
    }

    #[test]
    fn test_larger_bars_only_touch_bars_and_gap() {
        let normal = Config::new();
        let larger = Config::new().with_larger_tridents(true);
        for tier in TridentTier::ALL {
            let a = normal.trident(tier);
            let b = larger.trident(tier);
            assert_eq!(b.bar_width, m(120));
            assert_eq!(b.delta_gap, m(90));
            assert_eq!(b.delta_cutout_scale(), Measure::new(1, 4));
            let b_restored = TridentMeasurements {
                bar_width: a.bar_width,
                delta_gap: a.delta_gap,
                ..b
            };
            assert_eq!(a, b_restored);
        }
    }

    #[test]
    fn test_tables_scale_with_fly() {
        let base = Config::new();
        let doubled = Config::new().with_base_fly(base.base_fly * 2);
        for tier in TridentTier::ALL {
            let a = base.trident(tier);
            let b = doubled.trident(tier);
            assert_eq!(b.top_point, a.top_point * 2);
            assert_eq!(b.main_length, a.main_length * 2);
            assert_eq!(b.circle_center_y(), a.circle_center_y() * 2);
            assert_eq!(b.delta_cutout_scale(), a.delta_cutout_scale());
        }
    }
}
