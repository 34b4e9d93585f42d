//! The base unit system and the per-request [`Config`] value.
//!
//! Every coordinate the crate produces is an exact rational function of the
//! configured fly. Nothing here is global or mutable: build a `Config` once,
//! hand out references, and every builder will agree on the geometry.
use std::io::Read;
use std::path::Path;

use num::rational::Ratio;
use serde::{Deserialize, Serialize};

use crate::errors::FlagError;
use crate::measure::{derive_measurements, TridentMeasurements, TridentTier};

/// Exact measurement type used for every coordinate before rendering.
pub type Measure = Ratio<i64>;

/// Reference width of every flag, in drawing units.
pub const BASE_FLY: i64 = 4608;

/// Reference height; always two thirds of the fly.
pub fn base_hoist() -> Measure {
    Measure::from_integer(BASE_FLY) * Measure::new(2, 3)
}

pub const RED: &str = "#BF0D3E";
pub const BLUE: &str = "#041E42";
pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

/// The three field/insignia colours a flag can use.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagColor {
    Red,
    Blue,
    White,
}

impl FlagColor {
    pub fn hex(&self) -> &'static str {
        match self {
            FlagColor::Red => RED,
            FlagColor::Blue => BLUE,
            FlagColor::White => WHITE,
        }
    }
}

/// Immutable generation settings. Construct once per request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_fly: i64,
    /// Wider trident bars (and the matching delta gap).
    pub use_larger_tridents: bool,
    /// Physical size is the viewBox divided by this.
    pub default_scale: i64,
    pub creator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_fly: BASE_FLY,
            use_larger_tridents: false,
            default_scale: 3,
            creator: "usps-flags-rs".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Config {
        Config::default()
    }

    pub fn with_base_fly(mut self, base_fly: i64) -> Self {
        self.base_fly = base_fly;
        self
    }

    pub fn with_larger_tridents(mut self, larger: bool) -> Self {
        self.use_larger_tridents = larger;
        self
    }

    pub fn fly(&self) -> Measure {
        Measure::from_integer(self.base_fly)
    }

    pub fn hoist(&self) -> Measure {
        self.fly() * Measure::new(2, 3)
    }

    /// Shortcut for [`derive_measurements`].
    pub fn trident(&self, tier: TridentTier) -> TridentMeasurements {
        derive_measurements(self, tier)
    }

    pub fn validate(&self) -> Result<(), FlagError> {
        if self.base_fly <= 0 {
            return Err(FlagError::InvalidConfig(format!(
                "base_fly must be positive, got {}",
                self.base_fly
            )));
        }
        if self.default_scale <= 0 {
            return Err(FlagError::InvalidConfig(format!(
                "default_scale must be positive, got {}",
                self.default_scale
            )));
        }
        Ok(())
    }

    pub fn from_ron(text: &str) -> Result<Config, FlagError> {
        let config: Config = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, FlagError> {
        let mut reader = std::fs::File::open(path)?;
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Config::from_ron(data.as_str())
    }

    pub fn to_ron(&self) -> Result<String, FlagError> {
        ron::to_string(self).map_err(|e| FlagError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_hoist_is_two_thirds() {
        let config = Config::new();
        assert_eq!(config.fly(), Measure::from_integer(4608));
        assert_eq!(config.hoist(), Measure::from_integer(3072));
        assert_eq!(config.hoist(), base_hoist());
    }

    #[test]
    fn test_odd_fly_keeps_exact_hoist() {
        let config = Config::new().with_base_fly(100);
        assert_eq!(config.hoist(), Measure::new(200, 3));
    }

    #[test]
    fn test_from_ron_partial() {
        let config = Config::from_ron("(use_larger_tridents: true)").unwrap();
        assert!(config.use_larger_tridents);
        assert_eq!(config.base_fly, BASE_FLY);
        assert_eq!(config.default_scale, 3);
    }

    #[test]
    fn test_from_ron_rejects_bad_fly() {
        let result = Config::from_ron("(base_fly: 0)");
        assert!(matches!(result, Err(FlagError::InvalidConfig(_))));
        let result = Config::from_ron("(base_fly: \"wide\")");
        assert!(matches!(result, Err(FlagError::InvalidConfig(_))));
    }

    #[test]
    fn test_ron_round_trip() {
        let config = Config::new().with_base_fly(960).with_larger_tridents(true);
        let text = config.to_ron().unwrap();
        assert_eq!(Config::from_ron(&text).unwrap(), config);
    }

    #[test]
    fn test_colors() {
        assert_eq!(FlagColor::Red.hex(), "#BF0D3E");
        assert_eq!(FlagColor::Blue.hex(), "#041E42");
        assert_eq!(FlagColor::White.hex(), "#FFFFFF");
    }
}
