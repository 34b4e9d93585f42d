//! Batch generation over every design the crate knows.
use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::config::Config;
use crate::errors::FlagError;
use crate::flags::{Design, FlagRequest, Generated, Rank};
use crate::measure::TridentTier;
use crate::shapes::pennant::PennantKind;

/// Officer flags, bare tridents, pennants, ensign and US flag, in that order.
pub fn all_designs() -> Vec<Design> {
    let mut designs: Vec<Design> = Rank::ALL.iter().map(|r| Design::Officer(*r)).collect();
    designs.extend(TridentTier::ALL.iter().map(|t| Design::Trident(*t)));
    designs.push(Design::Pennant(PennantKind::OfficerInCharge));
    designs.push(Design::Pennant(PennantKind::Cruise));
    designs.push(Design::Ensign);
    designs.push(Design::UsFlag);
    designs
}

/// Generate `designs` in parallel. Results come back in input order and share
/// one timestamp.
pub fn generate_designs(
    config: &Config,
    designs: &[Design],
    generated_at: DateTime<Utc>,
) -> Vec<Result<Generated, FlagError>> {
    designs
        .par_iter()
        .map(|design| {
            let result = FlagRequest::new()
                .design(design.clone())
                .generate_at(config, generated_at);
            if let Err(err) = &result {
                log::warn!("skipping {}: {}", design.slug(), err);
            }
            result
        })
        .collect()
}

pub fn generate_all(config: &Config) -> Vec<Result<Generated, FlagError>> {
    generate_designs(config, &all_designs(), Utc::now())
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use crate::config::Measure;

    #[test]
    fn test_catalog_contents() {
        let designs = all_designs();
        assert_eq!(designs.len(), 25 + 4 + 2 + 2);
        assert_eq!(designs[0], Design::Officer(Rank::Cdr));
        assert_eq!(designs.last(), Some(&Design::UsFlag));
    }

    #[test]
    fn test_parallel_results_keep_order() {
        let config = Config::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let designs = all_designs();
        let results = generate_designs(&config, &designs, at);
        assert_eq!(results.len(), designs.len());
        for (design, result) in designs.iter().zip(results.iter()) {
            let generated = result.as_ref().unwrap();
            assert_eq!(&generated.event.design, design);
            assert!(generated.markup.ends_with("</svg>\n"));
        }
    }

    #[test]
    fn test_failures_stay_in_place() {
        let config = Config::new();
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let designs = vec![
            Design::Ensign,
            Design::SpecSheet {
                fly: Measure::from_integer(-1),
                unit: "in".to_string(),
            },
            Design::UsFlag,
        ];
        let results = generate_designs(&config, &designs, at);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(FlagError::InvalidParameter(_))));
        assert!(results[2].is_ok());
    }
}
