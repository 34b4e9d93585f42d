//! Parametric SVG generation for USPS-style officer flags and insignia.
//!
//! Every shape is derived from a single configured fly length using exact
//! rational arithmetic, so tridents, pennants, ensigns and the dimensioned
//! specification sheet all scale together and only turn into decimals at the
//! moment they are written out.
//!
//! ```no_run
//! use usps_flags_rs::prelude::*;
//!
//! let config = Config::new();
//! let flag = FlagRequest::new().rank("CDR").generate(&config)?;
//! std::fs::write("CDR.svg", flag.markup)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Base units, colours and the immutable per-request [`config::Config`].
pub mod config;

/// The crate-wide error type.
pub mod errors;

/// Exact coordinates, relative paths, transforms and SVG element helpers.
pub mod geometry;

/// Trident measurement tables per tier.
pub mod measure;

/// Whole-plus-fraction values for dimension labels.
pub mod fraction;

/// Tridents, fields, icons, pennants, the ensign and the US flag.
pub mod shapes;

/// Single, double, triple and crossed trident layouts.
pub mod arrangement;

/// The dimensioned trident specification sheet.
pub mod spec_sheet;

/// SVG document header and footer.
pub mod document;

/// Ranks, designs and the request builder.
pub mod flags;

/// Parallel generation over every design.
pub mod catalog;

/// Import prelude::* for the types most callers need.
pub mod prelude {
    pub use crate::arrangement::{Arrangement, Layout};
    pub use crate::config::{Config, FlagColor, Measure};
    pub use crate::errors::FlagError;
    pub use crate::flags::{Design, FlagRequest, Generated, GenerationEvent, Rank};
    pub use crate::fraction::{simplify, SimplifiedFraction};
    pub use crate::measure::TridentTier;
    pub use crate::shapes::pennant::PennantKind;
    pub use crate::shapes::trident::Trident;
    pub use crate::spec_sheet::SpecSheet;
}
