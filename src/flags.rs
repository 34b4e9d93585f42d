//! Rank catalogue and whole-flag assembly.
//!
//! A [`Rank`] maps to a field and an insignia through one total function, and
//! a [`FlagRequest`] turns any [`Design`] into a finished document.
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::arrangement::{Arrangement, Layout};
use crate::config::{Config, FlagColor, Measure};
use crate::document::{templates, Envelope};
use crate::errors::FlagError;
use crate::geometry::Coord;
use crate::measure::TridentTier;
use crate::shapes::field::{Field, FieldStyle};
use crate::shapes::icons::{crossed_trumpets, Icon, Level};
use crate::shapes::pennant::{pennant_hoist, Pennant, PennantKind};
use crate::shapes::{ensign, us_flag};
use crate::spec_sheet::{sheet_size, SpecSheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Cdr,
    LtC,
    FirstLt,
    PCdr,
    PLtC,
    DCdr,
    DLtC,
    DFirstLt,
    PDCdr,
    PDLtC,
    StfC,
    PStfC,
    CC,
    VC,
    RC,
    PCC,
    PVC,
    PRC,
    PortCap,
    FleetCap,
    DAide,
    NAide,
    FltLt,
    DFltLt,
    NFltLt,
}

/// What sits on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insignia {
    Tridents { tier: TridentTier, layout: Layout },
    Icon(Icon),
    CrossedTrumpets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDetails {
    pub style: FieldStyle,
    pub color: FlagColor,
    pub insignia: Insignia,
}

impl FlagDetails {
    /// Insignia colour. On a field it contrasts with the field; without one it
    /// takes the rank colour, with blue standing in for white.
    pub fn insignia_color(&self, field: bool) -> FlagColor {
        match (field, self.color) {
            (true, FlagColor::White) => FlagColor::Blue,
            (true, _) => FlagColor::White,
            (false, FlagColor::White) => FlagColor::Blue,
            (false, color) => color,
        }
    }
}

impl Rank {
    pub const ALL: [Rank; 25] = [
        Rank::Cdr,
        Rank::LtC,
        Rank::FirstLt,
        Rank::PCdr,
        Rank::PLtC,
        Rank::DCdr,
        Rank::DLtC,
        Rank::DFirstLt,
        Rank::PDCdr,
        Rank::PDLtC,
        Rank::StfC,
        Rank::PStfC,
        Rank::CC,
        Rank::VC,
        Rank::RC,
        Rank::PCC,
        Rank::PVC,
        Rank::PRC,
        Rank::PortCap,
        Rank::FleetCap,
        Rank::DAide,
        Rank::NAide,
        Rank::FltLt,
        Rank::DFltLt,
        Rank::NFltLt,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Rank::Cdr => "CDR",
            Rank::LtC => "LTC",
            Rank::FirstLt => "1LT",
            Rank::PCdr => "PCDR",
            Rank::PLtC => "PLTC",
            Rank::DCdr => "DC",
            Rank::DLtC => "DLTC",
            Rank::DFirstLt => "D1LT",
            Rank::PDCdr => "PDC",
            Rank::PDLtC => "PDLTC",
            Rank::StfC => "STFC",
            Rank::PStfC => "PSTFC",
            Rank::CC => "CC",
            Rank::VC => "VC",
            Rank::RC => "RC",
            Rank::PCC => "PCC",
            Rank::PVC => "PVC",
            Rank::PRC => "PRC",
            Rank::PortCap => "PORTCAP",
            Rank::FleetCap => "FLEETCAP",
            Rank::DAide => "DAIDE",
            Rank::NAide => "NAIDE",
            Rank::FltLt => "FLT",
            Rank::DFltLt => "DFLT",
            Rank::NFltLt => "NFLT",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rank::Cdr => "Commander",
            Rank::LtC => "Lieutenant Commander",
            Rank::FirstLt => "First Lieutenant",
            Rank::PCdr => "Past Commander",
            Rank::PLtC => "Past Lieutenant Commander",
            Rank::DCdr => "District Commander",
            Rank::DLtC => "District Lieutenant Commander",
            Rank::DFirstLt => "District First Lieutenant",
            Rank::PDCdr => "Past District Commander",
            Rank::PDLtC => "Past District Lieutenant Commander",
            Rank::StfC => "Staff Commodore",
            Rank::PStfC => "Past Staff Commodore",
            Rank::CC => "Chief Commander",
            Rank::VC => "Vice Commander",
            Rank::RC => "Rear Commander",
            Rank::PCC => "Past Chief Commander",
            Rank::PVC => "Past Vice Commander",
            Rank::PRC => "Past Rear Commander",
            Rank::PortCap => "Port Captain",
            Rank::FleetCap => "Fleet Captain",
            Rank::DAide => "District Aide",
            Rank::NAide => "National Aide",
            Rank::FltLt => "Flag Lieutenant",
            Rank::DFltLt => "District Flag Lieutenant",
            Rank::NFltLt => "National Flag Lieutenant",
        }
    }

    pub fn details(&self) -> FlagDetails {
        use FieldStyle::{Past, Regular, Swallowtail};
        use FlagColor::{Blue, Red, White};

        let tridents = |tier, layout| Insignia::Tridents { tier, layout };
        let (style, color, insignia) = match self {
            Rank::Cdr => (Regular, Blue, tridents(TridentTier::Short, Layout::Triple)),
            Rank::LtC => (Regular, Red, tridents(TridentTier::Short, Layout::Double)),
            Rank::FirstLt => (Regular, White, tridents(TridentTier::Short, Layout::Single)),
            Rank::PCdr => (Past, Blue, tridents(TridentTier::Short, Layout::Triple)),
            Rank::PLtC => (Past, Red, tridents(TridentTier::Short, Layout::Double)),
            Rank::DCdr => (Regular, Blue, tridents(TridentTier::Delta, Layout::Triple)),
            Rank::DLtC => (Regular, Red, tridents(TridentTier::Delta, Layout::Double)),
            Rank::DFirstLt => (Regular, White, tridents(TridentTier::Delta, Layout::Single)),
            Rank::PDCdr => (Past, Blue, tridents(TridentTier::Delta, Layout::Triple)),
            Rank::PDLtC => (Past, Red, tridents(TridentTier::Delta, Layout::Double)),
            Rank::StfC => (Regular, White, tridents(TridentTier::Circle, Layout::Single)),
            Rank::PStfC => (Past, White, tridents(TridentTier::Circle, Layout::Single)),
            Rank::CC => (Regular, Blue, tridents(TridentTier::Long, Layout::Crossed)),
            Rank::VC => (Regular, Red, tridents(TridentTier::Long, Layout::Double)),
            Rank::RC => (Regular, Red, tridents(TridentTier::Long, Layout::Single)),
            Rank::PCC => (Past, Blue, tridents(TridentTier::Long, Layout::Crossed)),
            Rank::PVC => (Past, Red, tridents(TridentTier::Long, Layout::Double)),
            Rank::PRC => (Past, Red, tridents(TridentTier::Long, Layout::Single)),
            Rank::PortCap => (Swallowtail, White, Insignia::Icon(Icon::Anchor)),
            Rank::FleetCap => (Swallowtail, White, Insignia::Icon(Icon::Lighthouse)),
            Rank::DAide => (Swallowtail, White, Insignia::Icon(Icon::Trumpet)),
            Rank::NAide => (Swallowtail, White, Insignia::CrossedTrumpets),
            Rank::FltLt => (
                Swallowtail,
                White,
                Insignia::Icon(Icon::Binoculars(Level::Squadron)),
            ),
            Rank::DFltLt => (
                Swallowtail,
                White,
                Insignia::Icon(Icon::Binoculars(Level::District)),
            ),
            Rank::NFltLt => (
                Swallowtail,
                White,
                Insignia::Icon(Icon::Binoculars(Level::National)),
            ),
        };
        FlagDetails {
            style,
            color,
            insignia,
        }
    }
}

impl FromStr for Rank {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Rank::ALL
            .iter()
            .find(|rank| rank.code() == code)
            .copied()
            .ok_or_else(|| FlagError::InvalidSelector(format!("rank '{}'", s)))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Everything this crate can draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Design {
    Officer(Rank),
    Trident(TridentTier),
    Pennant(PennantKind),
    Ensign,
    UsFlag,
    SpecSheet { fly: Measure, unit: String },
}

impl Design {
    /// Natural, unscaled viewBox width and height.
    pub fn view_box(&self, config: &Config) -> (Measure, Measure) {
        match self {
            Design::Pennant(_) => (config.fly(), pennant_hoist(config)),
            Design::SpecSheet { .. } => sheet_size(config),
            _ => (config.fly(), config.hoist()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Design::Officer(rank) => rank.title().to_string(),
            Design::Trident(tier) => format!("{} trident", tier.name()),
            Design::Pennant(PennantKind::OfficerInCharge) => {
                "Officer-in-charge pennant".to_string()
            }
            Design::Pennant(PennantKind::Cruise) => "Cruise pennant".to_string(),
            Design::Ensign => "Ensign".to_string(),
            Design::UsFlag => "US flag".to_string(),
            Design::SpecSheet { .. } => "Trident specifications".to_string(),
        }
    }

    /// Short name suitable for a file stem.
    pub fn slug(&self) -> String {
        match self {
            Design::Officer(rank) => rank.code().to_string(),
            Design::Trident(tier) => format!("trident-{}", tier.name()),
            Design::Pennant(kind) => format!("pennant-{}", kind.name()),
            Design::Ensign => "ensign".to_string(),
            Design::UsFlag => "us".to_string(),
            Design::SpecSheet { .. } => "trident-spec".to_string(),
        }
    }
}

/// Report for one finished document, for the caller to log or collect.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationEvent {
    pub design: Design,
    pub view_box: (Measure, Measure),
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct Generated {
    pub title: String,
    pub markup: String,
    pub event: GenerationEvent,
}

/// Builder for a single document.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagRequest {
    design: Option<Design>,
    rank: Option<String>,
    field: bool,
    scale: Option<Measure>,
}

impl Default for FlagRequest {
    fn default() -> Self {
        Self {
            design: None,
            rank: None,
            field: true,
            scale: None,
        }
    }
}

impl FlagRequest {
    pub fn new() -> FlagRequest {
        FlagRequest::default()
    }

    pub fn design(mut self, design: Design) -> Self {
        self.design = Some(design);
        self
    }

    /// Officer flag by rank code; parsed when the request is generated.
    pub fn rank(mut self, code: &str) -> Self {
        self.rank = Some(code.to_string());
        self
    }

    /// Draw the field (default) or just the insignia on a transparent canvas.
    pub fn field(mut self, field: bool) -> Self {
        self.field = field;
        self
    }

    pub fn scale(mut self, scale: Measure) -> Self {
        self.scale = Some(scale);
        self
    }

    /// The requested design. A rank code wins over an explicit design.
    pub fn resolve(&self) -> Result<Design, FlagError> {
        match (&self.rank, &self.design) {
            (Some(code), _) => Ok(Design::Officer(code.parse()?)),
            (None, Some(design)) => Ok(design.clone()),
            (None, None) => Err(FlagError::MissingParameter("design")),
        }
    }

    /// The drawing without its envelope. Deterministic.
    pub fn body(&self, config: &Config) -> Result<String, FlagError> {
        config.validate()?;
        let design = self.resolve()?;
        Ok(match &design {
            Design::Officer(rank) => officer(config, *rank, self.field),
            Design::Trident(tier) => {
                Arrangement::new(*tier, FlagColor::Blue, Layout::Single).render(config)
            }
            Design::Pennant(kind) => Pennant::new(*kind).render(config),
            Design::Ensign => ensign::render(config),
            Design::UsFlag => us_flag::render(config),
            Design::SpecSheet { fly, unit } => SpecSheet::new(config, *fly, unit).render()?,
        })
    }

    pub fn generate(&self, config: &Config) -> Result<Generated, FlagError> {
        self.generate_at(config, Utc::now())
    }

    /// Generate with a fixed timestamp in the envelope.
    pub fn generate_at(
        &self,
        config: &Config,
        generated_at: DateTime<Utc>,
    ) -> Result<Generated, FlagError> {
        let design = self.resolve()?;
        let body = self.body(config)?;
        let view_box = design.view_box(config);
        let scale = self
            .scale
            .unwrap_or_else(|| Measure::from_integer(config.default_scale));
        let title = design.title();
        let envelope = Envelope::new(view_box, scale, &title, &config.creator, generated_at)?;
        let markup = envelope.render_with(&templates()?, &body)?;
        log::debug!(
            "generated {} ({} bytes, viewBox {} x {})",
            design.slug(),
            markup.len(),
            view_box.0,
            view_box.1
        );
        let event = GenerationEvent {
            design,
            view_box,
            bytes: markup.len(),
        };
        Ok(Generated {
            title,
            markup,
            event,
        })
    }
}

/// Field (optional) and insignia for one rank.
fn officer(config: &Config, rank: Rank, field: bool) -> String {
    let details = rank.details();
    let color = details.insignia_color(field);
    let center = Coord::new(config.fly() / 2, config.hoist() / 2);
    let size = config.hoist() / 2;
    let insignia = match details.insignia {
        Insignia::Tridents { tier, layout } => Arrangement::new(tier, color, layout).render(config),
        Insignia::Icon(icon) => icon.render(color, center, size),
        Insignia::CrossedTrumpets => crossed_trumpets(color, center, size),
    };
    if field {
        format!(
            "{}\n{}",
            Field::new(details.style, details.color).render(config),
            insignia
        )
    } else {
        insignia
    }
}
