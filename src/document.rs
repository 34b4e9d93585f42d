//! Header/footer envelope around generated markup.
//!
//! The wrapper is a pair of `tera` templates. It is the only part of the output
//! that changes between runs, since it carries the generation timestamp.
use chrono::{DateTime, SecondsFormat, Utc};
use num::Zero;
use tera::{Context, Tera};

use crate::config::{Config, Measure};
use crate::errors::FlagError;
use crate::geometry::number;

pub const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{{ width }}pt" height="{{ height }}pt" viewBox="0 0 {{ view_width }} {{ view_height }}" preserveAspectRatio="xMidYMid meet">
<title>{{ title | escape }}</title>
<metadata>
  <creator>{{ creator | escape }}</creator>
  <generated>{{ generated_at }}</generated>
  <generator>{{ generator }}</generator>
</metadata>"#;

const FOOTER: &str = "</svg>";

/// Build the envelope templates. Callers that wrap many documents should
/// build this once and use [`Envelope::render_with`].
pub fn templates() -> Result<Tera, FlagError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![("header", HEADER), ("footer", FOOTER)])?;
    Ok(tera)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Physical size in points.
    pub width: Measure,
    pub height: Measure,
    pub view_width: Measure,
    pub view_height: Measure,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub creator: String,
}

impl Envelope {
    /// Envelope for a drawing with the given viewBox, printed at `1/scale`.
    pub fn new(
        view_box: (Measure, Measure),
        scale: Measure,
        title: &str,
        creator: &str,
        generated_at: DateTime<Utc>,
    ) -> Result<Envelope, FlagError> {
        if scale <= Measure::zero() {
            return Err(FlagError::InvalidParameter(format!(
                "scale must be positive, got {}",
                scale
            )));
        }
        let (view_width, view_height) = view_box;
        Ok(Envelope {
            width: view_width / scale,
            height: view_height / scale,
            view_width,
            view_height,
            title: title.to_string(),
            generated_at,
            creator: creator.to_string(),
        })
    }

    /// Same as [`Envelope::new`], stamped with the current time and the
    /// configured creator.
    pub fn stamped_now(
        config: &Config,
        view_box: (Measure, Measure),
        scale: Measure,
        title: &str,
    ) -> Result<Envelope, FlagError> {
        Envelope::new(view_box, scale, title, &config.creator, Utc::now())
    }

    fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("width", &number(self.width));
        context.insert("height", &number(self.height));
        context.insert("view_width", &number(self.view_width));
        context.insert("view_height", &number(self.view_height));
        context.insert("title", &self.title);
        context.insert("creator", &self.creator);
        context.insert(
            "generated_at",
            &self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        );
        context.insert("generator", GENERATOR);
        context
    }

    pub fn header(&self, tera: &Tera) -> Result<String, FlagError> {
        Ok(tera.render("header", &self.context())?)
    }

    pub fn footer(&self, tera: &Tera) -> Result<String, FlagError> {
        Ok(tera.render("footer", &Context::new())?)
    }

    /// Header, body, footer.
    pub fn render_with(&self, tera: &Tera, body: &str) -> Result<String, FlagError> {
        Ok(format!(
            "{}\n{}\n{}\n",
            self.header(tera)?,
            body,
            self.footer(tera)?
        ))
    }

    pub fn render(&self, body: &str) -> Result<String, FlagError> {
        self.render_with(&templates()?, body)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn pinned() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 30, 0).unwrap()
    }

    fn m(n: i64) -> Measure {
        Measure::from_integer(n)
    }

    #[test]
    fn test_physical_size_is_view_box_over_scale() {
        let env = Envelope::new((m(4608), m(3072)), m(3), "CDR", "me", pinned()).unwrap();
        assert_eq!(env.width, m(1536));
        assert_eq!(env.height, m(1024));
        let pennant = Envelope::new((m(4608), m(768)), m(7), "OIC", "me", pinned()).unwrap();
        assert_eq!(pennant.height, Measure::new(768, 7));
    }

    #[test]
    fn test_header_contents() {
        let tera = templates().unwrap();
        let env = Envelope::new((m(4608), m(3072)), m(3), "Past <Commander>", "Tests", pinned())
            .unwrap();
        let header = env.header(&tera).unwrap();
        assert!(header.starts_with("<?xml"));
        assert!(header.contains("width=\"1536pt\" height=\"1024pt\" viewBox=\"0 0 4608 3072\""));
        assert!(header.contains("<title>Past &lt;Commander&gt;</title>"));
        assert!(header.contains("<generated>2024-05-04T12:30:00Z</generated>"));
        assert!(header.contains("<creator>Tests</creator>"));
        assert_eq!(env.footer(&tera).unwrap(), "</svg>");
    }

    #[test]
    fn test_wrap_is_deterministic_for_a_pinned_time() {
        let env = Envelope::new((m(100), m(50)), m(2), "t", "c", pinned()).unwrap();
        let a = env.render("<g/>").unwrap();
        let b = env.render("<g/>").unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\n<g/>\n</svg>\n"));
    }

    #[test]
    fn test_rejects_bad_scale() {
        assert!(matches!(
            Envelope::new((m(1), m(1)), m(0), "t", "c", pinned()),
            Err(FlagError::InvalidParameter(_))
        ));
    }
}
