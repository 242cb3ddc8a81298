//! Physical paper formats and page orientation.
//!
//! Dimensions are given in portrait orientation (width ≤ height) in inches;
//! [`Orientation::apply`] swaps them for landscape pages. Parsing is offered
//! in two flavours: a strict [`FromStr`] that reports unrecognized names, and
//! [`PaperSize::parse_or_default`] which quietly falls back to A4 the way the
//! rest of the pipeline expects.

use crate::units::In;
use log::debug;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The paper formats the layout engine knows about.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
    A5,
}

/// Strict parse failure for a paper-size name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized paper size: {0:?}")]
pub struct UnknownPaperSize(pub String);

impl PaperSize {
    /// Physical (width, height) in inches, portrait orientation.
    pub fn dimensions(self) -> (In, In) {
        match self {
            PaperSize::A4 => (In(8.27), In(11.69)),
            PaperSize::Letter => (In(8.5), In(11.0)),
            PaperSize::A5 => (In(5.83), In(8.27)),
        }
    }

    /// Parse a paper name, resolving anything unrecognized to A4.
    pub fn parse_or_default(name: &str) -> PaperSize {
        name.parse().unwrap_or_else(|_| {
            debug!("unknown paper size {name:?}, falling back to A4");
            PaperSize::default()
        })
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::A4 => write!(f, "A4"),
            PaperSize::Letter => write!(f, "Letter"),
            PaperSize::A5 => write!(f, "A5"),
        }
    }
}

impl FromStr for PaperSize {
    type Err = UnknownPaperSize;

    fn from_str(s: &str) -> Result<PaperSize, UnknownPaperSize> {
        if s.eq_ignore_ascii_case("a4") {
            Ok(PaperSize::A4)
        } else if s.eq_ignore_ascii_case("letter") {
            Ok(PaperSize::Letter)
        } else if s.eq_ignore_ascii_case("a5") {
            Ok(PaperSize::A5)
        } else {
            Err(UnknownPaperSize(s.to_owned()))
        }
    }
}

/// Which way the page is turned. Portrait keeps the paper's natural
/// dimensions; landscape swaps them.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Strict parse failure for an orientation name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized orientation: {0:?}")]
pub struct UnknownOrientation(pub String);

impl Orientation {
    /// Apply this orientation to portrait dimensions.
    pub fn apply(self, (width, height): (In, In)) -> (In, In) {
        match self {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }

    /// Parse an orientation name, resolving anything unrecognized to portrait.
    pub fn parse_or_default(name: &str) -> Orientation {
        name.parse().unwrap_or_else(|_| {
            debug!("unknown orientation {name:?}, falling back to portrait");
            Orientation::default()
        })
    }
}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Orientation, UnknownOrientation> {
        if s.eq_ignore_ascii_case("portrait") {
            Ok(Orientation::Portrait)
        } else if s.eq_ignore_ascii_case("landscape") {
            Ok(Orientation::Landscape)
        } else {
            Err(UnknownOrientation(s.to_owned()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_name_falls_back_to_a4() {
        assert_eq!(PaperSize::parse_or_default("B4"), PaperSize::A4);
        assert_eq!(PaperSize::parse_or_default(""), PaperSize::A4);
    }

    #[test]
    fn strict_parse_reports_unknown_names() {
        assert_eq!(
            "B4".parse::<PaperSize>(),
            Err(UnknownPaperSize("B4".to_owned()))
        );
        assert_eq!("letter".parse::<PaperSize>(), Ok(PaperSize::Letter));
        assert_eq!("a5".parse::<PaperSize>(), Ok(PaperSize::A5));
    }

    #[test]
    fn landscape_swaps_dimensions() {
        let portrait = PaperSize::A4.dimensions();
        let (w, h) = Orientation::Landscape.apply(portrait);
        assert_eq!((w, h), (portrait.1, portrait.0));
        assert_eq!(Orientation::Portrait.apply(portrait), portrait);
    }

    #[test]
    fn orientation_parsing() {
        assert_eq!(
            Orientation::parse_or_default("Landscape"),
            Orientation::Landscape
        );
        assert_eq!(
            Orientation::parse_or_default("sideways"),
            Orientation::Portrait
        );
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
