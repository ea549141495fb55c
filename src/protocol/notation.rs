//! Location notation.
//!
//! Locations are written as `<timeline>:<year>:<phase>:<region>`, for
//! example `2:1902:winter:stp_nc`. This is the same form produced by the
//! `Display` impl of [`Location`].

use crate::board::{Location, Phase};

/// Errors that can occur while parsing a location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 'timeline:year:phase:region', got '{0}'")]
    WrongFieldCount(String),

    #[error("invalid timeline: '{0}'")]
    InvalidTimeline(String),

    #[error("invalid year: '{0}'")]
    InvalidYear(String),

    #[error("unknown phase: '{0}'")]
    UnknownPhase(String),

    #[error("empty region in '{0}'")]
    EmptyRegion(String),
}

/// Parses a location like `1:1901:spring:vie`.
pub fn parse_location(s: &str) -> Result<Location, NotationError> {
    let fields: Vec<&str> = s.split(':').collect();
    let [timeline, year, phase, region] = fields[..] else {
        return Err(NotationError::WrongFieldCount(s.to_string()));
    };

    let timeline = timeline
        .parse::<u32>()
        .map_err(|_| NotationError::InvalidTimeline(timeline.to_string()))?;
    let year = year
        .parse::<u16>()
        .map_err(|_| NotationError::InvalidYear(year.to_string()))?;
    let phase =
        Phase::from_name(phase).ok_or_else(|| NotationError::UnknownPhase(phase.to_string()))?;
    if region.is_empty() {
        return Err(NotationError::EmptyRegion(s.to_string()));
    }

    Ok(Location::new(timeline, year, phase, region))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_location() {
        let loc = parse_location("1:1901:spring:vie").unwrap();
        assert_eq!(loc, Location::new(1, 1901, Phase::Spring, "vie"));
    }

    #[test]
    fn parse_coast_location() {
        let loc = parse_location("3:1904:winter:stp_nc").unwrap();
        assert_eq!(loc, Location::new(3, 1904, Phase::Winter, "stp_nc"));
    }

    #[test]
    fn display_parses_back() {
        let loc = Location::new(7, 1910, Phase::Fall, "bul_ec");
        assert_eq!(parse_location(&loc.to_string()).unwrap(), loc);
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            parse_location("1:1901:spring"),
            Err(NotationError::WrongFieldCount("1:1901:spring".to_string()))
        );
        assert!(matches!(
            parse_location("1:1901:spring:vie:x"),
            Err(NotationError::WrongFieldCount(_))
        ));
        assert!(matches!(parse_location(""), Err(NotationError::WrongFieldCount(_))));
    }

    #[test]
    fn invalid_numbers() {
        assert_eq!(
            parse_location("a:1901:spring:vie"),
            Err(NotationError::InvalidTimeline("a".to_string()))
        );
        assert_eq!(
            parse_location("1:-5:spring:vie"),
            Err(NotationError::InvalidYear("-5".to_string()))
        );
    }

    #[test]
    fn unknown_phase() {
        assert_eq!(
            parse_location("1:1901:summer:vie"),
            Err(NotationError::UnknownPhase("summer".to_string()))
        );
    }

    #[test]
    fn empty_region() {
        assert!(matches!(parse_location("1:1901:fall:"), Err(NotationError::EmptyRegion(_))));
    }
}
