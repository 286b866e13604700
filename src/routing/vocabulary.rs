//! Plaintext route words.
//!
//! # Responsibilities
//! - Define the closed set of words that may appear in an admin path
//! - Map each word to its kebab-case plaintext and back
//!
//! # Design Decisions
//! - A closed enum instead of free strings: encoding a `Segment` cannot fail
//! - Masters and modules share one vocabulary (`admins` is both)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

macro_rules! segments {
    ($($variant:ident => $plain:literal,)*) => {
        /// A known route word.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum Segment {
            $(
                #[serde(rename = $plain)]
                $variant,
            )*
        }

        impl Segment {
            /// Every word, in declaration order.
            pub const ALL: &'static [Segment] = &[$(Segment::$variant,)*];

            /// The plaintext form used in unobfuscated paths.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Segment::$variant => $plain,)*
                }
            }

            /// Parse a plaintext word. Unknown words yield `None`.
            pub fn from_plain(plain: &str) -> Option<Segment> {
                match plain {
                    $($plain => Some(Segment::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

segments! {
    // Sections
    Masters => "masters",
    Admins => "admins",
    TransportMaster => "transport-master",
    VehicleTracking => "vehicle-tracking",
    TripPlanning => "trip-planning",
    Grievance => "grievance",
    Dashboards => "dashboards",

    // Location hierarchy
    Continents => "continents",
    Countries => "countries",
    States => "states",
    Districts => "districts",
    Cities => "cities",
    Zones => "zones",
    Wards => "wards",
    Properties => "properties",

    // Staff
    Staff => "staff",
    Roles => "roles",
    Designations => "designations",

    // Fleet
    Vehicles => "vehicles",
    VehicleTypes => "vehicle-types",
    Drivers => "drivers",
    Fuel => "fuel",
    VehicleTrack => "vehicle-track",
    DistanceReport => "distance-report",

    // Operations
    Routes => "routes",
    Trips => "trips",
    Complaint => "complaint",
    ComplaintTypes => "complaint-types",

    // Dashboards
    BinMonitoring => "bin-monitoring",
    Weighbridge => "weighbridge",
    Reports => "reports",
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a plaintext word is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route segment: {0:?}")]
pub struct ParseSegmentError(pub String);

impl FromStr for Segment {
    type Err = ParseSegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::from_plain(s).ok_or_else(|| ParseSegmentError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_plaintexts_are_distinct() {
        let plains: HashSet<_> = Segment::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(plains.len(), Segment::ALL.len());
    }

    #[test]
    fn test_parse_every_word() {
        for segment in Segment::ALL {
            assert_eq!(segment.as_str().parse::<Segment>(), Ok(*segment));
        }
    }

    #[test]
    fn test_unknown_word() {
        assert_eq!(Segment::from_plain("Continents"), None);
        let err = "garbage".parse::<Segment>().unwrap_err();
        assert_eq!(err, ParseSegmentError("garbage".into()));
    }

    #[test]
    fn test_serializes_as_plaintext() {
        let json = serde_json::to_string(&Segment::TransportMaster).unwrap();
        assert_eq!(json, "\"transport-master\"");
    }
}
