use serde::{Deserialize, Serialize};

/// Why a `match_position` call did or didn't find a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Match,
    NoMatchRelevanceArea,
    NoMatchHeading,
    NoMatchTrace,
    NoMatchUndefined,
}

/// Result of matching a candidate position/heading against a [`crate::Trace`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceMatch {
    pub quality: f64,
    pub distance: f64,
    pub status: MatchStatus,
}

impl TraceMatch {
    pub fn new(quality: f64, distance: f64, status: MatchStatus) -> Self {
        TraceMatch {
            quality,
            distance,
            status,
        }
    }
}

impl Default for TraceMatch {
    fn default() -> Self {
        TraceMatch {
            quality: 0.0,
            distance: 9999.0,
            status: MatchStatus::NoMatchUndefined,
        }
    }
}
