//! Rating tiers derived from driver facts
//!
//! Each tier names the knowledge-base row a pricing rule reads for a given
//! driver, along with the explanation printed next to the adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age band used to select an age factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    /// Under 20
    Teen,
    /// 20 to 24
    YoungAdult,
    /// 25 to 65
    Standard,
    /// 66 and over
    Senior,
}

impl AgeBand {
    /// All bands in ascending age order
    pub const ALL: [AgeBand; 4] = [
        AgeBand::Teen,
        AgeBand::YoungAdult,
        AgeBand::Standard,
        AgeBand::Senior,
    ];

    /// Selects the band for an age using half-open bands
    ///
    /// There is no lower bound: any age under 20, including ages below the
    /// usual licensing age of 16, lands in the `16-19` band.
    pub fn for_age(age: u32) -> Self {
        if age < 20 {
            AgeBand::Teen
        } else if age < 25 {
            AgeBand::YoungAdult
        } else if age < 66 {
            AgeBand::Standard
        } else {
            AgeBand::Senior
        }
    }

    /// Knowledge-base tier name
    pub fn tier(&self) -> &'static str {
        match self {
            AgeBand::Teen => "16-19",
            AgeBand::YoungAdult => "20-24",
            AgeBand::Standard => "25-65",
            AgeBand::Senior => "66+",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            AgeBand::Teen => "Drivers under 20 have higher statistical risk",
            AgeBand::YoungAdult => "Drivers 20-24 have moderately higher risk",
            AgeBand::Standard => "Standard rate for drivers 25-65",
            AgeBand::Senior => "Slight increase for senior drivers",
        }
    }

    pub(crate) fn from_tier(tier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|band| band.tier() == tier)
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier())
    }
}

/// Accident-count tier used to select a flat surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccidentTier {
    /// No accidents in the last five years
    None,
    /// Exactly one accident
    One,
    /// Two or more accidents
    TwoOrMore,
}

impl AccidentTier {
    pub const ALL: [AccidentTier; 3] = [
        AccidentTier::None,
        AccidentTier::One,
        AccidentTier::TwoOrMore,
    ];

    /// Selects the tier for an accident count
    pub fn for_count(accidents: u32) -> Self {
        match accidents {
            0 => AccidentTier::None,
            1 => AccidentTier::One,
            _ => AccidentTier::TwoOrMore,
        }
    }

    /// Knowledge-base tier name
    pub fn tier(&self) -> &'static str {
        match self {
            AccidentTier::None => "0",
            AccidentTier::One => "1",
            AccidentTier::TwoOrMore => "2+",
        }
    }

    /// Explanation for the surcharge, or `None` when the tier carries none
    pub fn surcharge_explanation(&self) -> Option<&'static str> {
        match self {
            AccidentTier::None => None,
            AccidentTier::One => Some("Surcharge for 1 accident in past 5 years"),
            AccidentTier::TwoOrMore => Some("Major surcharge for 2+ accidents in past 5 years"),
        }
    }

    pub(crate) fn from_tier(tier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tier() == tier)
    }
}

impl fmt::Display for AccidentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(AgeBand::for_age(19), AgeBand::Teen);
        assert_eq!(AgeBand::for_age(20), AgeBand::YoungAdult);
        assert_eq!(AgeBand::for_age(24), AgeBand::YoungAdult);
        assert_eq!(AgeBand::for_age(25), AgeBand::Standard);
        assert_eq!(AgeBand::for_age(65), AgeBand::Standard);
        assert_eq!(AgeBand::for_age(66), AgeBand::Senior);
    }

    #[test]
    fn test_under_sixteen_shares_teen_band() {
        assert_eq!(AgeBand::for_age(0), AgeBand::Teen);
        assert_eq!(AgeBand::for_age(15), AgeBand::Teen);
    }

    #[test]
    fn test_accident_tiers() {
        assert_eq!(AccidentTier::for_count(0), AccidentTier::None);
        assert_eq!(AccidentTier::for_count(1), AccidentTier::One);
        assert_eq!(AccidentTier::for_count(2), AccidentTier::TwoOrMore);
        assert_eq!(AccidentTier::for_count(u32::MAX), AccidentTier::TwoOrMore);
    }

    #[test]
    fn test_clean_record_has_no_surcharge_explanation() {
        assert_eq!(AccidentTier::None.surcharge_explanation(), None);
        assert!(AccidentTier::One.surcharge_explanation().is_some());
        assert!(AccidentTier::TwoOrMore.surcharge_explanation().is_some());
    }

    #[test]
    fn test_tier_names_round_trip() {
        for band in AgeBand::ALL {
            assert_eq!(AgeBand::from_tier(band.tier()), Some(band));
        }
        for tier in AccidentTier::ALL {
            assert_eq!(AccidentTier::from_tier(tier.tier()), Some(tier));
        }
        assert_eq!(AgeBand::from_tier("under-16"), None);
    }
}
