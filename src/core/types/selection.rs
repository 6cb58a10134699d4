use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::PayloadBounds;

/// Wire value of the "all sites" choice
pub const ALL_SITES: &str = "ALL";

/// Site selector: every site, or one concrete site identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(selected) => selected == site,
        }
    }
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value)
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        SiteSelector::from(value.to_string())
    }
}

impl From<SiteSelector> for String {
    fn from(selector: SiteSelector) -> String {
        match selector {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => f.write_str(ALL_SITES),
            SiteSelector::Site(site) => f.write_str(site),
        }
    }
}

/// Inclusive payload interval `[lo, hi]`. An inverted interval matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.lo <= payload_mass_kg && payload_mass_kg <= self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([lo, hi]: [f64; 2]) -> Self {
        Self::new(lo, hi)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> [f64; 2] {
        [range.lo, range.hi]
    }
}

/// The mutable UI state driving both charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelector,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    /// Default selection: all sites over the full payload span of the data.
    pub fn initial(bounds: PayloadBounds) -> Self {
        Self {
            site: SiteSelector::All,
            payload_range: bounds.into(),
        }
    }
}
