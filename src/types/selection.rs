use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionParseError {
    #[error("Unknown season: {0}")]
    UnknownSeason(String),
    #[error("Unknown water source: {0}")]
    UnknownWaterSource(String),
}

/// Cropping season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Kharif, Season::Rabi, Season::Zaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Zaid => "Zaid",
        }
    }
}

impl FromStr for Season {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| SelectionParseError::UnknownSeason(s.to_string()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Irrigation source of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterSource {
    Canal,
    Borewell,
    Rainfed,
    Tank,
}

impl WaterSource {
    pub const ALL: [WaterSource; 4] = [
        WaterSource::Canal,
        WaterSource::Borewell,
        WaterSource::Rainfed,
        WaterSource::Tank,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterSource::Canal => "Canal",
            WaterSource::Borewell => "Borewell",
            WaterSource::Rainfed => "Rainfed",
            WaterSource::Tank => "Tank",
        }
    }
}

impl FromStr for WaterSource {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WaterSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| SelectionParseError::UnknownWaterSource(s.to_string()))
    }
}

impl fmt::Display for WaterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four user choices that drive a recommendation.
///
/// Empty strings and `None` mean "not chosen yet". A selection is only
/// evaluated once every field is filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub region: String,
    pub district: String,
    pub season: Option<Season>,
    pub water_source: Option<WaterSource>,
}

impl Selection {
    pub fn new(
        region: impl Into<String>,
        district: impl Into<String>,
        season: Season,
        water_source: WaterSource,
    ) -> Self {
        Self {
            region: region.into(),
            district: district.into(),
            season: Some(season),
            water_source: Some(water_source),
        }
    }

    /// Build a selection from raw form values. Empty season or water source
    /// strings are treated as unset; anything else must name a known variant.
    pub fn from_fields(
        region: &str,
        district: &str,
        season: &str,
        water_source: &str,
    ) -> Result<Self, SelectionParseError> {
        let season = match season {
            "" => None,
            s => Some(s.parse()?),
        };
        let water_source = match water_source {
            "" => None,
            s => Some(s.parse()?),
        };

        Ok(Self {
            region: region.to_string(),
            district: district.to_string(),
            season,
            water_source,
        })
    }

    pub fn is_ready(&self) -> bool {
        !self.region.is_empty()
            && !self.district.is_empty()
            && self.season.is_some()
            && self.water_source.is_some()
    }

    /// `"{region}-{district}-{season}-{water}"`, or `None` when not ready.
    pub fn seed(&self) -> Option<String> {
        if !self.is_ready() {
            return None;
        }
        let season = self.season?;
        let water = self.water_source?;
        Some(format!(
            "{}-{}-{}-{}",
            self.region,
            self.district,
            season.as_str(),
            water.as_str()
        ))
    }
}
