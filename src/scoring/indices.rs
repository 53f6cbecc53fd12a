use serde::{Deserialize, Serialize};

use crate::catalog::IndexRange;
use crate::scoring::seed::seeded_value;
use crate::types::recommendation::IndexTriple;
use crate::types::selection::{Season, Selection, WaterSource};

// Per-index seed suffixes. The vdli suffix is spelled "vldi"; changing it
// changes every derived vdli value.
pub const VDLI_SUFFIX: &str = "vldi";
pub const SMI_SUFFIX: &str = "smi";
pub const MHI_SUFFIX: &str = "mhi";

/// Additive shift applied to the three indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexAdjustment {
    pub vdli: f64,
    pub smi: f64,
    pub mhi: f64,
}

impl IndexAdjustment {
    pub const NONE: IndexAdjustment = IndexAdjustment {
        vdli: 0.0,
        smi: 0.0,
        mhi: 0.0,
    };

    fn apply(&self, indices: &mut IndexTriple) {
        indices.vdli += self.vdli;
        indices.smi += self.smi;
        indices.mhi += self.mhi;
    }
}

/// Nominal ranges and adjustments used to derive indices from a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexProfile {
    pub name: String,

    pub vdli: IndexRange,
    pub smi: IndexRange,
    pub mhi: IndexRange,

    pub kharif: IndexAdjustment,
    pub rabi: IndexAdjustment,
    pub zaid: IndexAdjustment,

    pub canal: IndexAdjustment,
    pub borewell: IndexAdjustment,
    pub rainfed: IndexAdjustment,
    pub tank: IndexAdjustment,
}

impl IndexProfile {
    pub fn v0() -> Self {
        Self {
            name: "v0".into(),
            vdli: IndexRange::new(0.1, 1.0),
            smi: IndexRange::new(0.35, 1.0),
            mhi: IndexRange::new(0.4, 1.0),
            kharif: IndexAdjustment {
                vdli: 0.05,
                smi: 0.1,
                mhi: 0.0,
            },
            rabi: IndexAdjustment {
                mhi: 0.05,
                ..IndexAdjustment::NONE
            },
            zaid: IndexAdjustment {
                vdli: 0.1,
                smi: -0.05,
                mhi: 0.0,
            },
            canal: IndexAdjustment {
                smi: 0.1,
                ..IndexAdjustment::NONE
            },
            borewell: IndexAdjustment {
                smi: 0.05,
                ..IndexAdjustment::NONE
            },
            rainfed: IndexAdjustment {
                smi: -0.05,
                ..IndexAdjustment::NONE
            },
            tank: IndexAdjustment::NONE,
        }
    }

    pub fn season_adjustment(&self, season: Season) -> IndexAdjustment {
        match season {
            Season::Kharif => self.kharif,
            Season::Rabi => self.rabi,
            Season::Zaid => self.zaid,
        }
    }

    pub fn water_adjustment(&self, water: WaterSource) -> IndexAdjustment {
        match water {
            WaterSource::Canal => self.canal,
            WaterSource::Borewell => self.borewell,
            WaterSource::Rainfed => self.rainfed,
            WaterSource::Tank => self.tank,
        }
    }

    /// Derive the index triple for a selection, or `None` if any field is unset.
    ///
    /// Seeded base values, then the season shift, then the water shift, then
    /// a clamp to `[0, 1]`. The adjusted values are not re-rounded.
    pub fn derive(&self, selection: &Selection) -> Option<IndexTriple> {
        let seed = selection.seed()?;
        let season = selection.season?;
        let water = selection.water_source?;

        let mut indices = IndexTriple {
            vdli: seeded_value(&format!("{seed}{VDLI_SUFFIX}"), self.vdli.min, self.vdli.max),
            smi: seeded_value(&format!("{seed}{SMI_SUFFIX}"), self.smi.min, self.smi.max),
            mhi: seeded_value(&format!("{seed}{MHI_SUFFIX}"), self.mhi.min, self.mhi.max),
        };

        self.season_adjustment(season).apply(&mut indices);
        self.water_adjustment(water).apply(&mut indices);

        indices.vdli = indices.vdli.clamp(0.0, 1.0);
        indices.smi = indices.smi.clamp(0.0, 1.0);
        indices.mhi = indices.mhi.clamp(0.0, 1.0);

        Some(indices)
    }
}

impl Default for IndexProfile {
    fn default() -> Self {
        Self::v0()
    }
}

/// [`IndexProfile::v0`] derivation.
pub fn derive_indices(selection: &Selection) -> Option<IndexTriple> {
    IndexProfile::v0().derive(selection)
}
