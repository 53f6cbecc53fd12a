use crate::catalog::ReferenceData;
use crate::types::recommendation::{IndexTriple, ScoredCrop};

/// A crop must sit inside at least this many of its three ranges.
pub const MIN_RANGE_MATCHES: u8 = 2;

pub struct FilterResult<'a> {
    pub candidates: Vec<ScoredCrop<'a>>,
    /// Catalog entries grown in the district, before range matching.
    pub district_eligible: usize,
}

/// Keep catalog entries that are grown in `district` and match at least
/// [`MIN_RANGE_MATCHES`] of the derived indices. Catalog order is preserved.
pub fn filter_catalog<'a>(
    data: &'a ReferenceData,
    district: &str,
    indices: &IndexTriple,
) -> FilterResult<'a> {
    let eligible = data.district_crops.eligible_keys(district, &data.aliases);

    let mut district_eligible = 0;
    let mut candidates = Vec::new();

    for entry in &data.catalog {
        let Some(key) = data.key_for(&entry.name) else {
            continue;
        };
        if !eligible.contains(&key) {
            continue;
        }
        district_eligible += 1;

        let range_matches = indices.range_matches(entry);
        if range_matches < MIN_RANGE_MATCHES {
            continue;
        }

        let details = data.details.get(key.as_str());
        candidates.push(ScoredCrop {
            entry,
            key,
            range_matches,
            details,
        });
    }

    FilterResult {
        candidates,
        district_eligible,
    }
}
