//! Deterministic decision support for farmers.
//!
//! `krishi-core` derives soil and moisture suitability indices from a
//! (state, district, season, water source) selection, filters a crop catalog
//! by district and index ranges, and ranks the survivors by profit. It also
//! carries the government-schemes directory and the mandi price board that
//! sit next to the recommendation panel. Recommendation is deterministic:
//! identical selections over identical reference data always produce
//! identical output, byte-for-byte.

pub mod bundle;
pub mod catalog;
pub mod market;
pub mod schemes;
pub mod scoring;
pub mod session;
pub mod types;

pub use catalog::ReferenceData;
pub use scoring::Recommender;
pub use session::RecommendationSession;
pub use types::{Selection, Season, WaterSource};
