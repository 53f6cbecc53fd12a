pub mod alias;
pub mod library;
pub mod reference;
pub mod regions;

pub use alias::AliasTable;
pub use library::{
    CropCatalogEntry, CropDetailRecord, CropLibraryFile, Fertilizers, IndexRange, TextOrList,
};
pub use reference::ReferenceData;
pub use regions::{DistrictEligibility, RegionDirectory};
