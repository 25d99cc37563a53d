pub mod model;
pub mod service;

pub use model::{
    AvailabilityStatus, RankedResult, SearchFilters, SearchResponse, SearchableProfile,
};
pub use service::SearchService;
