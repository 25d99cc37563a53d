pub mod model;
pub mod service;

pub use model::{Feature, FeatureVerdict};
pub use service::AccessService;
