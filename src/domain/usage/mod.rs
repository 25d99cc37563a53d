pub mod service;

pub use service::{month_start, UsageCounter, UsageMetric};
