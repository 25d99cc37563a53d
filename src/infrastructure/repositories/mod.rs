pub mod profile_store;
pub mod usage_store;
pub mod user_repository;

pub use profile_store::{PgProfileStore, ProfileStore};
pub use usage_store::{PgUsageStore, UsageStore};
pub use user_repository::UserRepository;
