pub mod access;
pub mod search;
pub mod theme;
pub mod tier;
pub mod usage;
pub mod user;
