pub mod access;
pub mod health;
pub mod search;
pub mod theme;

pub use access::AccessController;
pub use search::SearchController;
pub use theme::ThemeController;
