//! Core data models

pub mod category;
pub mod money;
pub mod record;

pub use category::Category;
pub use record::{Currency, Kind, Record};
