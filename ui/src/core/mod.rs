pub mod age_range;
pub mod catalog;
pub mod dates;
pub mod error;
pub mod format;
pub mod icons;
pub mod idioms;
pub mod product;
