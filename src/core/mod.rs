pub mod catalog;
pub mod export;
pub mod store;
